//! Fish integration script.

use crate::cli::Picker;

pub(super) fn script(nocd: bool, picker: Option<Picker>) -> String {
    let mut out = String::new();

    if !nocd {
        let picker_block = picker.map(|p| {
            format!(
                r#"        if test (count $argv) -eq 0
            set -l sel (command git-wt 2>&1 | tail -n +2 | {picker} | awk '{{print $1}}')
            test -n "$sel"; or return 0
            set argv $sel
        end
"#,
                picker = p.command()
            )
        });

        out.push_str(&format!(
            r#"
function git --wraps git
    if test (count $argv) -ge 1; and test "$argv[1]" = wt
        set -e argv[1]
{picker}        set -l out (command git-wt $argv)
        set -l code $status
        if test $code -eq 0; and test -n "$out"; and test -d "$out"
            cd $out
        else if test -n "$out"
            printf '%s\n' $out
        end
        return $code
    end
    command git $argv
end
"#,
            picker = picker_block.as_deref().unwrap_or("")
        ));
    }

    out.push_str(
        r#"
complete -c git-wt -f -a '(command git for-each-ref --format="%(refname:short)" refs/heads 2>/dev/null)'
complete -c git-wt -s d -d 'Delete worktree and branch'
complete -c git-wt -s D -d 'Force delete worktree and branch'
complete -c git-wt -l allow-delete-default -d 'Allow deleting the default branch'
complete -c git-wt -l nocd -d 'Never change directory'
complete -c git-wt -l verbose -d 'Enable verbose output'
"#,
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_present() {
        let s = script(false, None);
        assert!(s.contains("function git --wraps git"));
        assert!(s.contains("command git $argv"));
    }

    #[test]
    fn test_picker_block() {
        let s = script(false, Some(Picker::Peco));
        assert!(s.contains("tail -n +2 | peco | awk '{print $1}'"));
    }

    #[test]
    fn test_nocd_keeps_completion() {
        let s = script(true, None);
        assert!(!s.contains("function git --wraps git"));
        assert!(s.contains("complete -c git-wt"));
    }
}
