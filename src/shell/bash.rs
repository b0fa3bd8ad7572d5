//! Bash integration script.

use crate::cli::Picker;

pub(super) fn script(nocd: bool, picker: Option<Picker>) -> String {
    let mut out = String::new();

    if !nocd {
        let picker_block = picker.map(|p| {
            format!(
                r#"    if [ $# -eq 0 ]; then
      local sel
      sel="$(command git-wt 2>&1 | tail -n +2 | {picker} | awk '{{print $1}}')"
      [ -n "$sel" ] || return 0
      set -- "$sel"
    fi
"#,
                picker = p.command()
            )
        });

        out.push_str(&format!(
            r#"
git() {{
  if [ "$1" = "wt" ]; then
    shift
{picker}    local out
    out="$(command git-wt "$@")"
    local code=$?
    if [ $code -eq 0 ] && [ -n "$out" ] && [ -d "$out" ]; then
      cd "$out" || return
    elif [ -n "$out" ]; then
      printf '%s\n' "$out"
    fi
    return $code
  fi
  command git "$@"
}}
"#,
            picker = picker_block.as_deref().unwrap_or("")
        ));
    }

    out.push_str(
        r#"
_git_wt() {
  local cur="${COMP_WORDS[COMP_CWORD]}"
  if [[ "$cur" == -* ]]; then
    COMPREPLY=($(compgen -W "-d -D --allow-delete-default --nocd --verbose --help" -- "$cur"))
  else
    COMPREPLY=($(compgen -W "$(command git for-each-ref --format='%(refname:short)' refs/heads 2>/dev/null)" -- "$cur"))
  fi
}
complete -F _git_wt git-wt
"#,
    );

    out
}
