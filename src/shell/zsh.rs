//! Zsh integration script.

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
_git-wt() {
  local -a branches
  branches=(${(f)"$(command git for-each-ref --format='%(refname:short)' refs/heads 2>/dev/null)"})
  _arguments \
    '-d[delete worktree and branch]' \
    '-D[force delete worktree and branch]' \
    '--allow-delete-default[allow deleting the default branch]' \
    '--nocd[never change directory]' \
    '--verbose[enable verbose output]' \
    '*:branch:($branches)'
}
if command -v compdef >/dev/null 2>&1; then
  compdef _git-wt git-wt
fi
"#,
    );

    out
}
