//! PowerShell integration script.

use crate::cli::Picker;

pub(super) fn script(nocd: bool, picker: Option<Picker>) -> String {
    let mut out = String::new();

    if !nocd {
        let picker_block = picker.map(|p| {
            format!(
                r#"        if ($wtArgs.Count -eq 0) {{
            $sel = & git-wt 2>&1 | ForEach-Object {{ "$_" }} | Select-Object -Skip 1 |
                {picker} | ForEach-Object {{ ($_ -split '\s+')[0] }}
            if (-not $sel) {{ return }}
            $wtArgs = @("$sel")
        }}
"#,
                picker = p.command()
            )
        });

        out.push_str(&format!(
            r#"
function Invoke-Git {{
    if ($args.Count -gt 0 -and $args[0] -eq 'wt') {{
        $wtArgs = @($args | Select-Object -Skip 1)
{picker}        $out = & git-wt @wtArgs
        $code = $LASTEXITCODE
        if ($code -eq 0 -and $out -and (Test-Path -PathType Container "$out")) {{
            Set-Location "$out"
        }} elseif ($out) {{
            $out
        }}
        if ($code -ne 0) {{ Write-Error "git-wt exited with code $code" }}
        return
    }}
    & git.exe @args
}}
Set-Alias -Name git -Value Invoke-Git -Option AllScope
"#,
            picker = picker_block.as_deref().unwrap_or("")
        ));
    }

    out.push_str(
        r#"
Register-ArgumentCompleter -Native -CommandName git-wt -ScriptBlock {
    param($wordToComplete, $commandAst, $cursorPosition)
    & git for-each-ref --format='%(refname:short)' refs/heads 2>$null |
        Where-Object { $_ -like "$wordToComplete*" } |
        ForEach-Object { [System.Management.Automation.CompletionResult]::new($_, $_, 'ParameterValue', $_) }
}
"#,
    );

    out
}
