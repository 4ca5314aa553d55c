use clap::{Command, ValueEnum};
use clap_complete::{Shell as CompleteShell, generate};
use std::io;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

/// Shell function wrapping `wt-bin` so that the printed directory is `cd`'d into
#[must_use]
pub fn shell_integration(shell: Shell) -> String {
    match shell {
        Shell::Bash | Shell::Zsh => posix_integration(shell),
        Shell::Fish => FISH_INTEGRATION.to_string(),
    }
}

/// Generate native shell completions using clap
pub fn generate_completions(shell: Shell, cmd: &mut Command) {
    let clap_shell = match shell {
        Shell::Bash => CompleteShell::Bash,
        Shell::Zsh => CompleteShell::Zsh,
        Shell::Fish => CompleteShell::Fish,
    };

    generate(
        clap_shell,
        cmd,
        cmd.get_name().to_string(),
        &mut io::stdout(),
    );
}

fn posix_integration(shell: Shell) -> String {
    let name = if shell == Shell::Zsh { "Zsh" } else { "Bash" };
    format!(
        r#"# wt shell integration for {name}
# wt-bin prints the directory to move into on stdout; everything else goes to stderr

wt() {{
    case "$1" in
        list|init|completions|-h|--help|-V|--version)
            wt-bin "$@"
            ;;
        *)
            local result
            result=$(wt-bin "$@") || return $?
            if [ -n "$result" ] && [ -d "$result" ]; then
                cd "$result" || return 1
            fi
            ;;
    esac
}}
"#
    )
}

const FISH_INTEGRATION: &str = r#"# wt shell integration for Fish
# wt-bin prints the directory to move into on stdout; everything else goes to stderr

function wt
    switch "$argv[1]"
        case list init completions -h --help -V --version
            wt-bin $argv
        case '*'
            set -l result (wt-bin $argv)
            or return $status
            if test -n "$result"; and test -d "$result"
                cd "$result"
            end
    end
end
"#;
