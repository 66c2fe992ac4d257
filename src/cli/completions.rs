use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    appcore-resolve completions bash > ~/.bash_completion.d/appcore-resolve\n\n\
                  Generate zsh completions:\n    appcore-resolve completions zsh > ~/.zfunc/_appcore-resolve\n\n\
                  Generate fish completions:\n    appcore-resolve completions fish > ~/.config/fish/completions/appcore-resolve.fish\n\n\
                  Generate PowerShell completions:\n    appcore-resolve completions powershell")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
