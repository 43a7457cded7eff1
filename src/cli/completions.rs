use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    oleanpack completions bash > ~/.bash_completion.d/oleanpack\n\n\
                  Generate zsh completions:\n    oleanpack completions zsh > ~/.zfunc/_oleanpack\n\n\
                  Generate fish completions:\n    oleanpack completions fish > ~/.config/fish/completions/oleanpack.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
