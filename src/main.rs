use clap::{Parser, Subcommand};
use colored::Colorize;
use pagefix::{commands, config};

#[derive(Parser)]
#[command(name = "pagefix")]
#[command(about = "Repair the generated DreamInputPage source in place", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./pagefix.toml when present)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Print what each stage changed
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Patch the page and overwrite it (default)
    Apply {
        /// File to patch (defaults to the configured target path)
        target: Option<String>,
    },
    /// Print the diff `apply` would produce without touching the file
    Preview {
        /// File to patch (defaults to the configured target path)
        target: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = config::resolve_config(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            None => commands::apply::execute(None, &config, cli.verbose),
            Some(Commands::Apply { target }) => {
                commands::apply::execute(target.as_deref(), &config, cli.verbose)
            }
            Some(Commands::Preview { target }) => {
                commands::preview::execute(target.as_deref(), &config, cli.verbose)
            }
        }
    });

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
