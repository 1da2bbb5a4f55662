// command line interface

use crate::{Claude, Router, Server};
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

#[derive(Parser)]
#[command(
    name = "aidvice",
    about = "Supportive, non-clinical AI companion in your terminal"
)]
struct Cli {
    /// api key for the model provider
    #[arg(long, short = 'k', env = "ANTHROPIC_API_KEY", global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// start as http server
    Serve {
        /// port number
        #[arg(long, short, default_value = "3000")]
        port: u16,

        /// host to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { port, host }) => {
            Server::run(&host, port, cli.api_key).await.into_diagnostic()
        }

        None => {
            // the client is built before the terminal is touched, so a
            // missing key halts with a plain diagnostic
            let claude = Claude::new(cli.api_key).into_diagnostic()?;
            let router = Router::new(claude);

            crate::tui::run(router).await.into_diagnostic()
        }
    }
}
