mod backend;
mod chat;
mod terminal;

use std::io;

use advisor::{BackendConfig, SessionError};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::backend::QueryClient;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("query is empty; pass the question as arguments")]
    EmptyQuery,
    #[error(transparent)]
    Config(#[from] advisor::ConfigError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Session(SessionError),
}

impl From<SessionError> for CliError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::EmptyInput => Self::EmptyQuery,
            other => Self::Session(other),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "advisor-cli", about = "Terminal client for the AI wealth management advisor")]
struct Cli {
    #[arg(long, env = "ADVISOR_BACKEND_URL", default_value = advisor::DEFAULT_BACKEND_URL)]
    backend_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask a single question and print the answer.
    Ask {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Interactive chat over stdin; `/quit` or EOF ends the session.
    Chat,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = BackendConfig::new(&cli.backend_url)?;
    let client = QueryClient::new(&config);
    tracing::debug!(endpoint = client.endpoint(), "query client ready");

    match cli.command {
        Command::Ask { query } => {
            chat::run_ask(&client, &query.join(" "), &mut io::stdout(), &mut io::stderr()).await
        }
        Command::Chat => {
            let stdin = io::stdin();
            chat::run_chat(&client, stdin.lock(), &mut io::stdout(), &mut io::stderr()).await
        }
    }
}
