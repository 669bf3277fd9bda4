//! Terminal front end for the six-digit code entry form.
//!
//! Reads one event per line from stdin, applies it to the form and prints
//! the re-rendered form. Codes are sent to `VERIFY_API_URL`.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vc_infra::terminal::{Command, Step, TerminalSession, HELP};
use vc_infra::HttpVerificationClient;
use vc_shared::config::{Environment, LoggingConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Logs go to stderr, the form goes to stdout
    let logging = LoggingConfig::from_env(Environment::from_env());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = HttpVerificationClient::from_env()
        .context("failed to configure the verification client")?;
    info!(url = client.verify_url(), "Verifying codes against service");

    let mut session = TerminalSession::new(client);
    println!("Verify Your Code\n{}\n", HELP);
    print!("{}", session.form());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match session.apply(command).await {
            Step::Continue => print!("{}", session.form()),
            Step::Print(text) => println!("{}", text),
            Step::Quit => break,
        }
    }

    Ok(())
}
