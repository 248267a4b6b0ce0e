use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use client::cli::Args;
use client::{FilePlayer, TtsSession, UiState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let _ = dotenv::dotenv();
    let args = Args::parse();

    let player = FilePlayer::new(&args.output, args.player.clone());
    let mut session = TtsSession::new(&args.server_url, player);
    info!("Using relay at {}", args.server_url);

    if !args.interactive {
        submit(&mut session, &args.text).await;
        return match session.state() {
            UiState::Error(msg) => Err(anyhow::anyhow!("{msg}")),
            _ => Ok(()),
        };
    }

    println!("Type text and press enter to generate and play. Ctrl-D quits.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        submit(&mut session, &line).await;
    }
    Ok(())
}

async fn submit(session: &mut TtsSession<FilePlayer>, text: &str) {
    println!("Generating audio...");
    // The outcome is reported through the session state
    let _ = session.request_and_play(text).await;
    match session.state() {
        UiState::Error(msg) => eprintln!("Error: {msg}"),
        state => println!("{state}"),
    }
}
