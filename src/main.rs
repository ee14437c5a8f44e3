//! Multihasher — multi-level hash cascade over an intention text

use clap::{Parser, Subcommand};
use multihasher_core::{sha256_hex, sha512_hex, sha64_hex, Encoding, Error};
use multihasher_engine::{encode_hash, start_hashing, CascadeEvent};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "multihasher",
    about = "Multi-level hash cascade — amplify and re-digest an intention text"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the cascade and stream per-level progress
    Run {
        /// Intention text (read from stdin when omitted)
        #[arg(short, long)]
        text: Option<String>,
        /// Hash levels, raw user string (K/M suffixes allowed, clamped to 1000)
        #[arg(short, long, default_value = "1")]
        levels: String,
        /// Repetitions per level, raw user string (clamped to 100000)
        #[arg(short, long, default_value = "1")]
        reps: String,
        /// Output encoding: 64, 256, 512, or chunked
        #[arg(short, long, default_value = "512")]
        encoding: String,
        /// File whose contents are digested once and appended to the intention
        #[arg(short, long)]
        attach: Vec<PathBuf>,
        /// Emit newline-delimited JSON events instead of status lines
        #[arg(long)]
        json: bool,
    },
    /// Digest the input once, without running the cascade
    Digest {
        #[arg(short, long)]
        text: String,
        /// Output encoding: 64, 256, 512, or chunked
        #[arg(short, long, default_value = "512")]
        encoding: String,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            text,
            levels,
            reps,
            encoding,
            attach,
            json,
        } => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "multihasher=warn".into()),
                )
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();

            let intention = build_intention(text, &attach).await?;
            run(intention, &levels, &reps, Encoding::from_label(&encoding), json).await
        }
        Commands::Digest { text, encoding } => {
            println!("{}", one_shot_digest(&text, Encoding::from_label(&encoding)));
            Ok(())
        }
        Commands::Version => {
            println!("multihasher {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Assemble the intention text: the typed text (or stdin), plus one SHA-512
/// line per attached file. The file digest is a one-shot preprocessing step;
/// the cascade itself never re-reads the files.
async fn build_intention(text: Option<String>, attach: &[PathBuf]) -> anyhow::Result<String> {
    let mut intention = match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    for path in attach {
        let bytes = tokio::fs::read(path).await?;
        let hash = sha512_hex(&String::from_utf8_lossy(&bytes));
        intention.push('\n');
        intention.push_str(&hash);
    }

    if intention.trim().is_empty() {
        return Err(Error::EmptyIntention.into());
    }
    Ok(intention)
}

async fn run(
    intention: String,
    levels_raw: &str,
    reps_raw: &str,
    encoding: Encoding,
    json: bool,
) -> anyhow::Result<()> {
    let mut handle = start_hashing(intention, levels_raw, reps_raw, encoding);

    // Ctrl-C requests a stop; the engine finishes the in-flight level first.
    let cancel = handle.cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    while let Some(event) = handle.events.recv().await {
        if json {
            println!("{}", serde_json::to_string(&event)?);
            continue;
        }
        match event {
            CascadeEvent::Progress(e) => {
                eprintln!(
                    "{} / {} hash levels converted.",
                    e.level_completed, e.total_levels
                );
            }
            CascadeEvent::Completed(result) => {
                eprintln!("Hashing completed.");
                println!("{}", result.encoded_hash);
            }
            CascadeEvent::Stopped { levels_completed } => {
                eprintln!("Hashing stopped after {} levels.", levels_completed);
            }
        }
    }

    handle.join.await?;
    Ok(())
}

/// Digest primitives applied directly to the input, no amplification.
fn one_shot_digest(text: &str, encoding: Encoding) -> String {
    match encoding {
        Encoding::Bit64 => sha64_hex(text),
        Encoding::Bit256 => sha256_hex(text),
        Encoding::Bit512 => sha512_hex(text),
        Encoding::Chunked => encode_hash(&sha512_hex(text), Encoding::Chunked),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_digest_widths() {
        assert_eq!(one_shot_digest("x", Encoding::Bit64).len(), 16);
        assert_eq!(one_shot_digest("x", Encoding::Bit256).len(), 64);
        assert_eq!(one_shot_digest("x", Encoding::Bit512).len(), 128);
        assert_eq!(one_shot_digest("x", Encoding::Chunked).len(), 128);
    }

    #[tokio::test]
    async fn blank_intention_is_rejected() {
        let err = build_intention(Some("   \n".into()), &[]).await;
        assert!(err.is_err());
    }

    #[tokio::test]
    async fn attached_file_is_digested_once() {
        let dir = std::env::temp_dir().join("multihasher-attach-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("input.txt");
        std::fs::write(&path, "file body").unwrap();

        let intention = build_intention(Some("intent".into()), &[path]).await.unwrap();
        let expected = format!("intent\n{}", sha512_hex("file body"));
        assert_eq!(intention, expected);
    }
}
