//! Command-line session converter

use clap::Parser;
use tgsession::{Converter, Detection, SessionFormat, DEFAULT_SAMPLE_SESSION};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pyrogram or Telethon session string (defaults to a built-in sample)
    session: Option<String>,

    /// Retry as Pyrogram when a `1`-prefixed string is not a valid Telethon session
    #[arg(long)]
    lenient: bool,

    /// Show the full auth key (be careful sharing output!)
    #[arg(long)]
    show_key: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Setup logging
    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let session = args.session.as_deref().unwrap_or(DEFAULT_SAMPLE_SESSION);
    let detection = if args.lenient {
        Detection::Fallback
    } else {
        Detection::Prefix
    };
    let converter = Converter::new().with_detection(detection);

    println!("🔄 Telegram Session Converter");
    println!("{}", "=".repeat(80));
    println!();

    println!("🔍 Detected: {} session", SessionFormat::detect(session));
    let decoded = converter.decode(session)?;

    println!("📡 Hostname: {}", decoded.endpoint());
    println!("🔑 Auth Key: {} bytes", decoded.auth_key().as_bytes().len());
    if args.show_key {
        println!("   {}", hex::encode(decoded.auth_key().as_bytes()));
    }
    println!();

    println!("✅ Converted to {} format!", SessionFormat::Gogram);
    println!();
    println!("{}", "=".repeat(80));
    println!("GOGRAM SESSION STRING:");
    println!("{}", "=".repeat(80));
    println!("{}", decoded.to_gogram_string());
    println!("{}", "=".repeat(80));

    Ok(())
}
