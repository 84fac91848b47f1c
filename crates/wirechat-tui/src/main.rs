//! Wirechat entry point.

use std::{
    io::{self, Write},
    time::Duration,
};

use clap::Parser;
use wirechat_core::{ChatConfig, config::DEFAULT_PORT};
use wirechat_tui::Runtime;

/// Wirechat terminal client
#[derive(Parser, Debug)]
#[command(name = "wirechat")]
#[command(about = "Terminal client for a raw-TCP chat server")]
#[command(version)]
struct Args {
    /// Server hostname or IP address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server TCP port
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Connection timeout in seconds
    ///
    /// If not provided, the connect blocks until the OS gives up.
    #[arg(long)]
    connect_timeout: Option<u64>,

    /// Nickname to chat under
    ///
    /// If not provided, prompts interactively before connecting.
    #[arg(short, long)]
    nick: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging();

    let nickname = match args.nick {
        Some(nick) => nick,
        None => prompt_nickname()?,
    };

    let config = ChatConfig {
        host: args.host,
        port: args.port,
        connect_timeout: args.connect_timeout.map(Duration::from_secs),
        ..Default::default()
    };

    let runtime = Runtime::new(config, nickname)?;
    Ok(runtime.run().await?)
}

/// Ask for a nickname on stdin, before the TUI takes over the terminal.
fn prompt_nickname() -> io::Result<String> {
    let mut out = io::stdout();
    out.write_all(b"Enter your nickname: ")?;
    out.flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    let nick = line.trim();
    if nick.is_empty() {
        Ok("anonymous".to_string())
    } else {
        Ok(nick.to_string())
    }
}

/// Route tracing output to a file when `WIRECHAT_LOG` names one.
///
/// The TUI owns stdout, so there is nowhere sensible to log by default.
fn init_logging() {
    let Ok(path) = std::env::var("WIRECHAT_LOG") else {
        return;
    };
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
