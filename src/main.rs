//! PolyKV - Command Translation Console
//!
//! This is the main entry point for the PolyKV console.
//! It opens a session for the chosen backend and translates each line typed on
//! stdin into the command that backend would receive.

use polykv::backend::ConnectionType;
use polykv::console::{run_session, ConsoleSession};
use tokio::io::{self, BufReader};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Console configuration
struct Config {
    /// Backend to translate for
    backend: ConnectionType,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: polykv::DEFAULT_BACKEND,
        }
    }
}

impl Config {
    /// Parse configuration from command-line arguments
    fn from_args() -> Self {
        let mut config = Config::default();
        let args: Vec<String> = std::env::args().collect();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--backend" | "-b" => {
                    if i + 1 < args.len() {
                        config.backend = args[i + 1].parse().unwrap_or_else(|e| {
                            eprintln!("Error: {}", e);
                            std::process::exit(1);
                        });
                        i += 2;
                    } else {
                        eprintln!("Error: --backend requires a value");
                        std::process::exit(1);
                    }
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                "--version" | "-v" => {
                    println!("PolyKV version {}", polykv::VERSION);
                    std::process::exit(0);
                }
                _ => {
                    eprintln!("Unknown argument: {}", args[i]);
                    print_help();
                    std::process::exit(1);
                }
            }
        }

        config
    }
}

fn print_help() {
    let backends: Vec<&str> = ConnectionType::built().map(|ty| ty.as_str()).collect();

    println!(
        r#"
PolyKV - Command Translation Console

USAGE:
    polykv [OPTIONS]

OPTIONS:
    -b, --backend <NAME>   Backend to translate for (default: {})
    -v, --version          Print version information
    -h, --help             Print this help message

BACKENDS:
    {}

EXAMPLES:
    polykv                         # Translate for Redis
    polykv --backend memcached     # Translate for Memcached

SESSION:
    set name "Ariz"
    "set name Ariz"
    help
    quit
"#,
        polykv::DEFAULT_BACKEND,
        backends.join(", ")
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let config = Config::from_args();

    // Logs go to stderr so replies on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut session = match ConsoleSession::new(config.backend) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to open console: {}", e);
            return Err(e);
        }
    };
    info!(
        "Console ready for {} ({} commands)",
        config.backend,
        session.handler().commands().len()
    );

    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Interrupt received, closing console...");
    };

    tokio::select! {
        result = run_session(BufReader::new(io::stdin()), io::stdout(), &mut session) => result?,
        _ = shutdown => {}
    }

    info!("Console closed");
    Ok(())
}
