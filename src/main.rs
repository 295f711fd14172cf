//! QR Studio - design and export QR codes from the command line.
//!
//! Turns a URL, free text, or a contact card into a styled QR image and
//! exports it as a PNG file, a clipboard entry, or a terminal preview.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use qrstudio::cli::{EncodeArgs, GenerateArgs};
use qrstudio::constants::APP_BINARY_NAME;

/// QR Studio - design and export QR codes
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a QR code and export it
    Generate(GenerateArgs),
    /// Print the canonical payload without rendering
    Encode(EncodeArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Generate(args) => args.execute(),
        Commands::Encode(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {}", error.message());
        std::process::exit(error.exit_code());
    }
}
