use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
mod auth;
use notelock::{Envelope, encrypt_note, unlock_envelope};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "notelock")]
#[command(
    version,
    about = "Seal and open password-protected secure notes."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Seals a note under a password
    #[command(arg_required_else_help = true)]
    Seal {
        /// Note text to seal
        text: String,

        /// Write the envelope JSON to a file instead of stdout
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Opens a sealed note and prints it
    #[command(arg_required_else_help = true)]
    Open {
        /// Path to the envelope JSON file, or '-' for stdin
        file: PathBuf,
    },
}

fn read_envelope(file: &Path) -> Result<Envelope> {
    let json = if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("could not read '{}'", file.display()))?
    };

    serde_json::from_str(&json).context("not a valid note envelope")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    match args.command {
        Commands::Seal { text, out } => {
            let password = auth::read_new_password_with_confirmation()?;
            let envelope = encrypt_note(&password, &text)?;
            let json = serde_json::to_string_pretty(&envelope)?;

            match out {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("note sealed to '{}'", path.display());
                }
                None => println!("{json}"),
            }
        }
        Commands::Open { file } => {
            let password = auth::read_password()?;
            let envelope = read_envelope(&file)?;
            let text = unlock_envelope(&password, &envelope)?;
            println!("{}", &*text);
        }
    }

    Ok(())
}
