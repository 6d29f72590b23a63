use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use zeroize::Zeroizing;

use coldshare::cli::{Cli, Commands};
use coldshare::commands::{generate_parts, recover_from_parts, recover_secret};
use coldshare::domain::Signature;
use coldshare::logging::init_logging;

/// Read the private key securely from stdin (hidden input when TTY available)
fn read_secret() -> Result<Zeroizing<String>> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter private key:");
        rpassword::read_password()
            .map(Zeroizing::new)
            .context("Failed to read private key from stdin")
    } else {
        // Non-interactive mode (piped input) - read directly from stdin
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        let mut secret = Zeroizing::new(String::new());
        handle
            .read_line(&mut secret)
            .context("Failed to read private key from stdin")?;
        Ok(Zeroizing::new(secret.trim().to_string()))
    }
}

/// Read parts from stdin, one short notation per line, until an empty line
fn read_parts() -> Result<Vec<String>> {
    let mut parts = Vec::new();

    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter parts (one per line, empty line to finish):");

        loop {
            let part = rpassword::read_password().context("Failed to read part from stdin")?;

            if part.trim().is_empty() {
                break;
            }

            parts.push(part.trim().to_string());
        }
    } else {
        let stdin = io::stdin();
        let handle = stdin.lock();

        for line in handle.lines() {
            let line = line.context("Failed to read line from stdin")?;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                break;
            }

            parts.push(trimmed.to_string());
        }
    }

    if parts.is_empty() {
        anyhow::bail!("No parts provided");
    }

    Ok(parts)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format, &cli.log_level);

    match cli.command {
        Commands::Generate {
            threshold,
            total,
            scheme_version,
        } => {
            let signature = Signature::try_new(scheme_version, threshold, total)?;
            let secret = read_secret()?;

            let parts = generate_parts(signature, &secret)?;

            eprintln!("Parts generated:");
            for part in parts {
                println!("{part}");
            }
        }
        Commands::Recover { parts } => {
            let secret = if parts.is_empty() {
                recover_secret(&read_parts()?)?
            } else {
                recover_from_parts(parts)?
            };
            println!("{}", secret.as_str());
        }
    }

    Ok(())
}
