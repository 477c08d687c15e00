use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use notestencil::config::{config_file_path, load_or_default, save};
use notestencil::vault::FsVault;

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let config_path = config_file_path()?;
    let mut config = load_or_default()?;
    let mut changed = false;

    if let Some(vault) = args.vault {
        // Validate the path before recording it.
        let vault = FsVault::open(vault)?;
        let root = vault.root().to_path_buf();
        if config.active_vault.as_deref() != Some(root.as_path()) {
            config.active_vault = Some(root);
            changed = true;
        }
    }

    if changed {
        save(&config)?;
        println!("Active vault recorded at {}", config_path.display());
    } else {
        match &config.active_vault {
            Some(vault) => println!("Active vault: {}", vault.display()),
            None => println!("No active vault configured. Run with --vault <path>."),
        }
    }

    Ok(())
}

struct CliArgs {
    vault: Option<PathBuf>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut vault = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--vault" => {
                    let value = args
                        .next()
                        .context("Expected a vault directory after --vault")?;
                    vault = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(Self { vault })
    }
}

fn print_usage() {
    println!("notestencil setup");
    println!("Records the active vault in config.toml.");
    println!("Usage: cargo run --bin setup -- [options]");
    println!("Options:");
    println!("  --vault <path>   Directory of the vault to open by default");
}
