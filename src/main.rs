use clap::{Parser, Subcommand};
use fleet_fixtures::certs::{create_node_certificate, write_certificate};
use fleet_fixtures::{
    create_eth_address, create_random_node_with, create_random_state_with, is_checksum_address,
    node_to_row, state_to_row,
};
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{error, info};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_COMMIT_HASH"), ")");

/// Generate mock node and fleet state rows for seeding a node store
#[derive(Parser, Debug)]
#[command(author, version, long_version = LONG_VERSION, about)]
struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print random node rows, one JSON array per line
    Nodes {
        #[arg(long, default_value = "1")]
        count: usize,
        /// Seed for reproducible fields (timestamps still follow the clock)
        #[arg(long)]
        seed: Option<u64>,
        /// Issue a self-signed certificate for every node
        #[arg(long)]
        with_certs: bool,
        /// Print whole records instead of rows
        #[arg(long)]
        records: bool,
    },

    /// Print random fleet state rows, one JSON array per line
    States {
        #[arg(long, default_value = "1")]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        records: bool,
    },

    /// Issue a node certificate and write it as PEM (errors if either file exists)
    GenCert {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Checksum address for the certificate CN; random when omitted
        #[arg(long)]
        address: Option<String>,
        #[arg(long, help = "Path to TLS certificate file")]
        cert_path: PathBuf,
        #[arg(long, help = "Path to TLS private key file")]
        key_path: PathBuf,
    },

    /// Check that an address is checksum-cased
    CheckAddress { address: String },
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// One JSON line per random node: the store row, or the whole record.
fn node_lines<R: Rng>(
    rng: &mut R,
    count: usize,
    with_certs: bool,
    records: bool,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut lines = Vec::with_capacity(count);
    for _ in 0..count {
        let node = create_random_node_with(rng, with_certs)?;
        let line = if records {
            serde_json::to_string(&node)?
        } else {
            serde_json::to_string(&node_to_row(&node))?
        };
        lines.push(line);
    }
    Ok(lines)
}

fn state_lines<R: Rng>(rng: &mut R, count: usize, records: bool) -> serde_json::Result<Vec<String>> {
    (0..count)
        .map(|_| {
            let state = create_random_state_with(&mut *rng);
            if records {
                serde_json::to_string(&state)
            } else {
                serde_json::to_string(&state_to_row(&state))
            }
        })
        .collect()
}

fn address_report(address: &str) -> Result<String, String> {
    if is_checksum_address(address) {
        Ok(format!("{} is a valid checksum address", address))
    } else {
        Err(format!("{} is not a valid checksum address", address))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    match args.command {
        Command::Nodes {
            count,
            seed,
            with_certs,
            records,
        } => {
            for line in node_lines(&mut seeded_rng(seed), count, with_certs, records)? {
                println!("{}", line);
            }
            info!("generated {} node fixtures", count);
        }
        Command::States {
            count,
            seed,
            records,
        } => {
            for line in state_lines(&mut seeded_rng(seed), count, records)? {
                println!("{}", line);
            }
            info!("generated {} fleet state fixtures", count);
        }
        Command::GenCert {
            host,
            address,
            cert_path,
            key_path,
        } => {
            if cert_path.exists() || key_path.exists() {
                error!(
                    "cert or key already exists ({} or {}). Aborting.",
                    cert_path.display(),
                    key_path.display()
                );
                std::process::exit(1);
            }

            let address = address.unwrap_or_else(create_eth_address);
            let certificate = create_node_certificate(&host, &address)?;
            write_certificate(&certificate, &cert_path, &key_path)?;

            info!(
                "Node certificate for {} ({}) written to:\n  cert: {}\n  key: {}",
                address,
                host,
                cert_path.display(),
                key_path.display()
            );
        }
        Command::CheckAddress { address } => {
            match address_report(&address) {
                Ok(report) => println!("{}", report),
                Err(report) => {
                    error!("{}", report);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
