//! # `lithology-client`
//!
//! Command-line client for a running `lithology-server`.
//!
//! ```bash
//! cargo run --bin lithology-client -- parse "moist grey clay, stiff"
//! cargo run --bin lithology-client -- --endpoint http://10.0.0.5:7777 check
//! ```

use clap::{Parser, Subcommand};
use lithology_core::{client::LithologyClient, types::default_endpoint};

#[derive(Parser, Debug)]
#[command(name = "lithology-client", version, about = "Query a lithology parsing service")]
struct CliArgs {
    /// Server endpoint.
    ///
    /// Environment variable: `LITHOLOGY_ENDPOINT`
    #[arg(long, env = "LITHOLOGY_ENDPOINT", default_value_t = default_endpoint())]
    endpoint: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a free-text lithology description.
    Parse {
        /// The description, e.g. "moist grey clay, stiff".
        description: String,
    },
    /// Query the health service.
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();

    let mut client = LithologyClient::connect(args.endpoint).await?;

    match args.command {
        Command::Parse { description } => {
            let (response, error) = client.parse_lithology(description).await.into_parts();
            println!("soils:       {}", response.soils.join(", "));
            println!("moisture:    {}", response.moisture);
            println!("consistency: {}", response.consistency);
            if let Some(err) = error {
                anyhow::bail!("partial result: {err}");
            }
        }
        Command::Check => {
            let status = client.check().await?;
            println!("{}", status.as_str_name());
        }
    }

    Ok(())
}
