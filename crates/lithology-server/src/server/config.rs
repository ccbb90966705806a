use anyhow::Context;
use clap::Parser;
use lithology_core::types::DEFAULT_SERVER_ADDR;
use std::net::SocketAddr;

/// Runtime configuration for the `lithology-server` binary.
///
/// Values are parsed from CLI arguments or environment variables (a `.env`
/// file is loaded first). With no configuration at all the server listens on
/// port 7777 on every interface.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "lithology-server",
    version,
    about = "A gRPC service for parsing soil lithology descriptions"
)]
pub struct CliArgs {
    /// TCP address to listen on.
    ///
    /// Example: "0.0.0.0:7777" or "127.0.0.1:9000"
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = DEFAULT_SERVER_ADDR.to_string())]
    pub server_addr: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: SocketAddr,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let server_addr = args
            .server_addr
            .parse()
            .with_context(|| format!("SERVER_ADDR `{}` is not a socket address", args.server_addr))?;

        Ok(Self { server_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_port_7777() {
        let args = CliArgs::try_parse_from(["lithology-server"]).unwrap();
        let config = ServerConfig::try_from(args).unwrap();
        assert_eq!(config.server_addr, DEFAULT_SERVER_ADDR);
        assert_eq!(config.server_addr.port(), 7777);
        assert!(config.server_addr.ip().is_unspecified());
    }

    #[test]
    fn accepts_explicit_address() {
        let args =
            CliArgs::try_parse_from(["lithology-server", "--server-addr", "127.0.0.1:9000"])
                .unwrap();
        let config = ServerConfig::try_from(args).unwrap();
        assert_eq!(config.server_addr, "127.0.0.1:9000".parse().unwrap());
    }

    #[test]
    fn rejects_malformed_address() {
        let args =
            CliArgs::try_parse_from(["lithology-server", "--server-addr", "localhost"]).unwrap();
        let err = ServerConfig::try_from(args).unwrap_err();
        assert!(err.to_string().contains("localhost"));
    }
}
