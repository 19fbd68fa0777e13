//! Serve command implementation.

use std::net::SocketAddr;

use crate::cli::ServeArgs;
use crate::config::{Overrides, PlaycheckConfig};
use crate::error::{CliError, Result};
use crate::server;

/// Execute the serve command.
///
/// Configuration is loaded once at startup; per-request `runs` overrides the
/// configured trial count.
///
/// # Errors
///
/// Returns errors for invalid configuration, an unparsable address, or a
/// server failure.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = PlaycheckConfig::load(&Overrides::from(&args), args.config.as_deref())?;
    config.validate()?;

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| CliError::InvalidArgument(format!("invalid address '{}': {}", args.host, e)))?;

    server::serve(config, addr).await
}
