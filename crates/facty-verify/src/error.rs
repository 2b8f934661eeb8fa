use facty_client::ClientError;
use facty_config::ConfigError;

/// Setup failures raised before a fact-check run starts.
///
/// Once a [`crate::FactChecker`] exists, every failure is reported inside the
/// returned report instead.
#[derive(Debug, thiserror::Error)]
pub enum FactCheckError {
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}
