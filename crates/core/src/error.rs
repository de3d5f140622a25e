/// Error type for the Core module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] lexeth_config::error::Error),
    /// The descriptor registry could not be built
    #[error("Decoder error: {0}")]
    Decoder(#[from] lexeth_decoder::Error),
}
