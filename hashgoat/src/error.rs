#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Recovery(#[from] hashgoat_core::Error),

    #[error("Failed to install logger: {0}")]
    Logging(String),
}
