#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to encode token: {0}")]
    Encode(#[from] jsonwebtoken::errors::Error),
}
