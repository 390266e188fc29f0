#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no signed-in identity")]
    MissingIdentity,

    #[error("token error: {0}")]
    Token(#[from] jwt_auth::error::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },
}
