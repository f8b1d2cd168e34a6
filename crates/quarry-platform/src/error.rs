use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported operating system")]
    UnsupportedOs,
}
