#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("matrix is not invertible (determinant {0})")]
    NotInvertible(f64),

    /// A call that is never valid for the receiver, e.g. asking a group for its local normal.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
