use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input stream closed before the session finished")]
    InputClosed,
}
