use thiserror::Error;

/// Top-level error type for the `everafter-delivery` crate.
///
/// Every variant describes a *local* failure: the sink is write-only,
/// so a remote rejection after the bytes left the machine is not
/// observable and has no variant here.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl Error {
    /// Returns `true` if this error was a request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Returns `true` if the connection itself could not be established.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect())
    }
}
