use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure taxonomy for API calls.
///
/// Display is the user-facing notification line: a server-provided
/// `message` is shown verbatim, everything else gets a short fixed phrase
/// with detail available through `source`.
#[derive(Debug)]
pub enum Error {
    /// The request never completed (connect failure, timeout).
    Network(reqwest::Error),
    /// The server answered with a non-2xx status.
    Api { status: u16, message: Option<String> },
    /// A 2xx answer whose body was not the JSON the contract promises.
    Decode(reqwest::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(_) => write!(f, "could not reach the server"),
            Error::Api {
                message: Some(message),
                ..
            } => f.write_str(message),
            Error::Api {
                status,
                message: None,
            } => write!(f, "request failed with HTTP {}", status),
            Error::Decode(_) => write!(f, "server returned an unreadable response"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Network(err) | Error::Decode(err) => Some(err),
            Error::Api { .. } => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err)
        } else {
            Error::Network(err)
        }
    }
}
