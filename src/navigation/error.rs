/// Errors that can occur while building or resolving a location.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// The draft could not be encoded as a query string.
    #[error("could not encode query string: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// The query string could not be decoded into key/value pairs.
    #[error("could not decode query string: {0}")]
    Decode(#[from] serde_urlencoded::de::Error),

    /// No screen is mounted at the requested path.
    #[error("no screen is mounted at {0}")]
    UnknownPath(String),
}
