//! Tri-state wrapper for data loaded from the platform API.

/// Lifecycle of an async fetch, as the console renders it: a loading
/// indicator while in `Init` or `Loading`, the data on `Success`, and an
/// error banner otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RemoteData<T> {
    #[default]
    Init,
    Loading,
    Success(T),
    Error(String),
}

impl<T> RemoteData<T> {
    /// True while nothing has been resolved yet.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Init | Self::Loading)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
