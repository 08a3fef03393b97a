//! One-shot loader state.

use web_types::FetchError;

/// State of a screen's initial load.
///
/// Strictly linear: `Loading` settles once into `Loaded` or `Failed` and
/// never goes back.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T> FetchState<T> {
    /// Settled state for a finished request.
    ///
    /// Returns `None` for an aborted request: its result must be dropped.
    pub fn from_result(result: Result<T, FetchError>) -> Option<Self> {
        match result {
            Ok(data) => Some(FetchState::Loaded(data)),
            Err(e) if e.is_aborted() => None,
            Err(e) => Some(FetchState::Failed(e.to_string())),
        }
    }

    /// Apply a result. Only a `Loading` state changes.
    pub fn settle(self, result: Result<T, FetchError>) -> Self {
        match self {
            FetchState::Loading => Self::from_result(result).unwrap_or(FetchState::Loading),
            settled => settled,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
