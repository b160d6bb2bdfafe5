//! The fetch-state machine shared by data-bearing views.

use api::Error;

/// Lifecycle of one view-owned fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    NotFound,
    Failed(String),
}

impl<T> FetchState<T> {
    /// Build from an API result, using `fallback` when the error carries no
    /// server detail. Callers that redirect on `Unauthenticated` must match
    /// on the error themselves before reaching for this.
    pub fn from_result(result: Result<T, Error>, fallback: &str) -> Self {
        match result {
            Ok(value) => FetchState::Ready(value),
            Err(Error::NotFound) => FetchState::NotFound,
            Err(err) => FetchState::Failed(err.user_message(fallback)),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_mapping() {
        assert_eq!(FetchState::from_result(Ok(1), "x"), FetchState::Ready(1));
        assert_eq!(
            FetchState::<i32>::from_result(Err(Error::NotFound), "x"),
            FetchState::NotFound
        );
        assert_eq!(
            FetchState::<i32>::from_result(
                Err(Error::RequestFailed { status: 500, detail: "boom".into() }),
                "x"
            ),
            FetchState::Failed("boom".into())
        );
        assert_eq!(
            FetchState::<i32>::from_result(Err(Error::Unauthenticated), "please log in"),
            FetchState::Failed("please log in".into())
        );
    }
}
