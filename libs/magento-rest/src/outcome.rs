//! Uniform success-or-captured-failure container for repository operations.

use crate::error::RepoError;

/// The result of one repository operation: either the produced value or the
/// captured failure. Failures are terminal for that single operation — there
/// are no retries and no partial-failure recovery.
#[derive(Debug)]
pub enum Outcome<T> {
    Success(T),
    Failure(RepoError),
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    pub fn failure(error: impl Into<RepoError>) -> Self {
        Outcome::Failure(error.into())
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The produced value, if the operation succeeded.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The captured failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&RepoError> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Convert back into a `Result` for callers that prefer `?`.
    ///
    /// # Errors
    ///
    /// Returns the captured [`RepoError`] when the operation failed.
    pub fn into_result(self) -> Result<T, RepoError> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E: Into<RepoError>> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;

    #[test]
    fn success_accessors() {
        let outcome = Outcome::success(7);
        assert!(outcome.is_success());
        assert_eq!(outcome.value(), Some(&7));
        assert!(outcome.error().is_none());
        assert_eq!(outcome.into_value(), Some(7));
    }

    #[test]
    fn failure_accessors() {
        let outcome: Outcome<i32> = Outcome::failure(RepoError::MissingId);
        assert!(outcome.is_failure());
        assert!(outcome.value().is_none());
        assert!(matches!(outcome.error(), Some(RepoError::MissingId)));
        assert!(outcome.into_result().is_err());
    }

    #[test]
    fn map_preserves_failure() {
        let outcome: Outcome<i32> = Outcome::failure(RepoError::MissingId);
        let mapped = outcome.map(|n| n * 2);
        assert!(mapped.is_failure());
    }

    #[test]
    fn from_result_converts_the_error() {
        let result: Result<(), ClientError> = Err(ClientError::HttpStatus {
            status: http::StatusCode::BAD_GATEWAY,
            body_preview: String::new(),
        });
        let outcome: Outcome<()> = result.into();
        assert!(matches!(outcome.error(), Some(RepoError::Client(_))));
    }
}
