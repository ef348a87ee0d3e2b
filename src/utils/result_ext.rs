//! Combinators the use cases chain on top of `std::result::Result`.
//!
//! `map` and `and_then` already exist on `Result`; this adds the two that don't.

pub trait ResultExt<T, E> {
    /// Turns a failure into a success using a fallback built from the error.
    fn recover<F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce(E) -> T;

    /// Collapses both variants into one plain value.
    fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn recover<F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce(E) -> T,
    {
        Ok(self.unwrap_or_else(f))
    }

    fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CollaboratorError, Error, ErrorKind};
    use crate::model::hours_and_minutes::HoursAndMinutes;

    fn timeout() -> Result<HoursAndMinutes, Error> {
        Err(CollaboratorError::Timeout("fetch".to_string()).into())
    }

    #[test]
    fn recover_replaces_failure_with_fallback() {
        let recovered = timeout().recover(|_| HoursAndMinutes::ZERO);
        assert_eq!(recovered, Ok(HoursAndMinutes::ZERO));
    }

    #[test]
    fn recover_keeps_success() {
        let value: Result<u32, Error> = Ok(5);
        assert_eq!(value.recover(|_| 0), Ok(5));
    }

    #[test]
    fn fold_collapses_both_sides() {
        let ok: Result<HoursAndMinutes, Error> = Ok(HoursAndMinutes::new(2, 5));

        assert_eq!(ok.fold(|d| d.to_string(), |e| e.kind().to_string()), "02:05");
        assert_eq!(
            timeout().fold(|d| d.to_string(), |e| e.kind().to_string()),
            ErrorKind::Timeout.to_string()
        );
    }

    #[test]
    fn failure_short_circuits_a_chain() {
        let mut called = false;
        let result = timeout()
            .and_then(|d| {
                called = true;
                Ok(d + HoursAndMinutes::new(1, 0))
            })
            .map(|d| d.total_minutes());

        assert!(!called);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Timeout);
    }
}
