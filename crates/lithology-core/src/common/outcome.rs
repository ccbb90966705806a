//! A value paired with an optional error.
//!
//! Parsing may fail part way and still produce useful output. [`Outcome`]
//! keeps the success/failure tag separate from the payload so both reach the
//! caller: the payload is always present, the error is present only when
//! something went wrong.
//!
//! Over gRPC a failing outcome becomes a non-OK [`Status`] whose details
//! carry the protobuf-encoded payload. [`Outcome::from_response`] reverses
//! that on the client side.

use crate::Error;
use bytes::Bytes;
use tonic::{Response, Status};

#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Outcome<T> {
    value: T,
    error: Option<Error>,
}

impl<T> Outcome<T> {
    /// A fully successful outcome.
    pub fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    /// A best-effort `value` produced alongside `error`.
    pub fn partial(value: T, error: Error) -> Self {
        Self {
            value,
            error: Some(error),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Records `error` unless an earlier one is already present.
    pub fn or_error(mut self, error: Error) -> Self {
        self.error.get_or_insert(error);
        self
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            error: self.error,
        }
    }

    pub fn into_parts(self) -> (T, Option<Error>) {
        (self.value, self.error)
    }
}

impl<T: prost::Message> Outcome<T> {
    /// Converts into a tonic handler result.
    ///
    /// On error the payload is encoded into the status details so the caller
    /// still receives it.
    pub fn into_response(self) -> Result<Response<T>, Status> {
        match self.error {
            None => Ok(Response::new(self.value)),
            Some(err) => {
                let status = Status::from(err);
                Err(Status::with_details(
                    status.code(),
                    status.message(),
                    Bytes::from(self.value.encode_to_vec()),
                ))
            }
        }
    }
}

impl<T: prost::Message + Default> Outcome<T> {
    /// Rebuilds an outcome from a tonic call result.
    ///
    /// A status without decodable details yields a default payload.
    pub fn from_response(result: Result<Response<T>, Status>) -> Self {
        match result {
            Ok(response) => Self::ok(response.into_inner()),
            Err(status) => {
                let value = T::decode(status.details()).unwrap_or_default();
                Self::partial(value, Error::from(status))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::LithologyResponse;
    use tonic::Code;

    fn sample() -> LithologyResponse {
        LithologyResponse {
            soils: vec!["clay".to_string()],
            moisture: "moist".to_string(),
            consistency: String::new(),
        }
    }

    #[test]
    fn first_error_is_kept() {
        let outcome = Outcome::ok(1)
            .or_error(Error::PropertyExtraction {
                reason: "first".to_string(),
            })
            .or_error(Error::TermExtraction {
                reason: "second".to_string(),
            });
        assert_eq!(
            outcome.error(),
            Some(&Error::PropertyExtraction {
                reason: "first".to_string()
            })
        );
        assert_eq!(*outcome.value(), 1);
    }

    #[test]
    fn map_keeps_error() {
        let err = Error::TermExtraction {
            reason: "boom".to_string(),
        };
        let outcome = Outcome::partial(2, err.clone()).map(|n| n * 10);
        assert_eq!(outcome.into_parts(), (20, Some(err)));
    }

    #[test]
    fn partial_payload_travels_in_status_details() {
        let outcome = Outcome::partial(
            sample(),
            Error::PropertyExtraction {
                reason: "no primary soil".to_string(),
            },
        );

        let status = outcome.into_response().unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(!status.details().is_empty());

        let rebuilt = Outcome::<LithologyResponse>::from_response(Err(status));
        assert_eq!(rebuilt.value(), &sample());
        assert!(matches!(
            rebuilt.error(),
            Some(Error::Rpc {
                code: Code::InvalidArgument,
                ..
            })
        ));
    }

    #[test]
    fn status_without_details_yields_default() {
        let rebuilt =
            Outcome::<LithologyResponse>::from_response(Err(Status::unavailable("down")));
        assert_eq!(rebuilt.value(), &LithologyResponse::default());
        assert!(!rebuilt.is_ok());
    }

    #[test]
    fn success_has_no_error() {
        let response = Outcome::ok(sample()).into_response().unwrap();
        let rebuilt = Outcome::from_response(Ok(response));
        assert!(rebuilt.is_ok());
        assert_eq!(rebuilt.into_parts().0, sample());
    }
}
