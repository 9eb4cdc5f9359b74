use crate::{ConditionStatus, ConditionType};
use snafu::Snafu;
use std::fmt::{Debug, Display, Formatter};

/// The `Error` type returned by the assertion helpers. Errors originating from the
/// [`ConditionSource`] are passed through, preserving their type. Failed assertions are of the
/// [`AssertError`] type.
///
/// [`ConditionSource`]: crate::ConditionSource
#[derive(Debug)]
pub enum Error<S>
where
    S: Debug + Display + Send + Sync + 'static,
{
    /// A condition was missing or did not hold the expected values.
    Assert(AssertError),
    /// An error originating from the [`ConditionSource`](crate::ConditionSource).
    Source(S),
}

/// The `Result` type returned by the assertion helpers.
pub type Result<T, S> = std::result::Result<T, Error<S>>;

impl<S> std::error::Error for Error<S> where S: Debug + Display + Send + Sync + 'static {}

impl<S> Display for Error<S>
where
    S: Debug + Display + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Assert(e) => write!(f, "{}", e),
            Error::Source(e) => write!(f, "condition source error: {}", e),
        }
    }
}

/// An assertion that did not hold. The display message carries the expected and actual values
/// and the reference of the resource that was checked.
#[derive(Debug, Snafu)]
pub struct AssertError(InnerError);

/// The private error type, [`AssertError`] is opaque.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum InnerError {
    #[snafu(display("Failed to find {} condition in resource {}", condition_type, resource))]
    ConditionNotFound {
        condition_type: ConditionType,
        resource: String,
    },

    #[snafu(display(
        "Expected {} condition of resource {} to have status {} but found {}",
        condition_type,
        resource,
        expected,
        actual
    ))]
    StatusMismatch {
        condition_type: ConditionType,
        resource: String,
        expected: ConditionStatus,
        actual: ConditionStatus,
    },

    #[snafu(display(
        "Expected Ready condition of resource {} to have reason '{}' but found '{}'",
        resource,
        expected,
        actual
    ))]
    ReasonMismatch {
        resource: String,
        expected: String,
        actual: String,
    },

    #[snafu(display(
        "Expected Ready condition of resource {} to have message containing '{}' but found '{}'",
        resource,
        expected,
        actual
    ))]
    MessageMismatch {
        resource: String,
        expected: String,
        actual: String,
    },
}

impl<S> From<InnerError> for Error<S>
where
    S: Debug + Display + Send + Sync + 'static,
{
    fn from(e: InnerError) -> Self {
        Error::Assert(e.into())
    }
}
