use crate::error::{self, Error, Result};
use crate::{
    ConditionSource, ConditionStatus, ConditionType, CustomResourceReference, TERMINAL_REASON,
};
use log::trace;
use snafu::{ensure, OptionExt};

/// Asserts that the resource has a condition of the given type and that the condition's status
/// matches `expected_status`.
///
/// The condition is read once through `source`. A missing condition and a status mismatch are
/// both errors; a status of `Unknown` matches neither `true` nor `false`.
pub async fn assert_type_status<S>(
    source: &S,
    resource: &CustomResourceReference,
    condition_type: ConditionType,
    expected_status: bool,
) -> Result<(), S::E>
where
    S: ConditionSource,
{
    trace!(
        "checking {} condition of resource '{}'",
        condition_type,
        resource
    );
    let condition = source
        .get_condition(resource, condition_type)
        .await
        .map_err(Error::Source)?
        .context(error::ConditionNotFoundSnafu {
            condition_type,
            resource: resource.to_string(),
        })?;
    let expected = ConditionStatus::from(expected_status);
    ensure!(
        condition.status == expected,
        error::StatusMismatchSnafu {
            condition_type,
            resource: resource.to_string(),
            expected,
            actual: condition.status,
        }
    );
    Ok(())
}

/// Asserts that the resource has been synced with its backend: the `ACK.ResourceSynced`
/// condition is present with status `True`.
pub async fn assert_synced<S>(source: &S, resource: &CustomResourceReference) -> Result<(), S::E>
where
    S: ConditionSource,
{
    assert_type_status(source, resource, ConditionType::ResourceSynced, true).await
}

/// Asserts that the resource's `Ready` condition is present and matches `expected_status`.
pub async fn assert_ready_status<S>(
    source: &S,
    resource: &CustomResourceReference,
    expected_status: bool,
) -> Result<(), S::E>
where
    S: ConditionSource,
{
    assert_type_status(source, resource, ConditionType::Ready, expected_status).await
}

/// Asserts that the resource's `Ready` condition is present with status `True`.
pub async fn assert_ready<S>(source: &S, resource: &CustomResourceReference) -> Result<(), S::E>
where
    S: ConditionSource,
{
    assert_ready_status(source, resource, true).await
}

/// Asserts that the resource's `Ready` condition is present with status `False`.
pub async fn assert_not_ready<S>(source: &S, resource: &CustomResourceReference) -> Result<(), S::E>
where
    S: ConditionSource,
{
    assert_ready_status(source, resource, false).await
}

/// Asserts that the resource has stopped on a terminal error: the `Ready` condition has status
/// `False`, its reason is exactly [`TERMINAL_REASON`], and its message contains
/// `expected_message`.
///
/// The condition is read a second time after the status check, so a condition that disappears
/// between the two reads fails the same way as one that was never there.
pub async fn assert_terminal<S>(
    source: &S,
    resource: &CustomResourceReference,
    expected_message: &str,
) -> Result<(), S::E>
where
    S: ConditionSource,
{
    assert_type_status(source, resource, ConditionType::Ready, false).await?;
    let condition = source
        .get_condition(resource, ConditionType::Ready)
        .await
        .map_err(Error::Source)?
        .context(error::ConditionNotFoundSnafu {
            condition_type: ConditionType::Ready,
            resource: resource.to_string(),
        })?;

    let reason = condition.reason.unwrap_or_default();
    ensure!(
        reason == TERMINAL_REASON,
        error::ReasonMismatchSnafu {
            resource: resource.to_string(),
            expected: TERMINAL_REASON,
            actual: reason,
        }
    );

    // A condition with no message cannot contain the expected message.
    let message_matches = condition
        .message
        .as_ref()
        .map(|message| message.contains(expected_message))
        .unwrap_or(false);
    ensure!(
        message_matches,
        error::MessageMismatchSnafu {
            resource: resource.to_string(),
            expected: expected_message,
            actual: condition.message.unwrap_or_default(),
        }
    );
    Ok(())
}
