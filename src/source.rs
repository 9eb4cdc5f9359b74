use crate::{Condition, ConditionType, CustomResourceReference};
use async_trait::async_trait;
use log::trace;
use serde_json::Value;
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt::{Debug, Display};

/// An interface to whatever holds the current status of custom resources, usually a caller-owned
/// cluster client. The assertion helpers read conditions through this trait, which also allows
/// them to be driven from already-fetched objects or fixtures without a running cluster.
///
/// The helpers treat a source as authoritative: a condition it does not return is absent, there
/// are no retries, and errors from the source fail the current assertion as-is. Waiting for the
/// controller to act on a resource belongs to the caller, before asserting.
#[async_trait]
pub trait ConditionSource {
    /// The error type returned by this trait's functions.
    type E: Debug + Display + Send + Sync + 'static;

    /// Returns the condition of the given type from the resource's current status, or `None` if
    /// the resource does not currently report such a condition. If a resource reports more than
    /// one condition of the same type, the first one wins.
    async fn get_condition(
        &self,
        resource: &CustomResourceReference,
        condition_type: ConditionType,
    ) -> Result<Option<Condition>, Self::E>;
}

/// A [`ConditionSource`] over resource objects that have already been fetched. Useful when the
/// calling test manages its own resource client, and for testing assertions without a cluster.
#[derive(Debug, Default, Clone)]
pub struct StatusSnapshot {
    conditions: HashMap<CustomResourceReference, Vec<Condition>>,
}

impl StatusSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the conditions currently reported for `resource`, replacing anything previously
    /// recorded for it.
    pub fn insert<I>(&mut self, resource: CustomResourceReference, conditions: I)
    where
        I: IntoIterator<Item = Condition>,
    {
        self.conditions
            .insert(resource, conditions.into_iter().collect());
    }

    /// Record the conditions for `resource` from the JSON form of its fetched object. An object
    /// without a `status.conditions` field is recorded as reporting no conditions.
    pub fn insert_object(
        &mut self,
        resource: CustomResourceReference,
        object: &Value,
    ) -> Result<(), serde_json::Error> {
        let conditions: Vec<Condition> = match object.pointer("/status/conditions") {
            None => Vec::new(),
            Some(value) => serde_json::from_value(value.clone())?,
        };
        trace!(
            "recording {} conditions for resource '{}'",
            conditions.len(),
            resource
        );
        self.conditions.insert(resource, conditions);
        Ok(())
    }
}

#[async_trait]
impl ConditionSource for StatusSnapshot {
    type E = Infallible;

    async fn get_condition(
        &self,
        resource: &CustomResourceReference,
        condition_type: ConditionType,
    ) -> Result<Option<Condition>, Self::E> {
        Ok(self.conditions.get(resource).and_then(|conditions| {
            conditions
                .iter()
                .find(|condition| condition.is_type(condition_type))
                .cloned()
        }))
    }
}
