use serde::{Deserialize, Serialize};
use serde_plain::{derive_display_from_serialize, derive_fromstr_from_deserialize};

/// The reason string a controller places on the `Ready` condition when it has encountered an
/// error that cannot be resolved without a change to the resource's spec.
pub const TERMINAL_REASON: &str =
    "Terminal error, the custom resource Spec needs to be updated before any further sync can occur";

/// The status values a condition can report. Kubernetes serializes these as the strings `"True"`,
/// `"False"` and `"Unknown"` rather than as booleans, and a condition may legitimately report
/// `Unknown`, so an expected boolean is converted with [`From<bool>`] and compared. `Unknown` is
/// equal to neither boolean expectation.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy)]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

impl Default for ConditionStatus {
    fn default() -> Self {
        Self::Unknown
    }
}

impl From<bool> for ConditionStatus {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

derive_display_from_serialize!(ConditionStatus);
derive_fromstr_from_deserialize!(ConditionStatus);

/// The condition types a controller reports on its custom resources.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum ConditionType {
    /// The resource was adopted from a pre-existing backend object.
    #[serde(rename = "ACK.Adopted")]
    Adopted,

    /// The resource is ready for use.
    Ready,

    /// The controller has reconciled the resource's last-observed spec with the backend.
    #[serde(rename = "ACK.ResourceSynced")]
    ResourceSynced,

    /// Reconciliation failed and cannot succeed without a spec change.
    #[serde(rename = "ACK.Terminal")]
    Terminal,

    /// Reconciliation failed but may succeed on a later sync.
    #[serde(rename = "ACK.Recoverable")]
    Recoverable,

    /// Informational notices from the controller.
    #[serde(rename = "ACK.Advisory")]
    Advisory,

    /// The controller filled in spec fields the user left unset.
    #[serde(rename = "ACK.LateInitialized")]
    LateInitialized,

    /// References to other resources in the spec have been resolved.
    #[serde(rename = "ACK.ReferencesResolved")]
    ReferencesResolved,
}

derive_display_from_serialize!(ConditionType);
derive_fromstr_from_deserialize!(ConditionType);

/// A single entry of a resource's `status.conditions`. Fields beyond the recognized ones
/// (e.g. `lastTransitionTime`) are ignored when deserializing.
#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone)]
pub struct Condition {
    /// The condition type, e.g. `Ready` or `ACK.ResourceSynced`.
    #[serde(rename = "type")]
    pub condition_type: String,

    /// The reported status. A condition with no `status` field reports `Unknown`.
    #[serde(default)]
    pub status: ConditionStatus,

    /// A machine-readable explanation of the status.
    pub reason: Option<String>,

    /// A human-readable explanation of the status.
    pub message: Option<String>,
}

impl Condition {
    /// Does this condition have the given type.
    pub fn is_type(&self, condition_type: ConditionType) -> bool {
        self.condition_type == condition_type.to_string()
    }
}
