use thiserror::Error;

/// Errors returned by bucketing operations.
///
/// Every variant is fatal to the call: no partial assignment is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BucketingError {
    #[error("cluster size must be positive, got {0}")]
    InvalidClusterSize(usize),

    #[error("element {id:?} has no value for key {key:?}")]
    MissingKey { id: String, key: String },

    #[error("element {id:?} has non-finite value {value} for key {key:?}")]
    NonFinite { id: String, key: String, value: f64 },

    #[error("duplicate element id {0:?}")]
    DuplicateId(String),

    #[error("size plan covers {got} elements, expected {expected}")]
    PlanMismatch { expected: usize, got: usize },

    #[error("size plan entry {index} is zero")]
    EmptyGroup { index: usize },
}
