use thiserror::Error;

/// A sentiment or action label that is not one of the recognized names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} label: {label:?}")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub label: String,
}
