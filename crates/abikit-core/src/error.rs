//! Error types for the ABI parsing pipeline.

use thiserror::Error;

/// Errors raised while turning ABI JSON into typed elements.
///
/// Every variant is terminal: a single failure anywhere in a document
/// aborts parsing of that document.
#[derive(Debug, Error)]
pub enum AbiError {
    #[error("Invalid ABI JSON file: {reason}")]
    InvalidJsonFile { reason: String },

    #[error("Element type invalid: '{kind}'")]
    ElementTypeInvalid { kind: String },

    #[error("Element name invalid for {kind}")]
    ElementNameInvalid { kind: String },

    #[error("Function input #{index} invalid: {reason}")]
    FunctionInputInvalid { index: usize, reason: String },

    #[error("Function output #{index} invalid: {reason}")]
    FunctionOutputInvalid { index: usize, reason: String },

    #[error("Event input #{index} invalid: {reason}")]
    EventInputInvalid { index: usize, reason: String },

    #[error("Parameter type invalid: '{ty}': {reason}")]
    ParameterTypeInvalid { ty: String, reason: String },

    #[error("Parameter type not found: '{ty}'")]
    ParameterTypeNotFound { ty: String },

    #[error("ABI invalid: {reason}")]
    AbiInvalid { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AbiError {
    /// Shorthand for the most common failure.
    pub fn invalid_type(ty: impl Into<String>, reason: impl Into<String>) -> Self {
        AbiError::ParameterTypeInvalid {
            ty: ty.into(),
            reason: reason.into(),
        }
    }

    /// Stable snake_case label, used for log fields and CLI summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            AbiError::InvalidJsonFile { .. } => "invalid_json_file",
            AbiError::ElementTypeInvalid { .. } => "element_type_invalid",
            AbiError::ElementNameInvalid { .. } => "element_name_invalid",
            AbiError::FunctionInputInvalid { .. } => "function_input_invalid",
            AbiError::FunctionOutputInvalid { .. } => "function_output_invalid",
            AbiError::EventInputInvalid { .. } => "event_input_invalid",
            AbiError::ParameterTypeInvalid { .. } => "parameter_type_invalid",
            AbiError::ParameterTypeNotFound { .. } => "parameter_type_not_found",
            AbiError::AbiInvalid { .. } => "abi_invalid",
            AbiError::Io(_) => "io",
        }
    }
}
