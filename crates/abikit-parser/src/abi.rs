//! Whole-document ABI parsing.
//!
//! A contract ABI is a JSON array of records. Parsing is all-or-nothing:
//! the first record that fails to map aborts the document.

use abikit_core::{AbiElement, AbiError, AbiRecord, Constructor, Event, Fallback, Function};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, debug_span, warn};

use crate::mapper::map_record;
use crate::signature;

/// The typed, in-memory ABI of one contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContractAbi {
    elements: Vec<AbiElement>,
}

impl ContractAbi {
    /// Parse a standard Ethereum ABI JSON string.
    ///
    /// # Errors
    /// - `InvalidJsonFile` if the text is not JSON
    /// - `AbiInvalid` if it is not an array of objects
    /// - any mapping error from the first bad record
    pub fn from_json(json: &str) -> Result<Self, AbiError> {
        let value: Value = serde_json::from_str(json).map_err(|e| AbiError::InvalidJsonFile {
            reason: e.to_string(),
        })?;
        Self::from_value(value)
    }

    /// Parse an already-decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self, AbiError> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(AbiError::AbiInvalid {
                    reason: format!("expected a JSON array, found {}", json_kind(&other)),
                })
            }
        };

        let _span = debug_span!("parse_abi", elements = items.len()).entered();

        let mut elements = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let record: AbiRecord =
                serde_json::from_value(item).map_err(|e| AbiError::AbiInvalid {
                    reason: format!("element #{index}: {e}"),
                })?;
            let element = map_record(&record).map_err(|e| {
                warn!(index, error = %e, kind = e.kind(), "ABI element rejected");
                e
            })?;
            debug!(
                index,
                kind = element.kind(),
                name = element.name().unwrap_or(""),
                "parsed ABI element"
            );
            elements.push(element);
        }

        Ok(Self { elements })
    }

    /// Read and parse an ABI JSON file.
    pub fn from_file(path: &Path) -> Result<Self, AbiError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_elements(elements: Vec<AbiElement>) -> Self {
        Self { elements }
    }

    /// Elements in document order.
    pub fn elements(&self) -> &[AbiElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.elements.iter().filter_map(AbiElement::as_function)
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.elements.iter().filter_map(AbiElement::as_event)
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.elements.iter().find_map(|e| match e {
            AbiElement::Constructor(c) => Some(c),
            _ => None,
        })
    }

    pub fn fallback(&self) -> Option<&Fallback> {
        self.elements.iter().find_map(|e| match e {
            AbiElement::Fallback(f) => Some(f),
            _ => None,
        })
    }

    /// First function with the given name. Overloads share a name; use
    /// [`find_by_selector`](Self::find_by_selector) to tell them apart.
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions().find(|f| f.name == name)
    }

    pub fn event(&self, name: &str) -> Option<&Event> {
        self.events().find(|e| e.name == name)
    }

    pub fn find_by_selector(&self, selector: [u8; 4]) -> Option<&Function> {
        self.functions()
            .find(|f| signature::selector(f) == selector)
    }

    pub fn find_event_by_topic(&self, topic: &[u8; 32]) -> Option<&Event> {
        self.events()
            .find(|e| signature::topic(e).as_ref() == Some(topic))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
