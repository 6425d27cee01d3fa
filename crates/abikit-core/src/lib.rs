//! # abikit-core
//!
//! Core types shared across all ABIKit crates: the canonical parameter
//! type model, the typed ABI element model, the raw ABI JSON record shape,
//! and the error taxonomy every parsing step reports through.

pub mod element;
pub mod error;
pub mod record;
pub mod types;

pub use element::{AbiElement, Constructor, Event, EventParameter, Fallback, Function, Parameter};
pub use error::AbiError;
pub use record::{AbiRecord, ParamDescriptor};
pub use types::{DynamicType, ParameterType, StaticType};
