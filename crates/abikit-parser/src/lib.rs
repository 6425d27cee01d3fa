//! # abikit-parser
//!
//! Parses Ethereum contract ABI JSON into the typed model from `abikit-core`.
//!
//! ## Pipeline
//! - `type_string` — atomic matcher, array-grammar matcher, canonicalizer
//! - `mutability` — `payable` / `constant` resolution from legacy and modern fields
//! - `mapper` — one [`AbiRecord`](abikit_core::AbiRecord) → one [`AbiElement`](abikit_core::AbiElement)
//! - `abi` — whole documents, all-or-nothing
//! - `signature` — keccak-256 selectors and event topics

pub mod abi;
pub mod batch;
pub mod mapper;
pub mod mutability;
pub mod signature;
pub mod type_string;

pub use abi::ContractAbi;
pub use mapper::map_record;
pub use type_string::{parse_parameter_type, parse_type_string, Dimension};
