//! Rayon-powered parsing of many ABI documents at once.

use abikit_core::AbiError;
use rayon::prelude::*;
use tracing::info;

use crate::abi::ContractAbi;

/// Result of parsing a set of documents.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// (original_index, abi) for every document that parsed
    pub parsed: Vec<(usize, ContractAbi)>,
    /// (original_index, error) for every document that failed
    pub errors: Vec<(usize, AbiError)>,
}

impl BatchResult {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse every JSON document in parallel. One failing document does not
/// affect the others; results are returned in input order.
pub fn parse_documents<S: AsRef<str> + Sync>(documents: &[S]) -> BatchResult {
    let results: Vec<(usize, Result<ContractAbi, AbiError>)> = documents
        .par_iter()
        .enumerate()
        .map(|(idx, doc)| (idx, ContractAbi::from_json(doc.as_ref())))
        .collect();

    let mut batch = BatchResult::default();
    for (idx, result) in results {
        match result {
            Ok(abi) => batch.parsed.push((idx, abi)),
            Err(e) => batch.errors.push((idx, e)),
        }
    }

    info!(
        "parsed {} ABI documents: {} ok, {} failed",
        documents.len(),
        batch.parsed.len(),
        batch.errors.len()
    );
    batch
}
