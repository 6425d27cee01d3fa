//! `payable` / `constant` resolution.
//!
//! Older compilers emit boolean `payable` and `constant` flags; newer ones
//! emit a single `stateMutability` string. Both may be present.

pub const PAYABLE: &str = "payable";
pub const VIEW: &str = "view";
pub const PURE: &str = "pure";

/// `stateMutability == "payable"` when the field is present, otherwise the
/// legacy `payable` flag, otherwise `false`.
pub fn resolve_payable(state_mutability: Option<&str>, legacy_payable: Option<bool>) -> bool {
    match state_mutability {
        Some(mutability) => mutability == PAYABLE,
        None => legacy_payable.unwrap_or(false),
    }
}

/// True when either the legacy `constant` flag is set or `stateMutability`
/// is `view` / `pure`.
pub fn resolve_constant(state_mutability: Option<&str>, legacy_constant: Option<bool>) -> bool {
    legacy_constant.unwrap_or(false) || matches!(state_mutability, Some(VIEW | PURE))
}
