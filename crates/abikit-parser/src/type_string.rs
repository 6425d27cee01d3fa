//! ABI type-string grammar.
//!
//! ```text
//! type      := base width? dimension*
//! base      := [a-z]+
//! width     := [0-9]+
//! dimension := '[' [0-9]* ']'
//! ```
//!
//! Resolution runs in two stages. The atomic matcher handles strings with
//! no dimensions. The array-grammar matcher resolves the base through the
//! same atomic rules, then folds the dimensions left to right (the leftmost
//! bracket is the innermost array). Either stage answers `Ok(None)` when the
//! input is outside its grammar, so the canonicalizer can try the next one;
//! a string that is inside the grammar but malformed is a hard error.

use abikit_core::{AbiError, DynamicType, ParamDescriptor, ParameterType, StaticType};
use std::fmt;
use tracing::trace;

/// Default width of `uint` / `int` without an explicit suffix.
pub const DEFAULT_INT_BITS: u16 = 256;

/// One bracket group of an array type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// `[N]`
    Fixed(usize),
    /// `[]`
    Unbounded,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Fixed(len) => write!(f, "[{len}]"),
            Dimension::Unbounded => write!(f, "[]"),
        }
    }
}

/// Lexical split of a type string. Dimension bodies are kept raw so that
/// a bad length surfaces as a hard error rather than a grammar miss.
#[derive(Debug)]
struct Tokens<'a> {
    base: &'a str,
    width: Option<&'a str>,
    dimensions: Vec<&'a str>,
}

fn tokenize(input: &str) -> Option<Tokens<'_>> {
    let base_end = input
        .find(|c: char| !c.is_ascii_lowercase())
        .unwrap_or(input.len());
    if base_end == 0 {
        return None;
    }
    let (base, rest) = input.split_at(base_end);

    let width_end = rest.find('[').unwrap_or(rest.len());
    let width = (width_end > 0).then(|| &rest[..width_end]);

    let mut dimensions = Vec::new();
    let mut rest = &rest[width_end..];
    while !rest.is_empty() {
        let body = rest.strip_prefix('[')?;
        let close = body.find(']')?;
        dimensions.push(&body[..close]);
        rest = &body[close + 1..];
    }

    Some(Tokens {
        base,
        width,
        dimensions,
    })
}

// ─── Entry points ─────────────────────────────────────────────────────────────

/// Parse a bare type string such as `"uint256[2][]"`.
///
/// `tuple` types need their components and go through
/// [`parse_parameter_type`] instead.
pub fn parse_type_string(input: &str) -> Result<ParameterType, AbiError> {
    parse_parameter_type(input, None)
}

/// Canonicalize a parameter's type string.
///
/// Tries the atomic matcher, then the array-grammar matcher; if neither
/// recognises the string, or the result exceeds the ABI width/length limits,
/// fails with [`AbiError::ParameterTypeInvalid`].
pub fn parse_parameter_type(
    input: &str,
    components: Option<&[ParamDescriptor]>,
) -> Result<ParameterType, AbiError> {
    let ty = match match_atomic(input, components)? {
        Some(ty) => ty,
        None => match_array(input, components)?
            .ok_or_else(|| AbiError::invalid_type(input, "unrecognised type"))?,
    };

    if !ty.is_valid() {
        return Err(AbiError::invalid_type(input, "width or length out of range"));
    }

    trace!(input, resolved = %ty, "resolved parameter type");
    Ok(ty)
}

/// Match a type with no array dimensions.
///
/// Returns `Ok(None)` when the base token is not part of the vocabulary or
/// the string carries dimensions.
pub fn match_atomic(
    input: &str,
    components: Option<&[ParamDescriptor]>,
) -> Result<Option<ParameterType>, AbiError> {
    let Some(tokens) = tokenize(input) else {
        return Ok(None);
    };
    if !tokens.dimensions.is_empty() {
        return Ok(None);
    }
    resolve_base(input, tokens.base, tokens.width, components)
}

/// Match a base type followed by one or more dimensions.
///
/// Returns `Ok(None)` when the string does not fit the array grammar or its
/// base is not part of the vocabulary.
pub fn match_array(
    input: &str,
    components: Option<&[ParamDescriptor]>,
) -> Result<Option<ParameterType>, AbiError> {
    let Some(tokens) = tokenize(input) else {
        return Ok(None);
    };
    if tokens.dimensions.is_empty() {
        return Ok(None);
    }
    let Some(element) = resolve_base(input, tokens.base, tokens.width, components)? else {
        return Ok(None);
    };

    let dimensions = tokens
        .dimensions
        .iter()
        .map(|raw| parse_dimension(input, raw))
        .collect::<Result<Vec<_>, _>>()?;

    compose_array(element, &dimensions).map(Some)
}

/// Wrap `element` in `dimensions`, innermost first.
///
/// Statically sized dimensions stay static until the unbounded dimension is
/// reached; from there on every enclosing array is dynamic. At most one
/// unbounded dimension is accepted.
pub fn compose_array(
    element: ParameterType,
    dimensions: &[Dimension],
) -> Result<ParameterType, AbiError> {
    let unbounded = dimensions
        .iter()
        .filter(|d| **d == Dimension::Unbounded)
        .count();
    if unbounded > 1 {
        let spelled: String = dimensions.iter().map(Dimension::to_string).collect();
        return Err(AbiError::invalid_type(
            format!("{element}{spelled}"),
            "nested dynamic arrays are not supported",
        ));
    }

    Ok(dimensions
        .iter()
        .fold(element, |inner, dimension| wrap(inner, *dimension)))
}

fn wrap(element: ParameterType, dimension: Dimension) -> ParameterType {
    match (element, dimension) {
        (element, Dimension::Unbounded) => DynamicType::Array(Box::new(element)).into(),
        (ParameterType::Static(elem), Dimension::Fixed(len)) => StaticType::Array {
            elem: Box::new(elem),
            len,
        }
        .into(),
        (ParameterType::Dynamic(elem), Dimension::Fixed(len)) => DynamicType::FixedArray {
            elem: Box::new(elem),
            len,
        }
        .into(),
    }
}

// ─── Atomic vocabulary ────────────────────────────────────────────────────────

fn resolve_base(
    input: &str,
    base: &str,
    width: Option<&str>,
    components: Option<&[ParamDescriptor]>,
) -> Result<Option<ParameterType>, AbiError> {
    let ty: ParameterType = match base {
        "uint" => StaticType::Uint(int_width(input, width)?).into(),
        "int" => StaticType::Int(int_width(input, width)?).into(),
        "bytes" => match width {
            Some(raw) => StaticType::Bytes(narrow(input, parse_length(input, raw)?)?).into(),
            None => DynamicType::Bytes.into(),
        },
        "address" | "bool" | "string" | "function" | "tuple" if width.is_some() => {
            return Err(AbiError::invalid_type(
                input,
                format!("'{base}' does not take a size suffix"),
            ));
        }
        "address" => StaticType::Address.into(),
        "bool" => StaticType::Bool.into(),
        "string" => DynamicType::String.into(),
        "function" => StaticType::Function.into(),
        "tuple" => resolve_tuple(input, components)?,
        _ => return Ok(None),
    };
    Ok(Some(ty))
}

fn resolve_tuple(
    input: &str,
    components: Option<&[ParamDescriptor]>,
) -> Result<ParameterType, AbiError> {
    let components = match components {
        Some(c) if !c.is_empty() => c,
        _ => return Err(AbiError::ParameterTypeNotFound { ty: input.to_string() }),
    };

    let types = components
        .iter()
        .enumerate()
        .map(|(i, component)| {
            let ty = component.ty.as_deref().ok_or_else(|| {
                AbiError::invalid_type(input, format!("component #{i} has no type"))
            })?;
            parse_parameter_type(ty, component.components.as_deref())
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParameterType::tuple(types))
}

fn int_width(input: &str, width: Option<&str>) -> Result<u16, AbiError> {
    match width {
        Some(raw) => narrow(input, parse_length(input, raw)?),
        None => Ok(DEFAULT_INT_BITS),
    }
}

fn parse_dimension(input: &str, raw: &str) -> Result<Dimension, AbiError> {
    if raw.is_empty() {
        Ok(Dimension::Unbounded)
    } else {
        parse_length(input, raw).map(Dimension::Fixed)
    }
}

/// Parse a width or length suffix. Only plain decimal digits are accepted.
fn parse_length(input: &str, raw: &str) -> Result<usize, AbiError> {
    let not_positive = || AbiError::invalid_type(input, format!("'{raw}' is not a positive integer"));
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_positive());
    }
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(not_positive()),
    }
}

fn narrow<T: TryFrom<usize>>(input: &str, n: usize) -> Result<T, AbiError> {
    T::try_from(n).map_err(|_| AbiError::invalid_type(input, format!("{n} is out of range")))
}
