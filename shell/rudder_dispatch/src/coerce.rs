//! Single-value type coercion with cost accounting.
//!
//! Converts one argument value to one declared parameter signature. The
//! outcome is `Some(converted)` or `None` for "no match"; a null slot is
//! `Some(Value::Null)`, which is distinct from no-match. A running cost
//! orders competing overloads: identity and integer narrowing are free,
//! every other conversion adds a fixed increment, so exact matches
//! dominate narrowing, which dominates converter/string/constructor
//! matches.

use rustc_hash::FxHashMap;
use std::sync::Arc;

use rudder_values::{SessionRef, TypeSig, Value};

use crate::catalog::ObjectCtor;

/// Cost added by any conversion beyond identity and integer narrowing.
const CONVERSION_COST: u32 = 2;

/// Context threaded through coercion: the session's custom converter and
/// a snapshot of the catalog's object constructors, both usable after
/// the catalog lock has been released.
pub(crate) struct CoerceCtx<'a> {
    pub(crate) session: &'a SessionRef,
    pub(crate) ctors: &'a FxHashMap<Arc<str>, ObjectCtor>,
}

/// Coerce `value` to `sig`, adding any conversion cost to `cost`.
///
/// Rule order, first applicable wins:
/// 1. null fills any slot, free
/// 2. assignable values pass through unchanged, free
/// 3. list signatures never match a single value (variadic folding only)
/// 4. a `long` narrows to a declared integer width, free
/// 5. everything else costs a fixed increment and tries, in order: the
///    session converter, the display string (for `str`), a scalar parse
///    of the display string, a registered object constructor, and a
///    single-character string (for `char`)
#[expect(
    clippy::cast_possible_truncation,
    reason = "integer narrowing is deliberately truncating"
)]
pub(crate) fn coerce_value(
    ctx: &CoerceCtx<'_>,
    sig: &TypeSig,
    value: &Value,
    cost: &mut u32,
) -> Option<Value> {
    if matches!(value, Value::Null) {
        return Some(Value::Null);
    }

    if sig.assignable_from(value) {
        return Some(value.clone());
    }

    if sig.is_list() {
        return None;
    }

    // Free narrowing from the tokenizer's widest integer representation.
    // Truncating, like an `as` cast.
    if let Value::Long(n) = value {
        match sig {
            TypeSig::Short => return Some(Value::Short(*n as i16)),
            TypeSig::Int => return Some(Value::Int(*n as i32)),
            _ => {}
        }
    }

    // All remaining conversions cost the fixed increment.
    *cost = cost.saturating_add(CONVERSION_COST);

    if let Some(converted) = ctx.session.convert(sig, value) {
        return Some(converted);
    }

    let text = value.to_string();

    match sig {
        TypeSig::Str => return Some(Value::string(text)),
        // The boolean constructor never fails: only a case-insensitive
        // "true" is true, anything else is false.
        TypeSig::Bool => return Some(Value::Bool(text.eq_ignore_ascii_case("true"))),
        TypeSig::Short => {
            if let Ok(n) = text.parse::<i16>() {
                return Some(Value::Short(n));
            }
        }
        TypeSig::Int => {
            if let Ok(n) = text.parse::<i32>() {
                return Some(Value::Int(n));
            }
        }
        TypeSig::Long => {
            if let Ok(n) = text.parse::<i64>() {
                return Some(Value::Long(n));
            }
        }
        TypeSig::Float => {
            if let Ok(x) = text.parse::<f64>() {
                return Some(Value::Float(x));
            }
        }
        TypeSig::Object(name) => {
            if let Some(ctor) = ctx.ctors.get(name) {
                if let Some(constructed) = ctor(&text) {
                    return Some(constructed);
                }
            }
        }
        _ => {}
    }

    if matches!(sig, TypeSig::Char) {
        let mut chars = text.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(Value::Char(c));
        }
    }

    None
}
