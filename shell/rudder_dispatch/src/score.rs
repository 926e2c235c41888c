//! Per-candidate scoring: slot filling, variadic folding, cost totals.
//!
//! Each candidate is evaluated against its own copy of the argument bag;
//! rejection is a `None` outcome, never an error.

use std::collections::VecDeque;

use rudder_values::{TypeSig, Value};

use crate::catalog::Operation;
use crate::coerce::{coerce_value, CoerceCtx};
use crate::transform::transform_parameters;

/// A successfully scored candidate: total cost and the coerced argument
/// vector to invoke with.
pub(crate) struct ScoredCall {
    pub(crate) cost: u32,
    pub(crate) args: Vec<Value>,
}

/// Score one candidate operation against the raw argument bag.
///
/// Runs the parameter transformer, injects the session when the first
/// declared parameter is the session interface, then fills parameter
/// slots left to right, one argument per slot. A no-match on the final
/// slot with a list signature switches to variadic folding: every
/// remaining argument is coerced to the element signature and packed
/// into one list. Folding cost is the element costs plus 1 plus 2 per
/// folded element, so a non-empty variadic match never beats an equally
/// good fixed-arity one. Candidates with left-over arguments are
/// rejected.
pub(crate) fn score_candidate(
    ctx: &CoerceCtx<'_>,
    op: &Operation,
    raw: &[Value],
) -> Option<ScoredCall> {
    let transformed = transform_parameters(op, raw)?;
    let mut rest: VecDeque<Value> = transformed.into();

    // Operations declaring a session parameter receive the calling
    // session as an implicit first argument.
    if matches!(op.params().first().map(|p| p.sig()), Some(TypeSig::Session)) {
        rest.push_front(Value::Session(ctx.session.clone()));
    }

    let mut cost = 0u32;
    let mut out: Vec<Value> = Vec::with_capacity(op.params().len());

    for (i, param) in op.params().iter().enumerate() {
        let slot = match rest.front() {
            // No arguments remain for this slot.
            None => None,
            Some(front) => {
                let coerced = coerce_value(ctx, param.sig(), front, &mut cost);
                // Never fill a list slot with a bare null while arguments
                // remain; folding below may still consume it.
                let coerced = match coerced {
                    Some(Value::Null) if param.sig().is_list() => None,
                    other => other,
                };
                if coerced.is_some() {
                    rest.pop_front();
                }
                coerced
            }
        };

        match slot {
            Some(value) => out.push(value),
            None => {
                let TypeSig::List(elem) = param.sig() else {
                    return None;
                };
                if i + 1 != op.params().len() {
                    return None;
                }

                // Variadic folding: coerce every remaining argument to
                // the element signature.
                let folded = u32::try_from(rest.len()).unwrap_or(u32::MAX);
                let mut items = Vec::with_capacity(rest.len());
                while let Some(arg) = rest.pop_front() {
                    items.push(coerce_value(ctx, elem, &arg, &mut cost)?);
                }
                cost = cost
                    .saturating_add(1)
                    .saturating_add(folded.saturating_mul(2));
                out.push(Value::list(items));
            }
        }
    }

    if !rest.is_empty() {
        return None;
    }

    Some(ScoredCall { cost, args: out })
}
