//! Session boundary surface.
//!
//! The shell session owns the command targets, parses raw input into
//! values, and may supply custom conversions. The dispatcher only sees
//! this trait: it calls `convert` as one step of type coercion and
//! injects the session handle as an implicit first argument into
//! operations that declare a `Session` parameter.

use std::sync::Arc;

use crate::sig::TypeSig;
use crate::value::Value;

/// Surface the dispatcher consumes from the owning shell session.
pub trait CommandSession: Send + Sync {
    /// Convert a value to the declared signature, or `None` when the
    /// session has no conversion for this pair.
    ///
    /// Called by the coercer only after identity and free-narrowing
    /// checks have failed, so implementations never see exact matches.
    fn convert(&self, sig: &TypeSig, value: &Value) -> Option<Value>;
}

/// Shared handle to the owning session.
pub type SessionRef = Arc<dyn CommandSession>;

/// A session with no custom conversions.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainSession;

impl CommandSession for PlainSession {
    fn convert(&self, _sig: &TypeSig, _value: &Value) -> Option<Value> {
        None
    }
}

/// Create a shared plain session.
pub fn plain_session() -> SessionRef {
    Arc::new(PlainSession)
}
