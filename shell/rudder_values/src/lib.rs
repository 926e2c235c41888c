//! Rudder Values - runtime value model for the rudder shell.
//!
//! This crate provides the loosely-typed values that flow between the
//! shell session and the command dispatcher, plus the boundary types the
//! two sides agree on.
//!
//! # Architecture
//!
//! - `Value`: shell runtime values. Scalars are stored inline; heap
//!   variants go through the `Heap<T>` wrapper so every allocation is
//!   shared and cheap to clone per candidate attempt.
//! - `TypeSig`: declared parameter and receiver type signatures, with
//!   assignability checks over runtime values.
//! - `CommandError`: the application-level failure an operation raises.
//!   This is the only error category the dispatcher re-raises verbatim.
//! - `CommandSession`: the surface the dispatcher consumes from the
//!   owning session (the custom value converter hook).

mod errors;
mod session;
mod sig;
mod value;

pub use errors::CommandError;
pub use session::{plain_session, CommandSession, PlainSession, SessionRef};
pub use sig::TypeSig;
pub use value::{Heap, ObjectValue, Value};
