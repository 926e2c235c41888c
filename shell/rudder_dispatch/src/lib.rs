//! Rudder Dispatch - command invocation resolver for the rudder shell.
//!
//! Given a target value (or a type reference), a command name, and an
//! ordered bag of loosely-typed argument values, the dispatcher selects
//! the best-matching registered operation, converts each argument to the
//! operation's declared parameter signature, and invokes it.
//!
//! # Architecture
//!
//! - `CommandRegistry` / `SharedCatalog`: operation descriptors per
//!   target type, replacing runtime introspection with an explicit
//!   registry built by the session layer
//! - `transform_parameters`: named/flag argument extraction into
//!   positional order
//! - `coerce_value`: single-value conversion with a running cost;
//!   lower cost is a more specific match, zero cost is identity
//! - `score_candidate`: per-candidate slot filling, variadic folding,
//!   and cost totalling
//! - `Dispatcher`: drives the search, keeps the cheapest candidate, and
//!   invokes the winner
//!
//! Candidate rejection is an expected, high-frequency outcome and is
//! modeled as tagged values throughout; errors are reserved for true
//! invocation failures.

mod catalog;
mod coerce;
mod dispatch;
mod keywords;
mod score;
mod transform;

#[cfg(test)]
mod tests;

pub use catalog::{
    CommandHandler, CommandRegistry, HandlerResult, ObjectCtor, Operation, ParamSpec,
    SharedCatalog,
};
pub use dispatch::{DispatchError, Dispatcher};

// Re-export the value model for convenience
pub use rudder_values::{
    plain_session, CommandError, CommandSession, Heap, ObjectValue, PlainSession, SessionRef,
    TypeSig, Value,
};
