//! Resolution driver and invoker.

use thiserror::Error;

use rudder_values::{CommandError, SessionRef, Value};

use crate::catalog::{CommandName, SharedCatalog, MAIN};
use crate::coerce::CoerceCtx;
use crate::score::{score_candidate, ScoredCall};

/// Errors produced by command resolution.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No operation name-matched, or every name-matching operation
    /// rejected the argument shape or types. Carries the signature of
    /// every rejected candidate.
    #[error("cannot coerce {name}({given}) to any of [{}]", .candidates.join(", "))]
    NoCandidateMatch {
        /// The escaped, lowercased request name.
        name: String,
        /// Stringified runtime types of the supplied arguments.
        given: String,
        /// Declared parameter tuples of every rejected candidate.
        candidates: Vec<String>,
    },
    /// The chosen operation itself failed. Re-raised verbatim so the
    /// caller sees the real fault, not a dispatch artifact.
    #[error(transparent)]
    Invocation(#[from] CommandError),
}

/// Resolves command invocations against a shared catalog.
pub struct Dispatcher {
    catalog: SharedCatalog,
}

impl Dispatcher {
    /// Create a dispatcher over a shared catalog.
    pub fn new(catalog: SharedCatalog) -> Self {
        Dispatcher { catalog }
    }

    /// The catalog this dispatcher resolves against.
    pub fn catalog(&self) -> &SharedCatalog {
        &self.catalog
    }

    /// Resolve the named command against the target and invoke the best
    /// match.
    ///
    /// Candidates are scored against independent copies of the argument
    /// bag; the lowest total cost wins, ties go to the first-registered
    /// candidate, and a zero-cost match stops the search immediately.
    /// Returns the operation's result, a [`DispatchError::NoCandidateMatch`]
    /// diagnostic listing every rejected signature, or the operation's
    /// own failure unwrapped.
    #[tracing::instrument(level = "debug", skip(self, session, target, args))]
    pub fn resolve_and_invoke(
        &self,
        session: &SessionRef,
        target: &Value,
        name: &str,
        args: &[Value],
    ) -> Result<Value, DispatchError> {
        let command = CommandName::new(name);

        // Clone candidates and the constructor table out of the read
        // guard; converters and handlers run with the lock released and
        // may re-enter the dispatcher.
        let (candidates, ctors) = {
            let registry = self.catalog.read();
            (
                registry.find_candidates(target, &command),
                registry.constructors_snapshot(),
            )
        };
        let ctx = CoerceCtx {
            session,
            ctors: &ctors,
        };

        let mut best: Option<(usize, ScoredCall)> = None;
        let mut rejected: Vec<String> = Vec::new();

        for (i, op) in candidates.iter().enumerate() {
            let scored = if op.name() == MAIN {
                // A _main operation receives the command name as its
                // first argument, so one operation can multiplex
                // several command names.
                let mut xargs = Vec::with_capacity(args.len() + 1);
                xargs.push(Value::string(command.escaped()));
                xargs.extend(args.iter().cloned());
                score_candidate(&ctx, op, &xargs)
            } else {
                score_candidate(&ctx, op, args)
            };

            match scored {
                None => rejected.push(op.signature()),
                Some(call) => {
                    if best.as_ref().map_or(true, |(_, b)| call.cost < b.cost) {
                        let exact = call.cost == 0;
                        best = Some((i, call));
                        if exact {
                            // No candidate can score better.
                            break;
                        }
                    }
                }
            }
        }

        match best {
            Some((i, call)) => {
                let op = &candidates[i];
                tracing::trace!(op = %op.name(), cost = call.cost, "selected operation");
                Ok(op.invoke(target, &call.args)?)
            }
            None => Err(DispatchError::NoCandidateMatch {
                name: command.escaped().to_string(),
                given: describe_args(args),
                candidates: rejected,
            }),
        }
    }
}

/// Stringify the runtime types of the supplied arguments for
/// diagnostics, e.g. `long, str`.
fn describe_args(args: &[Value]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&arg.type_name());
    }
    out
}
