//! Operation catalog: descriptors and per-type registry.
//!
//! The catalog replaces runtime introspection with an explicit registry:
//! the session layer registers typed operation descriptors per target
//! type name, and resolution enumerates name-matching candidates from
//! it. Enumeration order is registration order and is part of the
//! dispatch contract (cost ties go to the first candidate seen).

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use rudder_values::{CommandError, TypeSig, Value};

use crate::keywords::escape_reserved;

/// Reserved operation name matched by every request against its target.
pub(crate) const MAIN: &str = "_main";

/// Result type returned by operation handlers.
pub type HandlerResult = Result<Value, CommandError>;

/// Callable body of a registered operation.
pub type CommandHandler = Arc<dyn Fn(&Value, &[Value]) -> HandlerResult + Send + Sync>;

/// From-string constructor for a named object type.
///
/// The registry-model replacement for looking up a single-string-argument
/// constructor on the declared type: the coercer consults this table when
/// converting a display string to an object signature.
pub type ObjectCtor = fn(&str) -> Option<Value>;

/// Flag/name metadata attached to one parameter slot.
#[derive(Clone, Debug)]
pub(crate) struct ParamMeta {
    /// Recognized alias tokens, e.g. `--verbose`, `-v`.
    names: SmallVec<[Arc<str>; 2]>,
    /// Value used when an alias token is present. `None` means the
    /// value must follow the alias in the argument bag.
    present: Option<Value>,
    /// Value used when no alias token is supplied.
    absent: Value,
}

impl ParamMeta {
    pub(crate) fn names(&self) -> &[Arc<str>] {
        &self.names
    }

    pub(crate) fn present(&self) -> Option<&Value> {
        self.present.as_ref()
    }

    pub(crate) fn absent(&self) -> &Value {
        &self.absent
    }
}

/// One declared parameter slot of an operation.
#[derive(Clone, Debug)]
pub struct ParamSpec {
    sig: TypeSig,
    meta: Option<ParamMeta>,
}

impl ParamSpec {
    /// A plain positional parameter.
    pub fn positional(sig: TypeSig) -> Self {
        ParamSpec { sig, meta: None }
    }

    /// A named/flag parameter. `present` is the value used when an alias
    /// appears without consuming a following token (boolean flags);
    /// `None` marks that the value must follow the alias. `absent` fills
    /// the slot when no alias is supplied.
    pub fn flag(sig: TypeSig, names: &[&str], present: Option<Value>, absent: Value) -> Self {
        ParamSpec {
            sig,
            meta: Some(ParamMeta {
                names: names.iter().map(|name| Arc::from(*name)).collect(),
                present,
                absent,
            }),
        }
    }

    pub(crate) fn sig(&self) -> &TypeSig {
        &self.sig
    }

    pub(crate) fn meta(&self) -> Option<&ParamMeta> {
        self.meta.as_ref()
    }
}

/// A registered operation: name, declared parameters, and handler.
#[derive(Clone)]
pub struct Operation {
    /// Stored lowercased; request names are lowercased before matching.
    name: Arc<str>,
    params: SmallVec<[ParamSpec; 4]>,
    handler: CommandHandler,
}

impl Operation {
    /// Create an operation descriptor.
    pub fn new(
        name: &str,
        params: Vec<ParamSpec>,
        handler: impl Fn(&Value, &[Value]) -> HandlerResult + Send + Sync + 'static,
    ) -> Self {
        Operation {
            name: Arc::from(name.to_lowercase()),
            params: params.into(),
            handler: Arc::new(handler),
        }
    }

    /// The operation's registered (lowercased) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Invoke the handler with an already-coerced argument vector.
    ///
    /// Handler failures propagate unchanged; the dispatcher surfaces
    /// them verbatim to its caller.
    pub(crate) fn invoke(&self, target: &Value, args: &[Value]) -> HandlerResult {
        (self.handler)(target, args)
    }

    /// Render the declared parameter tuple, e.g. `(int, [str])`.
    pub(crate) fn signature(&self) -> String {
        let mut out = String::from("(");
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&param.sig.to_string());
        }
        out.push(')');
        out
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operation({}{})", self.name, self.signature())
    }
}

/// A requested command name, pre-lowered and expanded into the forms an
/// operation name may match: the keyword-escaped literal, the
/// `get`/`set`/`is` accessor forms, and the reserved `_main` name. The
/// accessor forms are built from the unescaped name.
pub(crate) struct CommandName {
    escaped: String,
    get: String,
    set: String,
    is: String,
}

impl CommandName {
    pub(crate) fn new(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        let get = format!("get{lower}");
        let set = format!("set{lower}");
        let is = format!("is{lower}");
        let escaped = escape_reserved(&lower).into_owned();
        CommandName {
            escaped,
            get,
            set,
            is,
        }
    }

    /// The keyword-escaped, lowercased request name.
    pub(crate) fn escaped(&self) -> &str {
        &self.escaped
    }

    pub(crate) fn matches(&self, op_name: &str) -> bool {
        op_name == self.escaped
            || op_name == self.get
            || op_name == self.set
            || op_name == self.is
            || op_name == MAIN
    }
}

/// Instance and static operations of one target type.
#[derive(Debug, Default)]
struct TargetCommands {
    instance: Vec<Operation>,
    statics: Vec<Operation>,
}

/// Registry of operations per target type name.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    targets: FxHashMap<Arc<str>, TargetCommands>,
    constructors: FxHashMap<Arc<str>, ObjectCtor>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        CommandRegistry::default()
    }

    /// Register an instance operation for a target type.
    pub fn register(&mut self, type_name: &str, op: Operation) {
        tracing::debug!(type_name, op = %op.name(), "registered instance operation");
        self.entry(type_name).instance.push(op);
    }

    /// Register a static (associated) operation for a target type,
    /// dispatched when the target is a type reference.
    pub fn register_static(&mut self, type_name: &str, op: Operation) {
        tracing::debug!(type_name, op = %op.name(), "registered static operation");
        self.entry(type_name).statics.push(op);
    }

    /// Register a from-string constructor for a named object type.
    pub fn register_constructor(&mut self, type_name: &str, ctor: ObjectCtor) {
        tracing::debug!(type_name, "registered object constructor");
        self.constructors.insert(Arc::from(type_name), ctor);
    }

    fn entry(&mut self, type_name: &str) -> &mut TargetCommands {
        self.targets.entry(Arc::from(type_name)).or_default()
    }

    /// Snapshot the constructor table so coercion can run after the
    /// catalog lock is released.
    pub(crate) fn constructors_snapshot(&self) -> FxHashMap<Arc<str>, ObjectCtor> {
        self.constructors.clone()
    }

    /// Enumerate name-matching candidate operations for a target, in
    /// registration order.
    ///
    /// A type-reference target searches the type's static operations,
    /// but only uses them if at least one static operation name-matches;
    /// otherwise it falls back to the type's instance operations. Any
    /// other target searches the instance operations of its runtime
    /// type.
    pub(crate) fn find_candidates(
        &self,
        target: &Value,
        name: &CommandName,
    ) -> SmallVec<[Operation; 4]> {
        let collect = |ops: &[Operation]| -> SmallVec<[Operation; 4]> {
            ops.iter()
                .filter(|op| name.matches(op.name()))
                .cloned()
                .collect()
        };

        match target {
            Value::TypeRef(type_name) => match self.targets.get(&**type_name) {
                Some(commands) => {
                    let statics = collect(&commands.statics);
                    if statics.is_empty() {
                        collect(&commands.instance)
                    } else {
                        statics
                    }
                }
                None => SmallVec::new(),
            },
            other => match self.targets.get(&*other.type_name()) {
                Some(commands) => collect(&commands.instance),
                None => SmallVec::new(),
            },
        }
    }
}

/// Shared, lock-guarded command catalog.
///
/// Commands may be registered after a dispatcher has been built (a live
/// session discovers commands at runtime), so the registry sits behind
/// interior mutability. Readers clone candidates out and release the
/// lock before any handler or converter runs, so handlers may re-enter
/// the dispatcher.
pub struct SharedCatalog(Arc<RwLock<CommandRegistry>>);

impl SharedCatalog {
    /// Wrap a registry for shared access.
    pub fn new(registry: CommandRegistry) -> Self {
        SharedCatalog(Arc::new(RwLock::new(registry)))
    }

    /// Get read access to the registry.
    pub fn read(&self) -> RwLockReadGuard<'_, CommandRegistry> {
        self.0.read()
    }

    /// Get write access to the registry, for late registration.
    pub fn write(&self) -> RwLockWriteGuard<'_, CommandRegistry> {
        self.0.write()
    }
}

impl Clone for SharedCatalog {
    fn clone(&self) -> Self {
        SharedCatalog(Arc::clone(&self.0))
    }
}

impl Default for SharedCatalog {
    fn default() -> Self {
        SharedCatalog::new(CommandRegistry::new())
    }
}

impl fmt::Debug for SharedCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedCatalog({:?})", &*self.0.read())
    }
}
