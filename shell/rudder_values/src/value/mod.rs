//! Runtime values for the rudder shell.
//!
//! # Heap Enforcement
//!
//! Heap allocations go through factory methods on `Value`. The `Heap<T>`
//! wrapper has a module-private constructor, so external code cannot
//! create heap variants directly:
//!
//! ```text
//! let s = Value::string("hello");                  // OK
//! let xs = Value::list(vec![Value::long(1)]);      // OK
//! let s = Value::Str(Heap::new(..));               // ERROR: Heap::new is private
//! ```
//!
//! # Integer widths
//!
//! The shell tokenizer produces every integer literal as `Long` (the
//! widest supported representation); `Short` and `Int` values normally
//! appear only after the dispatcher narrows an argument to a declared
//! parameter width.

mod heap;
mod object;


use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::session::SessionRef;

pub use heap::Heap;
pub use object::ObjectValue;

/// Runtime value in the rudder shell.
#[derive(Clone)]
pub enum Value {
    /// Absence of a value. A null argument fills any parameter slot.
    Null,
    /// Unit result of an operation that returns nothing.
    Void,
    /// Boolean value.
    Bool(bool),
    /// 16-bit integer value.
    Short(i16),
    /// 32-bit integer value.
    Int(i32),
    /// 64-bit integer value (the tokenizer's literal width).
    Long(i64),
    /// Floating-point value.
    Float(f64),
    /// Character value.
    Char(char),
    /// String value.
    Str(Heap<String>),
    /// List of values.
    List(Heap<Vec<Value>>),
    /// Named object instance.
    Object(ObjectValue),
    /// Reference to a type, used as the receiver for static dispatch.
    TypeRef(Arc<str>),
    /// Handle to the owning session, injected as an implicit argument.
    Session(SessionRef),
}

// Factory methods (the only way to construct heap variants)

impl Value {
    /// Create a 16-bit integer value.
    #[inline]
    pub fn short(n: i16) -> Self {
        Value::Short(n)
    }

    /// Create a 32-bit integer value.
    #[inline]
    pub fn int(n: i32) -> Self {
        Value::Int(n)
    }

    /// Create a 64-bit integer value.
    #[inline]
    pub fn long(n: i64) -> Self {
        Value::Long(n)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a type reference value.
    #[inline]
    pub fn type_ref(name: impl Into<Arc<str>>) -> Self {
        Value::TypeRef(name.into())
    }

    /// Create a session handle value.
    #[inline]
    pub fn session(session: SessionRef) -> Self {
        Value::Session(session)
    }

    /// The runtime type name, used for catalog lookup and diagnostics.
    pub fn type_name(&self) -> Cow<'static, str> {
        match self {
            Value::Null => Cow::Borrowed("null"),
            Value::Void => Cow::Borrowed("void"),
            Value::Bool(_) => Cow::Borrowed("bool"),
            Value::Short(_) => Cow::Borrowed("short"),
            Value::Int(_) => Cow::Borrowed("int"),
            Value::Long(_) => Cow::Borrowed("long"),
            Value::Float(_) => Cow::Borrowed("float"),
            Value::Char(_) => Cow::Borrowed("char"),
            Value::Str(_) => Cow::Borrowed("str"),
            Value::List(_) => Cow::Borrowed("list"),
            Value::Object(obj) => Cow::Owned(obj.type_name().to_string()),
            Value::TypeRef(_) => Cow::Borrowed("type"),
            Value::Session(_) => Cow::Borrowed("session"),
        }
    }

    /// Borrow the string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) | (Value::Void, Value::Void) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Short(a), Value::Short(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::TypeRef(a), Value::TypeRef(b)) => a == b,
            // Sessions compare by identity (data pointer only, so the
            // comparison is insensitive to vtable duplication).
            (Value::Session(a), Value::Session(b)) => {
                std::ptr::eq(Arc::as_ptr(a).cast::<()>(), Arc::as_ptr(b).cast::<()>())
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// Display-string representation, used by the coercer when a value
    /// is converted through its textual form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Void => write!(f, "void"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Short(n) => write!(f, "{n}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Long(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Object(obj) => write!(f, "{obj}"),
            Value::TypeRef(name) => write!(f, "{name}"),
            Value::Session(_) => write!(f, "<session>"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Void => write!(f, "Void"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Short(n) => write!(f, "Short({n})"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Long(n) => write!(f, "Long({n})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Char(c) => write!(f, "Char({c:?})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::List(items) => f.debug_tuple("List").field(&**items).finish(),
            Value::Object(obj) => obj.fmt(f),
            Value::TypeRef(name) => write!(f, "TypeRef({name:?})"),
            Value::Session(_) => write!(f, "Session(..)"),
        }
    }
}
