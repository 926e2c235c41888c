//! Declared type signatures for operation parameters.
//!
//! `TypeSig` is the declared side of the dispatch contract: each
//! registered operation lists one signature per parameter slot, and the
//! coercer compares runtime values against them. Runtime values stay
//! loosely typed; signatures are where width and element types live.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// Declared parameter or receiver type signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeSig {
    /// Accepts any non-null value without conversion.
    Any,
    /// Boolean.
    Bool,
    /// 16-bit integer.
    Short,
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Long,
    /// Floating-point number.
    Float,
    /// Single character.
    Char,
    /// String.
    Str,
    /// List with a declared element signature. A list-typed final
    /// parameter makes the operation variadic.
    List(Box<TypeSig>),
    /// The session interface. An operation whose first parameter is
    /// declared `Session` receives the calling session implicitly.
    Session,
    /// A named object type.
    Object(Arc<str>),
}

impl TypeSig {
    /// Create a list signature.
    pub fn list(elem: TypeSig) -> Self {
        TypeSig::List(Box::new(elem))
    }

    /// Create a named object signature.
    pub fn object(name: impl Into<Arc<str>>) -> Self {
        TypeSig::Object(name.into())
    }

    /// Whether this is a list (array) signature.
    pub fn is_list(&self) -> bool {
        matches!(self, TypeSig::List(_))
    }

    /// Whether a runtime value is assignable to this signature without
    /// any conversion.
    ///
    /// Null is never "assignable"; the coercer handles absence before
    /// assignability is consulted. List signatures check element-wise
    /// because list values are untyped; an empty list is assignable to
    /// every list signature, and null elements are accepted.
    pub fn assignable_from(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => false,
            (TypeSig::Any, _) => true,
            (TypeSig::Bool, Value::Bool(_))
            | (TypeSig::Short, Value::Short(_))
            | (TypeSig::Int, Value::Int(_))
            | (TypeSig::Long, Value::Long(_))
            | (TypeSig::Float, Value::Float(_))
            | (TypeSig::Char, Value::Char(_))
            | (TypeSig::Str, Value::Str(_))
            | (TypeSig::Session, Value::Session(_)) => true,
            (TypeSig::List(elem), Value::List(items)) => items
                .iter()
                .all(|item| matches!(item, Value::Null) || elem.assignable_from(item)),
            (TypeSig::Object(name), Value::Object(obj)) => name == obj.type_name(),
            _ => false,
        }
    }
}

impl fmt::Display for TypeSig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSig::Any => write!(f, "any"),
            TypeSig::Bool => write!(f, "bool"),
            TypeSig::Short => write!(f, "short"),
            TypeSig::Int => write!(f, "int"),
            TypeSig::Long => write!(f, "long"),
            TypeSig::Float => write!(f, "float"),
            TypeSig::Char => write!(f, "char"),
            TypeSig::Str => write!(f, "str"),
            TypeSig::List(elem) => write!(f, "[{elem}]"),
            TypeSig::Session => write!(f, "session"),
            TypeSig::Object(name) => write!(f, "{name}"),
        }
    }
}
