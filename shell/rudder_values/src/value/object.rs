//! Named composite target values.

use std::fmt;
use std::sync::Arc;

use super::heap::Heap;
use super::Value;

/// A named object instance exposed as a command target.
///
/// Carries the type name the command catalog is keyed by and an ordered
/// list of named fields. Field count is small in practice, so lookup is
/// a linear scan.
#[derive(Clone)]
pub struct ObjectValue {
    type_name: Arc<str>,
    fields: Heap<Vec<(Arc<str>, Value)>>,
}

impl ObjectValue {
    /// Create an object value from a type name and its fields.
    pub fn new(type_name: impl Into<Arc<str>>, fields: Vec<(Arc<str>, Value)>) -> Self {
        ObjectValue {
            type_name: type_name.into(),
            fields: Heap::new(fields),
        }
    }

    /// The object's type name, used for catalog lookup.
    pub fn type_name(&self) -> &Arc<str> {
        &self.type_name
    }

    /// Look up a field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| &**name == field)
            .map(|(_, value)| value)
    }

    /// Iterate over the fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (&**name, value))
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.fields == other.fields
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(&self.type_name);
        for (name, value) in self.fields() {
            s.field(name, value);
        }
        s.finish()
    }
}

impl fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.type_name)?;
        for (i, (name, value)) in self.fields().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {name}: {value}")?;
        }
        write!(f, " }}")
    }
}
