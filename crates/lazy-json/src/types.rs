//! JSON value types as seen by sniffing.

use std::fmt;

/// Type of a [`Node`](crate::Node).
///
/// `true` and `false` are both [`Type::Bool`]. [`Type::Undefined`] is an
/// empty node, [`Type::Error`] a node that carries an error or whose bytes
/// are not a recognizable JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Error,
    Undefined,
    String,
    Number,
    Object,
    Array,
    Bool,
    Null,
}

impl Type {
    /// Stable name of the type, e.g. `TypeString`.
    pub fn name(self) -> &'static str {
        match self {
            Type::Error => "TypeError",
            Type::Undefined => "TypeUndefined",
            Type::String => "TypeString",
            Type::Number => "TypeNumber",
            Type::Object => "TypeObject",
            Type::Array => "TypeArray",
            Type::Bool => "TypeBool",
            Type::Null => "TypeNull",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
