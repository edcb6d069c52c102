//! Runtime kinds and container shapes.
//!
//! [`Kind`] names the runtime kind of a dynamic [`Value`](crate::Value).
//! [`Shape`] names the category of a container, which decides how it is
//! iterated and which queries it supports.

/// Runtime kind of a dynamic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Absent value.
    Null,
    /// Boolean.
    Bool,
    /// Signed or unsigned integer.
    Int,
    /// Floating point number.
    Float,
    /// Text.
    String,
    /// Growable ordered sequence.
    Seq,
    /// Fixed-size array.
    Array,
    /// Associative mapping.
    Map,
    /// Named aggregate with fields.
    Struct,
    /// Callable.
    Func,
}

impl Kind {
    /// Returns `true` if values of this kind can be iterated.
    pub fn is_iteratee(self) -> bool {
        self.shape().is_some()
    }

    /// Returns `true` for kinds that are compared structurally.
    pub fn is_aggregate(self) -> bool {
        matches!(self, Kind::Seq | Kind::Array | Kind::Map | Kind::Struct)
    }

    /// Returns the container shape for iterable kinds.
    pub fn shape(self) -> Option<Shape> {
        match self {
            Kind::String => Some(Shape::Text),
            Kind::Seq => Some(Shape::Sequence),
            Kind::Array => Some(Shape::Array),
            Kind::Map => Some(Shape::Mapping),
            _ => None,
        }
    }

    /// Returns the display name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Seq => "seq",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::Struct => "struct",
            Kind::Func => "func",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Ordered sequence keyed by position.
    Sequence,
    /// Fixed-size array keyed by position.
    Array,
    /// Associative mapping keyed by its own keys.
    Mapping,
    /// Text; positional queries are substring searches.
    Text,
}

impl Shape {
    /// Returns `true` if keys are dense zero-based positions.
    pub fn is_positional(self) -> bool {
        matches!(self, Shape::Sequence | Shape::Array | Shape::Text)
    }

    /// Returns the display name of this shape.
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Sequence => "sequence",
            Shape::Array => "array",
            Shape::Mapping => "mapping",
            Shape::Text => "text",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
