//! Dynamic value types.
//!
//! The [`Value`] enum is what a dynamically typed call site hands to the
//! lookup operations: the container, the needle and the predicate are all
//! values whose kind is only known when the call is made.

use serde::Serialize;

use crate::equality::deep_equal;
use crate::error::Result;
use crate::func::Func;
use crate::kind::Kind;

/// Runtime value whose kind is decided at call time.
///
/// Equality between values is the crate's generalized equality relation:
/// primitives compare exactly, aggregates compare structurally and functions
/// compare by identity. See [`deep_equal`].
///
/// # Example
///
/// ```
/// use standout_lookup::Value;
///
/// let tags = Value::seq(["red", "green"]);
/// assert_eq!(tags, Value::seq(["red", "green"]));
/// assert_ne!(tags, Value::array(["red", "green"]));
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(Number),
    /// Text value.
    String(String),
    /// Growable ordered sequence.
    Seq(Vec<Value>),
    /// Fixed-size array.
    Array(Vec<Value>),
    /// Associative mapping.
    Map(Map),
    /// Named aggregate.
    Struct(Struct),
    /// Callable with a declared signature.
    Func(Func),
}

impl Value {
    /// Builds a sequence from anything convertible to values.
    pub fn seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Builds a fixed-size array from anything convertible to values.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Builds a mapping from key/value pairs. Later duplicate keys win.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Value::Map(entries.into_iter().collect())
    }

    /// Builds a named aggregate from its fields.
    pub fn structure<I, V>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, V)>,
        V: Into<Value>,
    {
        Value::Struct(Struct {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|(field, value)| (field.to_string(), value.into()))
                .collect(),
        })
    }

    /// Converts any serializable value.
    ///
    /// Structs and maps become [`Value::Map`] with string keys, sequences and
    /// tuples become [`Value::Seq`].
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(serde_json::to_value(value)?.into())
    }

    /// Returns the runtime kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(n) => n.kind(),
            Value::String(_) => Kind::String,
            Value::Seq(_) => Kind::Seq,
            Value::Array(_) => Kind::Array,
            Value::Map(_) => Kind::Map,
            Value::Struct(_) => Kind::Struct,
            Value::Func(_) => Kind::Func,
        }
    }

    /// Returns `true` if this is a `Null` value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the function, if present.
    pub fn as_func(&self) -> Option<&Func> {
        match self {
            Value::Func(f) => Some(f),
            _ => None,
        }
    }

    /// Extracts the elements of a sequence or array.
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) | Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Extracts the mapping, if present.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Number of stored items for containers.
    ///
    /// Text is measured in characters, matching what iteration yields.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::Seq(items) | Value::Array(items) => Some(items.len()),
            Value::Map(m) => Some(m.len()),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        deep_equal(self, other)
    }
}

/// Named aggregate: a struct name plus its fields.
#[derive(Debug, Clone)]
pub struct Struct {
    /// Type name; aggregates with different names never compare equal.
    pub name: String,
    /// Field values in declaration order.
    pub fields: Vec<(String, Value)>,
}

impl Struct {
    /// Returns the value of a field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }
}

/// Insertion-ordered association list with keys unique under deep equality.
///
/// Keys can be any value, including aggregates and floats, which rules out
/// hashing; lookups are linear. A `NaN` key never equals an existing key, so
/// every insert under `NaN` adds a new entry that [`Map::get`] cannot find.
#[derive(Debug, Clone, Default)]
pub struct Map {
    entries: Vec<(Value, Value)>,
}

impl Map {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Map::default()
    }

    /// Inserts a pair, returning the value previously stored under an equal key.
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| deep_equal(k, &key)) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Returns the value stored under a key equal to `key`.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| deep_equal(k, key))
            .map(|(_, v)| v)
    }

    /// Returns `true` if a key equal to `key` is present.
    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn pairs(&self) -> std::slice::Iter<'_, (Value, Value)> {
        self.entries.iter()
    }

    /// Iterates over key/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Numeric value.
///
/// Numbers are stored in one of three variants to preserve precision. The
/// two integer variants compare by mathematical value; floats compare only
/// with floats and never within a tolerance.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Returns the runtime kind, [`Kind::Int`] or [`Kind::Float`].
    pub fn kind(self) -> Kind {
        match self {
            Number::I64(_) | Number::U64(_) => Kind::Int,
            Number::F64(_) => Kind::Float,
        }
    }

    /// Exact equality.
    pub fn exact_eq(self, other: Number) -> bool {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => a == b,
            (Number::U64(a), Number::U64(b)) => a == b,
            (Number::I64(a), Number::U64(b)) | (Number::U64(b), Number::I64(a)) => {
                u64::try_from(a).is_ok_and(|a| a == b)
            }
            (Number::F64(a), Number::F64(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.exact_eq(*other)
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Number {
                fn from(n: $source) -> Self {
                    Number::$variant(n as $target)
                }
            }

            impl From<$source> for Value {
                fn from(n: $source) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )+
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string())
    }
}

impl From<Func> for Value {
    fn from(f: Func) -> Self {
        Value::Func(f)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}

impl From<Struct> for Value {
    fn from(s: Struct) -> Self {
        Value::Struct(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::seq(items)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::array(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Number(Number::I64(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Number(Number::U64(u))
                } else {
                    Value::Number(Number::F64(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::seq(items),
            serde_json::Value::Object(fields) => Value::map(fields),
        }
    }
}

/// Conversion of user aggregates into [`Value::Struct`].
///
/// # Example
///
/// ```
/// use standout_lookup::{ToValue, Value};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl ToValue for Point {
///     fn to_value(&self) -> Value {
///         Value::structure("Point", [("x", self.x), ("y", self.y)])
///     }
/// }
///
/// let p = Point { x: 1, y: 2 };
/// assert_eq!(p.to_value(), Value::structure("Point", [("y", 2), ("x", 1)]));
/// ```
pub trait ToValue {
    /// Returns the dynamic representation of `self`.
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}
