//! Record abstraction and field weighting
//!
//! The engine is generic over the shape of the things it searches. A record
//! only has to answer "what is the value of field X, if any" — that is the
//! whole contract, expressed by [`FieldAccess`]. Schema-free JSON objects
//! get a first-class implementation, so collections loaded straight from a
//! data-access layer are searchable without any mapping step.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read access to a record's named fields.
///
/// `None` means the field is absent; an absent or empty field simply does
/// not participate in matching or scoring. Non-string but stringifiable
/// values (JSON numbers, booleans) are rendered to their display form.
pub trait FieldAccess {
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl FieldAccess for Value {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.get(name)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl FieldAccess for serde_json::Map<String, Value> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.get(name)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl FieldAccess for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|s| Cow::Borrowed(s.as_str()))
    }
}

impl FieldAccess for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|s| Cow::Borrowed(s.as_str()))
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for &T {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for Box<T> {
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }
}

/// One named field's importance in scoring.
///
/// Weights must be positive; a zero or negative weight excludes the field
/// rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldWeight {
    /// Field name looked up through [`FieldAccess`].
    pub field: String,
    /// Positive importance multiplier.
    pub weight: f64,
}

impl FieldWeight {
    pub fn new(field: impl Into<String>, weight: f64) -> Self {
        Self {
            field: field.into(),
            weight,
        }
    }

    /// Whether this weight participates in matching and scoring.
    pub(crate) fn is_active(&self) -> bool {
        self.weight > 0.0
    }
}
