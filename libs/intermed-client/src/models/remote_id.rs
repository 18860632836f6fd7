//! Identifiers that arrive as either JSON strings or JSON numbers.
//!
//! The portal reports the same logical id as `"22"` from one endpoint and as
//! `22` from another (`Resource_Id`, `ServiceSpec_Id`, `DoctorId`). Both forms
//! are kept as received and compared through their canonical string.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone)]
pub enum RemoteId {
    Text(String),
    Number(serde_json::Number),
}

impl RemoteId {
    /// Canonical string form: `"22"` and `22` both yield `"22"`.
    ///
    /// ```
    /// use intermed_client::RemoteId;
    /// let a: RemoteId = serde_json::from_str("\"22\"").unwrap();
    /// let b: RemoteId = serde_json::from_str("22").unwrap();
    /// assert_eq!(a.canonical(), "22");
    /// assert_eq!(a, b);
    /// ```
    pub fn canonical(&self) -> String {
        match self {
            RemoteId::Text(s) => s.clone(),
            RemoteId::Number(n) => canonical_number(n),
        }
    }
}

fn canonical_number(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            // 22.0 names the same resource as 22
            if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                return (f as i64).to_string();
            }
        }
    }
    n.to_string()
}

impl PartialEq for RemoteId {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for RemoteId {}

impl Hash for RemoteId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for RemoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl From<&str> for RemoteId {
    fn from(value: &str) -> Self {
        RemoteId::Text(value.to_string())
    }
}

impl From<String> for RemoteId {
    fn from(value: String) -> Self {
        RemoteId::Text(value)
    }
}

impl From<i64> for RemoteId {
    fn from(value: i64) -> Self {
        RemoteId::Number(value.into())
    }
}

impl From<u64> for RemoteId {
    fn from(value: u64) -> Self {
        RemoteId::Number(value.into())
    }
}

impl Serialize for RemoteId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RemoteId::Text(s) => serializer.serialize_str(s),
            RemoteId::Number(n) => n.serialize(serializer),
        }
    }
}

struct RemoteIdVisitor;

impl<'de> Visitor<'de> for RemoteIdVisitor {
    type Value = RemoteId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RemoteId, E> {
        Ok(RemoteId::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RemoteId, E> {
        Ok(RemoteId::Text(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RemoteId, E> {
        Ok(RemoteId::Number(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RemoteId, E> {
        Ok(RemoteId::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RemoteId, E> {
        serde_json::Number::from_f64(v)
            .map(RemoteId::Number)
            .ok_or_else(|| E::custom(format!("non-finite id {}", v)))
    }
}

impl<'de> Deserialize<'de> for RemoteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RemoteIdVisitor)
    }
}
