//! Canonical event model.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Number, Value};

use super::time::EventTime;

/// Open-ended annotations attached to an event (tags, flags, notes).
pub type Meta = Map<String, Value>;

/// Value of a non-mandatory field.
///
/// Records are copied through verbatim: when a supplied value does not have
/// the declared type it is kept as raw JSON so schema validation can report
/// it instead of the mapper silently coercing or dropping it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue<T> {
    Typed(T),
    Verbatim(Value),
}

impl<T> FieldValue<T> {
    /// The typed value, if the input had the declared shape.
    pub fn typed(&self) -> Option<&T> {
        match self {
            FieldValue::Typed(value) => Some(value),
            FieldValue::Verbatim(_) => None,
        }
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, FieldValue::Typed(_))
    }
}

impl<T: DeserializeOwned> FieldValue<T> {
    /// Wrap a raw JSON value, typing it when it has the declared shape.
    pub fn from_json(value: Value) -> Self {
        match T::deserialize(&value) {
            Ok(typed) => FieldValue::Typed(typed),
            Err(_) => FieldValue::Verbatim(value),
        }
    }
}

/// Canonical unit of ingested information: one observed occurrence.
///
/// Mandatory fields are always typed. `vectors` and `meta` fall back to
/// empty collections when the record omits them. The forward-looking
/// attributes (`laws` through `runtime`) are `None` when not supplied and are
/// left out of the serialized form entirely, never written as `null`.
///
/// Serialization order is fixed: `id, timestamp, source, channel, vectors,
/// text, meta`, followed by whichever optional attributes are present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: String,
    pub timestamp: EventTime,
    pub source: String,
    pub channel: String,
    pub vectors: FieldValue<Vec<String>>,
    pub text: String,
    pub meta: FieldValue<Meta>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub laws: Option<FieldValue<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<FieldValue<Number>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<FieldValue<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<FieldValue<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FieldValue<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<FieldValue<String>>,
}

impl Event {
    /// Create an event with empty `vectors`/`meta` and no optional attributes.
    pub fn new(
        id: impl Into<String>,
        timestamp: EventTime,
        source: impl Into<String>,
        channel: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp,
            source: source.into(),
            channel: channel.into(),
            vectors: FieldValue::Typed(Vec::new()),
            text: text.into(),
            meta: FieldValue::Typed(Meta::new()),
            laws: None,
            confidence: None,
            severity: None,
            decision: None,
            status: None,
            runtime: None,
        }
    }

    pub fn with_vectors<I, S>(mut self, vectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vectors = FieldValue::Typed(vectors.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = FieldValue::Typed(meta);
        self
    }

    /// Vector labels, empty when the record carried an ill-typed `vectors`.
    pub fn vector_labels(&self) -> &[String] {
        self.vectors.typed().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Law identifiers referenced by this event, if any were supplied.
    pub fn law_ids(&self) -> &[String] {
        self.laws
            .as_ref()
            .and_then(FieldValue::typed)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Confidence score as a float, if a numeric `confidence` was supplied.
    ///
    /// The number itself is stored as written so `1` stays `1` on output.
    pub fn confidence_score(&self) -> Option<f64> {
        self.confidence
            .as_ref()
            .and_then(FieldValue::typed)
            .and_then(Number::as_f64)
    }

    /// Canonical key-value representation used for schema validation.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
