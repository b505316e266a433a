// Wire types for the generateContent endpoint.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Error;

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
pub struct RequestContent<'a> {
    pub parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
pub struct RequestPart<'a> {
    pub text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            contents: [RequestContent {
                parts: [RequestPart { text }],
            }],
        }
    }
}

/// JSON kind a field must have before it is deserialized.
pub trait Shape: DeserializeOwned {
    fn matches(value: &Value) -> bool;
}

impl Shape for String {
    fn matches(value: &Value) -> bool {
        value.is_string()
    }
}

impl<T: DeserializeOwned> Shape for Vec<T> {
    fn matches(value: &Value) -> bool {
        value.is_array()
    }
}

macro_rules! object_shape {
    ($($ty:ty),*) => {
        $(impl Shape for $ty {
            fn matches(value: &Value) -> bool {
                value.is_object()
            }
        })*
    };
}

object_shape!(Candidate, Content, Part);

/// A field that is `None` when absent or of the wrong kind.
#[derive(Debug)]
pub struct Loose<T>(Option<T>);

impl<T> Default for Loose<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> Loose<T> {
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<'de, T: Shape> Deserialize<'de> for Loose<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if !T::matches(&value) {
            return Ok(Self(None));
        }
        Ok(Self(serde_json::from_value(value).ok()))
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Loose<Vec<Loose<Candidate>>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Loose<Content>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Loose<Vec<Loose<Part>>>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Loose<String>,
}

/// The first element of a list, if it has the right shape.
fn first<T>(items: Vec<Loose<T>>) -> Option<T> {
    items.into_iter().next().and_then(Loose::into_inner)
}

impl GenerateContentResponse {
    pub fn parse(body: &[u8]) -> Result<Self, Error> {
        // A non-object top level has no `candidates`.
        let value: Value = serde_json::from_slice(body).map_err(Error::Parse)?;
        if !value.is_object() {
            return Err(Error::Schema("candidates"));
        }
        serde_json::from_value(value).map_err(Error::Parse)
    }

    /// `candidates[0].content.parts[0].text`, verbatim.
    pub fn into_text(self) -> Result<String, Error> {
        let candidates = self.candidates.into_inner().ok_or(Error::Schema("candidates"))?;
        let candidate = first(candidates).ok_or(Error::Schema("candidate"))?;
        let content = candidate.content.into_inner().ok_or(Error::Schema("content"))?;
        let parts = content.parts.into_inner().ok_or(Error::Schema("parts"))?;
        let part = first(parts).ok_or(Error::Schema("part"))?;
        part.text.into_inner().ok_or(Error::Schema("text"))
    }
}
