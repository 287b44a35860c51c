//! The `Person` record and the element → record mapper.
//!
//! Mapping is explicit, field by field, against the generic tree — no derived
//! deserialization. Field names must match the element's keys exactly
//! (case-sensitive); that lexical match is the whole contract.

use serde::Serialize;
use serde_json::Value;

use crate::error::StageError;
use crate::tree::kind_of;

/// The fixed two-field record shape, one per array element.
/// `None` means the field never arrived; it renders as the empty string and
/// serializes as `null`. Records are never mutated after mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Person {
    pub name: Option<String>,
    pub age: Option<String>,
}

impl Person {
    /// The greeting sentence, unset fields and all.
    pub fn greeting(&self) -> String {
        let name = self.name.as_deref().unwrap_or("");
        let age = self.age.as_deref().unwrap_or("");
        format!("Hi! My name is {name} and I am {age} years old. It is nice to meet you!")
    }
}

/// Map one array element to a `Person`.
///
/// Per-field contract:
/// - present with a string value → set;
/// - absent → stays unset (a loose match, not an error);
/// - present with anything else → fails the whole element.
///
/// `index` only feeds diagnostics. Elements are independent; a failure here
/// never touches the neighbors.
pub fn map_person(index: usize, element: &Value) -> Result<Person, StageError> {
    let Value::Object(fields) = element else {
        return Err(StageError::ElementShape {
            index,
            found: kind_of(element),
        });
    };
    Ok(Person {
        name: string_field(index, fields, "name")?,
        age: string_field(index, fields, "age")?,
    })
}

fn string_field(
    index: usize,
    fields: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, StageError> {
    match fields.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(StageError::FieldShape {
            index,
            field,
            found: kind_of(other),
        }),
    }
}

// ------------------------------- Tests ------------------------------------ //
