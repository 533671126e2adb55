use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::{MemberData, WorkoutSessionData};

pub const MISSING_FIELD: &str = "Missing data for required field.";
pub const NULL_FIELD: &str = "Field may not be null.";
pub const INVALID_STRING: &str = "Not a valid string.";
pub const INVALID_INTEGER: &str = "Not a valid integer.";
pub const INTEGER_TOO_LARGE: &str = "Number too large.";
pub const INVALID_DATE: &str = "Not a valid date.";
pub const INVALID_INPUT_TYPE: &str = "Invalid input type.";

/// Key under which errors about the input as a whole are reported.
pub const SCHEMA_KEY: &str = "_schema";

/// Field name -> error messages, serialized as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors that concern the whole input rather than one field.
    pub fn global(message: &str) -> Self {
        let mut errors = Self::new();
        errors.add(SCHEMA_KEY, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Pulls typed fields out of an untyped JSON object, collecting every
/// problem instead of stopping at the first one.
pub struct RecordReader<'a> {
    object: &'a Map<String, Value>,
    errors: FieldErrors,
}

impl<'a> RecordReader<'a> {
    pub fn new(input: &'a Value) -> Result<Self, FieldErrors> {
        match input {
            Value::Object(object) => Ok(Self {
                object,
                errors: FieldErrors::new(),
            }),
            _ => Err(FieldErrors::global(INVALID_INPUT_TYPE)),
        }
    }

    pub fn string(&mut self, field: &str) -> Option<String> {
        match self.present(field)? {
            Value::String(s) => Some(s.clone()),
            _ => self.reject(field, INVALID_STRING),
        }
    }

    pub fn integer(&mut self, field: &str) -> Option<i32> {
        let value = self.present(field)?;
        match coerce_integer(value) {
            Ok(n) => Some(n),
            Err(message) => self.reject(field, message),
        }
    }

    pub fn date(&mut self, field: &str) -> Option<NaiveDate> {
        let parsed = match self.present(field)? {
            Value::String(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
            _ => None,
        };
        match parsed {
            Some(date) => Some(date),
            None => self.reject(field, INVALID_DATE),
        }
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    fn present(&mut self, field: &str) -> Option<&'a Value> {
        let object = self.object;
        match object.get(field) {
            None => self.reject(field, MISSING_FIELD),
            Some(Value::Null) => self.reject(field, NULL_FIELD),
            Some(value) => Some(value),
        }
    }

    fn reject<T>(&mut self, field: &str, message: &str) -> Option<T> {
        self.errors.add(field, message);
        None
    }
}

fn coerce_integer(value: &Value) -> Result<i32, &'static str> {
    let wide = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i128::from(i),
            None => match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 => {
                    if f.abs() > i32::MAX as f64 + 1.0 {
                        return Err(INTEGER_TOO_LARGE);
                    }
                    f as i128
                }
                _ => return Err(INVALID_INTEGER),
            },
        },
        Value::String(s) => s.trim().parse::<i128>().map_err(|_| INVALID_INTEGER)?,
        _ => return Err(INVALID_INTEGER),
    };

    i32::try_from(wide).map_err(|_| INTEGER_TOO_LARGE)
}

/// A record type that can be built from raw request input.
pub trait FromInput: Sized {
    const KIND: RecordKind;

    fn from_input(input: &Value) -> Result<Self, FieldErrors>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Member,
    WorkoutSession,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Member(MemberData),
    WorkoutSession(WorkoutSessionData),
}

/// Validate `input` against the shape named by `kind`.
pub fn validate(kind: RecordKind, input: &Value) -> Result<Record, FieldErrors> {
    match kind {
        RecordKind::Member => MemberData::from_input(input).map(Record::Member),
        RecordKind::WorkoutSession => {
            WorkoutSessionData::from_input(input).map(Record::WorkoutSession)
        }
    }
}
