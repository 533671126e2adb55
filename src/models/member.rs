use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::validation::{FieldErrors, FromInput, RecordKind, RecordReader};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub trainer_id: i32,
}

/// Validated member fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberData {
    pub name: String,
    pub age: i32,
    pub trainer_id: i32,
}

impl FromInput for MemberData {
    const KIND: RecordKind = RecordKind::Member;

    fn from_input(input: &Value) -> Result<Self, FieldErrors> {
        let mut reader = RecordReader::new(input)?;
        let name = reader.string("name");
        let age = reader.integer("age");
        let trainer_id = reader.integer("trainer_id");

        match (name, age, trainer_id) {
            (Some(name), Some(age), Some(trainer_id)) => Ok(MemberData {
                name,
                age,
                trainer_id,
            }),
            _ => Err(reader.into_errors()),
        }
    }
}
