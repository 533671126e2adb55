use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::validation::{FieldErrors, FromInput, RecordKind, RecordReader};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WorkoutSession {
    pub id: i32,
    pub date: NaiveDate,
    pub duration_min: i32,
    pub cal_burned: i32,
    pub member_id: i32,
    pub trainer_id: i32,
}

/// Validated workout session fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSessionData {
    pub date: NaiveDate,
    pub duration_min: i32,
    pub cal_burned: i32,
    pub member_id: i32,
    pub trainer_id: i32,
}

impl FromInput for WorkoutSessionData {
    const KIND: RecordKind = RecordKind::WorkoutSession;

    fn from_input(input: &Value) -> Result<Self, FieldErrors> {
        let mut reader = RecordReader::new(input)?;
        let date = reader.date("date");
        let duration_min = reader.integer("duration_min");
        let cal_burned = reader.integer("cal_burned");
        let member_id = reader.integer("member_id");
        let trainer_id = reader.integer("trainer_id");

        match (date, duration_min, cal_burned, member_id, trainer_id) {
            (Some(date), Some(duration_min), Some(cal_burned), Some(member_id), Some(trainer_id)) => {
                Ok(WorkoutSessionData {
                    date,
                    duration_min,
                    cal_burned,
                    member_id,
                    trainer_id,
                })
            }
            _ => Err(reader.into_errors()),
        }
    }
}
