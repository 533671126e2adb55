// Gym records and input validation

pub mod member;
pub mod workout_session;
pub mod validation;

pub use member::*;
pub use workout_session::*;
pub use validation::{validate, FieldErrors, FromInput, Record, RecordKind};
