// Relational statements, one per operation

pub mod member_repository;
pub mod workout_repository;

pub use member_repository::MemberRepository;
pub use workout_repository::WorkoutRepository;
