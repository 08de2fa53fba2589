use chrono::Utc;
use uuid::Uuid;

/// How new record IDs are produced.
///
/// `Random` is a v4 UUID from the OS CSPRNG. `Timestamp` derives the ID from the
/// current time in milliseconds; two IDs generated within the same millisecond
/// collide. That weakness is accepted for the fallback and is not papered over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    Random,
    Timestamp,
}

impl IdStrategy {
    pub fn generate(&self) -> String {
        match self {
            IdStrategy::Random => Uuid::new_v4().to_string(),
            IdStrategy::Timestamp => timestamp_id(),
        }
    }
}

/// Fallback ID in the form `todo-<unix millis>`
pub fn timestamp_id() -> String {
    format!("todo-{}", Utc::now().timestamp_millis())
}
