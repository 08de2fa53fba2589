pub mod enums;
pub mod ids;
pub mod todo;

pub use enums::{Filter, FormField, Theme, UiMode};
pub use ids::IdStrategy;
pub use todo::{normalize_due_date, TodoPatch, TodoRecord};
