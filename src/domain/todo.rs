use chrono::{NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single task entry, stored in collection order under the "todos" key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRecord {
    /// Opaque unique ID, never changes after creation
    pub id: String,
    /// Trimmed, non-empty title
    pub title: String,
    /// Trimmed description (may be empty)
    #[serde(default)]
    pub description: String,
    /// Due date as entered, normally YYYY-MM-DD
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_as_none"
    )]
    pub due_date: Option<String>,
    #[serde(default)]
    pub completed: bool,
    /// ISO 8601 creation timestamp. Records written without one still load.
    #[serde(default)]
    pub created_at: String,
}

impl TodoRecord {
    /// Build a fresh, not-yet-completed record stamped with the current instant.
    /// Callers are expected to pass an already trimmed title and description.
    pub fn new(id: String, title: String, description: String, due_date: Option<String>) -> Self {
        Self {
            id,
            title,
            description,
            due_date,
            completed: false,
            created_at: now_iso8601(),
        }
    }

    /// Status badge text
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }

    pub fn due_formatted(&self) -> String {
        format_due_date(self.due_date.as_deref())
    }
}

/// Partial update for a record. `None` leaves the field untouched.
///
/// `due_date` is doubly optional: `Some(None)` clears the due date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Option<String>>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn due_date(mut self, due_date: Option<String>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    #[cfg(test)]
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.completed.is_none()
    }

    /// Field-by-field merge into `record`. No validation happens here.
    pub fn apply(&self, record: &mut TodoRecord) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(description) = &self.description {
            record.description = description.clone();
        }
        if let Some(due_date) = &self.due_date {
            record.due_date = due_date.clone();
        }
        if let Some(completed) = self.completed {
            record.completed = completed;
        }
    }
}

/// Current instant as UTC ISO 8601 with millisecond precision (e.g. 2024-05-01T12:00:00.000Z)
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Normalize a due date input: blank means absent
pub fn normalize_due_date(input: Option<&str>) -> Option<String> {
    input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Format a due date as "May 1, 2024", or "No due date" when absent or unparsable
pub fn format_due_date(due_date: Option<&str>) -> String {
    due_date
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "No due date".to_string())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
