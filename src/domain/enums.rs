use serde::{Deserialize, Serialize};

/// Visibility filter over the collection (not persisted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    /// Parse filter from a CLI value like "pending"
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "all" => Some(Self::All),
            "completed" | "done" => Some(Self::Completed),
            "pending" | "open" => Some(Self::Pending),
            _ => None,
        }
    }

    /// Label shown in the filter bar
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }

    /// Whether a record with the given completion flag is visible under this filter
    pub fn admits(&self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Completed => completed,
            Self::Pending => !completed,
        }
    }

    /// Next filter in bar order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Completed,
            Self::Completed => Self::Pending,
            Self::Pending => Self::All,
        }
    }

    pub fn all() -> &'static [Filter] {
        &[Filter::All, Filter::Completed, Filter::Pending]
    }
}

/// Two-valued theme flag, persisted as "light" / "dark"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Label of the toggle button: names the theme you would switch to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTodo,
    EditingTodo,
}

/// Field of the add/edit form that receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    DueDate,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::DueDate,
            FormField::DueDate => FormField::Title,
        }
    }
}
