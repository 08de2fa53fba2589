use crate::diagnostics::Diagnostics;
use crate::domain::Theme;
use crate::persistence::{PersistentCell, SharedStore};
use std::rc::Rc;

/// Storage key of the theme flag
pub const THEME_KEY: &str = "theme";

type Observer = Box<dyn FnMut(Theme)>;

/// Persisted light/dark flag. The presentation layer subscribes to learn the
/// current theme and every later change; the cell itself renders nothing.
pub struct ThemeCell {
    cell: PersistentCell<Theme>,
    observers: Vec<Observer>,
}

impl ThemeCell {
    pub fn new(store: SharedStore, diagnostics: Rc<dyn Diagnostics>) -> Self {
        Self {
            cell: PersistentCell::new(THEME_KEY, Theme::Light, store, diagnostics),
            observers: Vec::new(),
        }
    }

    pub fn current(&self) -> Theme {
        *self.cell.get()
    }

    /// Register an observer. It is called right away with the current theme.
    pub fn subscribe<F>(&mut self, mut observer: F)
    where
        F: FnMut(Theme) + 'static,
    {
        observer(self.current());
        self.observers.push(Box::new(observer));
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current().toggled();
        self.cell.set(next);
        tracing::debug!(theme = next.name(), "theme changed");
        for observer in &mut self.observers {
            observer(next);
        }
        next
    }
}
