use super::kv::SharedStore;
use crate::diagnostics::Diagnostics;
use crate::error::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;

/// A value mirrored to durable storage under a single key.
///
/// Reads happen once, on construction: a missing entry yields the initial value and a
/// malformed or unreadable one does too, after a diagnostic report. Every change is
/// written back synchronously. Write failures are reported and otherwise ignored; the
/// in-memory value stays authoritative for the session.
pub struct PersistentCell<T> {
    key: String,
    value: T,
    store: SharedStore,
    diagnostics: Rc<dyn Diagnostics>,
}

impl<T> PersistentCell<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(
        key: &str,
        initial: T,
        store: SharedStore,
        diagnostics: Rc<dyn Diagnostics>,
    ) -> Self {
        let value = match load::<T>(&store, key) {
            Ok(Some(value)) => value,
            Ok(None) => initial,
            Err(e) => {
                diagnostics.report(&format!("Error reading stored '{}'", key), &e);
                initial
            }
        };

        let cell = Self {
            key: key.to_string(),
            value,
            store,
            diagnostics,
        };
        // Mirror on load so a malformed entry is replaced by what we actually hold
        cell.persist();
        cell
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value outright
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.persist();
    }

    /// Mutate the value in place. The closure returns whether anything changed;
    /// unchanged values are not written back.
    pub fn update<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut T) -> bool,
    {
        let changed = f(&mut self.value);
        if changed {
            self.persist();
        }
        changed
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.value)
            .map_err(StorageError::Encode)
            .and_then(|json| self.store.borrow_mut().set(&self.key, &json));

        if let Err(e) = result {
            self.diagnostics
                .report(&format!("Error writing stored '{}'", self.key), &e);
        }
    }
}

fn load<T: DeserializeOwned>(store: &SharedStore, key: &str) -> Result<Option<T>, StorageError> {
    let raw = store.borrow().get(key)?;
    match raw {
        Some(text) if !text.is_empty() => serde_json::from_str(&text)
            .map(Some)
            .map_err(StorageError::Decode),
        _ => Ok(None),
    }
}
