use crate::diagnostics::Diagnostics;
use crate::domain::{normalize_due_date, Filter, IdStrategy, TodoPatch, TodoRecord};
use crate::persistence::{PersistentCell, SharedStore};
use std::rc::Rc;

/// Storage key of the todo collection
pub const TODOS_KEY: &str = "todos";

/// Owns the ordered todo collection and the current visibility filter.
///
/// Mutations with unresolvable IDs or an empty title are silent no-ops; nothing is
/// written and nothing is reported.
pub struct TodoStore {
    todos: PersistentCell<Vec<TodoRecord>>,
    filter: Filter,
    ids: IdStrategy,
}

impl TodoStore {
    pub fn new(store: SharedStore, diagnostics: Rc<dyn Diagnostics>) -> Self {
        Self {
            todos: PersistentCell::new(TODOS_KEY, Vec::new(), store, diagnostics),
            filter: Filter::All,
            ids: IdStrategy::default(),
        }
    }

    /// Choose how IDs of newly added records are generated
    pub fn with_ids(mut self, ids: IdStrategy) -> Self {
        self.ids = ids;
        self
    }

    /// Full collection in display/persistence order
    pub fn todos(&self) -> &[TodoRecord] {
        self.todos.get()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.todos.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.get().is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TodoRecord> {
        self.todos.get().iter().find(|todo| todo.id == id)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Append a new record. Returns its ID, or `None` when the trimmed title is empty.
    /// Resets the filter to `All` so the new record is visible.
    pub fn add(&mut self, title: &str, description: &str, due_date: Option<&str>) -> Option<String> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let record = TodoRecord::new(
            self.ids.generate(),
            title.to_string(),
            description.trim().to_string(),
            normalize_due_date(due_date),
        );
        let id = record.id.clone();

        self.todos.update(|todos| {
            todos.push(record);
            true
        });
        self.filter = Filter::All;

        tracing::debug!(id = %id, "added todo");
        Some(id)
    }

    /// Flip `completed` on the matching record
    pub fn toggle(&mut self, id: &str) {
        let changed = self.todos.update(|todos| match todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            }
            None => false,
        });
        if changed {
            tracing::debug!(id = %id, "toggled todo");
        }
    }

    /// Remove the matching record, keeping the order of the rest
    pub fn delete(&mut self, id: &str) {
        let changed = self.todos.update(|todos| {
            let before = todos.len();
            todos.retain(|t| t.id != id);
            todos.len() != before
        });
        if changed {
            tracing::debug!(id = %id, "deleted todo");
        }
    }

    /// Merge `patch` into the matching record. The title is not validated here;
    /// callers pass an already trimmed, non-empty title.
    pub fn edit(&mut self, id: &str, patch: &TodoPatch) {
        if patch.is_empty() {
            return;
        }
        let changed = self.todos.update(|todos| match todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                patch.apply(todo);
                true
            }
            None => false,
        });
        if changed {
            tracing::debug!(id = %id, "edited todo");
        }
    }

    /// Move `source_id` to the index currently held by `target_id`, shifting the
    /// records in between by one slot. Not a swap.
    pub fn reorder(&mut self, source_id: &str, target_id: &str) {
        if source_id.is_empty() || target_id.is_empty() || source_id == target_id {
            return;
        }

        let changed = self.todos.update(|todos| {
            let source = todos.iter().position(|t| t.id == source_id);
            let target = todos.iter().position(|t| t.id == target_id);
            match (source, target) {
                (Some(source), Some(target)) => {
                    let moved = todos.remove(source);
                    todos.insert(target, moved);
                    true
                }
                _ => false,
            }
        });
        if changed {
            tracing::debug!(source = %source_id, target = %target_id, "reordered todo");
        }
    }

    /// Records visible under `filter`, computed from the live collection
    pub fn filtered_view(&self, filter: Filter) -> Vec<&TodoRecord> {
        self.todos()
            .iter()
            .filter(|todo| filter.admits(todo.completed))
            .collect()
    }

    /// Records visible under the current filter
    pub fn visible(&self) -> Vec<&TodoRecord> {
        self.filtered_view(self.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::testing::RecordingDiagnostics;
    use crate::persistence::kv::KeyValueStore;
    use crate::persistence::MemoryStore;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::HashSet;

    struct Fixture {
        backing: Rc<RefCell<MemoryStore>>,
        diagnostics: Rc<RecordingDiagnostics>,
        store: TodoStore,
    }

    fn fixture() -> Fixture {
        fixture_with(MemoryStore::new())
    }

    fn fixture_with(memory: MemoryStore) -> Fixture {
        let backing = Rc::new(RefCell::new(memory));
        let diagnostics = Rc::new(RecordingDiagnostics::default());
        let shared: SharedStore = backing.clone();
        let store = TodoStore::new(shared, diagnostics.clone());
        Fixture {
            backing,
            diagnostics,
            store,
        }
    }

    fn ids(records: &[&TodoRecord]) -> Vec<String> {
        records.iter().map(|t| t.id.clone()).collect()
    }

    fn all_ids(store: &TodoStore) -> Vec<String> {
        store.todos().iter().map(|t| t.id.clone()).collect()
    }

    fn abc(store: &mut TodoStore) -> (String, String, String) {
        let a = store.add("A", "", None).unwrap();
        let b = store.add("B", "", None).unwrap();
        let c = store.add("C", "", None).unwrap();
        (a, b, c)
    }

    #[test]
    fn test_blank_titles_never_add() {
        let mut fx = fixture();
        for title in ["", " ", "\t\n", "     "] {
            assert_eq!(fx.store.add(title, "desc", Some("2024-01-01")), None);
        }
        assert!(fx.store.is_empty());
        assert_eq!(fx.diagnostics.count(), 0);
    }

    #[test]
    fn test_add_appends_trimmed_pending_record() {
        let mut fx = fixture();
        fx.store.add("First", "", None);
        let id = fx.store.add("  Buy milk  ", "  2 litres ", Some("")).unwrap();

        assert_eq!(fx.store.len(), 2);
        let last = fx.store.todos().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.title, "Buy milk");
        assert_eq!(last.description, "2 litres");
        assert_eq!(last.due_date, None);
        assert!(!last.completed);
    }

    #[test]
    fn test_add_resets_filter() {
        let mut fx = fixture();
        fx.store.set_filter(Filter::Completed);
        fx.store.add("New", "", None);
        assert_eq!(fx.store.filter(), Filter::All);
    }

    #[test]
    fn test_blank_add_keeps_filter() {
        let mut fx = fixture();
        fx.store.set_filter(Filter::Pending);
        fx.store.add("  ", "", None);
        assert_eq!(fx.store.filter(), Filter::Pending);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut fx = fixture();
        let (_, b, _) = abc(&mut fx.store);
        let before = fx.store.todos().to_vec();

        fx.store.toggle(&b);
        assert!(fx.store.get(&b).unwrap().completed);
        fx.store.toggle(&b);

        assert_eq!(fx.store.todos(), before.as_slice());
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut fx = fixture();
        abc(&mut fx.store);
        let before = fx.store.todos().to_vec();

        fx.store.toggle("nope");

        assert_eq!(fx.store.todos(), before.as_slice());
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut fx = fixture();
        let (a, b, c) = abc(&mut fx.store);

        fx.store.delete(&b);

        assert_eq!(all_ids(&fx.store), vec![a, c]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut fx = fixture();
        abc(&mut fx.store);
        let before = fx.store.todos().to_vec();

        fx.store.delete("nope");

        assert_eq!(fx.store.todos(), before.as_slice());
    }

    #[test]
    fn test_edit_merges_only_supplied_fields() {
        let mut fx = fixture();
        let id = fx.store.add("Draft", "old", Some("2024-02-02")).unwrap();
        let created_at = fx.store.get(&id).unwrap().created_at.clone();

        fx.store
            .edit(&id, &TodoPatch::default().title("Final").description("new"));

        let todo = fx.store.get(&id).unwrap();
        assert_eq!(todo.title, "Final");
        assert_eq!(todo.description, "new");
        assert_eq!(todo.due_date.as_deref(), Some("2024-02-02"));
        assert_eq!(todo.created_at, created_at);
        assert!(!todo.completed);
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let mut fx = fixture();
        abc(&mut fx.store);
        let before = fx.store.todos().to_vec();

        fx.store.edit("nope", &TodoPatch::default().completed(true));

        assert_eq!(fx.store.todos(), before.as_slice());
    }

    #[test]
    fn test_reorder_moves_to_target_index() {
        let mut fx = fixture();
        let (a, b, c) = abc(&mut fx.store);

        fx.store.reorder(&a, &c);

        assert_eq!(all_ids(&fx.store), vec![b, c, a]);
    }

    #[test]
    fn test_reorder_backwards() {
        let mut fx = fixture();
        let (a, b, c) = abc(&mut fx.store);
        let d = fx.store.add("D", "", None).unwrap();

        fx.store.reorder(&d, &b);

        assert_eq!(all_ids(&fx.store), vec![a, d, b, c]);
    }

    #[test]
    fn test_reorder_noops() {
        let mut fx = fixture();
        let (a, _, c) = abc(&mut fx.store);
        let before = all_ids(&fx.store);

        fx.store.reorder(&a, &a);
        fx.store.reorder(&a, "missing");
        fx.store.reorder("missing", &c);
        fx.store.reorder("", &c);

        assert_eq!(all_ids(&fx.store), before);
    }

    #[test]
    fn test_reorder_keeps_id_set() {
        let mut fx = fixture();
        let (a, b, c) = abc(&mut fx.store);
        let d = fx.store.add("D", "", None).unwrap();
        let before: HashSet<String> = all_ids(&fx.store).into_iter().collect();

        for (source, target) in [(&a, &d), (&c, &a), (&b, &c)] {
            let target_index = fx.store.todos().iter().position(|t| &t.id == target).unwrap();
            fx.store.reorder(source, target);
            assert_eq!(fx.store.todos()[target_index].id, *source);
        }

        let after: HashSet<String> = all_ids(&fx.store).into_iter().collect();
        assert_eq!(after, before);
        assert_eq!(fx.store.len(), 4);
    }

    #[test]
    fn test_completed_and_pending_partition_collection() {
        let mut fx = fixture();
        let (a, _, c) = abc(&mut fx.store);
        fx.store.toggle(&a);
        fx.store.toggle(&c);

        let completed: HashSet<String> = ids(&fx.store.filtered_view(Filter::Completed))
            .into_iter()
            .collect();
        let pending: HashSet<String> = ids(&fx.store.filtered_view(Filter::Pending))
            .into_iter()
            .collect();
        let everything: HashSet<String> = all_ids(&fx.store).into_iter().collect();

        assert!(completed.is_disjoint(&pending));
        assert_eq!(&completed | &pending, everything);
        assert_eq!(fx.store.filtered_view(Filter::All).len(), 3);
    }

    #[test]
    fn test_filtered_view_tracks_live_collection() {
        let mut fx = fixture();
        let id = fx.store.add("Live", "", None).unwrap();
        assert_eq!(fx.store.filtered_view(Filter::Completed).len(), 0);

        fx.store.toggle(&id);

        assert_eq!(fx.store.filtered_view(Filter::Completed).len(), 1);
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let mut fx = fixture();
        let (a, b, _) = abc(&mut fx.store);
        fx.store.toggle(&a);
        fx.store.reorder(&a, &b);
        fx.store.delete(&b);

        let raw = fx.backing.borrow().get(TODOS_KEY).unwrap().unwrap();
        let stored: Vec<TodoRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(stored, fx.store.todos().to_vec());
    }

    #[test]
    fn test_reload_round_trip() {
        let mut fx = fixture();
        let (a, b, c) = abc(&mut fx.store);
        fx.store.toggle(&b);
        fx.store.reorder(&c, &a);
        let original = fx.store.todos().to_vec();

        let raw = fx.backing.borrow().get(TODOS_KEY).unwrap().unwrap();
        let reloaded = fixture_with(MemoryStore::new().with_entry(TODOS_KEY, &raw));

        assert_eq!(reloaded.store.todos(), original.as_slice());
    }

    #[test]
    fn test_corrupt_storage_starts_empty() {
        let fx = fixture_with(MemoryStore::new().with_entry(TODOS_KEY, "{\"oops\":"));
        assert!(fx.store.is_empty());
        assert_eq!(fx.diagnostics.count(), 1);
    }

    #[test]
    fn test_buy_milk_scenario() {
        let mut fx = fixture();

        let id = fx.store.add("Buy milk", "", Some("")).unwrap();
        assert_eq!(fx.store.len(), 1);
        assert_eq!(fx.store.todos()[0].title, "Buy milk");
        assert_eq!(fx.store.todos()[0].description, "");
        assert!(!fx.store.todos()[0].completed);

        fx.store.add("  ", "", None);
        assert_eq!(fx.store.len(), 1);

        fx.store.toggle(&id);
        assert!(fx.store.todos()[0].completed);

        assert!(fx.store.filtered_view(Filter::Pending).is_empty());
        assert_eq!(ids(&fx.store.filtered_view(Filter::Completed)), vec![id]);
    }

    #[test]
    fn test_timestamp_ids() {
        let backing: SharedStore = Rc::new(RefCell::new(MemoryStore::new()));
        let mut store = TodoStore::new(backing, Rc::new(RecordingDiagnostics::default()))
            .with_ids(IdStrategy::Timestamp);

        let id = store.add("Stamp", "", None).unwrap();

        assert!(id.starts_with("todo-"));
    }

    #[test]
    fn test_record_without_created_at_keeps_the_collection() {
        let raw = r#"[
            {"id":"a","title":"A","description":"","completed":false,"createdAt":"2024-05-01T12:00:00.000Z"},
            {"id":"b","title":"B","completed":false}
        ]"#;
        let fx = fixture_with(MemoryStore::new().with_entry(TODOS_KEY, raw));

        assert_eq!(all_ids(&fx.store), vec!["a", "b"]);
        assert_eq!(fx.store.get("b").unwrap().created_at, "");
        assert_eq!(fx.diagnostics.count(), 0);

        let stored = fx.backing.borrow().get(TODOS_KEY).unwrap().unwrap();
        let stored: Vec<TodoRecord> = serde_json::from_str(&stored).unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].created_at, "2024-05-01T12:00:00.000Z");
    }
}
