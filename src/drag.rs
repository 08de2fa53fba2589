/// A request to move `source_id` onto the position of `target_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderIntent {
    pub source_id: String,
    pub target_id: String,
}

/// Turns a drag-start on one record and a drop on another into a reorder intent.
///
/// The active drag survives a drop; only `clear` forgets it. Validation of the pair
/// is left to the store's reorder.
#[derive(Debug, Default, Clone)]
pub struct DragReorder {
    dragging: Option<String>,
}

impl DragReorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_start(&mut self, id: &str) {
        self.dragging = Some(id.to_string());
    }

    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    /// Drop on `target_id`. No active drag, no intent.
    pub fn drop_on(&self, target_id: &str) -> Option<ReorderIntent> {
        self.dragging.as_ref().map(|source| ReorderIntent {
            source_id: source.clone(),
            target_id: target_id.to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.dragging = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_without_drag_yields_nothing() {
        let drag = DragReorder::new();
        assert_eq!(drag.drop_on("b"), None);
    }

    #[test]
    fn test_drag_then_drop() {
        let mut drag = DragReorder::new();
        drag.drag_start("a");

        assert_eq!(
            drag.drop_on("c"),
            Some(ReorderIntent {
                source_id: "a".to_string(),
                target_id: "c".to_string(),
            })
        );
    }

    #[test]
    fn test_drag_is_kept_after_drop() {
        let mut drag = DragReorder::new();
        drag.drag_start("a");
        drag.drop_on("b");

        assert_eq!(drag.dragging(), Some("a"));
        assert!(drag.drop_on("c").is_some());
    }

    #[test]
    fn test_latest_drag_start_wins() {
        let mut drag = DragReorder::new();
        drag.drag_start("a");
        drag.drag_start("b");
        assert_eq!(drag.drop_on("c").unwrap().source_id, "b");
    }

    #[test]
    fn test_clear() {
        let mut drag = DragReorder::new();
        drag.drag_start("a");
        drag.clear();
        assert_eq!(drag.drop_on("b"), None);
    }
}
