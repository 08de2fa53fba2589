use crate::domain::{normalize_due_date, Filter, FormField, TodoPatch, TodoRecord, UiMode};
use crate::drag::DragReorder;
use crate::store::TodoStore;
use crate::theme::ThemeCell;
use crate::ui::styles::Palette;
use std::cell::Cell;
use std::rc::Rc;

/// Add/edit form state
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub field: FormField,
    /// Record being edited; `None` when adding
    pub editing_id: Option<String>,
}

impl FormState {
    fn for_record(todo: &TodoRecord) -> Self {
        Self {
            title: todo.title.clone(),
            description: todo.description.clone(),
            due_date: todo.due_date.clone().unwrap_or_default(),
            field: FormField::Title,
            editing_id: Some(todo.id.clone()),
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::DueDate => &mut self.due_date,
        }
    }
}

/// Main application state
pub struct AppState {
    pub store: TodoStore,
    pub theme: ThemeCell,
    pub drag: DragReorder,
    /// Index into the filtered view
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub form: Option<FormState>,
    /// Palette swapped by the theme observer
    pub palette: Rc<Cell<Palette>>,
}

impl AppState {
    pub fn new(store: TodoStore, mut theme: ThemeCell) -> Self {
        let palette = Rc::new(Cell::new(Palette::for_theme(theme.current())));
        let active = palette.clone();
        theme.subscribe(move |t| active.set(Palette::for_theme(t)));

        Self {
            store,
            theme,
            drag: DragReorder::new(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            form: None,
            palette,
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette.get()
    }

    /// Records under the current filter, in collection order
    pub fn visible(&self) -> Vec<&TodoRecord> {
        self.store.visible()
    }

    pub fn selected_todo(&self) -> Option<&TodoRecord> {
        self.visible().get(self.selected_index).copied()
    }

    fn selected_id(&self) -> Option<String> {
        self.selected_todo().map(|todo| todo.id.clone())
    }

    fn visible_id_at(&self, index: usize) -> Option<String> {
        self.visible().get(index).map(|todo| todo.id.clone())
    }

    /// Point the selection at `id` if it is visible
    fn select_id(&mut self, id: &str) {
        if let Some(index) = self.visible().iter().position(|todo| todo.id == id) {
            self.selected_index = index;
        }
    }

    /// Keep the selection inside the visible list after mutations
    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible().len() {
            self.selected_index += 1;
        }
    }

    /// Move the selected record one slot up within the visible list
    pub fn move_item_up(&mut self) {
        if self.selected_index == 0 {
            return;
        }
        if let (Some(source), Some(target)) = (
            self.selected_id(),
            self.visible_id_at(self.selected_index - 1),
        ) {
            self.store.reorder(&source, &target);
            self.select_id(&source);
        }
    }

    /// Move the selected record one slot down within the visible list
    pub fn move_item_down(&mut self) {
        if let (Some(source), Some(target)) = (
            self.selected_id(),
            self.visible_id_at(self.selected_index + 1),
        ) {
            self.store.reorder(&source, &target);
            self.select_id(&source);
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.toggle(&id);
            self.clamp_selection();
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.delete(&id);
            if self.drag.dragging() == Some(id.as_str()) {
                self.drag.clear();
            }
            self.clamp_selection();
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.store.set_filter(filter);
        self.selected_index = 0;
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.store.filter().next());
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    /// Begin dragging the selected record
    pub fn drag_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.drag.drag_start(&id);
        }
    }

    /// Drop the dragged record on the selected one
    pub fn drop_on_selected(&mut self) {
        let Some(target) = self.selected_id() else {
            return;
        };
        if let Some(intent) = self.drag.drop_on(&target) {
            self.store.reorder(&intent.source_id, &intent.target_id);
            self.select_id(&intent.source_id);
            self.drag.clear();
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag.clear();
    }

    /// Show the add form, or hide it when it is already showing
    pub fn toggle_add_form(&mut self) {
        if self.ui_mode == UiMode::AddingTodo {
            self.cancel_form();
        } else {
            self.form = Some(FormState::default());
            self.ui_mode = UiMode::AddingTodo;
        }
    }

    /// Open the edit form pre-filled from the selected record
    pub fn start_edit_selected(&mut self) {
        if let Some(todo) = self.selected_todo() {
            self.form = Some(FormState::for_record(todo));
            self.ui_mode = UiMode::EditingTodo;
        }
    }

    pub fn form_next_field(&mut self) {
        if let Some(form) = &mut self.form {
            form.field = form.field.next();
        }
    }

    pub fn form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.form {
            form.field_mut().push(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(form) = &mut self.form {
            form.field_mut().pop();
        }
    }

    /// Submit the add or edit form
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.take() else {
            return;
        };

        match form.editing_id.clone() {
            None => {
                match self
                    .store
                    .add(&form.title, &form.description, Some(form.due_date.as_str()))
                {
                    Some(id) => {
                        self.select_id(&id);
                        self.ui_mode = UiMode::Normal;
                    }
                    None => {
                        // Blank title: keep the form open, cleared
                        self.form = Some(FormState::default());
                    }
                }
            }
            Some(id) => {
                let title = form.title.trim();
                if title.is_empty() {
                    self.form = Some(form);
                    return;
                }
                let patch = TodoPatch::default()
                    .title(title)
                    .description(form.description.trim())
                    .due_date(normalize_due_date(Some(form.due_date.as_str())));
                self.store.edit(&id, &patch);
                self.ui_mode = UiMode::Normal;
            }
        }
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
        self.ui_mode = UiMode::Normal;
    }
}
