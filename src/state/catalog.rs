// Catalog tab state management.
// Handles data loading and list state for the catalog view.

use ratatui::widgets::ListState;

/// Loading state for async data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// State for a selectable list with keyboard navigation.
#[derive(Debug, Clone)]
pub struct SelectableList<T> {
    pub data: LoadingState<Vec<T>>,
    pub list_state: ListState,
}

impl<T> Default for SelectableList<T> {
    fn default() -> Self {
        Self {
            data: LoadingState::Idle,
            list_state: ListState::default(),
        }
    }
}

impl<T> SelectableList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list contents, selecting the first item.
    pub fn set_items(&mut self, items: Vec<T>) {
        let selection = if items.is_empty() { None } else { Some(0) };
        self.data = LoadingState::Loaded(items);
        self.list_state.select(selection);
    }

    /// Get the currently selected index.
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Select the next item in the list.
    pub fn select_next(&mut self) {
        if let Some(items) = self.data.data() {
            if items.is_empty() {
                return;
            }
            let i = match self.list_state.selected() {
                Some(i) => {
                    if i >= items.len() - 1 {
                        i // Stay at end
                    } else {
                        i + 1
                    }
                }
                None => 0,
            };
            self.list_state.select(Some(i));
        }
    }

    /// Select the previous item in the list.
    pub fn select_prev(&mut self) {
        if let Some(items) = self.data.data() {
            if items.is_empty() {
                return;
            }
            let i = match self.list_state.selected() {
                Some(i) => {
                    if i == 0 {
                        0 // Stay at start
                    } else {
                        i - 1
                    }
                }
                None => 0,
            };
            self.list_state.select(Some(i));
        }
    }

    /// Get the selected item.
    pub fn selected_item(&self) -> Option<&T> {
        let index = self.list_state.selected()?;
        self.data.data()?.get(index)
    }
}
