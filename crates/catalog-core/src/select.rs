//! Searchable select/combobox state.
//!
//! Options come from the product type taxonomy: groups followed by their
//! children, one level deep. Group headers are shown but never selected.

use crate::types::ProductType;

/// Text shown while nothing is selected
pub const DEFAULT_PLACEHOLDER: &str = "Select option";

/// One rendered row of the options list
#[derive(Debug, Clone, PartialEq)]
pub struct OptionRow {
    pub label: String,
    pub value: String,
    pub is_group: bool,
    /// 0 for top-level rows, 1 for children of a group
    pub depth: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectState {
    options: Vec<ProductType>,
    multiple: bool,
    open: bool,
    search: String,
    selected: Vec<ProductType>,
    placeholder: String,
}

impl SelectState {
    pub fn new(options: Vec<ProductType>, multiple: bool) -> Self {
        Self {
            options,
            multiple,
            open: false,
            search: String::new(),
            selected: Vec::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the list without touching the selection (click outside)
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.open = true;
    }

    /// Rows currently shown, with the search applied
    pub fn visible_options(&self) -> Vec<OptionRow> {
        let needle = self.search.trim().to_lowercase();
        let matches = |label: &str| needle.is_empty() || label.to_lowercase().contains(&needle);

        let mut rows = Vec::new();
        for option in &self.options {
            match &option.children {
                Some(children) => {
                    let group_matches = matches(&option.label);
                    let visible: Vec<&ProductType> = children
                        .iter()
                        .filter(|c| group_matches || matches(&c.label))
                        .collect();
                    if !group_matches && visible.is_empty() {
                        continue;
                    }
                    rows.push(row(option, true, 0));
                    rows.extend(visible.into_iter().map(|c| row(c, false, 1)));
                }
                None => {
                    if matches(&option.label) {
                        rows.push(row(option, false, 0));
                    }
                }
            }
        }
        rows
    }

    /// Handle a click on the visible row at `index`.
    ///
    /// Returns true when the selection changed.
    pub fn choose(&mut self, index: usize) -> bool {
        let Some(picked) = self.visible_options().into_iter().nth(index) else {
            return false;
        };
        if picked.is_group {
            return false;
        }
        let Some(option) = self.find_leaf(&picked.value).cloned() else {
            return false;
        };
        self.choose_type(option);
        true
    }

    /// Select (or in multiple mode, toggle) a specific leaf type
    pub fn choose_type(&mut self, option: ProductType) {
        tracing::debug!(label = %option.label, multiple = self.multiple, "Option chosen");
        if self.multiple {
            if let Some(pos) = self.selected.iter().position(|s| s.value == option.value) {
                self.selected.remove(pos);
            } else {
                self.selected.push(option);
            }
        } else {
            self.selected = vec![option];
            self.search.clear();
            self.open = false;
        }
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|s| s.value == value)
    }

    /// Placeholder, or selected labels joined in selection order
    pub fn display_label(&self) -> String {
        if self.selected.is_empty() {
            self.placeholder.clone()
        } else {
            self.selected
                .iter()
                .map(|s| s.label.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        }
    }

    pub fn selected_types(&self) -> &[ProductType] {
        &self.selected
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.search.clear();
        self.open = false;
    }

    fn find_leaf(&self, value: &str) -> Option<&ProductType> {
        self.options.iter().find_map(|o| match &o.children {
            Some(children) => children.iter().find(|c| c.value == value),
            None => (o.value == value).then_some(o),
        })
    }
}

fn row(option: &ProductType, is_group: bool, depth: u8) -> OptionRow {
    OptionRow {
        label: option.label.clone(),
        value: option.value.clone(),
        is_group,
        depth,
    }
}
