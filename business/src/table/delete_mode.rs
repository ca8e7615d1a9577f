use std::collections::BTreeSet;

/// Checkbox selection for bulk removal.
///
/// Rows are addressed by their index in the currently loaded list. "Visible"
/// rows are the indices that survive the active filter; select-all and the
/// delete press only ever look at those.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteMode {
    active: bool,
    checked: BTreeSet<usize>,
}

/// Result of pressing the delete button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletePress {
    /// The mode was off and is now on.
    Entered,
    /// The mode is on but no visible row is checked.
    NothingSelected,
    /// Checked visible rows, ascending.
    Selected(Vec<usize>),
}

impl DeleteMode {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn enter(&mut self) {
        self.active = true;
        self.checked.clear();
    }

    pub fn exit(&mut self) {
        self.active = false;
        self.checked.clear();
    }

    pub fn clear_checks(&mut self) {
        self.checked.clear();
    }

    pub fn is_checked(&self, row: usize) -> bool {
        self.checked.contains(&row)
    }

    pub fn set_checked(&mut self, row: usize, checked: bool) {
        if !self.active {
            return;
        }
        if checked {
            self.checked.insert(row);
        } else {
            self.checked.remove(&row);
        }
    }

    pub fn toggle(&mut self, row: usize) {
        let checked = self.is_checked(row);
        self.set_checked(row, !checked);
    }

    /// Check or uncheck every visible row. Hidden rows keep their state.
    pub fn select_all(&mut self, visible: &[usize], checked: bool) {
        for &row in visible {
            self.set_checked(row, checked);
        }
    }

    /// State of the "select all" box.
    pub fn all_visible_checked(&self, visible: &[usize]) -> bool {
        !visible.is_empty() && visible.iter().all(|row| self.is_checked(*row))
    }

    pub fn checked_visible(&self, visible: &[usize]) -> Vec<usize> {
        let mut rows: Vec<usize> = visible
            .iter()
            .copied()
            .filter(|row| self.is_checked(*row))
            .collect();
        rows.sort_unstable();
        rows
    }

    /// The exit button is offered while nothing visible is checked.
    pub fn show_exit(&self, visible: &[usize]) -> bool {
        self.active && self.checked_visible(visible).is_empty()
    }

    pub fn press(&mut self, visible: &[usize]) -> DeletePress {
        if !self.active {
            self.enter();
            return DeletePress::Entered;
        }
        let rows = self.checked_visible(visible);
        if rows.is_empty() {
            DeletePress::NothingSelected
        } else {
            DeletePress::Selected(rows)
        }
    }
}
