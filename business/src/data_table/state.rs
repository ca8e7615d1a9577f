use crate::macros::local_state;
use crate::model::DataRow;
use crate::table::{DeleteMode, ImportStatus, Notice, PendingDelete};

/// Upload dialog: pick the model pair, confirm it, then stage a file.
#[derive(Debug, Clone, Default)]
pub struct UploadDialog {
    pub open: bool,
    /// Models offered in both pickers.
    pub models: Vec<String>,
    pub upper: Option<String>,
    pub lower: Option<String>,
    /// The file drop zone is enabled once both models were confirmed.
    pub models_confirmed: bool,
    pub staged: Vec<DataRow>,
    pub status: ImportStatus,
    pub uploading: Option<u64>,
}

impl UploadDialog {
    pub fn selected_pair(&self) -> Option<(&str, &str)> {
        match (self.upper.as_deref(), self.lower.as_deref()) {
            (Some(upper), Some(lower)) if !upper.is_empty() && !lower.is_empty() => {
                Some((upper, lower))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DataTableState {
    /// Filter box text.
    pub filter: String,
    /// Filter applied to the rows; updated on query.
    pub applied_filter: String,
    pub delete_mode: DeleteMode,
    pub notice: Option<Notice>,
    pub pending_delete: Option<PendingDelete>,
    pub upload: UploadDialog,
    pub(crate) awaiting_list: Option<u64>,
    pub(crate) awaiting_delete: Option<u64>,
    /// Request id of the list the row checks refer to.
    pub(crate) shown_list: u64,
    next_request: u64,
}

impl DataTableState {
    pub(crate) fn next_request(&mut self) -> u64 {
        self.next_request += 1;
        self.next_request
    }

    pub fn is_deleting(&self) -> bool {
        self.awaiting_delete.is_some()
    }
}

local_state!(DataTableState);
