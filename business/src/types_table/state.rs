use crate::macros::local_state;
use crate::model::TypeRecord;
use crate::numeric::{format_optional, to_number};
use crate::table::{DeleteMode, ImportStatus, Notice, PendingDelete};

/// Text fields of the add and edit dialogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeForm {
    pub model: String,
    pub load: String,
    pub damp: String,
    pub kx: String,
    pub ky: String,
    pub kz: String,
}

impl TypeForm {
    /// Prefill from a row exactly as the table displays it.
    pub fn from_record(record: &TypeRecord) -> Self {
        Self {
            model: record.model.clone(),
            load: format_optional(record.load),
            damp: format_optional(record.damp),
            kx: format_optional(record.kx),
            ky: format_optional(record.ky),
            kz: format_optional(record.kz),
        }
    }

    pub fn to_record(&self) -> TypeRecord {
        TypeRecord {
            id: None,
            model: self.model.trim().to_owned(),
            load: to_number(&self.load),
            damp: to_number(&self.damp),
            kx: to_number(&self.kx),
            ky: to_number(&self.ky),
            kz: to_number(&self.kz),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.fields().iter().all(|field| field.trim().is_empty())
    }

    pub fn fields(&self) -> [&str; 6] {
        [
            self.model.as_str(),
            self.load.as_str(),
            self.damp.as_str(),
            self.kx.as_str(),
            self.ky.as_str(),
            self.kz.as_str(),
        ]
    }

    pub fn fields_mut(&mut self) -> [&mut String; 6] {
        [
            &mut self.model,
            &mut self.load,
            &mut self.damp,
            &mut self.kx,
            &mut self.ky,
            &mut self.kz,
        ]
    }
}

/// "Add type" dialog: one manual record plus rows staged from a file.
#[derive(Debug, Clone, Default)]
pub struct AddTypeDialog {
    pub open: bool,
    pub form: TypeForm,
    pub staged: Vec<TypeRecord>,
    pub status: ImportStatus,
    pub saving: Option<u64>,
}

impl AddTypeDialog {
    /// The manual record, when any field is filled and the model is not empty.
    pub fn manual_record(&self) -> Option<TypeRecord> {
        if self.form.is_blank() || self.form.model.trim().is_empty() {
            None
        } else {
            Some(self.form.to_record())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTypeDialog {
    pub id: i64,
    pub form: TypeForm,
    pub saving: Option<u64>,
}

/// Everything the type panel owns besides the loaded list.
#[derive(Debug, Clone, Default)]
pub struct TypeTableState {
    /// Search box text; applied only when the user submits it.
    pub search: String,
    pub delete_mode: DeleteMode,
    pub notice: Option<Notice>,
    pub pending_delete: Option<PendingDelete>,
    pub add: AddTypeDialog,
    pub edit: Option<EditTypeDialog>,
    pub(crate) awaiting_list: Option<u64>,
    pub(crate) awaiting_delete: Option<u64>,
    /// Request id of the list the row checks refer to.
    pub(crate) shown_list: u64,
    next_request: u64,
}

impl TypeTableState {
    pub(crate) fn next_request(&mut self) -> u64 {
        self.next_request += 1;
        self.next_request
    }

    pub fn is_deleting(&self) -> bool {
        self.awaiting_delete.is_some()
    }
}

local_state!(TypeTableState);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_roundtrips_displayed_text() {
        let record = TypeRecord {
            id: Some(1),
            model: "GZ-10".to_owned(),
            load: Some(120.0),
            damp: None,
            kx: Some(1.5e7),
            ky: Some(0.25),
            kz: None,
        };
        let form = TypeForm::from_record(&record);
        assert_eq!(form.kx, "1.5000e+7");
        assert_eq!(form.damp, "");

        let parsed = form.to_record();
        assert_eq!(parsed.kx, Some(1.5e7));
        assert_eq!(parsed.load, Some(120.0));
        assert_eq!(parsed.damp, None);
    }

    #[test]
    fn manual_record_needs_a_model() {
        let mut dialog = AddTypeDialog::default();
        assert_eq!(dialog.manual_record(), None);

        dialog.form.load = "12".to_owned();
        assert_eq!(dialog.manual_record(), None);

        dialog.form.model = " GZ-1 ".to_owned();
        assert_eq!(
            dialog.manual_record().map(|r| r.model),
            Some("GZ-1".to_owned())
        );
    }
}
