//! Table behaviour shared by the type and data tables.

mod delete_mode;
mod notice;
mod request;

pub use delete_mode::{DeleteMode, DeletePress};
pub use notice::{Notice, NoticeKind, PendingDelete};
pub use request::{ImportStatus, LoadStatus, RequestState};

use crate::model::TypeRecord;

/// Client-side filter of the data table: the trimmed query must be a
/// case-sensitive substring of the upper or the lower model.
pub fn row_matches(upper: &str, lower: &str, query: &str) -> bool {
    let query = query.trim();
    upper.contains(query) || lower.contains(query)
}

/// Indices of the rows matching `query`.
pub fn visible_rows<'a, I>(pairs: I, query: &str) -> Vec<usize>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .enumerate()
        .filter(|(_, (upper, lower))| row_matches(upper, lower, query))
        .map(|(index, _)| index)
        .collect()
}

/// Sorted, de-duplicated, non-empty models of the loaded type list.
pub fn model_options(records: &[TypeRecord]) -> Vec<String> {
    let mut models: Vec<String> = records
        .iter()
        .map(|r| r.model.trim())
        .filter(|m| !m.is_empty())
        .map(str::to_owned)
        .collect();
    models.sort();
    models.dedup();
    models
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_is_case_sensitive_substring() {
        assert!(row_matches("GZ-10", "GZ-20", "GZ"));
        assert!(row_matches("GZ-10", "JX-20", " JX "));
        assert!(!row_matches("GZ-10", "GZ-20", "gz"));
        assert!(row_matches("a", "b", ""));
    }

    #[test]
    fn three_of_five_filtered_out() {
        let pairs = [
            ("GZ-1", "A"),
            ("JX-2", "B"),
            ("GZ-3", "C"),
            ("JX-4", "D"),
            ("JX-5", "E"),
        ];
        assert_eq!(visible_rows(pairs, "GZ"), vec![0, 2]);
    }

    #[test]
    fn model_options_are_sorted_and_unique() {
        let records: Vec<TypeRecord> = ["b", "a", " ", "b", "c "]
            .iter()
            .map(|m| TypeRecord::from_cells(&[*m]))
            .collect();
        assert_eq!(model_options(&records), vec!["a", "b", "c"]);
    }
}
