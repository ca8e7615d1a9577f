use crate::numeric::to_number;

/// Keywords that mark the first row of a type sheet as a header.
pub const TYPE_HEADER_KEYWORDS: &[&str] = &[
    "型号", "载荷", "阻尼", "动刚度X", "动刚度Y", "动刚度Z", "model", "load", "damp", "kx", "ky",
    "kz",
];

/// Keywords that mark the first row of a data sheet as a header.
pub const DATA_HEADER_KEYWORDS: &[&str] = &[
    "频率", "响应", "范围", "激励", "freq", "response", "range", "excit",
];

/// Decides whether the first row of an imported sheet is a header.
///
/// A row is a header when it names at least two known keywords, or when
/// most of its filled value cells (every cell after the first) carry no
/// number at all. Cells like `120kg` count as numbers, as they do when the
/// row is read into a record.
#[derive(Debug, Clone, Copy)]
pub struct HeaderRule {
    keywords: &'static [&'static str],
}

impl HeaderRule {
    pub const TYPES: Self = Self {
        keywords: TYPE_HEADER_KEYWORDS,
    };

    pub const DATA: Self = Self {
        keywords: DATA_HEADER_KEYWORDS,
    };

    pub fn looks_like_header<S: AsRef<str>>(&self, cells: &[S]) -> bool {
        if cells.is_empty() {
            return false;
        }
        let lowered: Vec<String> = cells
            .iter()
            .map(|c| c.as_ref().trim().to_lowercase())
            .collect();

        let hits = self
            .keywords
            .iter()
            .filter(|keyword| {
                let keyword = keyword.to_lowercase();
                lowered.iter().any(|cell| cell.contains(&keyword))
            })
            .count();
        if hits >= 2 {
            return true;
        }

        let values: Vec<&str> = cells
            .iter()
            .skip(1)
            .map(|c| c.as_ref().trim())
            .filter(|c| !c.is_empty())
            .collect();
        if values.is_empty() {
            return false;
        }
        let text_cells = values.iter().filter(|c| to_number(c).is_none()).count();
        text_cells * 2 > values.len()
    }

    /// Drop the first row when it is a header.
    pub fn strip(&self, mut rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
        if rows.first().is_some_and(|first| self.looks_like_header(first.as_slice())) {
            rows.remove(0);
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chinese_type_header_is_detected() {
        assert!(HeaderRule::TYPES.looks_like_header(&["型号", "载荷", "阻尼", "动刚度X"]));
    }

    #[test]
    fn english_header_is_case_insensitive() {
        assert!(HeaderRule::TYPES.looks_like_header(&["Model", "Load", "Damp"]));
    }

    #[test]
    fn numeric_first_row_is_data() {
        assert!(!HeaderRule::TYPES.looks_like_header(&["GZ-10", "120", "0.35", "1.2e7", "", "3e6"]));
    }

    #[test]
    fn values_with_units_are_data() {
        assert!(!HeaderRule::TYPES.looks_like_header(&["GZ-10", "120kg", "0.3Ns", "1e7"]));
    }

    #[test]
    fn mostly_text_row_without_keywords_is_header() {
        assert!(HeaderRule::TYPES.looks_like_header(&["名称", "重量", "系数", "12"]));
    }

    #[test]
    fn single_keyword_with_numbers_is_data() {
        assert!(!HeaderRule::TYPES.looks_like_header(&["KX-200", "150", "0.2"]));
    }

    #[test]
    fn data_header_variants() {
        assert!(HeaderRule::DATA.looks_like_header(&["频率范围", "最大激励"]));
        assert!(HeaderRule::DATA.looks_like_header(&["Freq range", "Max response"]));
        assert!(!HeaderRule::DATA.looks_like_header(&["10-315", "62.5"]));
    }

    #[test]
    fn strip_keeps_data_only_sheets() {
        let rows = vec![vec!["10-20".to_owned(), "1.5".to_owned()]];
        assert_eq!(HeaderRule::DATA.strip(rows.clone()), rows);
    }
}
