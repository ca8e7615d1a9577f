/// Split decoded CSV text into trimmed cells.
///
/// Byte-order marks are removed anywhere in the text, lines split on `\n`
/// or `\r\n`, and blank lines are skipped.
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let text = text.replace('\u{FEFF}', "");
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(split_line)
        .collect()
}

/// Comma splitter for one line. A `"` toggles quoting and is dropped, so
/// commas inside quotes stay part of the cell.
pub fn split_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for ch in line.chars() {
        match ch {
            '"' => quoted = !quoted,
            ',' if !quoted => cells.push(std::mem::take(&mut current).trim().to_owned()),
            _ => current.push(ch),
        }
    }
    cells.push(current.trim().to_owned());
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_commas_stay_in_cell() {
        assert_eq!(
            split_line(r#"GZ-10, "1,200" ,0.3"#),
            vec!["GZ-10", "1,200", "0.3"]
        );
    }

    #[test]
    fn trailing_comma_yields_empty_cell() {
        assert_eq!(split_line("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn bom_and_blank_lines_are_dropped() {
        let rows = parse_csv("\u{FEFF}model,load\r\n\r\nGZ-10,120\n   \nGZ-11,130\r\n");
        assert_eq!(
            rows,
            vec![
                vec!["model", "load"],
                vec!["GZ-10", "120"],
                vec!["GZ-11", "130"],
            ]
        );
    }
}
