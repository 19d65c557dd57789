//! Delimited-text parsing into field-name → value records.
//!
//! One parse produces a shared [`Header`] and a sequence of [`Record`]s.
//! Every record of a parse carries the identical field set, in header
//! order; short rows are padded per [`FillPolicy`] and oversized rows are
//! truncated, so downstream code never observes a missing key.

use std::sync::Arc;

/// Value substituted when a data line has fewer fields than the header.
///
/// Both behaviors exist in the wild; the default mirrors the majority of
/// observed exports. Coercion treats `""` and `"N/A"` identically, so the
/// choice only shows through in raw display output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillPolicy {
    /// Missing trailing fields become the empty string.
    Empty,
    /// Missing trailing fields become the literal `N/A`.
    #[default]
    NotAvailable,
}

impl FillPolicy {
    pub fn fill_value(&self) -> &'static str {
        match self {
            FillPolicy::Empty => "",
            FillPolicy::NotAvailable => "N/A",
        }
    }
}

/// Normalized field names of one parse, shared by every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    names: Arc<Vec<String>>,
}

impl Header {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names: Arc::new(names),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn position(&self, field: &str) -> Option<usize> {
        self.names.iter().position(|name| name == field)
    }
}

/// One parsed data row: an ordered field-name → raw-string mapping.
///
/// Records are immutable once produced; typed access is an on-demand
/// coercion (see [`crate::core::coercion`]), never a stored property.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    header: Header,
    values: Vec<String>,
}

impl Record {
    pub fn new(header: Header, values: Vec<String>) -> Self {
        debug_assert_eq!(header.len(), values.len());
        Self { header, values }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Raw value of a field, or `None` when the header has no such field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.header
            .position(field)
            .map(|index| self.values[index].as_str())
    }

    /// Raw value of a field, treating an absent field as empty. The core
    /// must not assume any field is present in a given export.
    pub fn raw(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Field name/value pairs in header order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.header
            .names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}

/// Canonical field-name key: every character that is not a letter or digit
/// is stripped, so `"Street / Place"` becomes `StreetPlace`.
pub fn normalize_header(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Comma split with quote awareness: a double quote toggles quoted mode,
/// commas inside quotes are field content, and the quotes themselves are
/// dropped. Each field is trimmed after splitting. Malformed quoting (an
/// unterminated quote) degrades to a best-effort split of the remainder.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Parse a raw export blob into records.
///
/// Lines that are empty or whitespace-only are discarded; the first
/// retained line is the header. The record count always equals the number
/// of non-blank lines minus one. Zero data rows is a valid result, not an
/// error — total absence of input is a data state handled by the caller.
pub fn parse_records(text: &str, fill: FillPolicy) -> Vec<Record> {
    let mut lines = text.split('\n').filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let header = Header::new(split_fields(header_line).iter().map(|name| normalize_header(name)).collect());

    lines
        .map(|line| {
            let mut values = split_fields(line);
            values.truncate(header.len());
            values.resize(header.len(), fill.fill_value().to_string());
            Record::new(header.clone(), values)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_header_names() {
        assert_eq!(normalize_header("Street / Place"), "StreetPlace");
        assert_eq!(normalize_header("How many visit completed?"), "Howmanyvisitcompleted");
        assert_eq!(normalize_header("EMPLOYEE NAME"), "EMPLOYEENAME");
        assert_eq!(normalize_header("Age (approx.)"), "Ageapprox");
    }

    #[test]
    fn splits_quoted_commas_as_content() {
        assert_eq!(split_fields(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn drops_quote_characters_and_trims() {
        assert_eq!(split_fields(r#" "hello" ,  world "#), vec!["hello", "world"]);
    }

    #[test]
    fn unterminated_quote_degrades_to_one_field() {
        assert_eq!(split_fields(r#"a,"b,c"#), vec!["a", "b,c"]);
    }

    #[test]
    fn record_count_is_nonblank_lines_minus_header() {
        let text = "Name,Status\n\nA,Open\n   \nB,Closed\n";
        let records = parse_records(text, FillPolicy::default());
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn short_rows_fill_per_policy() {
        let records = parse_records("A,B,C\n1,2", FillPolicy::NotAvailable);
        assert_eq!(records[0].raw("C"), "N/A");

        let records = parse_records("A,B,C\n1,2", FillPolicy::Empty);
        assert_eq!(records[0].raw("C"), "");
    }

    #[test]
    fn extra_fields_are_dropped() {
        let records = parse_records("A,B\n1,2,3,4", FillPolicy::default());
        assert_eq!(records[0].fields().count(), 2);
        assert_eq!(records[0].raw("B"), "2");
    }

    #[test]
    fn absent_field_reads_as_empty() {
        let records = parse_records("A\n1", FillPolicy::default());
        assert_eq!(records[0].get("Missing"), None);
        assert_eq!(records[0].raw("Missing"), "");
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse_records("", FillPolicy::default()).is_empty());
        assert!(parse_records("\n  \n", FillPolicy::default()).is_empty());
    }

    #[test]
    fn carriage_returns_are_trimmed() {
        let records = parse_records("Name,Status\r\nA,Open\r\n", FillPolicy::default());
        assert_eq!(records[0].raw("Status"), "Open");
    }
}
