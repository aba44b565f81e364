//! Delimited text parsing
//!
//! Comma-separated, header on the first line, quoting per RFC 4180.
//! Blank and whitespace-only lines are skipped. A record whose field count
//! differs from the header is rejected.

use csv::{ReaderBuilder, StringRecord};

use super::errors::{ValidationError, ValidationResult};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parsed rectangular form of an uploaded file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names, in file order
    pub headers: Vec<String>,
    /// Data rows, one `Vec` per record with one entry per header
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Position of a column in the header, by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Values of one column, in row order. `None` if the column is absent.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[idx].as_str()))
    }

    /// Number of data rows (header excluded)
    pub fn record_count(&self) -> usize {
        self.rows.len()
    }
}

/// Interpret raw bytes as UTF-8 text, skipping a leading byte-order mark.
pub fn decode(raw: &[u8]) -> ValidationResult<&str> {
    let bytes = raw.strip_prefix(UTF8_BOM).unwrap_or(raw);
    std::str::from_utf8(bytes).map_err(|e| ValidationError::Decode(e.to_string()))
}

/// A line holding nothing but whitespace reads as a single blank field.
fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].trim().is_empty()
}

/// Parse decoded text into a table.
pub fn parse(text: &str) -> ValidationResult<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = reader.records();

    let headers: Vec<String> = loop {
        match records.next() {
            Some(record) => {
                let record = record?;
                if !is_blank(&record) {
                    break record.iter().map(str::to_string).collect();
                }
            }
            None => {
                return Err(ValidationError::Parse(
                    "No columns to parse from input".to_string(),
                ))
            }
        }
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        if is_blank(&record) {
            continue;
        }
        if record.len() != headers.len() {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(ValidationError::Parse(format!(
                "Expected {} fields in line {}, saw {}",
                headers.len(),
                line,
                record.len()
            )));
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_and_rows() {
        let table = parse("TransactionID,ProductName,Amount\n1,Widget,10.50\n2,Gadget,5\n").unwrap();

        assert_eq!(table.headers, vec!["TransactionID", "ProductName", "Amount"]);
        assert_eq!(table.record_count(), 2);
        assert_eq!(table.rows[0], vec!["1", "Widget", "10.50"]);
    }

    #[test]
    fn test_parse_without_trailing_newline() {
        let table = parse("A,B\n1,2").unwrap();
        assert_eq!(table.record_count(), 1);
    }

    #[test]
    fn test_header_only() {
        let table = parse("TransactionID,ProductName,Amount\n").unwrap();
        assert_eq!(table.headers.len(), 3);
        assert_eq!(table.record_count(), 0);
    }

    #[test]
    fn test_quoted_fields() {
        let table = parse("ProductName,Amount\n\"Widget, large\",3\n").unwrap();
        assert_eq!(table.rows[0][0], "Widget, large");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = parse("A,B\n1,2\n\n3,4\n\n").unwrap();
        assert_eq!(table.record_count(), 2);
    }

    #[test]
    fn test_whitespace_only_lines_skipped() {
        let table = parse("A,B\n1,2\n   \n\t\n3,4\n  ").unwrap();
        assert_eq!(table.record_count(), 2);
        assert_eq!(table.rows[1], vec!["3", "4"]);
    }

    #[test]
    fn test_whitespace_before_header_skipped() {
        let table = parse("  \nA,B\n1,2\n").unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.record_count(), 1);
    }

    #[test]
    fn test_row_of_empty_fields_kept() {
        let table = parse("A,B\n1,2\n , \n").unwrap();
        assert_eq!(table.record_count(), 2);
        assert_eq!(table.rows[1], vec![" ", " "]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let table = parse("A,B\r\n1,2\r\n").unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows[0], vec!["1", "2"]);
    }

    #[test]
    fn test_ragged_row_rejected() {
        let result = parse("A,B,C\n1,2,3\n4,5\n");
        match result {
            Err(ValidationError::Parse(msg)) => {
                assert!(msg.contains("Expected 3 fields"), "got: {}", msg);
                assert!(msg.contains("line 3"), "got: {}", msg);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_fields_rejected() {
        assert!(matches!(
            parse("A,B\n1,2,3\n"),
            Err(ValidationError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(parse(""), Err(ValidationError::Parse(_))));
        assert!(matches!(parse("  \n\n"), Err(ValidationError::Parse(_))));
    }

    #[test]
    fn test_column_lookup() {
        let table = parse("Amount,Other\n1,x\n2,y\n").unwrap();
        let amounts: Vec<&str> = table.column("Amount").unwrap().collect();
        assert_eq!(amounts, vec!["1", "2"]);
        assert!(table.column("amount").is_none());
    }

    #[test]
    fn test_decode_strips_bom() {
        let text = decode(b"\xEF\xBB\xBFA,B\n").unwrap();
        assert_eq!(text, "A,B\n");
    }

    #[test]
    fn test_decode_invalid_utf8() {
        assert!(matches!(
            decode(&[b'A', 0xFF, b'\n']),
            Err(ValidationError::Decode(_))
        ));
    }
}
