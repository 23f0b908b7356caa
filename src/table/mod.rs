// src/table/mod.rs

use csv::{ReaderBuilder, StringRecord};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::error::LookupError;

pub mod types;

pub use types::{Language, LanguageType, Scope};

/// Column holding the 3-letter identifier.
pub const ID_COLUMN: &str = "Id";
/// Column holding the optional 2-letter identifier.
pub const PART1_COLUMN: &str = "Part1";

/// One data line of the reference table, addressable by header name.
#[derive(Debug, Clone)]
pub struct ReferenceRow {
    headers: Arc<StringRecord>,
    fields: StringRecord,
}

impl ReferenceRow {
    /// Value under `column`, or `None` if the header has no such column or the
    /// line is too short to reach it. A repeated column name resolves to its
    /// first occurrence.
    pub fn get(&self, column: &str) -> Option<&str> {
        let idx = self.headers.iter().position(|h| h == column)?;
        self.fields.get(idx)
    }

    /// `(column, value)` pairs in header order. Extra trailing values without a
    /// header are not yielded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().zip(self.fields.iter())
    }
}

/// A fully parsed reference table.
#[derive(Debug, Clone)]
pub struct LanguageTable {
    headers: Arc<StringRecord>,
    rows: Vec<ReferenceRow>,
    id_idx: usize,
    part1_idx: usize,
}

impl LanguageTable {
    /// Parse a tab-delimited body. The first line is the header; it must name
    /// both the `Id` and `Part1` columns.
    #[instrument(level = "debug", skip(body), fields(body_len = body.len()))]
    pub fn parse(body: &str) -> Result<Self, LookupError> {
        let body = body.strip_prefix('\u{feff}').unwrap_or(body);

        let mut rdr = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(body.as_bytes());

        let headers = Arc::new(rdr.headers()?.clone());
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(LookupError::MissingColumn { column: name })
        };
        let id_idx = column(ID_COLUMN)?;
        let part1_idx = column(PART1_COLUMN)?;

        let mut rows = Vec::new();
        for record in rdr.records() {
            rows.push(ReferenceRow {
                headers: Arc::clone(&headers),
                fields: record?,
            });
        }
        debug!(rows = rows.len(), columns = headers.len(), "parsed reference table");

        Ok(Self {
            headers,
            rows,
            id_idx,
            part1_idx,
        })
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter()
    }

    pub fn rows(&self) -> &[ReferenceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row whose `Id` or `Part1` equals `code` exactly. Blank fields are
    /// compared as empty strings; fields past the end of a short line never match.
    pub fn find(&self, code: &str) -> Option<&ReferenceRow> {
        self.rows.iter().find(|row| {
            row.fields.get(self.id_idx) == Some(code)
                || row.fields.get(self.part1_idx) == Some(code)
        })
    }

    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const SAMPLE: &str = "Id\tPart2b\tPart2t\tPart1\tScope\tLanguage_Type\tRef_Name\tComment
deu\tger\tdeu\tde\tI\tL\tGerman\t
eng\teng\teng\ten\tI\tL\tEnglish\t
epo\tepo\tepo\teo\tI\tC\tEsperanto\t
tlh\ttlh\ttlh\t\tI\tC\tKlingon\t
";

    #[test]
    fn test_matches_alpha3_and_alpha2() {
        let table = LanguageTable::parse(SAMPLE).unwrap();
        assert_eq!(table.len(), 4);
        assert!(table.contains("eng"));
        assert!(table.contains("en"));
        assert!(table.contains("tlh"));
        assert!(!table.contains("xx"));
    }

    #[test]
    fn test_exact_match_only() {
        let table = LanguageTable::parse(SAMPLE).unwrap();
        assert!(!table.contains("ENG"));
        assert!(!table.contains("En"));
        assert!(!table.contains(" en"));
        assert!(!table.contains("en "));
        // Part2b codes are not consulted.
        assert!(!table.contains("ger"));
    }

    #[test]
    fn test_empty_code_matches_blank_part1() {
        let table = LanguageTable::parse(SAMPLE).unwrap();
        assert_eq!(table.find("").and_then(|r| r.get("Id")), Some("tlh"));

        let table = LanguageTable::parse("Id\tPart1\ntlh\t\n").unwrap();
        assert!(table.contains(""));

        // Part1 missing entirely on a short line is not an empty value.
        let table = LanguageTable::parse("Id\tPart1\ntlh\n").unwrap();
        assert!(!table.contains(""));

        let table = LanguageTable::parse("Id\tPart1\neng\ten\n").unwrap();
        assert!(!table.contains(""));
    }

    #[test]
    fn test_repeated_column_uses_first() {
        let table = LanguageTable::parse("Id\tPart1\tId\neng\ten\tzzz\n").unwrap();
        let row = table.find("eng").unwrap();
        assert_eq!(row.get("Id"), Some("eng"));
        assert!(!table.contains("zzz"));
    }

    #[test]
    fn test_minimal_header() {
        let table = LanguageTable::parse("Id\tPart1\tRef_Name\neng\ten\tEnglish\n").unwrap();
        assert!(table.contains("eng"));
        assert!(table.contains("en"));
        assert!(!table.contains("xx"));
    }

    #[test]
    fn test_row_access_by_column() {
        let table = LanguageTable::parse(SAMPLE).unwrap();
        let row = table.find("eo").unwrap();
        assert_eq!(row.get("Id"), Some("epo"));
        assert_eq!(row.get("Ref_Name"), Some("Esperanto"));
        assert_eq!(row.get("Nope"), None);

        let cols: Vec<&str> = row.iter().map(|(c, _)| c).collect();
        assert_eq!(cols, table.headers().collect::<Vec<_>>());
    }

    #[test]
    fn test_short_rows_lack_trailing_columns() {
        let table = LanguageTable::parse("Id\tPart1\tRef_Name\nfoo\nbar\tba\n").unwrap();
        assert_eq!(table.rows()[0].get("Part1"), None);
        assert!(table.contains("foo"));
        assert!(table.contains("ba"));
    }

    #[test]
    fn test_crlf_and_bom() {
        let table = LanguageTable::parse("\u{feff}Id\tPart1\r\neng\ten\r\n").unwrap();
        assert!(table.contains("en"));
        assert!(table.contains("eng"));
    }

    #[test]
    fn test_header_only_is_empty() {
        let table = LanguageTable::parse("Id\tPart1\n").unwrap();
        assert!(table.is_empty());
        assert!(!table.contains("eng"));
    }

    #[test]
    fn test_missing_columns_fail() {
        let err = LanguageTable::parse("").unwrap_err();
        assert!(matches!(err, LookupError::MissingColumn { column: "Id" }));
        assert_eq!(err.kind(), ErrorKind::Parse);

        let err = LanguageTable::parse("Id\tRef_Name\neng\tEnglish\n").unwrap_err();
        assert!(matches!(err, LookupError::MissingColumn { column: "Part1" }));

        // An HTML error page is not a code table.
        let err = LanguageTable::parse("<html><body>Not Found</body></html>\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
