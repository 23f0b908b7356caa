// src/table/types.rs

use serde::Serialize;
use std::fmt;

use super::ReferenceRow;

/// Scope of an ISO 639-3 entry.
#[derive(Debug, Serialize, PartialEq, Clone, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Individual,
    Macrolanguage,
    Special,
    Other(String),
}

impl Scope {
    pub fn from_code(s: &str) -> Self {
        match s {
            "I" => Scope::Individual,
            "M" => Scope::Macrolanguage,
            "S" => Scope::Special,
            other => Scope::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Individual => f.write_str("individual"),
            Scope::Macrolanguage => f.write_str("macrolanguage"),
            Scope::Special => f.write_str("special"),
            Scope::Other(s) => f.write_str(s),
        }
    }
}

/// Language type of an ISO 639-3 entry.
#[derive(Debug, Serialize, PartialEq, Clone, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LanguageType {
    Ancient,
    Constructed,
    Extinct,
    Historical,
    Living,
    Special,
    Other(String),
}

impl LanguageType {
    pub fn from_code(s: &str) -> Self {
        match s {
            "A" => LanguageType::Ancient,
            "C" => LanguageType::Constructed,
            "E" => LanguageType::Extinct,
            "H" => LanguageType::Historical,
            "L" => LanguageType::Living,
            "S" => LanguageType::Special,
            other => LanguageType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for LanguageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageType::Ancient => f.write_str("ancient"),
            LanguageType::Constructed => f.write_str("constructed"),
            LanguageType::Extinct => f.write_str("extinct"),
            LanguageType::Historical => f.write_str("historical"),
            LanguageType::Living => f.write_str("living"),
            LanguageType::Special => f.write_str("special"),
            LanguageType::Other(s) => f.write_str(s),
        }
    }
}

/// Typed view of one code-table row. Blank fields become `None`.
#[derive(Debug, Serialize, PartialEq, Clone, Eq)]
pub struct Language {
    pub id: String,
    pub part2b: Option<String>,
    pub part2t: Option<String>,
    pub part1: Option<String>,
    pub scope: Option<Scope>,
    pub language_type: Option<LanguageType>,
    pub ref_name: Option<String>,
    pub comment: Option<String>,
}

impl Language {
    pub fn from_row(row: &ReferenceRow) -> Self {
        let text = |column: &str| {
            row.get(column)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };

        Self {
            id: text("Id").unwrap_or_default(),
            part2b: text("Part2b"),
            part2t: text("Part2t"),
            part1: text("Part1"),
            scope: text("Scope").map(|s| Scope::from_code(&s)),
            language_type: text("Language_Type").map(|s| LanguageType::from_code(&s)),
            ref_name: text("Ref_Name"),
            comment: text("Comment"),
        }
    }
}
