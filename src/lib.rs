pub mod config;
pub mod error;
pub mod fetch;
pub mod function;
pub mod table;
pub mod validator;

pub use config::Config;
pub use error::{ErrorKind, LookupError};
pub use fetch::{HttpTableSource, TableSource};
pub use function::{is_conlang, is_real_language};
pub use table::{Language, LanguageTable, ReferenceRow};
pub use validator::LanguageCodeValidator;
