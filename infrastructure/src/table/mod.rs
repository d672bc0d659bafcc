//! Decision table files
//!
//! Tables are TOML documents holding the questionnaire, the diagnosis
//! records, the prioritized rule list and the fallback record key.

mod file_table;
mod loader;

pub use file_table::{FileOption, FileQuestion, FileRule, FileTable};
pub use loader::{TableLoadError, TableLoader};
