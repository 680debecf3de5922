mod language_file;
mod loader;
mod model;

pub use language_file::{
    LanguageEntry, load_language_file, parse_json, parse_toml, rules_from_entries,
};
pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LoadResult, RealFileSystem};
pub use model::{Config, CountConfig, ScannerConfig, UnknownPolicy};
