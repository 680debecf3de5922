pub mod count;

pub use count::{
    CountOptions, CountOutcome, build_catalog, count_files, format_languages, list_languages,
    resolve_config, run, run_with,
};
