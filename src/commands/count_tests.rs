use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::*;
use crate::config::{LanguageEntry, LoadResult, RealFileSystem};

struct StubLoader {
    discovered: Config,
}

impl ConfigLoader for StubLoader {
    fn load(&self) -> Result<LoadResult> {
        Ok(LoadResult {
            config: self.discovered.clone(),
            source: Some(PathBuf::from("/project/.locc.toml")),
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let mut config = Config::default();
        config.count.language_file = Some(path.join("from-explicit.json"));
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

fn discovered_config() -> Config {
    let mut config = Config::default();
    config.count.unknown = UnknownPolicy::Fallback;
    config.scanner.exclude = vec!["target/**".to_string()];
    config
}

fn write(dir: &TempDir, relative: &str, content: &str) -> PathBuf {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn hidden_progress() -> ScanProgress {
    ScanProgress::new(0, true)
}

#[test]
fn resolve_config_uses_discovered_file() {
    let loader = StubLoader {
        discovered: discovered_config(),
    };
    let config = resolve_config(&loader, &CountOptions::default()).unwrap();

    assert_eq!(config.count.unknown, UnknownPolicy::Fallback);
    assert_eq!(config.scanner.exclude, vec!["target/**"]);
}

#[test]
fn resolve_config_prefers_explicit_path() {
    let loader = StubLoader {
        discovered: discovered_config(),
    };
    let options = CountOptions {
        config_path: Some(PathBuf::from("/custom")),
        ..CountOptions::default()
    };
    let config = resolve_config(&loader, &options).unwrap();

    assert_eq!(
        config.count.language_file,
        Some(PathBuf::from("/custom/from-explicit.json"))
    );
    assert_eq!(config.count.unknown, UnknownPolicy::Skip);
}

#[test]
fn resolve_config_no_config_ignores_loader() {
    let loader = StubLoader {
        discovered: discovered_config(),
    };
    let options = CountOptions {
        no_config: true,
        ..CountOptions::default()
    };
    let config = resolve_config(&loader, &options).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn options_override_config() {
    let loader = StubLoader {
        discovered: discovered_config(),
    };
    let options = CountOptions {
        extensions: Some(vec!["rs".to_string()]),
        exclude: vec!["vendor/**".to_string()],
        marker_policy: Some(MarkerPolicy::FirstOnly),
        unknown: Some(UnknownPolicy::Skip),
        no_gitignore: true,
        language_file: Some(PathBuf::from("langs.json")),
        ..CountOptions::default()
    };
    let config = resolve_config(&loader, &options).unwrap();

    assert_eq!(config.count.extensions, vec!["rs"]);
    assert_eq!(config.count.marker_policy, MarkerPolicy::FirstOnly);
    assert_eq!(config.count.unknown, UnknownPolicy::Skip);
    assert_eq!(config.count.language_file, Some(PathBuf::from("langs.json")));
    assert!(!config.scanner.gitignore);
    assert_eq!(config.scanner.exclude, vec!["target/**", "vendor/**"]);
}

#[test]
fn build_catalog_defaults_to_builtins() {
    let catalog = build_catalog(&Config::default(), &RealFileSystem).unwrap();

    assert_eq!(catalog.lookup("rs").unwrap().name, "Rust");
    assert!(catalog.lookup("unknown-ext").is_none());
    assert!(catalog.fallback().is_none());
}

#[test]
fn build_catalog_with_fallback_policy() {
    let mut config = Config::default();
    config.count.unknown = UnknownPolicy::Fallback;
    let catalog = build_catalog(&config, &RealFileSystem).unwrap();

    assert_eq!(catalog.lookup("unknown-ext").unwrap().name, "Plain Text");
}

#[test]
fn custom_languages_override_builtins() {
    let mut config = Config::default();
    config.languages.insert(
        "Rusty".to_string(),
        LanguageEntry {
            extensions: vec!["rs".to_string()],
            line_comment: vec!["#".to_string()],
            multi_line: Vec::new(),
        },
    );
    let catalog = build_catalog(&config, &RealFileSystem).unwrap();

    assert_eq!(catalog.lookup("rs").unwrap().name, "Rusty");
    assert_eq!(catalog.collisions().len(), 1);
    assert_eq!(catalog.collisions()[0].overridden, "Rust");
}

#[test]
fn build_catalog_from_language_file_replaces_builtins() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "languages.json",
        r#"{"SQL": {"extensions": ["sql"], "line_comment": ["--"]}}"#,
    );
    let mut config = Config::default();
    config.count.language_file = Some(path);

    let catalog = build_catalog(&config, &RealFileSystem).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.lookup("sql").unwrap().name, "SQL");
    assert!(catalog.lookup("rs").is_none());
}

#[test]
fn build_catalog_missing_language_file_fails() {
    let mut config = Config::default();
    config.count.language_file = Some(PathBuf::from("/nonexistent/languages.json"));

    assert!(build_catalog(&config, &RealFileSystem).is_err());
}

#[test]
fn count_files_classifies_and_groups() {
    let dir = TempDir::new().unwrap();
    let rust = write(&dir, "main.rs", "// header\n\nfn main() {}\n/* a\n b */\n");
    let python = write(&dir, "tool.py", "# comment\nprint(1)\n");
    let files = vec![rust.clone(), python.clone()];

    let catalog = RuleCatalog::default();
    let outcome = count_files(&files, &catalog, MarkerPolicy::All, &hidden_progress());

    let report = &outcome.files[&rust];
    assert_eq!(report.file_type, "Rust");
    assert_eq!((report.code, report.comments, report.blanks), (1, 3, 1));
    assert_eq!(outcome.files[&python].total(), 2);

    assert_eq!(outcome.summary.total().files, 2);
    assert_eq!(outcome.summary.total().report.total(), 7);
    assert!(outcome.skipped.is_empty());
    assert!(outcome.failed.is_empty());
}

#[test]
fn count_files_keeps_scan_order() {
    let dir = TempDir::new().unwrap();
    let files: Vec<PathBuf> = (0..20)
        .map(|i| write(&dir, &format!("f{i:02}.rs"), "let x = 1;\n"))
        .collect();

    let outcome = count_files(
        &files,
        &RuleCatalog::default(),
        MarkerPolicy::All,
        &hidden_progress(),
    );

    let keys: Vec<&PathBuf> = outcome.files.keys().collect();
    let expected: Vec<&PathBuf> = files.iter().collect();
    assert_eq!(keys, expected);
}

#[test]
fn unknown_extension_is_skipped_not_zeroed() {
    let dir = TempDir::new().unwrap();
    let image = write(&dir, "logo.xyz", "binary-ish");
    let no_ext = write(&dir, "Makefile", "all:\n");

    let outcome = count_files(
        &[image.clone(), no_ext.clone()],
        &RuleCatalog::default(),
        MarkerPolicy::All,
        &hidden_progress(),
    );

    assert!(outcome.files.is_empty());
    assert_eq!(
        outcome.skipped,
        vec![(image, Some("xyz".to_string())), (no_ext, None)]
    );
    assert!(outcome.summary.is_empty());
}

#[test]
fn fallback_counts_unknown_files() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "notes.xyz", "// note\ntext\n");
    let catalog = RuleCatalog::default().with_fallback(LanguageRule::plain_text());

    let outcome = count_files(
        &[file.clone()],
        &catalog,
        MarkerPolicy::All,
        &hidden_progress(),
    );

    let report = &outcome.files[&file];
    assert_eq!(report.file_type, "Plain Text");
    assert_eq!((report.code, report.comments), (1, 1));
}

#[test]
fn unreadable_file_is_recorded_as_failed() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone.rs");
    let present = write(&dir, "here.rs", "fn a() {}\n");

    let outcome = count_files(
        &[missing.clone(), present.clone()],
        &RuleCatalog::default(),
        MarkerPolicy::All,
        &hidden_progress(),
    );

    assert_eq!(outcome.failed.len(), 1);
    assert_eq!(outcome.failed[0].0, missing);
    assert!(outcome.files.contains_key(&present));
}

#[test]
fn invalid_utf8_is_tolerated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin.rs");
    fs::write(&path, b"// caf\xe9\nlet x = 1;\n").unwrap();

    let outcome = count_files(
        &[path.clone()],
        &RuleCatalog::default(),
        MarkerPolicy::All,
        &hidden_progress(),
    );

    let report = &outcome.files[&path];
    assert_eq!((report.code, report.comments), (1, 1));
}

#[test]
fn run_with_scans_directory() {
    let dir = TempDir::new().unwrap();
    write(&dir, "src/lib.rs", "pub fn a() {}\n");
    write(&dir, "target/out.rs", "pub fn b() {}\n");
    write(&dir, "script.py", "# hi\n");

    let mut config = Config::default();
    config.scanner.exclude = vec!["**/target/**".to_string()];
    let options = CountOptions {
        paths: vec![dir.path().to_path_buf()],
        quiet: true,
        ..CountOptions::default()
    };

    let outcome = run_with(&config, &RealFileSystem, &options).unwrap();
    assert_eq!(outcome.files.len(), 2);
    assert_eq!(outcome.summary.get("Rust").unwrap().files, 1);
    assert_eq!(outcome.summary.get("Python").unwrap().report.comments, 1);
}

#[test]
fn run_with_missing_path_fails() {
    let options = CountOptions {
        paths: vec![PathBuf::from("/definitely/not/here")],
        quiet: true,
        ..CountOptions::default()
    };

    let err = run_with(&Config::default(), &RealFileSystem, &options).unwrap_err();
    assert!(err.to_string().contains("Path not found"));
}

#[test]
fn directory_scan_ignores_extensions_no_rule_claims() {
    let dir = TempDir::new().unwrap();
    let source = write(&dir, "a.rs", "fn a() {}\n");
    fs::write(dir.path().join("logo.png"), [0x89, b'P', b'N', b'G', b'\n', 0xff]).unwrap();
    write(&dir, "LICENSE", "MIT\n");

    let mut config = Config::default();
    config.count.unknown = UnknownPolicy::Fallback;
    let options = CountOptions {
        paths: vec![dir.path().to_path_buf()],
        quiet: true,
        ..CountOptions::default()
    };

    let outcome = run_with(&config, &RealFileSystem, &options).unwrap();
    assert_eq!(outcome.files.keys().collect::<Vec<_>>(), vec![&source]);
    assert!(outcome.summary.get("Plain Text").is_none());
    assert!(outcome.skipped.is_empty());
}

#[test]
fn explicit_extensions_replace_catalog_extensions() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.rs", "fn a() {}\n");
    let data = write(&dir, "table.dat", "// header\n1,2\n");

    let mut config = Config::default();
    config.count.unknown = UnknownPolicy::Fallback;
    config.count.extensions = vec!["dat".to_string()];
    let options = CountOptions {
        paths: vec![dir.path().to_path_buf()],
        quiet: true,
        ..CountOptions::default()
    };

    let outcome = run_with(&config, &RealFileSystem, &options).unwrap();
    assert_eq!(outcome.files.keys().collect::<Vec<_>>(), vec![&data]);
    assert_eq!(outcome.files[&data].file_type, "Plain Text");
}

#[test]
fn file_root_bypasses_catalog_extensions() {
    let dir = TempDir::new().unwrap();
    let notes = write(&dir, "notes.xyz", "text\n");

    let options = CountOptions {
        paths: vec![notes.clone()],
        quiet: true,
        ..CountOptions::default()
    };

    let outcome = run_with(&Config::default(), &RealFileSystem, &options).unwrap();
    assert!(outcome.files.is_empty());
    assert_eq!(outcome.skipped, vec![(notes, Some("xyz".to_string()))]);
}

#[test]
fn render_switches_between_modes() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "a.rs", "fn a() {}\n");
    let outcome = count_files(
        &[file],
        &RuleCatalog::default(),
        MarkerPolicy::All,
        &hidden_progress(),
    );

    let summary = outcome.render(OutputFormat::Csv, false).unwrap();
    assert!(summary.starts_with("Language,"));

    let by_file = outcome.render(OutputFormat::Csv, true).unwrap();
    assert!(by_file.starts_with("File,"));
    assert!(by_file.contains("a.rs,Rust,1,1,0,0"));
}

#[test]
fn format_languages_lists_rules() {
    let catalog = RuleCatalog::build(vec![
        LanguageRule::new("SQL", vec!["sql"], vec!["--"], vec![]),
        LanguageRule::new("Rust", vec!["rs"], vec!["//"], vec![("/*", "*/")]),
    ])
    .with_fallback(LanguageRule::plain_text());

    let output = format_languages(&catalog);
    assert!(output.starts_with("SQL\n  extensions: sql\n  line comments: --\n  multi-line: -\n"));
    assert!(output.contains("Rust\n  extensions: rs\n  line comments: //\n  multi-line: /* */\n"));
    assert!(output.contains("Plain Text (fallback)"));
}
