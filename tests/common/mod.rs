#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the locc binary.
#[macro_export]
macro_rules! locc {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("locc"))
    };
}

/// Temporary project directory for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file (and its parent directories) relative to the fixture root.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".locc.toml", content);
    }

    /// A small mixed project: two Rust files, one Python file, one unknown file.
    pub fn create_sample_project(&self) {
        self.create_file(
            "src/main.rs",
            "// entry point\n\nfn main() {\n    /* start\n       end */\n    run();\n}\n",
        );
        self.create_file("src/lib.rs", "pub fn run() {}\n");
        self.create_file("scripts/tool.py", "# helper\nprint('hi')\n\n");
        self.create_file("assets/logo.xyz", "not source\n");
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
