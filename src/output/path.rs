use std::path::Path;

/// Display a path with forward slashes and without a leading `./`.
#[must_use]
pub fn display_path(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");

    let stripped = normalized.strip_prefix("./").unwrap_or(&normalized);

    if stripped.is_empty() {
        ".".to_string()
    } else {
        stripped.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn display_path_strips_leading_dot_slash() {
        assert_eq!(display_path(Path::new("./src/main.rs")), "src/main.rs");
    }

    #[test]
    fn display_path_normalizes_backslashes() {
        assert_eq!(display_path(Path::new("src\\lib.rs")), "src/lib.rs");
        assert_eq!(display_path(Path::new(".\\src\\lib.rs")), "src/lib.rs");
    }

    #[test]
    fn display_path_keeps_plain_paths() {
        assert_eq!(display_path(Path::new("/abs/path.rs")), "/abs/path.rs");
        assert_eq!(display_path(Path::new("lib.rs")), "lib.rs");
    }

    #[test]
    fn display_path_current_dir() {
        assert_eq!(display_path(Path::new(".")), ".");
        assert_eq!(display_path(Path::new("./")), ".");
    }
}
