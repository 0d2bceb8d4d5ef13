// Cache path utilities.
// Constructs filesystem paths for the local store.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/shelf on macOS/Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "shelf").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Directory holding the key-value store files.
pub fn store_dir() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("store"))
}

/// Path of the file backing one store key.
pub fn key_path(root: &std::path::Path, key: &str) -> PathBuf {
    root.join(format!("{}.json", sanitize_name(key)))
}

/// Sanitize a key for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
