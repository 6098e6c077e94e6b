use std::path::Path;

/// Creates the directory `filepath` will be written into, if there is one.
pub fn ensure_parent_dir(filepath: &Path) -> std::io::Result<()> {
    match filepath.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
