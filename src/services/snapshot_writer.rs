use std::fs;
use std::io;
use std::path::Path;

/// Full overwrite of `path` with UTF-8 content, creating the parent
/// directory first when it does not exist yet. Never appends.
pub fn write_snapshot(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}
