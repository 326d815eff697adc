use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use filedeck_client::is_filename_valid;
use filedeck_client::paths::base_name;

/// Resolve the directory downloads are written to.
///
/// Order: configured directory, `$HOME/Downloads`, system temp dir.
pub(crate) fn download_dir(configured: Option<&Path>) -> PathBuf {
    if let Some(dir) = configured {
        return dir.to_path_buf();
    }

    if let Ok(home) = std::env::var("HOME") {
        let dir = Path::new(&home).join("Downloads");
        if dir.is_dir() {
            return dir;
        }
    }

    std::env::temp_dir()
}

/// Write downloaded bytes to `dir/<base name>` through a temporary sibling
/// file.
///
/// Names that would resolve outside `dir` are rejected.
pub(crate) fn save_download(
    dir: &Path,
    name: &str,
    bytes: &[u8],
) -> io::Result<PathBuf> {
    let name = base_name(name);
    if !is_filename_valid(Some(name)) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("refusing to save download as {name:?}"),
        ));
    }

    let target = dir.join(name);
    if target.parent() != Some(dir) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("download {name:?} escapes {}", dir.display()),
        ));
    }

    fs::create_dir_all(dir)?;
    let tmp_path = dir.join(format!(".{name}.part"));
    fs::write(&tmp_path, bytes)?;
    fs::rename(&tmp_path, &target)?;

    Ok(target)
}
