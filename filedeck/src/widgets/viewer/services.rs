use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use filedeck_client::paths::base_name;
use uuid::Uuid;

use super::errors::ViewerError;

const PREVIEW_DIR: &str = "filedeck";

/// Write `bytes` to a fresh file under `<temp>/filedeck` for external
/// viewing.
pub(crate) fn write_preview_file(
    remote_path: &str,
    bytes: &[u8],
) -> Result<PathBuf, ViewerError> {
    write_preview_file_in(&std::env::temp_dir(), remote_path, bytes)
}

fn write_preview_file_in(
    temp_root: &Path,
    remote_path: &str,
    bytes: &[u8],
) -> Result<PathBuf, ViewerError> {
    let dir = temp_root.join(PREVIEW_DIR);
    fs::create_dir_all(&dir)?;

    let name = format!("{}-{}", Uuid::new_v4(), base_name(remote_path));
    let target = dir.join(name);
    fs::write(&target, bytes)?;
    log::debug!("preview file written to {}", target.display());
    Ok(target)
}

/// Delete a preview file that is no longer displayed.
pub(crate) fn remove_preview_file(file: &Path) {
    match fs::remove_file(file) {
        Ok(()) => log::debug!("removed preview file {}", file.display()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {},
        Err(err) => {
            log::warn!("failed to remove {}: {err}", file.display());
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_pdf_bytes_when_written_then_file_keeps_name_and_content() {
        let temp = tempfile::tempdir().expect("temp dir should be created");

        let target =
            write_preview_file_in(temp.path(), "docs/report.pdf", b"%PDF-1.7")
                .expect("preview file should be written");

        assert!(target.starts_with(temp.path().join(PREVIEW_DIR)));
        assert!(
            target
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with("-report.pdf"))
        );
        assert_eq!(
            fs::read(&target).expect("file should be readable"),
            b"%PDF-1.7"
        );
    }

    #[test]
    fn given_written_preview_when_removed_twice_then_file_is_gone() {
        let temp = tempfile::tempdir().expect("temp dir should be created");
        let target = write_preview_file_in(temp.path(), "a.pdf", b"%PDF")
            .expect("preview file should be written");

        remove_preview_file(&target);
        remove_preview_file(&target);

        assert!(!target.exists());
    }
}
