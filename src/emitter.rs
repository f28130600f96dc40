use crate::error::{Result, TatuError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Creates or truncates `path` with `contents`. The parent directory must exist.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    let write_error = |source| TatuError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(write_error)?;
    file.write_all(contents.as_bytes()).map_err(write_error)?;

    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
