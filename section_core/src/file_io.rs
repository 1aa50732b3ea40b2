//! # File I/O Module
//!
//! Writes CSV exports to disk with an atomic save: the document is written
//! to a `.csv.tmp` file, synced, then renamed over the final name, so a
//! crash never leaves a half-written export behind.
//!
//! ## Example
//!
//! ```rust,no_run
//! use section_core::file_io::write_export;
//! use section_core::session::Session;
//! use std::path::Path;
//!
//! let mut session = Session::default();
//! session.set_input("r", "10")?;
//! session.save();
//!
//! let export = session.export()?;
//! let path = write_export(&export, Path::new("exports"))?;
//! println!("wrote {}", path.display());
//! # Ok::<(), section_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{CalcError, CalcResult};
use crate::export::CsvExport;

/// Write `export` into `dir` under its own file name.
///
/// The directory is created if it does not exist.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(CalcError::FileError)` - I/O error
pub fn write_export(export: &CsvExport, dir: &Path) -> CalcResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| {
        CalcError::file_error("create directory", dir.display().to_string(), e.to_string())
    })?;

    let path = dir.join(&export.filename);
    write_atomic(&path, export.content.as_bytes())?;
    Ok(path)
}

/// Write `bytes` to `path` via a temp file and rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let tmp_path = path.with_extension("csv.tmp");

    let result = write_and_sync(&tmp_path, bytes).and_then(|()| {
        fs::rename(&tmp_path, path).map_err(|e| {
            CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
        })
    });

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_and_sync(tmp_path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let mut tmp_file = File::create(tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_export_dir(name: &str) -> PathBuf {
        temp_dir().join(format!("section_calc_test_{}_{}", name, std::process::id()))
    }

    fn sample_export() -> CsvExport {
        CsvExport {
            filename: "section-properties-20261018T093000.000Z.csv".to_string(),
            content: "Section Type,Timestamp\nsolidCircle,2026-10-18T09:30:00.000Z\n".to_string(),
            rows: 1,
        }
    }

    #[test]
    fn test_write_creates_directory_and_file() {
        let dir = temp_export_dir("write").join("nested");
        let export = sample_export();

        let path = write_export(&export, &dir).unwrap();
        assert_eq!(path, dir.join(&export.filename));
        assert_eq!(fs::read_to_string(&path).unwrap(), export.content);
        assert!(!path.with_extension("csv.tmp").exists());

        let _ = fs::remove_dir_all(temp_export_dir("write"));
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = temp_export_dir("overwrite");
        let mut export = sample_export();
        write_export(&export, &dir).unwrap();

        export.content = "Section Type\n".to_string();
        let path = write_export(&export, &dir).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Section Type\n");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let dir = temp_export_dir("not_a_dir");
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("blocker");
        fs::write(&blocker, "x").unwrap();

        let err = write_export(&sample_export(), &blocker).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");

        let _ = fs::remove_dir_all(&dir);
    }
}
