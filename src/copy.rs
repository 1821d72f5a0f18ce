//! Static resource copying
//!
//! Resources are copied from the content tree into the deployed theme by
//! name: directories recursively, plain files one-to-one. Existing
//! destination files are overwritten and missing parents created. A resource
//! absent from the content tree is skipped, not an error.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{ThemeliftError, ThemeliftResult};

/// What happened to one configured resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The resource existed and was copied; `files` counts regular files.
    Copied { files: usize },
    /// The resource does not exist in the content tree.
    SkippedMissing,
}

/// Copy one named resource from the content tree into the deployed theme.
pub fn copy_resource(
    content_dir: &Path,
    deploy_dir: &Path,
    resource: &str,
) -> ThemeliftResult<CopyOutcome> {
    let source = content_dir.join(resource);
    if !source.exists() {
        return Ok(CopyOutcome::SkippedMissing);
    }

    let dest = deploy_dir.join(resource);
    let result = if source.is_dir() {
        copy_tree(&source, &dest)
    } else {
        copy_file(&source, &dest).map(|_| 1)
    };

    let files = result.map_err(|source| ThemeliftError::CopyResource {
        resource: resource.to_string(),
        source,
    })?;
    Ok(CopyOutcome::Copied { files })
}

fn copy_file(source: &Path, dest: &Path) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source, dest)?;
    Ok(())
}

fn copy_tree(source: &Path, dest: &Path) -> io::Result<usize> {
    let mut files = 0;
    for entry in WalkDir::new(source) {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let target = dest.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            files += 1;
        }
    }
    Ok(files)
}
