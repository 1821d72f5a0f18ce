//! Sass cache eviction
//!
//! In copy mode the deployed stylesheets are byte-copies of the sources, so
//! a server that caches by content hash would never notice a redeploy.
//! Appending a timestamped comment changes each file's hash without changing
//! how it renders.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::Utc;

use crate::error::{ThemeliftError, ThemeliftResult};
use crate::paths::CSS_DIR;

/// Append a cache-busting comment to one deployed stylesheet entry point.
pub fn evict_entry(deploy_dir: &Path, entry: &str) -> ThemeliftResult<()> {
    let file = deploy_dir.join(CSS_DIR).join(entry);
    append_comment(&file, Utc::now().timestamp_millis())
        .map_err(|source| ThemeliftError::CacheEvict { file, source })
}

fn append_comment(file: &Path, millis: i64) -> io::Result<()> {
    // Append-and-create: an entry the copy step had no source for still gets
    // a fresh deployed file.
    let mut handle = OpenOptions::new().append(true).create(true).open(file)?;
    handle.write_all(evict_comment(millis).as_bytes())
}

fn evict_comment(millis: i64) -> String {
    format!("\n/* themelift sass cache evict {millis} */")
}
