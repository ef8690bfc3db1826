//! INI file configuration adapter.

use crate::domain::error::IniError;
use crate::domain::ini_parser;
use crate::domain::section_table::SectionTable;
use crate::ports::config_port::ConfigPort;
use std::fs;
use std::path::{Path, PathBuf};

/// A fully parsed, read-only INI file.
#[derive(Debug, Clone)]
pub struct IniFile {
    path: Option<PathBuf>,
    table: SectionTable,
}

impl IniFile {
    /// Read and parse the file at `path`. Invalid UTF-8 is replaced rather
    /// than rejected.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IniError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            let err = IniError::from_io(path, e);
            tracing::debug!(error = %err, "INI load failed");
            err
        })?;
        let table = ini_parser::parse(&String::from_utf8_lossy(&bytes));
        tracing::debug!(
            path = %path.display(),
            sections = table.len(),
            "loaded INI file"
        );
        Ok(Self {
            path: Some(path.to_path_buf()),
            table,
        })
    }

    pub fn from_string(content: &str) -> Self {
        Self {
            path: None,
            table: ini_parser::parse(content),
        }
    }

    /// Where this file was loaded from; `None` when parsed from a string.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Section names in the order they first appear, starting with `Default`.
    pub fn sections(&self) -> Vec<&str> {
        self.table.section_names().collect()
    }

    pub fn keys(&self, section: &str) -> Vec<&str> {
        self.table
            .section(section)
            .map(|s| s.names().collect())
            .unwrap_or_default()
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.table.section(section).is_some()
    }

    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.table.get(section, key).is_some()
    }
}

impl ConfigPort for IniFile {
    fn get_raw(&self, section: &str, key: &str) -> Option<&str> {
        self.table.get(section, key)
    }
}
