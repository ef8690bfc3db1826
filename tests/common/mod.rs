#![allow(dead_code)]

use inifile::ConfigPort;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

/// In-memory `ConfigPort` keyed by exact `(section, key)` pairs. Only the raw
/// lookup is implemented so the provided getters can be exercised directly.
pub struct MockConfigPort {
    pub values: HashMap<(String, String), String>,
}

impl MockConfigPort {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn with_value(mut self, section: &str, key: &str, value: &str) -> Self {
        self.values
            .insert((section.to_string(), key.to_string()), value.to_string());
        self
    }
}

impl ConfigPort for MockConfigPort {
    fn get_raw(&self, section: &str, key: &str) -> Option<&str> {
        self.values
            .get(&(section.to_string(), key.to_string()))
            .map(String::as_str)
    }
}

pub fn write_ini(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

pub const SERVER_INI: &str = "\
[Server]
Host=localhost
Port=8080 ; default port
Debug=true
";
