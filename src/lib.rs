//! inifile — read-only INI configuration reader.
//!
//! Hexagonal layout: parsing and the section table live in [`domain`], the
//! accessor trait in [`ports`], and the file-backed reader in [`adapters`].
//!
//! ```no_run
//! use inifile::{ConfigPort, IniFile};
//!
//! let ini = IniFile::from_file("settings.ini")?;
//! let port = ini.get_int("Server", "Port", 8080);
//! # let _ = port;
//! # Ok::<(), inifile::IniError>(())
//! ```

pub mod domain;
pub mod ports;
pub mod adapters;

pub use adapters::ini_file_adapter::IniFile;
pub use domain::error::IniError;
pub use ports::config_port::ConfigPort;
