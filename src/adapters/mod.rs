//! Concrete adapter implementations for ports.

pub mod ini_file_adapter;
