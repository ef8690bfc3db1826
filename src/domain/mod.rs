//! Core parsing and lookup logic.

pub mod section_table;
pub mod ini_parser;
pub mod coerce;
pub mod error;
