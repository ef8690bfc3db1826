//! Configuration access port trait.
//!
//! Implementors supply the raw lookup; the typed getters are provided and
//! fall back to the caller's default whenever the value is absent or does not
//! coerce.

use crate::domain::coerce;

pub trait ConfigPort {
    /// Stored value for `key` in `section`, case-insensitively.
    fn get_raw(&self, section: &str, key: &str) -> Option<&str>;

    fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.get_raw(section, key).unwrap_or(default).to_string()
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        coerce::parse_int(self.get_raw(section, key)).unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        coerce::parse_double(self.get_raw(section, key)).unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        coerce::parse_bool(self.get_raw(section, key)).unwrap_or(default)
    }
}
