//! Best-effort conversion of raw values. `None` means "use the default".

pub fn parse_int(raw: Option<&str>) -> Option<i64> {
    raw?.parse().ok()
}

pub fn parse_double(raw: Option<&str>) -> Option<f64> {
    raw?.parse().ok()
}

/// Only the literals `true` and `false` are accepted, in any case.
pub fn parse_bool(raw: Option<&str>) -> Option<bool> {
    let raw = raw?;
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
