//! Conversion of human-readable sizes such as `569`, `3M`, or `1.9G` into
//! byte counts
//!
//! Apache's `mod_autoindex` renders file sizes with decimal multipliers, so
//! `K` means 1000 bytes rather than 1024.

/// Unit suffixes accepted by [`parse_size`] and the number of bytes each one
/// denotes
static UNITS: [(char, f64); 5] = [
    ('B', 1e0),
    ('K', 1e3),
    ('M', 1e6),
    ('G', 1e9),
    ('T', 1e12),
];

/// 2<sup>64</sup>, the smallest float that does not fit in a `u64`
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

/// Convert a human-readable size string to a number of bytes.
///
/// - A string of only ASCII digits is a plain byte count.
/// - Otherwise, the final character must be one of `B`, `K`, `M`, `G`, or `T`
///   (case-insensitive), and the rest of the string must be a non-negative
///   decimal number; the result is the number multiplied by the unit's power
///   of 1000, truncated toward zero.
///
/// Returns `None` for empty input, an unknown suffix, an unparseable number,
/// or a result too large for a `u64`.  A malformed size is never an error, as
/// sizes are optional metadata in a listing.
pub fn parse_size(s: &str) -> Option<u64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse::<u64>().ok();
    }
    let mut chars = s.chars();
    let suffix = chars.next_back()?;
    let factor = UNITS
        .iter()
        .find(|(unit, _)| unit.eq_ignore_ascii_case(&suffix))
        .map(|&(_, factor)| factor)?;
    let number = chars
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && n.is_sign_positive())?;
    bytes_from_float(number * factor)
}

/// Like [`parse_size`], but for a size string that may be missing altogether
pub fn parse_size_opt(s: Option<&str>) -> Option<u64> {
    s.and_then(parse_size)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bytes_from_float(bytes: f64) -> Option<u64> {
    (bytes < U64_BOUND).then(|| bytes.trunc() as u64)
}
