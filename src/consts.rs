use time::format_description::FormatItem;
use time::macros::format_description;

pub(crate) static USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CARGO_PKG_REPOSITORY"),
    ")",
);

/// Format of the "Last modified" column in `mod_autoindex` listings, e.g.
/// `12-Jan-2021 14:30`
pub(crate) static LISTING_TIMESTAMP_FORMAT: &[FormatItem<'_>] = format_description!(
    "[day padding:none]-[month repr:short case_sensitive:false]-[year] [hour padding:none]:[minute]"
);

/// Format used when serializing entry timestamps
pub(crate) static SERIALIZED_TIMESTAMP_FORMAT: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Number of rows preceding the entries in the default Apache template: the
/// column headers, a horizontal rule, and the parent directory link
pub(crate) const APACHE_HEADER_ROWS: usize = 3;

/// Number of rows following the entries in the default Apache template (the
/// closing horizontal rule)
pub(crate) const APACHE_FOOTER_ROWS: usize = 1;

/// Minimum number of `<td>` cells an entry row must have: icon, name, last
/// modified, size, description
pub(crate) const ENTRY_CELLS: usize = 5;

