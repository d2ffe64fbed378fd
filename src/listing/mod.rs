//! Extraction of directory & file entries from the rows of a listing page
mod layout;
mod types;
pub use self::layout::*;
pub use self::types::*;
use crate::consts::{ENTRY_CELLS, LISTING_TIMESTAMP_FORMAT};
use crate::size::parse_size;
use crate::tree::{HtmlDocument, Link, ListingRow, ListingTree};
use percent_encoding::percent_decode_str;
use thiserror::Error;
use time::PrimitiveDateTime;

impl Listing {
    /// Parse the rows of an already-parsed listing page.
    ///
    /// Entries are taken from the rows selected by `layout`.  In each entry
    /// row, the first link gives the entry's name (percent-decoded), and the
    /// third, fourth, and fifth data cells give its last-modified time, size,
    /// and description.  Names ending in a slash are directories; all others
    /// are files.
    ///
    /// # Errors
    ///
    /// Fails on the first entry row that is missing cells or a link, whose
    /// name is empty, or whose timestamp is not of the form `12-Jan-2021
    /// 14:30`.  No partial listing is returned.  A size that cannot be
    /// parsed is not an error; the file's size is then `None`.
    pub fn from_tree<T: ListingTree>(
        tree: T,
        layout: &RowLayout,
    ) -> Result<Listing, ParseListingError> {
        let rows = tree.rows();
        let candidates = layout.candidates(rows.len());
        let mut listing = Listing::default();
        for (index, row) in rows
            .iter()
            .enumerate()
            .take(candidates.end)
            .skip(candidates.start)
        {
            let cells = row.cells();
            let link = row.link();
            if !layout.accepts(&cells, link.as_ref()) {
                tracing::trace!(row = index, "skipping non-entry row");
                continue;
            }
            let entry = parse_row(index, &cells, link)?;
            tracing::trace!(
                row = index,
                name = entry.name(),
                is_dir = entry.is_dir(),
                "parsed listing entry"
            );
            listing.push(entry);
        }
        tracing::debug!(
            rows = rows.len(),
            dirs = listing.dirs.len(),
            files = listing.files.len(),
            ?layout,
            "parsed directory listing"
        );
        Ok(listing)
    }

    /// Parse an HTML listing page with the default HTML backend.
    ///
    /// # Errors
    ///
    /// See [`Listing::from_tree()`].
    pub fn from_html(html: &str, layout: &RowLayout) -> Result<Listing, ParseListingError> {
        let document = HtmlDocument::parse(html);
        Listing::from_tree(&document, layout)
    }
}

/// Parse a single entry row.  `row` is the index of the row in the document
/// and is only used for error reporting.
fn parse_row(
    row: usize,
    cells: &[String],
    link: Option<Link>,
) -> Result<ListingEntry, ParseListingError> {
    let [_, _, date, size, description, ..] = cells else {
        return Err(StructureError::MissingCell {
            row,
            expected: ENTRY_CELLS,
            actual: cells.len(),
        }
        .into());
    };
    let link = link.ok_or(StructureError::NoLink { row })?;
    let name = percent_decode_str(link.target())
        .decode_utf8_lossy()
        .into_owned();
    let last_modified = parse_timestamp(row, date)?;
    let description = description.trim().to_owned();
    if let Some(dirname) = name.strip_suffix('/') {
        if dirname.is_empty() {
            return Err(StructureError::EmptyName { row }.into());
        }
        Ok(ListingEntry::Directory(DirectoryEntry::new(
            dirname.to_owned(),
            last_modified,
            description,
        )))
    } else {
        if name.is_empty() {
            return Err(StructureError::EmptyName { row }.into());
        }
        Ok(ListingEntry::File(FileEntry::new(
            name,
            last_modified,
            parse_size(size),
            description,
        )))
    }
}

fn parse_timestamp(row: usize, text: &str) -> Result<PrimitiveDateTime, FormatError> {
    let text = text.trim();
    PrimitiveDateTime::parse(text, LISTING_TIMESTAMP_FORMAT).map_err(|source| FormatError {
        row,
        text: text.to_owned(),
        source,
    })
}

/// Error returned when a listing page cannot be parsed
#[derive(Debug, Error)]
pub enum ParseListingError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Structure(#[from] StructureError),
}

/// A cell's content did not match its expected format
#[derive(Debug, Error)]
#[error("row {row}: invalid last-modified timestamp {text:?}")]
pub struct FormatError {
    /// Index of the offending row in the document
    pub row: usize,
    /// The offending text, with surrounding whitespace removed
    pub text: String,
    pub source: time::error::Parse,
}

/// An entry row did not have the expected structure
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum StructureError {
    #[error("row {row} has {actual} data cells; expected at least {expected}")]
    MissingCell {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("row {row} does not contain a link")]
    NoLink { row: usize },
    #[error("row {row} has an empty entry name")]
    EmptyName { row: usize },
}
