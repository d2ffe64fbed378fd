//! Parse Apache-style directory index pages into structured entries
//!
//! Web servers such as Apache (via `mod_autoindex`) generate an HTML page
//! listing the contents of a browsable directory.  This crate turns such a
//! page into a [`Listing`] of [`DirectoryEntry`] and [`FileEntry`] values with
//! names, modification times, sizes in bytes, and descriptions.
//!
//! ```no_run
//! use dirlisting::{Listing, RowLayout};
//!
//! # fn main() -> Result<(), dirlisting::ParseListingError> {
//! let html = std::fs::read_to_string("index.html").unwrap_or_default();
//! let listing = Listing::from_html(&html, &RowLayout::default())?;
//! for f in listing.files() {
//!     println!("{}\t{:?}", f.name(), f.size());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Pages can also be fetched directly with a [`ListingClient`], and documents
//! parsed by other HTML libraries can be used by implementing [`ListingTree`].
mod consts;
mod httputil;
mod listing;
mod size;
mod tree;
pub use crate::httputil::{BuildClientError, HttpError, ListingClient, ListingError};
pub use crate::listing::{
    DirectoryEntry, FileEntry, FormatError, Listing, ListingEntry, ParseListingError, RowLayout,
    StructureError,
};
pub use crate::size::{parse_size, parse_size_opt};
pub use crate::tree::{HtmlDocument, HtmlRow, Link, ListingRow, ListingTree};
