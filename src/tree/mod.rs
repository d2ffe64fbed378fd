//! Access to the rows of a parsed listing page
//!
//! The listing parser only needs to find the rows of a document, the data
//! cells within a row, and a row's link.  Any HTML backend that can answer
//! those questions can implement [`ListingTree`] & [`ListingRow`];
//! [`HtmlDocument`] is the default one.
mod html;
pub use self::html::*;

/// A parsed document whose table rows can be enumerated
pub trait ListingTree {
    type Row: ListingRow;

    /// Return all table rows (`<tr>` elements) of the document in document
    /// order
    fn rows(self) -> Vec<Self::Row>;
}

/// A single table row of a parsed document
pub trait ListingRow {
    /// Return the text content of each data cell (`<td>` element) in the row,
    /// in order.  Header cells (`<th>`) are not included.
    fn cells(&self) -> Vec<String>;

    /// Return the first hyperlink in the row, if any
    fn link(&self) -> Option<Link>;
}

/// A hyperlink (`<a>` element) found in a listing row
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Link {
    href: Option<String>,
    text: String,
}

impl Link {
    pub fn new(href: Option<String>, text: String) -> Link {
        Link { href, text }
    }

    /// The value of the link's `href` attribute, if it has one
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// The link's text content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The string that identifies the linked resource: the `href` if present,
    /// otherwise the link text
    pub fn target(&self) -> &str {
        self.href.as_deref().unwrap_or(&self.text)
    }
}
