use crate::consts::SERIALIZED_TIMESTAMP_FORMAT;
use serde::{
    ser::{Error as _, Serializer},
    Serialize,
};
use time::PrimitiveDateTime;

/// The complete result of parsing a listing page: its subdirectories and its
/// files, each in the order they appeared on the page
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Listing {
    pub(super) dirs: Vec<DirectoryEntry>,
    pub(super) files: Vec<FileEntry>,
}

impl Listing {
    pub fn dirs(&self) -> &[DirectoryEntry] {
        &self.dirs
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// Consume the listing and return its directories & files
    pub fn into_parts(self) -> (Vec<DirectoryEntry>, Vec<FileEntry>) {
        (self.dirs, self.files)
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.dirs.len() + self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }

    /// Sum of the sizes of all files whose size is known
    pub fn total_size(&self) -> u64 {
        self.files.iter().filter_map(FileEntry::size).sum()
    }

    pub(super) fn push(&mut self, entry: ListingEntry) {
        match entry {
            ListingEntry::Directory(d) => self.dirs.push(d),
            ListingEntry::File(f) => self.files.push(f),
        }
    }
}

/// A single row of a listing page
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ListingEntry {
    Directory(DirectoryEntry),
    File(FileEntry),
}

impl ListingEntry {
    pub fn name(&self) -> &str {
        match self {
            ListingEntry::Directory(d) => d.name(),
            ListingEntry::File(f) => f.name(),
        }
    }

    pub fn last_modified(&self) -> PrimitiveDateTime {
        match self {
            ListingEntry::Directory(d) => d.last_modified(),
            ListingEntry::File(f) => f.last_modified(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ListingEntry::Directory(d) => d.description(),
            ListingEntry::File(f) => f.description(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, ListingEntry::Directory(_))
    }
}

/// A subdirectory listed on a listing page
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct DirectoryEntry {
    name: String,
    #[serde(serialize_with = "serialize_timestamp")]
    last_modified: PrimitiveDateTime,
    description: String,
}

impl DirectoryEntry {
    /// `name` must not include the trailing slash shown on the listing page
    pub fn new(name: String, last_modified: PrimitiveDateTime, description: String) -> Self {
        DirectoryEntry {
            name,
            last_modified,
            description,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn last_modified(&self) -> PrimitiveDateTime {
        self.last_modified
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A file listed on a listing page
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct FileEntry {
    name: String,
    extension: String,
    #[serde(serialize_with = "serialize_timestamp")]
    last_modified: PrimitiveDateTime,
    size: Option<u64>,
    description: String,
}

impl FileEntry {
    /// Construct a `FileEntry`, deriving its extension from `name`
    pub fn new(
        name: String,
        last_modified: PrimitiveDateTime,
        size: Option<u64>,
        description: String,
    ) -> Self {
        let extension = extension_of(&name);
        FileEntry {
            name,
            extension,
            last_modified,
            size,
            description,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lowercased file extension without the leading period, or an empty
    /// string if the name has no extension
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn last_modified(&self) -> PrimitiveDateTime {
        self.last_modified
    }

    /// The size of the file in bytes, if the listing gave a parseable size
    pub fn size(&self) -> Option<u64> {
        self.size
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Return the lowercased text after the final period in the last path
/// component of `name`.  Leading periods do not start an extension, so
/// `.bashrc` has none.
fn extension_of(name: &str) -> String {
    let basename = name.rsplit_once('/').map_or(name, |(_, base)| base);
    basename
        .trim_start_matches('.')
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

fn serialize_timestamp<S: Serializer>(
    ts: &PrimitiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let s = ts
        .format(SERIALIZED_TIMESTAMP_FORMAT)
        .map_err(S::Error::custom)?;
    serializer.serialize_str(&s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use time::macros::datetime;

    #[rstest]
    #[case("report.pdf", "pdf")]
    #[case("archive.tar.gz", "gz")]
    #[case("PHOTO.JPG", "jpg")]
    #[case("README", "")]
    #[case(".bashrc", "")]
    #[case("..hidden.Conf", "conf")]
    #[case("trailing.", "")]
    #[case("my file.txt", "txt")]
    #[case("sub.d/Makefile", "")]
    fn test_extension_of(#[case] name: &str, #[case] ext: &str) {
        assert_eq!(extension_of(name), ext);
    }

    #[test]
    fn file_entry_accessors() {
        let f = FileEntry::new(
            "Data.CSV".into(),
            datetime!(2021-02-01 09:15),
            Some(1024),
            "Quarterly numbers".into(),
        );
        assert_eq!(f.name(), "Data.CSV");
        assert_eq!(f.extension(), "csv");
        assert_eq!(f.last_modified(), datetime!(2021-02-01 09:15));
        assert_eq!(f.size(), Some(1024));
        assert_eq!(f.description(), "Quarterly numbers");
    }

    #[test]
    fn listing_totals() {
        let mut listing = Listing::default();
        assert!(listing.is_empty());
        listing.push(ListingEntry::Directory(DirectoryEntry::new(
            "docs".into(),
            datetime!(2021-01-12 14:30),
            String::new(),
        )));
        listing.push(ListingEntry::File(FileEntry::new(
            "a.bin".into(),
            datetime!(2021-01-12 14:30),
            Some(3_000_000),
            String::new(),
        )));
        listing.push(ListingEntry::File(FileEntry::new(
            "b.bin".into(),
            datetime!(2021-01-12 14:30),
            None,
            String::new(),
        )));
        assert!(!listing.is_empty());
        assert_eq!(listing.len(), 3);
        assert_eq!(listing.dirs().len(), 1);
        assert_eq!(listing.files().len(), 2);
        assert_eq!(listing.total_size(), 3_000_000);
    }

    #[test]
    fn serialize_entry() {
        let entry = ListingEntry::File(FileEntry::new(
            "report.pdf".into(),
            datetime!(2021-02-01 09:15),
            Some(1_900_000_000),
            "Report".into(),
        ));
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({
                "type": "file",
                "name": "report.pdf",
                "extension": "pdf",
                "last_modified": "2021-02-01T09:15:00",
                "size": 1_900_000_000u64,
                "description": "Report",
            })
        );
    }
}
