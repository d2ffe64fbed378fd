use crate::consts::{APACHE_FOOTER_ROWS, APACHE_HEADER_ROWS};
use crate::tree::Link;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// How to tell which rows of a listing page's table describe entries
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowLayout {
    /// Every row is an entry except for the first `header` rows and the last
    /// `footer` rows.
    ///
    /// This matches the default `mod_autoindex` table (`header: 3, footer:
    /// 1`) exactly, but nothing about the skipped rows is verified: a page
    /// with a different number of leading or trailing rows will be misparsed
    /// or rejected.
    Positional { header: usize, footer: usize },

    /// A row is an entry if it has at least one `<td>` cell and a link that
    /// is not a column-sorting query, an in-page anchor, or a link to a
    /// parent directory
    DataRows,
}

impl RowLayout {
    /// The positional layout of the default Apache `mod_autoindex` template
    pub const APACHE: RowLayout = RowLayout::Positional {
        header: APACHE_HEADER_ROWS,
        footer: APACHE_FOOTER_ROWS,
    };

    /// Return the indices of the rows that may hold entries, given the total
    /// number of rows in the document
    pub(super) fn candidates(&self, rows: usize) -> Range<usize> {
        match *self {
            RowLayout::Positional { header, footer } => {
                let end = rows.saturating_sub(footer);
                header.min(end)..end
            }
            RowLayout::DataRows => 0..rows,
        }
    }

    /// Test whether a candidate row with the given cells & link is an entry
    pub(super) fn accepts(&self, cells: &[String], link: Option<&Link>) -> bool {
        match self {
            RowLayout::Positional { .. } => true,
            RowLayout::DataRows => {
                !cells.is_empty() && link.is_some_and(|ln| !is_navigation(ln.target()))
            }
        }
    }
}

impl Default for RowLayout {
    fn default() -> RowLayout {
        RowLayout::APACHE
    }
}

/// Test whether a link target points somewhere other than an entry of the
/// listed directory
fn is_navigation(target: &str) -> bool {
    let target = target.trim();
    target.is_empty()
        || target.starts_with(['?', '#', '/'])
        || target == ".."
        || target == "../"
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RowLayout::APACHE, 6, 3..5)]
    #[case(RowLayout::APACHE, 4, 3..3)]
    #[case(RowLayout::APACHE, 2, 1..1)]
    #[case(RowLayout::APACHE, 0, 0..0)]
    #[case(RowLayout::Positional { header: 0, footer: 0 }, 3, 0..3)]
    #[case(RowLayout::DataRows, 6, 0..6)]
    fn test_candidates(
        #[case] layout: RowLayout,
        #[case] rows: usize,
        #[case] expected: Range<usize>,
    ) {
        assert_eq!(layout.candidates(rows), expected);
    }

    #[rstest]
    #[case("?C=N;O=D", true)]
    #[case("#top", true)]
    #[case("/pub/", true)]
    #[case("../", true)]
    #[case("..", true)]
    #[case("", true)]
    #[case("docs/", false)]
    #[case("report.pdf", false)]
    #[case("..hidden", false)]
    fn test_is_navigation(#[case] target: &str, #[case] nav: bool) {
        assert_eq!(is_navigation(target), nav);
    }

    #[test]
    fn data_rows_need_cells_and_entry_link() {
        let layout = RowLayout::DataRows;
        let cells = vec![String::new(); 5];
        let entry = Link::new(Some("docs/".into()), "docs/".into());
        let parent = Link::new(Some("/".into()), "Parent Directory".into());
        assert!(layout.accepts(&cells, Some(&entry)));
        assert!(!layout.accepts(&cells, Some(&parent)));
        assert!(!layout.accepts(&cells, None));
        assert!(!layout.accepts(&[], Some(&entry)));
        assert!(RowLayout::APACHE.accepts(&[], None));
    }

    #[test]
    fn deserialize_layout() {
        let layout = serde_json::from_str::<RowLayout>(
            r#"{"kind": "positional", "header": 2, "footer": 0}"#,
        )
        .unwrap();
        assert_eq!(
            layout,
            RowLayout::Positional {
                header: 2,
                footer: 0
            }
        );
        let layout = serde_json::from_str::<RowLayout>(r#"{"kind": "data_rows"}"#).unwrap();
        assert_eq!(layout, RowLayout::DataRows);
        assert_eq!(RowLayout::default(), RowLayout::APACHE);
    }
}
