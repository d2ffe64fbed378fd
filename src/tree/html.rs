use super::{Link, ListingRow, ListingTree};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("tr"));

static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("td"));

static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static CSS selector should be valid")
}

/// An HTML document parsed with an HTML5-compliant parser
#[derive(Clone, Debug)]
pub struct HtmlDocument(Html);

impl HtmlDocument {
    /// Parse a complete HTML document.  Parsing is lenient: malformed markup
    /// is recovered from the same way a browser would.
    pub fn parse(html: &str) -> HtmlDocument {
        HtmlDocument(Html::parse_document(html))
    }
}

impl From<Html> for HtmlDocument {
    fn from(value: Html) -> HtmlDocument {
        HtmlDocument(value)
    }
}

impl<'a> ListingTree for &'a HtmlDocument {
    type Row = HtmlRow<'a>;

    fn rows(self) -> Vec<HtmlRow<'a>> {
        self.0.select(&ROW_SELECTOR).map(HtmlRow).collect()
    }
}

/// A `<tr>` element of an [`HtmlDocument`]
#[derive(Clone, Copy, Debug)]
pub struct HtmlRow<'a>(ElementRef<'a>);

impl ListingRow for HtmlRow<'_> {
    fn cells(&self) -> Vec<String> {
        self.0
            .select(&CELL_SELECTOR)
            .map(|td| td.text().collect())
            .collect()
    }

    fn link(&self) -> Option<Link> {
        self.0.select(&LINK_SELECTOR).next().map(|a| {
            Link::new(
                a.value().attr("href").map(String::from),
                a.text().collect(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    static PAGE: &str = indoc! {r#"
        <html><body><table>
        <tr><th><a href="?C=N;O=D">Name</a></th><th>Last modified</th></tr>
        <tr><td><img src="/icons/text.gif" alt="[TXT]"></td><td><a href="notes%20v2.txt">notes v2.txt</a></td><td>03-Mar-2020 08:00  </td><td> 12K</td><td>&nbsp;</td></tr>
        <tr><td colspan="5"><hr></td></tr>
        </table></body></html>
    "#};

    #[test]
    fn rows_in_document_order() {
        let doc = HtmlDocument::parse(PAGE);
        let rows = doc.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].cells(), Vec::<String>::new());
        assert_eq!(
            rows[0].link(),
            Some(Link::new(Some("?C=N;O=D".into()), "Name".into()))
        );
        assert_eq!(
            rows[1].cells(),
            vec![
                String::new(),
                "notes v2.txt".into(),
                "03-Mar-2020 08:00  ".into(),
                " 12K".into(),
                "\u{a0}".into(),
            ]
        );
        assert_eq!(
            rows[1].link(),
            Some(Link::new(
                Some("notes%20v2.txt".into()),
                "notes v2.txt".into()
            ))
        );
        assert_eq!(rows[2].cells(), vec![String::new()]);
        assert_eq!(rows[2].link(), None);
    }

    #[test]
    fn link_without_href() {
        let doc = HtmlDocument::parse(
            "<table><tr><td><a name=\"x\">anchor/</a></td></tr></table>",
        );
        let rows = doc.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].link(), Some(Link::new(None, "anchor/".into())));
    }

    #[test]
    fn no_rows() {
        let doc = HtmlDocument::parse("<p>Nothing to see here</p>");
        assert!(doc.rows().is_empty());
    }
}
