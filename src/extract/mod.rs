//! Field extractors for the volby.cz result tables.
//!
//! The site tags cells with `class` and `headers` attributes rather than
//! giving tables any usable structure, so every extractor works the same way:
//! fetch the page, walk every `tr` in document order, and pull the text of
//! the first cell matching that extractor's signature. Rows without a
//! matching cell are skipped, never an error; the pages mix header, summary
//! and data rows freely.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

pub mod detail;
pub mod region;

static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("row selector"));

/// Every table row of the document, in document order. This is the scan unit
/// shared by all field extractors.
fn rows(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    doc.select(&ROW)
}

/// First cell under `row` matching `cell`, if the row carries one.
fn first_match<'a>(row: ElementRef<'a>, cell: &Selector) -> Option<ElementRef<'a>> {
    row.select(cell).next()
}

/// Visible text of an element, concatenated across its text nodes.
fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}
