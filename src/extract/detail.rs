//! Extractors for one sub-region's detail page: the turnout summary row and
//! the per-party result rows.

use anyhow::Result;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use super::{first_match, rows, text_of};
use crate::fetch;

static REGISTERED_CELL: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"td[data-rel="L1"][headers="sa2"]"#).expect("registered cell selector")
});
static ENVELOPES_CELL: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"td[data-rel="L1"][headers="sa3"]"#).expect("envelopes cell selector")
});
static VALID_CELL: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"td[data-rel="L1"][headers="sa6"]"#).expect("valid cell selector")
});
static PARTY_CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.overflow_name").expect("party cell selector"));

// Vote counts sit in one of two table layouts; which one a page uses depends
// on how the site chose to split the party list for that sub-region.
static VOTES_FULL: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"td.cislo[headers="t1sa2 t1sb3"]"#).expect("full-layout votes selector")
});
static VOTES_SPLIT: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"td.cislo[headers="t2sa2 t2sb3"]"#).expect("split-layout votes selector")
});

/// Registered-voter count of every summary row, surrounding whitespace
/// trimmed.
pub async fn registered_voters(client: &Client, url: &Url) -> Result<Vec<String>> {
    let doc = fetch::document(client, url).await?;
    Ok(scan_trimmed(&doc, &REGISTERED_CELL))
}

/// Issued-envelope count of every summary row, trimmed.
pub async fn envelopes(client: &Client, url: &Url) -> Result<Vec<String>> {
    let doc = fetch::document(client, url).await?;
    Ok(scan_trimmed(&doc, &ENVELOPES_CELL))
}

/// Valid-vote count of every summary row, trimmed.
pub async fn valid_votes(client: &Client, url: &Url) -> Result<Vec<String>> {
    let doc = fetch::document(client, url).await?;
    Ok(scan_trimmed(&doc, &VALID_CELL))
}

/// Party names in table order.
pub async fn party_names(client: &Client, url: &Url) -> Result<Vec<String>> {
    let doc = fetch::document(client, url).await?;
    Ok(scan_parties(&doc))
}

/// Vote count of every party row. Tries the full-width layout first and
/// falls back to the split layout; a row matching neither contributes
/// nothing.
pub async fn party_votes(client: &Client, url: &Url) -> Result<Vec<String>> {
    let doc = fetch::document(client, url).await?;
    Ok(scan_votes(&doc))
}

fn scan_trimmed(doc: &Html, cell: &Selector) -> Vec<String> {
    rows(doc)
        .filter_map(|row| first_match(row, cell))
        .map(|c| text_of(c).trim().to_string())
        .collect()
}

fn scan_parties(doc: &Html) -> Vec<String> {
    rows(doc)
        .filter_map(|row| first_match(row, &PARTY_CELL).map(text_of))
        .collect()
}

fn scan_votes(doc: &Html) -> Vec<String> {
    rows(doc)
        .filter_map(|row| {
            first_match(row, &VOTES_FULL).or_else(|| first_match(row, &VOTES_SPLIT))
        })
        .map(|cell| text_of(cell).trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // One summary row plus a two-party result table in the full-width layout,
    // the shape the site renders for small sub-regions. Counts over a
    // thousand carry a non-breaking space as the thousands separator.
    const DETAIL: &str = r#"
        <table>
        <tr><th>Voliči v seznamu</th></tr>
        <tr>
          <td class="cislo" headers="sa1">1</td>
          <td class="cislo" headers="sa2" data-rel="L1"> 1&#160;929 </td>
          <td class="cislo" headers="sa3" data-rel="L1">525</td>
          <td class="cislo" headers="sa5" data-rel="L1">524</td>
          <td class="cislo" headers="sa6" data-rel="L1">521</td>
        </tr>
        </table>
        <table>
        <tr><th>Strana</th><th>Platné hlasy</th></tr>
        <tr>
          <td class="cislo" headers="t1sa1 t1sb1">1</td>
          <td class="overflow_name" headers="t1sa1 t1sb2">Občanská demokratická strana</td>
          <td class="cislo" headers="t1sa2 t1sb3">51</td>
        </tr>
        <tr>
          <td class="cislo" headers="t1sa1 t1sb1">2</td>
          <td class="overflow_name" headers="t1sa1 t1sb2">Česká pirátská strana</td>
          <td class="cislo" headers="t1sa2 t1sb3">38</td>
        </tr>
        </table>
    "#;

    #[test]
    fn summary_counts_are_extracted_and_trimmed() {
        let doc = Html::parse_document(DETAIL);
        // interior separators survive the trim; the normalizer handles them
        assert_eq!(scan_trimmed(&doc, &REGISTERED_CELL), ["1\u{a0}929"]);
        assert_eq!(scan_trimmed(&doc, &ENVELOPES_CELL), ["525"]);
        assert_eq!(scan_trimmed(&doc, &VALID_CELL), ["521"]);
    }

    #[test]
    fn a_page_missing_a_summary_cell_yields_nothing_for_that_field() {
        let html = r#"
            <table>
            <tr><td class="cislo" headers="sa3" data-rel="L1">525</td></tr>
            </table>
        "#;
        let doc = Html::parse_document(html);
        assert!(scan_trimmed(&doc, &REGISTERED_CELL).is_empty());
        assert_eq!(scan_trimmed(&doc, &ENVELOPES_CELL), ["525"]);
    }

    #[test]
    fn party_names_keep_table_order() {
        let doc = Html::parse_document(DETAIL);
        assert_eq!(
            scan_parties(&doc),
            ["Občanská demokratická strana", "Česká pirátská strana"]
        );
    }

    #[test]
    fn votes_come_from_the_full_layout() {
        let doc = Html::parse_document(DETAIL);
        assert_eq!(scan_votes(&doc), ["51", "38"]);
    }

    #[test]
    fn votes_fall_back_to_the_split_layout() {
        let html = r#"
            <table>
            <tr>
              <td class="overflow_name" headers="t2sa1 t2sb2">Strana zelených</td>
              <td class="cislo" headers="t2sa2 t2sb3">7</td>
            </tr>
            <tr>
              <td class="overflow_name" headers="t2sa1 t2sb2">Svobodní</td>
              <td class="cislo" headers="t2sa2 t2sb3">3</td>
            </tr>
            </table>
        "#;
        let doc = Html::parse_document(html);
        assert_eq!(scan_votes(&doc), ["7", "3"]);
    }

    #[test]
    fn a_row_matching_neither_layout_is_skipped() {
        let html = r#"
            <table>
            <tr><td class="cislo" headers="t1sa2 t1sb3">12</td></tr>
            <tr><td class="cislo" headers="t9sa9">999</td></tr>
            <tr><td class="cislo" headers="t2sa2 t2sb3">4</td></tr>
            </table>
        "#;
        let doc = Html::parse_document(html);
        assert_eq!(scan_votes(&doc), ["12", "4"]);
    }
}
