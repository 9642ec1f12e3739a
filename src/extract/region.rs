//! Extractors for the region-level page listing all sub-regions.

use anyhow::Result;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use super::{first_match, rows, text_of};
use crate::fetch;

static NUMBER_CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.cislo").expect("number cell selector"));
static NUMBER_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.cislo a").expect("number link selector"));
static NAME_CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.overflow_name").expect("name cell selector"));
static NAME_LINKED_ALT: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"td[headers="t2sa1 t2sb2"] a"#).expect("linked name selector")
});
static NAME_PLAIN_ALT: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"td[headers="t1sa1 t1sb2"]"#).expect("plain name selector"));

/// Numeric sub-region code of every row carrying one.
pub async fn precinct_numbers(client: &Client, url: &Url) -> Result<Vec<String>> {
    Ok(scan_numbers(&fetch::document(client, url).await?))
}

/// Relative link to each sub-region's detail page, taken from the code cell.
/// A code cell without a link contributes nothing.
pub async fn link_suffixes(client: &Client, url: &Url) -> Result<Vec<String>> {
    Ok(scan_links(&fetch::document(client, url).await?))
}

/// Unique sub-region display names. The site marks the name cell three
/// different ways depending on which of its table layouts the page uses.
pub async fn city_names(client: &Client, url: &Url) -> Result<Vec<String>> {
    Ok(scan_cities(&fetch::document(client, url).await?))
}

fn scan_numbers(doc: &Html) -> Vec<String> {
    rows(doc)
        .filter_map(|row| first_match(row, &NUMBER_CELL).map(text_of))
        .collect()
}

fn scan_links(doc: &Html) -> Vec<String> {
    rows(doc)
        .filter_map(|row| first_match(row, &NUMBER_LINK))
        .filter_map(|a| a.value().attr("href").map(str::to_string))
        .collect()
}

fn scan_cities(doc: &Html) -> Vec<String> {
    let mut cities: Vec<String> = Vec::new();
    for row in rows(doc) {
        if let Some(cell) = first_match(row, &NAME_CELL) {
            let name = text_of(cell);
            if !cities.contains(&name) {
                cities.push(name);
            }
        }
        for alt in [&NAME_LINKED_ALT, &NAME_PLAIN_ALT] {
            if let Some(cell) = first_match(row, alt) {
                let name = text_of(cell);
                if !name.is_empty() && !cities.contains(&name) {
                    cities.push(name);
                }
            }
        }
    }
    cities
}
