use std::path::Path;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;
use url::Url;

use crate::extract::{detail, region};
use crate::output;
use crate::table::Table;

/// Root the supplied region URL must live under.
pub const SITE_ROOT: &str = "https://volby.cz";

/// Detail pages all hang off the same application path; the region page only
/// supplies the trailing suffix.
const DETAIL_BASE: &str = "https://volby.cz/pls/ps2017nss/";

/// Drive the full scrape: region page, one detail page per sub-region, merge,
/// CSV write, artifact cleanup. Strictly sequential, one request in flight at
/// a time; the first fetch or parse failure aborts the run.
pub async fn run(client: &Client, region_url: &str, output_path: &Path) -> Result<()> {
    let region = Url::parse(region_url)
        .with_context(|| format!("parsing region URL {region_url}"))?;

    // 1) region page: sub-region codes, names and detail links,
    //    position-paired
    let numbers = region::precinct_numbers(client, &region).await?;
    let cities = region::city_names(client, &region).await?;
    let suffixes = region::link_suffixes(client, &region).await?;
    info!(
        codes = numbers.len(),
        names = cities.len(),
        links = suffixes.len(),
        "region page scraped"
    );

    // 2) one pass per sub-region; the first detail page fixes the party
    //    column set, later pages pair into it positionally
    let mut stats = Table::new(["Number", "Valid", "City", "Registered", "Envelopes"]);
    let mut votes: Option<Table> = None;
    for ((number, city), suffix) in numbers.iter().zip(&cities).zip(&suffixes) {
        let url = detail_url(suffix)?;
        info!(number = %number, city = %city, "scraping sub-region");

        let valid = detail::valid_votes(client, &url).await?;
        let registered = detail::registered_voters(client, &url).await?;
        let envelopes = detail::envelopes(client, &url).await?;
        stats.push(vec![
            number.clone(),
            first_value(valid),
            city.clone(),
            first_value(registered),
            first_value(envelopes),
        ]);

        let names = detail::party_names(client, &url).await?;
        let counts = detail::party_votes(client, &url).await?;
        let table = votes.get_or_insert_with(|| {
            Table::new(std::iter::once("Number".to_string()).chain(names.iter().cloned()))
        });
        let mut row = Vec::with_capacity(1 + counts.len());
        row.push(number.clone());
        row.extend(counts);
        table.push(row);
    }
    let votes = votes.unwrap_or_else(|| Table::new(["Number"]));

    // 3) inner merge on the shared code, then the display-order swap
    let mut merged = stats.merge(&votes, "Number")?;
    merged.swap_columns("Valid", "City")?;

    // 4) write, then scrub scraping artifacts out of the written file
    output::write_csv(&merged, output_path)?;
    output::clean_csv(output_path)?;
    info!(rows = merged.rows().len(), path = %output_path.display(), "done");
    Ok(())
}

/// Absolute detail-page URL for one sub-region link suffix.
fn detail_url(suffix: &str) -> Result<Url> {
    Url::parse(&format!("{DETAIL_BASE}{suffix}"))
        .with_context(|| format!("building detail URL from suffix {suffix:?}"))
}

/// The summary extractors report one value per matching row; a page normally
/// has exactly one, a page missing the cell has none.
fn first_value(values: Vec<String>) -> String {
    values.into_iter().next().unwrap_or_default()
}
