use std::path::Path;

use anyhow::{Context, Result};

use crate::clean::clean_value;
use crate::table::Table;

/// Write the table to `path` as a comma-separated file, header row first.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Re-read the written file and scrub every data cell in place. Headers are
/// left as written; only column values are normalized.
pub fn clean_csv(path: &Path) -> Result<()> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("re-reading {}", path.display()))?;
    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(clean_value).collect::<Vec<_>>());
    }
    drop(reader);

    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("rewriting {}", path.display()))?;
    writer.write_record(&headers)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::NamedTempFile;

    #[test]
    fn written_file_round_trips_through_the_cleaning_pass() -> Result<()> {
        let mut table = Table::new(["Number", "City", "Valid"]);
        table.push(vec![
            "529303".into(),
            "Benešov".into(),
            "[1\u{a0}500]".into(),
        ]);
        table.push(vec!["532568".into(), "Bernartice".into(), "521".into()]);

        let file = NamedTempFile::new()?;
        write_csv(&table, file.path())?;
        clean_csv(file.path())?;

        let text = std::fs::read_to_string(file.path())?;
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Number,City,Valid"));
        assert_eq!(lines.next(), Some("529303,Benešov,1500"));
        assert_eq!(lines.next(), Some("532568,Bernartice,521"));
        assert!(!text.contains(&['[', ']', '\u{a0}'][..]));
        Ok(())
    }

    #[test]
    fn cleaning_twice_changes_nothing() -> Result<()> {
        let mut table = Table::new(["Number", "A"]);
        table.push(vec!["1".into(), "[10]".into()]);

        let file = NamedTempFile::new()?;
        write_csv(&table, file.path())?;
        clean_csv(file.path())?;
        let once = std::fs::read_to_string(file.path())?;
        clean_csv(file.path())?;
        let twice = std::fs::read_to_string(file.path())?;
        assert_eq!(once, twice);
        Ok(())
    }
}
