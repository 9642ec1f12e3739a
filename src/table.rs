use std::collections::HashMap;

use anyhow::{anyhow, Result};

/// A small in-memory table: ordered column names plus string cell rows.
///
/// This is the unit the pipeline accumulates into and merges; nothing here
/// knows about HTML or CSV.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Table {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Append a row, padding with empty cells or truncating so it matches the
    /// column count. Pairing cells to columns is strictly positional.
    pub fn push(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Inner-join `self` with `other` on the shared `key` column.
    ///
    /// The join is keyed, not positional: a left row is kept only when some
    /// right row carries the same key value, and the first matching right row
    /// wins if a key repeats. Left row order is preserved. Merged columns are
    /// the left columns followed by the right columns minus the key.
    pub fn merge(&self, other: &Table, key: &str) -> Result<Table> {
        let left_key = self
            .column_index(key)
            .ok_or_else(|| anyhow!("left table has no column {:?}", key))?;
        let right_key = other
            .column_index(key)
            .ok_or_else(|| anyhow!("right table has no column {:?}", key))?;

        let mut columns = self.columns.clone();
        columns.extend(
            other
                .columns
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != right_key)
                .map(|(_, c)| c.clone()),
        );

        let mut by_key: HashMap<&str, &Vec<String>> = HashMap::new();
        for row in &other.rows {
            by_key.entry(row[right_key].as_str()).or_insert(row);
        }

        let mut merged = Table {
            columns,
            rows: Vec::with_capacity(self.rows.len()),
        };
        for row in &self.rows {
            let Some(partner) = by_key.get(row[left_key].as_str()) else {
                continue;
            };
            let mut combined = row.clone();
            combined.extend(
                partner
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != right_key)
                    .map(|(_, v)| v.clone()),
            );
            merged.rows.push(combined);
        }
        Ok(merged)
    }

    /// Swap two columns in place, header and every cell.
    pub fn swap_columns(&mut self, a: &str, b: &str) -> Result<()> {
        let x = self
            .column_index(a)
            .ok_or_else(|| anyhow!("no column {:?} to swap", a))?;
        let y = self
            .column_index(b)
            .ok_or_else(|| anyhow!("no column {:?} to swap", b))?;
        self.columns.swap(x, y);
        for row in &mut self.rows {
            row.swap(x, y);
        }
        Ok(())
    }
}
