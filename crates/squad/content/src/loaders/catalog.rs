//! Item catalog loader.
//!
//! A catalog is delimited text: one header line, then `name,cost` rows.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use squad_core::{Inventory, Item};
use tracing::debug;

/// Errors raised while reading a catalog. Any of them stops the process
/// before a single squad is built.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected `name{delimiter}cost`, found {content:?}")]
    MalformedRow {
        line: usize,
        delimiter: char,
        content: String,
    },

    #[error("line {line}: cost {value:?} is not a non-negative integer")]
    InvalidCost { line: usize, value: String },

    #[error("line {line}: item {name:?} already listed on line {first_line}")]
    DuplicateItem {
        line: usize,
        first_line: usize,
        name: String,
    },

    #[error("catalog has no item rows")]
    Empty,
}

impl CatalogError {
    /// One-based line number of the offending row, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedRow { line, .. }
            | Self::InvalidCost { line, .. }
            | Self::DuplicateItem { line, .. } => Some(*line),
            Self::Io { .. } | Self::Empty => None,
        }
    }
}

/// Loader for delimited item catalogs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogLoader {
    delimiter: char,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogLoader {
    pub const DEFAULT_DELIMITER: char = ',';

    pub const fn new() -> Self {
        Self {
            delimiter: Self::DEFAULT_DELIMITER,
        }
    }

    pub const fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Load a catalog file into items, in file order.
    pub fn load(&self, path: &Path) -> Result<Vec<Item>, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let items = self.parse(&content)?;
        debug!(path = %path.display(), items = items.len(), "catalog loaded");
        Ok(items)
    }

    /// Load a catalog file straight into an [`Inventory`].
    pub fn load_inventory(&self, path: &Path) -> Result<Inventory, CatalogError> {
        self.load(path).map(Inventory::from_items)
    }

    /// Parse catalog text.
    ///
    /// The first line is a header and is skipped. Blank lines are ignored and
    /// both fields are trimmed.
    pub fn parse(&self, content: &str) -> Result<Vec<Item>, CatalogError> {
        let mut items = Vec::new();
        let mut first_lines: HashMap<String, usize> = HashMap::new();

        for (index, raw) in content.lines().enumerate().skip(1) {
            let line = index + 1;
            if raw.trim().is_empty() {
                continue;
            }

            let item = self.parse_row(line, raw)?;
            if let Some(&first_line) = first_lines.get(&item.name) {
                return Err(CatalogError::DuplicateItem {
                    line,
                    first_line,
                    name: item.name,
                });
            }
            first_lines.insert(item.name.clone(), line);
            items.push(item);
        }

        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(items)
    }

    fn parse_row(&self, line: usize, raw: &str) -> Result<Item, CatalogError> {
        let malformed = || CatalogError::MalformedRow {
            line,
            delimiter: self.delimiter,
            content: raw.to_string(),
        };

        let mut fields = raw.split(self.delimiter);
        let (Some(name), Some(cost), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(malformed());
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(malformed());
        }

        let cost = cost.trim();
        let cost = cost.parse::<u32>().map_err(|_| CatalogError::InvalidCost {
            line,
            value: cost.to_string(),
        })?;

        Ok(Item::new(name, cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_rows_after_header() {
        let items = CatalogLoader::new()
            .parse("name,cost\nGoku,7\nKrillin, 3 \n\nVegeta,5\n")
            .unwrap();

        assert_eq!(
            items,
            vec![
                Item::new("Goku", 7),
                Item::new("Krillin", 3),
                Item::new("Vegeta", 5)
            ]
        );
    }

    #[test]
    fn handles_crlf_line_endings() {
        let items = CatalogLoader::new()
            .parse("name,cost\r\nGoku,7\r\n")
            .unwrap();
        assert_eq!(items, vec![Item::new("Goku", 7)]);
    }

    #[test]
    fn rejects_negative_and_non_numeric_costs() {
        let err = CatalogLoader::new()
            .parse("name,cost\nGoku,7\nCell,-2\n")
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidCost { line: 3, ref value } if value == "-2"));

        let err = CatalogLoader::new()
            .parse("name,cost\nCell,lots\n")
            .unwrap_err();
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn rejects_rows_without_exactly_two_fields() {
        for row in ["Goku", "Goku,7,extra", ",7"] {
            let err = CatalogLoader::new()
                .parse(&format!("name,cost\n{row}\n"))
                .unwrap_err();
            assert!(matches!(err, CatalogError::MalformedRow { line: 2, .. }), "{row}");
        }
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = CatalogLoader::new()
            .parse("name,cost\nGoku,7\nCell,4\nGoku,3\n")
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateItem {
                line: 4,
                first_line: 2,
                ..
            }
        ));
    }

    #[test]
    fn header_only_catalog_is_empty() {
        assert!(matches!(
            CatalogLoader::new().parse("name,cost\n"),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn custom_delimiter() {
        let items = CatalogLoader::with_delimiter(';')
            .parse("name;cost\nMajin Buu;6\n")
            .unwrap();
        assert_eq!(items, vec![Item::new("Majin Buu", 6)]);
    }

    #[test]
    fn loads_inventory_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,cost").unwrap();
        writeln!(file, "A,3").unwrap();
        writeln!(file, "B,3").unwrap();
        writeln!(file, "C,7").unwrap();

        let inventory = CatalogLoader::new().load_inventory(file.path()).unwrap();
        assert_eq!(inventory.cost_tiers(), vec![3, 7]);
        assert_eq!(inventory.available(3), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogLoader::new()
            .load(&dir.path().join("missing.csv"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
