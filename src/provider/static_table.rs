//! Static bracket provider.
//!
//! Serves bracket tables held in memory. Tables are either registered in
//! code or loaded from a directory of YAML files, one file per year:
//!
//! ```text
//! config/tax-brackets/
//! ├── 2019.yaml
//! ├── 2020.yaml
//! └── ...
//! ```
//!
//! Each file holds `year` and `tax_brackets` in the same shape the upstream
//! service returns.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use super::{BracketProvider, ensure_usable, unavailable};
use crate::error::{TaxError, TaxResult};
use crate::models::{TaxBracket, TaxBrackets, TaxYear};

/// One bracket table file.
#[derive(Debug, Clone, Deserialize)]
pub struct BracketTableFile {
    /// The tax year the table applies to.
    pub year: TaxYear,
    /// Brackets ordered ascending by `min`.
    pub tax_brackets: Vec<TaxBracket>,
}

/// Bracket provider serving tables from memory.
#[derive(Debug, Clone, Default)]
pub struct StaticBracketProvider {
    tables: HashMap<TaxYear, TaxBrackets>,
}

impl StaticBracketProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `brackets` for `year`, replacing any existing table.
    pub fn with_year(mut self, year: TaxYear, brackets: Vec<TaxBracket>) -> Self {
        self.tables.insert(year, TaxBrackets::new(brackets));
        self
    }

    /// Loads every `*.yaml` table in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the directory is missing or contains no table files (`ConfigNotFound`)
    /// - a file is not valid YAML or repeats a year (`ConfigParseError`)
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> TaxResult<Self> {
        let dir = dir.as_ref();
        let dir_str = dir.display().to_string();

        let entries = fs::read_dir(dir).map_err(|_| TaxError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut provider = Self::new();

        for entry in entries {
            let entry = entry.map_err(|_| TaxError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "yaml" || ext == "yml") {
                continue;
            }

            let table = Self::load_file(&path)?;
            if provider.tables.contains_key(&table.year) {
                return Err(TaxError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("duplicate table for year {}", table.year),
                });
            }
            provider
                .tables
                .insert(table.year, TaxBrackets::new(table.tax_brackets));
        }

        if provider.tables.is_empty() {
            return Err(TaxError::ConfigNotFound {
                path: format!("{} (no bracket tables found)", dir_str),
            });
        }

        info!(
            path = %dir_str,
            years = ?provider.years(),
            "Loaded tax bracket tables"
        );

        Ok(provider)
    }

    fn load_file(path: &Path) -> TaxResult<BracketTableFile> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TaxError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| TaxError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the years with a registered table, ascending.
    pub fn years(&self) -> Vec<TaxYear> {
        let mut years: Vec<TaxYear> = self.tables.keys().copied().collect();
        years.sort();
        years
    }
}

#[async_trait]
impl BracketProvider for StaticBracketProvider {
    async fn brackets_for_year(&self, year: TaxYear) -> TaxResult<TaxBrackets> {
        let brackets = self
            .tables
            .get(&year)
            .cloned()
            .ok_or_else(|| unavailable(year, "no tax brackets for the given year"))?;

        ensure_usable(year, brackets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn year(value: u16) -> TaxYear {
        TaxYear::new(value).unwrap()
    }

    fn write_table(dir: &Path, name: &str, content: &str) {
        let mut file = fs::File::create(dir.join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    const TABLE_2019: &str = r#"
year: 2019
tax_brackets:
  - band: band1
    min: 0
    max: 47630
    rate: 0.15
  - band: band2
    min: 47630
    rate: 0.205
"#;

    #[tokio::test]
    async fn test_registered_year_is_served() {
        let provider = StaticBracketProvider::new().with_year(
            year(2019),
            vec![TaxBracket::new("band1", dec!(0), None, dec!(0.15))],
        );

        let brackets = provider.brackets_for_year(year(2019)).await.unwrap();
        assert_eq!(brackets.tax_brackets.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_year_is_unavailable() {
        let provider = StaticBracketProvider::new();
        let err = provider.brackets_for_year(year(2030)).await.unwrap_err();
        assert!(matches!(err, TaxError::BracketsUnavailable { year, .. } if year == "2030"));
    }

    #[tokio::test]
    async fn test_malformed_table_is_unavailable() {
        let provider = StaticBracketProvider::new().with_year(
            year(2019),
            vec![TaxBracket::new("band1", dec!(10), None, dec!(0.15))],
        );

        let err = provider.brackets_for_year(year(2019)).await.unwrap_err();
        assert!(matches!(err, TaxError::BracketsUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_load_dir_reads_yaml_tables() {
        let dir = tempfile::tempdir().unwrap();
        write_table(dir.path(), "2019.yaml", TABLE_2019);
        write_table(dir.path(), "notes.txt", "not a table");

        let provider = StaticBracketProvider::load_dir(dir.path()).unwrap();
        assert_eq!(provider.years(), vec![year(2019)]);

        let brackets = provider.brackets_for_year(year(2019)).await.unwrap();
        assert_eq!(brackets.tax_brackets[1].rate, dec!(0.205));
        assert!(brackets.tax_brackets[1].is_unbounded());
    }

    #[test]
    fn test_load_dir_missing_directory() {
        let err = StaticBracketProvider::load_dir("/nonexistent/tax-brackets").unwrap_err();
        assert!(matches!(err, TaxError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_dir_without_tables() {
        let dir = tempfile::tempdir().unwrap();
        let err = StaticBracketProvider::load_dir(dir.path()).unwrap_err();
        assert!(
            matches!(err, TaxError::ConfigNotFound { path } if path.contains("no bracket tables"))
        );
    }

    #[test]
    fn test_load_dir_rejects_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        write_table(dir.path(), "2019.yaml", "year: [unclosed");
        let err = StaticBracketProvider::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, TaxError::ConfigParseError { .. }));
    }

    #[test]
    fn test_load_dir_rejects_duplicate_years() {
        let dir = tempfile::tempdir().unwrap();
        write_table(dir.path(), "2019.yaml", TABLE_2019);
        write_table(dir.path(), "2019-copy.yml", TABLE_2019);

        let err = StaticBracketProvider::load_dir(dir.path()).unwrap_err();
        assert!(
            matches!(err, TaxError::ConfigParseError { message, .. } if message.contains("duplicate"))
        );
    }

    #[test]
    fn test_bundled_tables_load() {
        let provider = StaticBracketProvider::load_dir("./config/tax-brackets").unwrap();
        assert!(provider.years().contains(&year(2019)));
    }
}
