//! CSV Data Loader Module
//! Handles movie CSV loading and normalization using Polars.

use polars::prelude::*;
use rand::Rng;
use thiserror::Error;

use super::normalizer::normalize_columns;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Read a movie CSV from disk and normalize it to the canonical schema.
///
/// Parse failures surface as [`LoaderError`]; there is no retry and no
/// partial result. The generator feeds synthetic values for any missing
/// columns.
pub fn read_movie_csv<R: Rng>(file_path: &str, rng: &mut R) -> Result<DataFrame, LoaderError> {
    // Use lazy evaluation for memory efficiency, then collect
    let df = LazyCsvReader::new(file_path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    Ok(normalize_columns(df, rng)?)
}

/// Session holder for the normalized movie table.
/// Rebuilt when a new file is loaded, cleared when a load fails.
pub struct DataLoader {
    df: Option<DataFrame>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self { df: None }
    }

    /// Install a freshly normalized table (loading happens off-thread).
    pub fn set_dataframe(&mut self, df: DataFrame) {
        self.df = Some(df);
    }

    /// Get a reference to the loaded DataFrame.
    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    /// Drop the table, e.g. after a failed load.
    pub fn clear(&mut self) {
        self.df = None;
    }

    /// Get unique values from a column.
    pub fn get_unique_values(&self, column: &str) -> Vec<String> {
        let Some(df) = &self.df else {
            return Vec::new();
        };

        df.column(column)
            .ok()
            .and_then(|col| col.unique().ok())
            .map(|unique| {
                let series = unique.as_materialized_series();
                (0..series.len())
                    .filter_map(|i| {
                        let val = series.get(i).ok()?;
                        if val.is_null() {
                            None
                        } else {
                            Some(val.to_string().trim_matches('"').to_string())
                        }
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn loads_and_normalizes_a_csv_file() {
        let path = std::env::temp_dir().join("cinescope_loader_test.csv");
        std::fs::write(&path, "Title,Genre\nInception,Sci-Fi\nArrival,Drama\n").unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let df = read_movie_csv(path.to_str().unwrap(), &mut rng).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 7);
        let titles: Vec<Option<&str>> = df
            .column("title")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(titles, [Some("Inception"), Some("Arrival")]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(read_movie_csv("/nonexistent/movies.csv", &mut rng).is_err());
    }
}
