//! Movie Query Module
//! Record extraction, title search, rating ranking and chart data preparation.

use polars::prelude::*;
use std::collections::HashMap;
use thiserror::Error;

/// How many movies the "top rated" ranking keeps.
pub const TOP_RATED_COUNT: usize = 10;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// One normalized row of movie metadata.
/// String cells that were null in the source come through empty; numeric
/// nulls come through as NaN and are skipped by the charts.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub overview: String,
    pub genres: String,
    pub director: String,
    pub popularity: f64,
    pub rating: f64,
    pub reviews: f64,
}

/// A single movie in the popularity/rating scatter.
#[derive(Debug, Clone)]
pub struct ScatterPoint {
    pub title: String,
    pub popularity: f64,
    pub rating: f64,
    pub reviews: f64,
}

/// Views derived from the normalized table, built once per load so UI
/// repaints never go back to Polars.
pub struct MovieViews {
    pub records: Vec<MovieRecord>,
    pub genre_order: Vec<String>,
    pub scatter_by_genre: HashMap<String, Vec<ScatterPoint>>,
    pub top_rated: Vec<MovieRecord>,
    pub max_reviews: f64,
}

/// Table-level queries over the normalized movie table.
pub struct Processor;

impl Processor {
    fn str_column(df: &DataFrame, name: &str) -> Result<StringChunked, ProcessorError> {
        Ok(df.column(name)?.cast(&DataType::String)?.str()?.clone())
    }

    fn f64_column(df: &DataFrame, name: &str) -> Result<Float64Chunked, ProcessorError> {
        Ok(df.column(name)?.cast(&DataType::Float64)?.f64()?.clone())
    }

    /// Pull every row out of the table as [`MovieRecord`]s.
    pub fn collect_records(df: &DataFrame) -> Result<Vec<MovieRecord>, ProcessorError> {
        let titles = Self::str_column(df, "title")?;
        let overviews = Self::str_column(df, "overview")?;
        let genres = Self::str_column(df, "genres")?;
        let directors = Self::str_column(df, "director")?;
        let popularity = Self::f64_column(df, "popularity")?;
        let rating = Self::f64_column(df, "rating")?;
        let reviews = Self::f64_column(df, "reviews")?;

        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            records.push(MovieRecord {
                title: titles.get(i).unwrap_or("").to_string(),
                overview: overviews.get(i).unwrap_or("").to_string(),
                genres: genres.get(i).unwrap_or("").to_string(),
                director: directors.get(i).unwrap_or("").to_string(),
                popularity: popularity.get(i).unwrap_or(f64::NAN),
                rating: rating.get(i).unwrap_or(f64::NAN),
                reviews: reviews.get(i).unwrap_or(f64::NAN),
            });
        }

        Ok(records)
    }

    /// Case-insensitive substring search against `title`.
    /// Rows with a null title never match. Returns the matching sub-table
    /// unmodified.
    pub fn search_by_title(df: &DataFrame, query: &str) -> Result<DataFrame, ProcessorError> {
        let needle = query.to_lowercase();
        let filtered = df
            .clone()
            .lazy()
            .filter(
                col("title")
                    .cast(DataType::String)
                    .str()
                    .to_lowercase()
                    .str()
                    .contains_literal(lit(needle)),
            )
            .collect()?;
        Ok(filtered)
    }

    /// Sort by `rating` descending and keep the first `n` rows.
    /// The sort is stable, so ties keep their original order.
    pub fn top_rated(df: &DataFrame, n: usize) -> Result<DataFrame, ProcessorError> {
        let sorted = df.sort(
            ["rating"],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true)
                .with_nulls_last(true),
        )?;
        Ok(sorted.head(Some(n)))
    }

    /// Build the YouTube trailer search URL for a title.
    /// The title is percent-encoded so reserved characters survive.
    pub fn trailer_search_url(title: &str) -> String {
        format!(
            "https://www.youtube.com/results?search_query={}+trailer",
            urlencoding::encode(title)
        )
    }

    /// Derive all chart/table views from the normalized table.
    pub fn build_views(df: &DataFrame) -> Result<MovieViews, ProcessorError> {
        let records = Self::collect_records(df)?;
        let top_rated = Self::collect_records(&Self::top_rated(df, TOP_RATED_COUNT)?)?;

        let mut scatter_by_genre: HashMap<String, Vec<ScatterPoint>> = HashMap::new();
        let mut max_reviews = 0.0f64;

        for record in &records {
            if record.popularity.is_nan() || record.rating.is_nan() {
                continue;
            }
            let reviews = if record.reviews.is_nan() {
                0.0
            } else {
                record.reviews
            };
            max_reviews = max_reviews.max(reviews);

            scatter_by_genre
                .entry(record.genres.clone())
                .or_default()
                .push(ScatterPoint {
                    title: record.title.clone(),
                    popularity: record.popularity,
                    rating: record.rating,
                    reviews,
                });
        }

        let mut genre_order: Vec<String> = scatter_by_genre.keys().cloned().collect();
        genre_order.sort();

        Ok(MovieViews {
            records,
            genre_order,
            scatter_by_genre,
            top_rated,
            max_reviews,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_df() -> DataFrame {
        df!(
            "title" => ["Inception", "Arrival", "Heat"],
            "overview" => ["a thief", "aliens arrive", "a heist"],
            "genres" => ["Sci-Fi", "Sci-Fi", "Crime"],
            "popularity" => [90.0, 70.0, 60.0],
            "director" => ["Nolan", "Villeneuve", "Mann"],
            "rating" => [8.8, 7.9, 8.3],
            "reviews" => [1000.0, 500.0, 250.0],
        )
        .unwrap()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let df = sample_df();
        let hits = Processor::search_by_title(&df, "incep").unwrap();
        assert_eq!(hits.height(), 1);
        let records = Processor::collect_records(&hits).unwrap();
        assert_eq!(records[0].title, "Inception");
        assert_eq!(records[0].director, "Nolan");
    }

    #[test]
    fn search_skips_null_titles() {
        let df = df!(
            "title" => [Some("Inception"), None::<&str>],
            "overview" => ["a", "b"],
            "genres" => ["Sci-Fi", "Sci-Fi"],
            "popularity" => [90.0, 70.0],
            "director" => ["Nolan", "?"],
            "rating" => [8.8, 7.9],
            "reviews" => [1000.0, 500.0],
        )
        .unwrap();

        // Empty query matches every row with a title, not the null one
        let hits = Processor::search_by_title(&df, "").unwrap();
        assert_eq!(hits.height(), 1);
    }

    #[test]
    fn top_rated_returns_ten_sorted_descending() {
        let titles: Vec<String> = (0..15).map(|i| format!("movie {i}")).collect();
        let ratings: Vec<f64> = vec![
            9.0, 8.0, 9.0, 7.0, 6.0, 9.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.5, 0.4, 0.3, 0.2,
        ];
        let df = df!(
            "title" => titles,
            "overview" => vec!["x"; 15],
            "genres" => vec!["Drama"; 15],
            "popularity" => vec![50.0; 15],
            "director" => vec!["Unknown"; 15],
            "rating" => ratings,
            "reviews" => vec![10.0; 15],
        )
        .unwrap();

        let top = Processor::top_rated(&df, TOP_RATED_COUNT).unwrap();
        assert_eq!(top.height(), 10);

        let records = Processor::collect_records(&top).unwrap();
        for pair in records.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
        // Ties keep their pre-sort order
        assert_eq!(records[0].title, "movie 0");
        assert_eq!(records[1].title, "movie 2");
        assert_eq!(records[2].title, "movie 5");
    }

    #[test]
    fn trailer_url_percent_encodes_the_title() {
        assert_eq!(
            Processor::trailer_search_url("Mad Max: Fury Road"),
            "https://www.youtube.com/results?search_query=Mad%20Max%3A%20Fury%20Road+trailer"
        );
        assert_eq!(
            Processor::trailer_search_url("Inception"),
            "https://www.youtube.com/results?search_query=Inception+trailer"
        );
    }

    #[test]
    fn views_group_scatter_points_by_genre() {
        let views = Processor::build_views(&sample_df()).unwrap();

        assert_eq!(views.records.len(), 3);
        assert_eq!(views.genre_order, ["Crime", "Sci-Fi"]);
        assert_eq!(views.scatter_by_genre["Sci-Fi"].len(), 2);
        assert_eq!(views.max_reviews, 1000.0);

        // Top list is capped at the table size and sorted by rating
        assert_eq!(views.top_rated.len(), 3);
        assert_eq!(views.top_rated[0].title, "Inception");
        assert_eq!(views.top_rated[1].title, "Heat");
    }
}
