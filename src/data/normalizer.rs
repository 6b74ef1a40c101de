//! Column Normalizer Module
//! Renames known alternate column names and backfills missing movie columns.

use polars::prelude::*;
use rand::Rng;

/// Canonical columns every normalized table must carry.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "title",
    "overview",
    "genres",
    "popularity",
    "director",
    "rating",
    "reviews",
];

/// Exact-match, case-sensitive rename map applied before backfill.
const RENAME_MAP: [(&str, &str); 2] = [("Title", "title"), ("Genre", "genres")];

const DEFAULT_OVERVIEW: &str = "No overview available";

fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|c| c.as_str() == name)
}

/// Normalize an uploaded table to the canonical movie schema.
///
/// Known alternate column names are renamed first; any canonical column
/// still missing afterwards is synthesized for every row: fixed placeholder
/// text for `overview`, "Unknown" for the other string columns, and uniform
/// random values for `popularity` [1,100], `rating` [1.0,10.0] rounded to
/// one decimal, and `reviews` [1,500]. The generator is a parameter so
/// callers that need determinism can seed it.
pub fn normalize_columns<R: Rng>(mut df: DataFrame, rng: &mut R) -> PolarsResult<DataFrame> {
    for (from, to) in RENAME_MAP {
        if has_column(&df, from) {
            df.rename(from, to.into())?;
        }
    }

    let height = df.height();
    for name in REQUIRED_COLUMNS {
        if has_column(&df, name) {
            continue;
        }

        let column = match name {
            "overview" => Column::new(name.into(), vec![DEFAULT_OVERVIEW; height]),
            "popularity" => {
                let values: Vec<i64> = (0..height).map(|_| rng.gen_range(1..=100)).collect();
                Column::new(name.into(), values)
            }
            "rating" => {
                let values: Vec<f64> = (0..height)
                    .map(|_| (rng.gen_range(1.0..=10.0f64) * 10.0).round() / 10.0)
                    .collect();
                Column::new(name.into(), values)
            }
            "reviews" => {
                let values: Vec<i64> = (0..height).map(|_| rng.gen_range(1..=500)).collect();
                Column::new(name.into(), values)
            }
            // title, genres, director
            _ => Column::new(name.into(), vec!["Unknown"; height]),
        };
        df.with_column(column)?;
    }

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn str_values(df: &DataFrame, col: &str) -> Vec<String> {
        df.column(col)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|v| v.unwrap().to_string())
            .collect()
    }

    #[test]
    fn complete_table_passes_through_with_rename_only() {
        let df = df!(
            "Title" => ["Inception"],
            "overview" => ["A thief who steals corporate secrets."],
            "genres" => ["Sci-Fi"],
            "popularity" => [90i64],
            "director" => ["Nolan"],
            "rating" => [8.8f64],
            "reviews" => [1000i64],
        )
        .unwrap();

        let out = normalize_columns(df, &mut rng()).unwrap();

        assert_eq!(out.shape(), (1, 7));
        assert!(!has_column(&out, "Title"));
        assert_eq!(str_values(&out, "title"), ["Inception"]);
        assert_eq!(str_values(&out, "genres"), ["Sci-Fi"]);
        assert_eq!(str_values(&out, "director"), ["Nolan"]);
        assert_eq!(
            out.column("popularity").unwrap().i64().unwrap().get(0),
            Some(90)
        );
        assert_eq!(
            out.column("rating").unwrap().f64().unwrap().get(0),
            Some(8.8)
        );
        assert_eq!(
            out.column("reviews").unwrap().i64().unwrap().get(0),
            Some(1000)
        );
    }

    #[test]
    fn title_only_input_backfills_everything_else() {
        let df = df!("Title" => ["Arrival"]).unwrap();
        let out = normalize_columns(df, &mut rng()).unwrap();

        assert_eq!(str_values(&out, "title"), ["Arrival"]);
        assert_eq!(str_values(&out, "overview"), ["No overview available"]);
        assert_eq!(str_values(&out, "genres"), ["Unknown"]);
        assert_eq!(str_values(&out, "director"), ["Unknown"]);

        let popularity = out
            .column("popularity")
            .unwrap()
            .i64()
            .unwrap()
            .get(0)
            .unwrap();
        assert!((1..=100).contains(&popularity));

        let rating = out.column("rating").unwrap().f64().unwrap().get(0).unwrap();
        assert!((1.0..=10.0).contains(&rating));

        let reviews = out
            .column("reviews")
            .unwrap()
            .i64()
            .unwrap()
            .get(0)
            .unwrap();
        assert!((1..=500).contains(&reviews));
    }

    #[test]
    fn rename_applies_before_backfill() {
        let df = df!("Title" => ["Arrival"], "Genre" => ["Drama"]).unwrap();
        let out = normalize_columns(df, &mut rng()).unwrap();

        // Renamed columns count as present and must never be overwritten
        assert_eq!(str_values(&out, "title"), ["Arrival"]);
        assert_eq!(str_values(&out, "genres"), ["Drama"]);
    }

    #[test]
    fn synthetic_values_stay_in_range() {
        let titles: Vec<String> = (0..64).map(|i| format!("movie {i}")).collect();
        let df = df!("title" => titles).unwrap();
        let out = normalize_columns(df, &mut rng()).unwrap();

        for v in out.column("popularity").unwrap().i64().unwrap().into_iter() {
            assert!((1..=100).contains(&v.unwrap()));
        }
        for v in out.column("reviews").unwrap().i64().unwrap().into_iter() {
            assert!((1..=500).contains(&v.unwrap()));
        }
        for v in out.column("rating").unwrap().f64().unwrap().into_iter() {
            let r = v.unwrap();
            assert!((1.0..=10.0).contains(&r));
            // At most one decimal digit
            assert!((r - (r * 10.0).round() / 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn seeded_generator_is_reproducible() {
        let titles: Vec<String> = (0..16).map(|i| format!("movie {i}")).collect();
        let a = normalize_columns(df!("title" => titles.clone()).unwrap(), &mut rng()).unwrap();
        let b = normalize_columns(df!("title" => titles).unwrap(), &mut rng()).unwrap();

        let ratings = |df: &DataFrame| -> Vec<Option<f64>> {
            df.column("rating").unwrap().f64().unwrap().into_iter().collect()
        };
        let popularity = |df: &DataFrame| -> Vec<Option<i64>> {
            df.column("popularity").unwrap().i64().unwrap().into_iter().collect()
        };
        assert_eq!(ratings(&a), ratings(&b));
        assert_eq!(popularity(&a), popularity(&b));
    }

    #[test]
    fn empty_table_still_gains_all_columns() {
        let df = df!("title" => Vec::<String>::new()).unwrap();
        let out = normalize_columns(df, &mut rng()).unwrap();

        assert_eq!(out.height(), 0);
        for name in REQUIRED_COLUMNS {
            assert!(has_column(&out, name));
        }
    }
}
