//! Data module - CSV loading, normalization and queries

mod loader;
mod normalizer;
mod processor;

pub use loader::{read_movie_csv, DataLoader, LoaderError};
pub use normalizer::{normalize_columns, REQUIRED_COLUMNS};
pub use processor::{MovieRecord, MovieViews, Processor, ProcessorError, ScatterPoint};
