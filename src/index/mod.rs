//! Index aggregation pipeline.
//!
//! Each indicator is normalized onto [0, 1], indicators are averaged into
//! thematic buckets per country-year, country-years covering fewer than
//! [`aggregate::MIN_BUCKETS`] buckets are dropped, and the remaining bucket
//! scores are combined into a weighted `inequity_index`.

pub mod aggregate;
pub mod normalize;
pub mod pipeline;
pub mod types;
pub mod utility;

pub use pipeline::{build_index, load_index, run};
pub use types::IndexRow;
