//! Append-only registries for coordinate spaces and time series.
//!
//! Both registries are part of the persisted [`Db`](crate::store::Db)
//! aggregate and preserve creation order for display.

mod series;
mod spaces;

pub use series::SeriesRegistry;
pub use spaces::SpaceRegistry;
