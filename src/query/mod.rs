pub mod filter;
pub mod params;
pub mod queries;

pub use filter::{build_filter, Filter, PriceField, TextField};
pub use params::{validate_search, SearchParams};
