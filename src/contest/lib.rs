//! Contest metadata for Codeforces contests: fetching it from the api,
//! caching it on disk and scaffolding a working directory around it.
pub mod acquire;
pub mod api;
pub mod cache;
pub mod config;
pub mod division;
pub mod error;
pub mod model;
pub mod payload;
pub mod project;
pub mod template;

pub use acquire::acquire;
pub use division::compute_division;
pub use error::{Error, Result};
pub use model::{Contest, Problem};
