//! Pipeline helpers shared by the library entry points.

mod url;

pub use url::{build_seed_url, validate_and_normalize_url};
