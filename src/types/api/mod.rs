mod fetch_api;
pub use fetch_api::*;
