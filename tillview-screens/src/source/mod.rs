//! Data-source implementations backing the listing screens

mod http;
mod static_store;

pub use http::HttpSource;
pub use static_store::StaticSource;
