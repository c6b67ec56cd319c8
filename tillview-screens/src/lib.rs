//! Screen layer for the tillview admin platform
//!
//! The admin front end lists branches, economic activities, fiscal legends,
//! sales and synchronization history. This crate holds the record types for
//! those screens, preconfigured [`ListBrowser`](tillview_lib::ListBrowser)
//! constructors with each screen's searchable fields and option criteria,
//! and the data-source implementations that back them.

pub mod model;
pub mod screens;
pub mod source;

pub use model::Activity;
pub use model::Branch;
pub use model::DocumentKind;
pub use model::Legend;
pub use model::Sale;
pub use model::SaleStatus;
pub use model::SyncEvent;
pub use model::SyncKind;
pub use model::SyncStatus;
pub use source::HttpSource;
pub use source::StaticSource;
