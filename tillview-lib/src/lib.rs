//! List browsing core for the tillview admin platform
//!
//! Every listing screen in the admin front end browses the same way: a full
//! record set fetched from a data source, a set of filter criteria over it,
//! windowed pagination, and an id-based selection. This crate owns that
//! logic once, as [`ListBrowser`], so screens stop reimplementing it with
//! diverging edge-case handling.
//!
//! The engine is synchronous and pure; the only asynchronous boundary is the
//! [`DataSource`] collaborator, driven through [`BrowseSession`].

pub mod browser;
pub mod error;
pub mod filter;
pub mod page;
pub mod record;
pub mod selection;
pub mod source;

pub use browser::BrowseIntent;
pub use browser::ListBrowser;
pub use error::BrowseError;
pub use error::SourceError;
pub use record::ListRecord;
pub use selection::SelectionSet;
pub use source::BrowseSession;
pub use source::DataSource;
pub use source::RecordStore;
