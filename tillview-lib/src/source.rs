//! Data-source collaborators and the browse session
//!
//! The engine never fetches or mutates anything itself. A [`DataSource`]
//! supplies the full record set; a [`RecordStore`] additionally performs
//! create/update/delete against it. [`BrowseSession`] wires a source to a
//! [`ListBrowser`] and enforces the one contract that keeps the view honest:
//! after every successful fetch or mutation, the record set is replaced
//! wholesale, never patched.

use async_trait::async_trait;

use crate::browser::ListBrowser;
use crate::error::SourceError;
use crate::record::ListRecord;

/// Supplies the full record set for a listing screen.
///
/// Each successful fetch result is passed verbatim to
/// [`ListBrowser::replace_records`]. A failed fetch never touches the
/// engine; the previous view stays on screen.
#[async_trait]
pub trait DataSource<R>: Send + Sync {
    /// Fetches the complete record set.
    async fn fetch_all(&self) -> Result<Vec<R>, SourceError>;
}

/// A data source that also accepts mutations.
///
/// Mutations return the stored record (with any server-assigned fields), but
/// callers must not patch the browser with it; [`BrowseSession`] refetches
/// instead so the view never diverges from the source of truth.
#[async_trait]
pub trait RecordStore<R: ListRecord>: DataSource<R> {
    /// Stores a new record.
    async fn create(&self, record: R) -> Result<R, SourceError>;

    /// Replaces the record with the given key.
    async fn update(&self, key: R::Key, record: R) -> Result<R, SourceError>;

    /// Removes the record with the given key.
    async fn delete(&self, key: R::Key) -> Result<(), SourceError>;
}

/// A [`ListBrowser`] wired to its data source.
///
/// The session is the single place where the asynchronous world re-enters
/// the engine. Overlapping refreshes are last-write-wins; callers that need
/// strict ordering discard stale responses themselves.
///
/// # Example
///
/// ```ignore
/// let mut session = BrowseSession::new(branch_browser(), source);
/// session.refresh().await?;
///
/// for branch in session.browser().page_records() {
///     println!("{}", branch.name);
/// }
/// ```
pub struct BrowseSession<R: ListRecord, S> {
    browser: ListBrowser<R>,
    source: S,
}

impl<R: ListRecord, S> BrowseSession<R, S> {
    /// Creates a session over a browser and its source.
    pub fn new(browser: ListBrowser<R>, source: S) -> Self {
        Self { browser, source }
    }

    /// The engine, for reading the current view.
    pub fn browser(&self) -> &ListBrowser<R> {
        &self.browser
    }

    /// The engine, for forwarding user intents.
    pub fn browser_mut(&mut self) -> &mut ListBrowser<R> {
        &mut self.browser
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<R: ListRecord, S: DataSource<R>> BrowseSession<R, S> {
    /// Fetches the record set and replaces the browser's contents.
    ///
    /// On failure the browser keeps its previous, stale-but-consistent view
    /// and the error is returned for the presentation layer to report.
    pub async fn refresh(&mut self) -> Result<(), SourceError> {
        match self.source.fetch_all().await {
            Ok(records) => {
                log::debug!("refresh fetched {} records", records.len());
                self.browser.replace_records(records);
                Ok(())
            }
            Err(err) => {
                log::warn!("refresh failed, keeping previous view: {err}");
                Err(err)
            }
        }
    }
}

impl<R: ListRecord, S: RecordStore<R>> BrowseSession<R, S> {
    /// Stores a new record, then refreshes.
    pub async fn create(&mut self, record: R) -> Result<R, SourceError> {
        let created = self.source.create(record).await?;
        self.refresh().await?;
        Ok(created)
    }

    /// Replaces a record, then refreshes.
    pub async fn update(&mut self, key: R::Key, record: R) -> Result<R, SourceError> {
        let updated = self.source.update(key, record).await?;
        self.refresh().await?;
        Ok(updated)
    }

    /// Removes a record, then refreshes.
    pub async fn delete(&mut self, key: R::Key) -> Result<(), SourceError> {
        self.source.delete(key).await?;
        self.refresh().await
    }
}
