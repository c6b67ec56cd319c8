//! Preconfigured browsers for each listing screen
//!
//! Each constructor fixes the screen's searchable fields explicitly, so the
//! search box reaches exactly the columns the screen shows — never arbitrary
//! stringified fields. Option filters are named criteria with the constants
//! below, so switching an option off clears exactly the criterion it set.

use tillview_lib::ListBrowser;
use tillview_lib::ListRecord;

use crate::model::Active;
use crate::model::Activity;
use crate::model::Branch;
use crate::model::DocumentKind;
use crate::model::Legend;
use crate::model::Sale;
use crate::model::SaleStatus;
use crate::model::SyncEvent;
use crate::model::SyncStatus;

/// Criterion name for the active-only toggle.
pub const ACTIVE_ONLY_CRITERION: &str = "active-only";

/// Criterion name for the sale status selector.
pub const SALE_STATUS_CRITERION: &str = "sale-status";

/// Criterion name for the legend document-kind selector.
pub const DOCUMENT_KIND_CRITERION: &str = "document-kind";

/// Criterion name for the sync outcome selector.
pub const SYNC_STATUS_CRITERION: &str = "sync-status";

/// Browser for the branches screen. Searches code, name and address.
pub fn branch_browser() -> ListBrowser<Branch> {
    ListBrowser::new()
        .with_search_field(|branch: &Branch| branch.code.clone())
        .with_search_field(|branch: &Branch| branch.name.clone())
        .with_search_field(|branch: &Branch| branch.address.clone())
}

/// Browser for the economic activities screen. Searches code and description.
pub fn activity_browser() -> ListBrowser<Activity> {
    ListBrowser::new()
        .with_search_field(|activity: &Activity| activity.code.clone())
        .with_search_field(|activity: &Activity| activity.description.clone())
}

/// Browser for the fiscal legends screen. Searches code and text.
pub fn legend_browser() -> ListBrowser<Legend> {
    ListBrowser::new()
        .with_search_field(|legend: &Legend| legend.code.clone())
        .with_search_field(|legend: &Legend| legend.text.clone())
}

/// Browser for the sales screen. Searches document number and customer.
pub fn sale_browser() -> ListBrowser<Sale> {
    ListBrowser::new()
        .with_search_field(|sale: &Sale| sale.number.clone())
        .with_search_field(|sale: &Sale| sale.customer.clone())
}

/// Browser for the sync history screen. Searches detail and kind label.
pub fn sync_browser() -> ListBrowser<SyncEvent> {
    ListBrowser::new()
        .with_search_field(|event: &SyncEvent| event.detail.clone())
        .with_search_field(|event: &SyncEvent| event.kind.label().to_string())
}

/// Switches the active-only toggle on branch or activity screens.
pub fn set_active_only<R>(browser: &mut ListBrowser<R>, active_only: bool)
where
    R: ListRecord + Active,
{
    if active_only {
        browser.set_criterion(ACTIVE_ONLY_CRITERION, |record: &R| record.is_active());
    } else {
        browser.clear_criterion(ACTIVE_ONLY_CRITERION);
    }
}

/// Selects a sale status to filter by, or `None` to show every status.
pub fn set_sale_status(browser: &mut ListBrowser<Sale>, status: Option<SaleStatus>) {
    match status {
        Some(status) => {
            browser.set_criterion(SALE_STATUS_CRITERION, move |sale: &Sale| {
                sale.status == status
            });
        }
        None => {
            browser.clear_criterion(SALE_STATUS_CRITERION);
        }
    }
}

/// Selects a document kind on the legends screen, or `None` for all kinds.
///
/// Legends registered for [`DocumentKind::All`] match every selection.
pub fn set_document_kind(browser: &mut ListBrowser<Legend>, kind: Option<DocumentKind>) {
    match kind {
        Some(kind) => {
            browser.set_criterion(DOCUMENT_KIND_CRITERION, move |legend: &Legend| {
                legend.document_kind == kind || legend.document_kind == DocumentKind::All
            });
        }
        None => {
            browser.clear_criterion(DOCUMENT_KIND_CRITERION);
        }
    }
}

/// Selects a sync outcome to filter by, or `None` to show every run.
pub fn set_sync_status(browser: &mut ListBrowser<SyncEvent>, status: Option<SyncStatus>) {
    match status {
        Some(status) => {
            browser.set_criterion(SYNC_STATUS_CRITERION, move |event: &SyncEvent| {
                event.status == status
            });
        }
        None => {
            browser.clear_criterion(SYNC_STATUS_CRITERION);
        }
    }
}
