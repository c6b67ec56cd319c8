//! Record types for the admin listing screens
//!
//! Field names follow the backend's camelCase JSON. Every record carries a
//! `Uuid` key, which is what selection and mutations address.

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use tillview_lib::ListRecord;
use uuid::Uuid;

/// A record that carries an active/inactive flag.
///
/// Branches and activities can be disabled without being deleted; the
/// screens expose an "active only" toggle over this.
pub trait Active {
    /// Returns `true` if the record is currently active.
    fn is_active(&self) -> bool;
}

/// A branch office of the business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// Unique identifier.
    pub id: Uuid,
    /// Branch code assigned by the tax authority.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Whether the branch is currently operating.
    pub active: bool,
}

impl ListRecord for Branch {
    type Key = Uuid;

    fn key(&self) -> Uuid {
        self.id
    }
}

impl Active for Branch {
    fn is_active(&self) -> bool {
        self.active
    }
}

/// An economic activity the business is registered for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Unique identifier.
    pub id: Uuid,
    /// Activity code from the tax authority's catalog.
    pub code: String,
    /// Activity description.
    pub description: String,
    /// Whether the activity is currently declared.
    pub active: bool,
}

impl ListRecord for Activity {
    type Key = Uuid;

    fn key(&self) -> Uuid {
        self.id
    }
}

impl Active for Activity {
    fn is_active(&self) -> bool {
        self.active
    }
}

/// The document kind a fiscal legend applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Electronic invoices.
    Invoice,
    /// Credit notes.
    CreditNote,
    /// Debit notes.
    DebitNote,
    /// Every document kind.
    All,
}

impl DocumentKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Invoice => "invoice",
            Self::CreditNote => "credit note",
            Self::DebitNote => "debit note",
            Self::All => "all documents",
        }
    }
}

/// A fiscal legend printed on emitted documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    /// Unique identifier.
    pub id: Uuid,
    /// Legend code.
    pub code: String,
    /// The text printed on the document.
    pub text: String,
    /// Which document kind the legend applies to.
    pub document_kind: DocumentKind,
}

impl ListRecord for Legend {
    type Key = Uuid;

    fn key(&self) -> Uuid {
        self.id
    }
}

/// Lifecycle status of a sale document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    /// Issued and accepted.
    Issued,
    /// Cancelled after issuing.
    Cancelled,
    /// Issued under the contingency procedure.
    Contingency,
}

impl SaleStatus {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Issued => "issued",
            Self::Cancelled => "cancelled",
            Self::Contingency => "contingency",
        }
    }
}

/// A sale document shown on the sales screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Unique identifier.
    pub id: Uuid,
    /// Document number (establishment-point-sequence).
    pub number: String,
    /// Customer display name.
    pub customer: String,
    /// Total amount.
    pub total: Decimal,
    /// When the document was issued.
    pub issued_at: DateTime<Utc>,
    /// Lifecycle status.
    pub status: SaleStatus,
}

impl ListRecord for Sale {
    type Key = Uuid;

    fn key(&self) -> Uuid {
        self.id
    }
}

/// How a synchronization run was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncKind {
    /// Scheduled background synchronization.
    Automatic,
    /// Operator-initiated synchronization.
    Manual,
    /// Replay of documents issued during a contingency window.
    Contingency,
}

impl SyncKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Automatic => "automatic",
            Self::Manual => "manual",
            Self::Contingency => "contingency",
        }
    }
}

/// Outcome of a synchronization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// Completed successfully.
    Succeeded,
    /// Completed with an error.
    Failed,
    /// Still running.
    InProgress,
}

impl SyncStatus {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::InProgress => "in progress",
        }
    }
}

/// One entry in the synchronization/contingency history screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncEvent {
    /// Unique identifier.
    pub id: Uuid,
    /// How the run was triggered.
    pub kind: SyncKind,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run finished, if it has.
    pub finished_at: Option<DateTime<Utc>>,
    /// Outcome of the run.
    pub status: SyncStatus,
    /// Operator-facing detail message.
    pub detail: String,
}

impl ListRecord for SyncEvent {
    type Key = Uuid;

    fn key(&self) -> Uuid {
        self.id
    }
}
