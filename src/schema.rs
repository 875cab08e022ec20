use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Icon reference used when a raw document carries none.
pub const DEFAULT_CATEGORY_ICON: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    /// Display label used when a raw document has no category name.
    pub fn default_category(&self) -> &'static str {
        match self {
            Kind::Income => "Income",
            Kind::Expense => "Expense",
        }
    }

    /// Sign an amount for net-balance totals: income adds, expense subtracts.
    pub fn signed(&self, amount: u64) -> i64 {
        match self {
            Kind::Income => amount as i64,
            Kind::Expense => -(amount as i64),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Income => write!(f, "income"),
            Kind::Expense => write!(f, "expense"),
        }
    }
}

/// Canonical transaction record.
///
/// Amounts are whole numbers in the smallest currency unit and never
/// negative; the sign contributed to totals comes from `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Document identifier. `None` until the record has been persisted;
    /// required for updates.
    pub id: Option<String>,
    pub category_name: String,
    /// Opaque reference to a display icon.
    pub category_icon: i64,
    pub amount: u64,
    pub kind: Kind,
    pub notes: String,
    /// `DD/MM/YYYY`, or the locale's "today" sentinel. The sentinel is
    /// resolved to a concrete date at persistence time, never stored.
    pub date_label: String,
    /// `HH.MM`, 24-hour, dot separator.
    pub time_label: String,
    /// Server-assigned; immutable after creation.
    pub created_at: Option<NaiveDateTime>,
    /// Server-assigned; bumped on every update.
    pub updated_at: Option<NaiveDateTime>,
}

/// Caller-supplied fields for a not-yet-persisted transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub category_name: String,
    pub category_icon: i64,
    pub amount: u64,
    pub kind: Kind,
    pub notes: String,
    pub date_label: String,
    pub time_label: String,
}

/// A document as it comes back from the store: an identifier plus an
/// untyped field map. Field extraction is the normalizer's job.
#[derive(Debug, Clone, Default)]
pub struct RawDocument {
    pub id: Option<String>,
    pub fields: Map<String, Value>,
}

impl RawDocument {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: Some(id.into()),
            fields,
        }
    }

    /// Builds a document from any JSON value. Non-object values yield an
    /// empty field map, which normalizes to all defaults.
    pub fn from_value(id: Option<String>, value: Value) -> Self {
        let fields = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self { id, fields }
    }
}

/// Canonical on-the-wire write payload. Key names are a stable contract
/// with the backing store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WritePayload {
    pub title: String,
    pub desc: String,
    pub total: u64,
    #[serde(rename = "categoryIconRes")]
    pub category_icon_res: i64,
    /// Concrete `DD/MM/YYYY` date; sentinel labels are resolved before
    /// the payload is built.
    #[serde(rename = "transactionDate")]
    pub transaction_date: String,
    #[serde(rename = "transactionTime")]
    pub transaction_time: String,
    /// Epoch seconds derived from date + time; absent when the labels do
    /// not parse.
    #[serde(rename = "transactionTimestamp")]
    pub transaction_timestamp: Option<i64>,
}
