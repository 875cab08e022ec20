//! # Wallet Feed
//!
//! A library for assembling a personal-finance transaction feed from a
//! hosted document store that keeps income and expense records in separate
//! collections.
//!
//! ## Core concepts
//!
//! - **Normalization**: raw documents with inconsistent field names and
//!   types map into one canonical [`Transaction`] shape; malformed fields
//!   degrade to defaults instead of failing the feed.
//! - **Dual-source aggregation**: income and expense fetches run
//!   concurrently and are joined with wait-for-both semantics; one failed
//!   side still yields the other side's records plus the error.
//! - **Day grouping**: the merged feed is sorted newest first and grouped
//!   by calendar day, with "today"-sentinel labels resolved against the
//!   current date and locale-aware relative labels per group.
//! - **Writes**: creates and updates travel back through the same
//!   normalizer as a stable wire payload; updates require an identifier
//!   and never change a record's kind.
//!
//! ## Example
//!
//! ```rust,ignore
//! use chrono::Local;
//! use wallet_feed::{DisplayLocale, WalletFeed};
//!
//! let feed = WalletFeed::with_locale(my_store, DisplayLocale::INDONESIAN);
//! let view = feed.refresh("user-1", Local::now().date_naive()).await;
//!
//! for group in &view.groups {
//!     println!("{}", group.display_label);
//!     for tx in &group.transactions {
//!         println!("  {} {}", tx.category_name, tx.amount);
//!     }
//! }
//! println!("net: {}", wallet_feed::format_rupiah(view.total));
//! ```

pub mod aggregate;
pub mod datetime;
pub mod error;
pub mod normalize;
pub mod present;
pub mod schema;
pub mod service;
pub mod store;

pub use aggregate::{fetch_all, FetchOutcome};
pub use datetime::{
    format_date, format_time, resolve_date_label, sort_instant, to_instant, to_relative_label,
    DisplayLocale,
};
pub use error::{Result, WalletFeedError};
pub use normalize::{normalize, payload_from_draft, payload_from_record};
pub use present::{format_rupiah, net_total, present};
pub use schema::*;
pub use service::WalletFeed;
pub use store::TransactionStore;

use serde::Serialize;

/// One calendar day of the feed.
#[derive(Debug, Clone, Serialize)]
pub struct DayGroup {
    /// Resolved grouping key: a concrete `DD/MM/YYYY` label, or the raw
    /// label when it never parsed.
    pub date_label: String,
    /// What the presentation layer shows for the day: "today"/"yesterday"
    /// literals or a full localized date.
    pub display_label: String,
    /// Newest first within the day.
    pub transactions: Vec<Transaction>,
}

/// Ordered, grouped feed plus the signed net balance.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FeedSnapshot {
    pub groups: Vec<DayGroup>,
    pub total: i64,
}

/// What a refresh hands back to the caller. `errors` carries per-source
/// fetch failures; an empty `groups` with non-empty `errors` is a failure
/// to surface, not an empty feed.
#[derive(Debug, Default)]
pub struct FeedView {
    pub groups: Vec<DayGroup>,
    pub total: i64,
    pub errors: Vec<WalletFeedError>,
}
