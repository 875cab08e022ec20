use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, error, info};

use crate::aggregate::{self, FetchOutcome};
use crate::datetime::DisplayLocale;
use crate::error::{Result, WalletFeedError};
use crate::normalize;
use crate::present;
use crate::schema::{Transaction, TransactionDraft};
use crate::store::TransactionStore;
use crate::FeedView;

/// Entry point tying the pipeline together: refresh assembles the grouped
/// feed, create and update hand normalized payloads to the store.
///
/// Every refresh produces a fresh [`FeedView`]; nothing is shared between
/// cycles, so the caller simply swaps in the newest completed snapshot.
pub struct WalletFeed<S> {
    store: S,
    locale: DisplayLocale,
}

impl<S: TransactionStore> WalletFeed<S> {
    pub fn new(store: S) -> Self {
        Self::with_locale(store, DisplayLocale::ENGLISH)
    }

    pub fn with_locale(store: S, locale: DisplayLocale) -> Self {
        Self { store, locale }
    }

    pub fn locale(&self) -> &DisplayLocale {
        &self.locale
    }

    /// Runs one aggregation cycle: fetch both sources, normalize, group.
    /// Fetch failures are carried in [`FeedView::errors`] rather than
    /// failing the call; when every source failed the feed is empty and
    /// the caller must surface the errors instead of an empty state.
    pub async fn refresh(&self, owner_id: &str, today: NaiveDate) -> FeedView {
        info!("refreshing transaction feed for owner {owner_id}");
        let outcome = aggregate::fetch_all(&self.store, owner_id).await;
        if outcome.all_sources_failed() {
            error!("all source fetches failed for owner {owner_id}");
        }

        let FetchOutcome { records, errors } = outcome;
        debug!("presenting {} records", records.len());
        let snapshot = present::present(records, today, &self.locale);

        FeedView {
            groups: snapshot.groups,
            total: snapshot.total,
            errors,
        }
    }

    /// Persists a new record in the collection matching the draft's kind.
    /// The "today" sentinel in the draft's date label is resolved against
    /// `now` before anything is written. Returns the assigned identifier.
    pub async fn create(
        &self,
        owner_id: &str,
        draft: &TransactionDraft,
        now: NaiveDateTime,
    ) -> Result<String> {
        let payload = normalize::payload_from_draft(draft, now, &self.locale);
        debug!(
            "creating {} record '{}' on {}",
            draft.kind, payload.title, payload.transaction_date
        );
        let id = self.store.create(draft.kind, owner_id, &payload).await?;
        info!("created {} record {id}", draft.kind);
        Ok(id)
    }

    /// Writes the mutable fields of an existing record (category, notes,
    /// amount, icon, date, time). Kind, creation instant, and ownership
    /// are never part of the payload. Rejected before any write attempt
    /// when the record has no identifier.
    pub async fn update(&self, record: &Transaction, now: NaiveDateTime) -> Result<()> {
        let id = record
            .id
            .as_deref()
            .ok_or(WalletFeedError::MissingRecordId)?;

        let payload = normalize::payload_from_record(record, now, &self.locale);
        debug!("updating {} record {id}", record.kind);
        self.store.update(record.kind, id, &payload).await
    }
}
