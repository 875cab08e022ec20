use futures::future;
use log::{debug, warn};

use crate::error::WalletFeedError;
use crate::normalize::normalize;
use crate::schema::{Kind, Transaction};
use crate::store::TransactionStore;

/// Result of one aggregation cycle. `records` and `errors` are
/// independent: a partial failure yields the successful side's records
/// alongside the failing side's error. Callers must not render an empty
/// feed as "no data" while `errors` is non-empty.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub records: Vec<Transaction>,
    pub errors: Vec<WalletFeedError>,
}

impl FetchOutcome {
    /// True when every source fetch failed. The caller must surface this
    /// as a hard failure rather than a false-empty feed.
    pub fn all_sources_failed(&self) -> bool {
        self.errors.len() >= 2
    }
}

/// Fetches income and expense documents concurrently, waits for both to
/// settle, and normalizes each document tagged with its source kind.
///
/// Income records precede expense records in the output; no further
/// ordering is imposed here. No retries either; retrying a failed side is
/// the caller's decision.
pub async fn fetch_all<S: TransactionStore + ?Sized>(store: &S, owner_id: &str) -> FetchOutcome {
    let (income, expense) = future::join(
        store.fetch(Kind::Income, owner_id),
        store.fetch(Kind::Expense, owner_id),
    )
    .await;

    let mut outcome = FetchOutcome::default();
    for (kind, result) in [(Kind::Income, income), (Kind::Expense, expense)] {
        match result {
            Ok(documents) => {
                debug!("fetched {} {} documents", documents.len(), kind);
                outcome
                    .records
                    .extend(documents.iter().map(|doc| normalize(doc, kind)));
            }
            Err(error) => {
                warn!("{} fetch failed: {}", kind, error);
                outcome.errors.push(error);
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{RawDocument, WritePayload};
    use async_trait::async_trait;
    use serde_json::json;

    struct FlakyStore {
        income: Result<Vec<RawDocument>, String>,
        expense: Result<Vec<RawDocument>, String>,
    }

    #[async_trait]
    impl TransactionStore for FlakyStore {
        async fn fetch(
            &self,
            kind: Kind,
            _owner_id: &str,
        ) -> crate::error::Result<Vec<RawDocument>> {
            let side = match kind {
                Kind::Income => &self.income,
                Kind::Expense => &self.expense,
            };
            match side {
                Ok(docs) => Ok(docs.clone()),
                Err(message) => Err(WalletFeedError::FetchFailed {
                    kind,
                    message: message.clone(),
                }),
            }
        }

        async fn create(
            &self,
            _kind: Kind,
            _owner_id: &str,
            _payload: &WritePayload,
        ) -> crate::error::Result<String> {
            unreachable!("aggregation never writes")
        }

        async fn update(
            &self,
            _kind: Kind,
            _id: &str,
            _payload: &WritePayload,
        ) -> crate::error::Result<()> {
            unreachable!("aggregation never writes")
        }
    }

    fn doc(id: &str, title: &str, total: u64) -> RawDocument {
        RawDocument::from_value(
            Some(id.to_string()),
            json!({ "title": title, "total": total }),
        )
    }

    #[tokio::test]
    async fn merges_both_sources_income_first() {
        let store = FlakyStore {
            income: Ok(vec![doc("i1", "Gaji", 5_000_000)]),
            expense: Ok(vec![doc("e1", "Makan", 25_000)]),
        };

        let outcome = fetch_all(&store, "user-1").await;
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].kind, Kind::Income);
        assert_eq!(outcome.records[0].id.as_deref(), Some("i1"));
        assert_eq!(outcome.records[1].kind, Kind::Expense);
    }

    #[tokio::test]
    async fn partial_failure_keeps_records_and_reports_error() {
        let store = FlakyStore {
            income: Ok(vec![doc("i1", "Gaji", 5_000_000), doc("i2", "Bonus", 250_000)]),
            expense: Err("collection unavailable".to_string()),
        };

        let outcome = fetch_all(&store, "user-1").await;
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.errors.len(), 1);
        assert!(!outcome.all_sources_failed());
        assert!(matches!(
            outcome.errors[0],
            WalletFeedError::FetchFailed {
                kind: Kind::Expense,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn double_failure_reports_both_errors() {
        let store = FlakyStore {
            income: Err("timeout".to_string()),
            expense: Err("timeout".to_string()),
        };

        let outcome = fetch_all(&store, "user-1").await;
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.errors.len(), 2);
        assert!(outcome.all_sources_failed());
    }

    #[tokio::test]
    async fn empty_collections_are_not_failures() {
        let store = FlakyStore {
            income: Ok(Vec::new()),
            expense: Ok(Vec::new()),
        };

        let outcome = fetch_all(&store, "user-1").await;
        assert!(outcome.records.is_empty());
        assert!(outcome.errors.is_empty());
        assert!(!outcome.all_sources_failed());
    }
}
