use chrono::NaiveDate;

use crate::datetime::{self, DisplayLocale};
use crate::schema::Transaction;
use crate::{DayGroup, FeedSnapshot};

/// Orders the aggregated feed and groups it by calendar day.
///
/// The whole feed is stable-sorted newest first by parsed date + time
/// (unparseable labels sort as epoch zero), so items inside a group run
/// descending by time-of-day and ties keep aggregator order. The grouping
/// key is the record's date label after sentinel resolution against
/// `today`, which puts a "today" record and a literal-today record in the
/// same group.
pub fn present(records: Vec<Transaction>, today: NaiveDate, locale: &DisplayLocale) -> FeedSnapshot {
    let total = net_total(&records);

    let mut entries: Vec<(String, Transaction)> = records
        .into_iter()
        .map(|record| {
            let key = datetime::resolve_date_label(&record.date_label, today, locale);
            (key, record)
        })
        .collect();
    // Sort keys use the resolved label so a sentinel-dated record orders
    // as today rather than as unparseable.
    entries.sort_by(|(a_key, a), (b_key, b)| {
        let a_at = datetime::sort_instant(a_key, &a.time_label);
        let b_at = datetime::sort_instant(b_key, &b.time_label);
        b_at.cmp(&a_at)
    });

    let mut groups: Vec<DayGroup> = Vec::new();
    for (key, record) in entries {
        match groups.iter_mut().find(|group| group.date_label == key) {
            Some(group) => group.transactions.push(record),
            None => groups.push(DayGroup {
                display_label: datetime::to_relative_label(&key, today, locale),
                date_label: key,
                transactions: vec![record],
            }),
        }
    }

    // Newest day first; unparseable keys take the epoch position at the end
    // rather than being dropped.
    let epoch_day = datetime::epoch().date();
    groups.sort_by(|a, b| {
        let a_day = datetime::parse_date_label(&a.date_label).unwrap_or(epoch_day);
        let b_day = datetime::parse_date_label(&b.date_label).unwrap_or(epoch_day);
        b_day.cmp(&a_day)
    });

    FeedSnapshot { groups, total }
}

/// Signed net balance over the feed: income adds, expense subtracts.
pub fn net_total(records: &[Transaction]) -> i64 {
    records
        .iter()
        .map(|record| record.kind.signed(record.amount))
        .sum()
}

/// Renders a signed amount in the app's display style: `Rp` prefix, dot
/// thousands separators, no decimals.
pub fn format_rupiah(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-Rp{grouped}")
    } else {
        format!("Rp{grouped}")
    }
}
