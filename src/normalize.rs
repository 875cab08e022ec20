//! Mapping between raw store documents and the canonical transaction shape.
//!
//! Normalization is total and defensive: a malformed field falls back to
//! its default instead of failing the record, and a malformed record never
//! fails the feed.

use chrono::{DateTime, NaiveDateTime};
use serde_json::{Map, Value};

use crate::datetime::{self, DisplayLocale};
use crate::schema::{
    Kind, RawDocument, Transaction, TransactionDraft, WritePayload, DEFAULT_CATEGORY_ICON,
};

/// Maps one raw document into a canonical [`Transaction`].
///
/// `source_kind` is which collection the document came from; it is the
/// source of truth and overrides any `type` field in the raw data. Legacy
/// field names (`title`/`desc`/`total`) are read before their newer
/// aliases.
pub fn normalize(raw: &RawDocument, source_kind: Kind) -> Transaction {
    let fields = &raw.fields;

    let category_name = string_field(fields, &["title", "categoryName"])
        .unwrap_or_else(|| source_kind.default_category().to_string());
    let notes = string_field(fields, &["desc", "notes"]).unwrap_or_default();
    let amount = number_field(fields, &["total", "amount"]);
    let category_icon = integer_field(fields, "categoryIconRes").unwrap_or(DEFAULT_CATEGORY_ICON);

    // Older records only carry the combined timestamp; derive display
    // labels from it when the strings are missing.
    let stamp = instant_field(fields, "transactionTimestamp");
    let date_label = string_field(fields, &["transactionDate"])
        .or_else(|| stamp.map(|at| datetime::format_date(at.date())))
        .unwrap_or_default();
    let time_label = string_field(fields, &["transactionTime"])
        .or_else(|| stamp.map(datetime::format_time))
        .unwrap_or_default();

    Transaction {
        id: raw.id.clone(),
        category_name,
        category_icon,
        amount,
        kind: source_kind,
        notes,
        date_label,
        time_label,
        created_at: instant_field(fields, "createdAt"),
        updated_at: instant_field(fields, "updatedAt"),
    }
}

/// Builds the wire payload for creating a draft. The "today" sentinel is
/// resolved against `now` here; it is never written out unresolved.
pub fn payload_from_draft(
    draft: &TransactionDraft,
    now: NaiveDateTime,
    locale: &DisplayLocale,
) -> WritePayload {
    build_payload(
        &draft.category_name,
        draft.category_icon,
        draft.amount,
        &draft.notes,
        &draft.date_label,
        &draft.time_label,
        now,
        locale,
    )
}

/// Builds the wire payload for updating an existing record. Only the
/// mutable fields appear; `kind`, `created_at`, and ownership are not part
/// of the payload and cannot be changed by an update.
pub fn payload_from_record(
    record: &Transaction,
    now: NaiveDateTime,
    locale: &DisplayLocale,
) -> WritePayload {
    build_payload(
        &record.category_name,
        record.category_icon,
        record.amount,
        &record.notes,
        &record.date_label,
        &record.time_label,
        now,
        locale,
    )
}

#[allow(clippy::too_many_arguments)]
fn build_payload(
    category_name: &str,
    category_icon: i64,
    amount: u64,
    notes: &str,
    date_label: &str,
    time_label: &str,
    now: NaiveDateTime,
    locale: &DisplayLocale,
) -> WritePayload {
    let transaction_date = datetime::resolve_date_label(date_label, now.date(), locale);
    let transaction_timestamp = datetime::to_instant(&transaction_date, time_label)
        .ok()
        .map(|at| at.and_utc().timestamp());

    WritePayload {
        title: category_name.to_string(),
        desc: notes.to_string(),
        total: amount,
        category_icon_res: category_icon,
        transaction_date,
        transaction_time: time_label.to_string(),
        transaction_timestamp,
    }
}

/// First key whose value is a non-empty string. Empty strings count as
/// absent so defaults can take over.
fn string_field(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// First key holding a JSON number, truncated toward zero and clamped to
/// non-negative. Anything else falls back to zero.
fn number_field(fields: &Map<String, Value>, keys: &[&str]) -> u64 {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find_map(coerce_amount)
        .unwrap_or(0)
}

fn coerce_amount(value: &Value) -> Option<u64> {
    let number = value.as_number()?;
    if let Some(unsigned) = number.as_u64() {
        return Some(unsigned);
    }
    if let Some(signed) = number.as_i64() {
        return Some(signed.max(0) as u64);
    }
    number.as_f64().map(|float| {
        let truncated = float.trunc();
        if truncated <= 0.0 {
            0
        } else {
            truncated as u64
        }
    })
}

fn integer_field(fields: &Map<String, Value>, key: &str) -> Option<i64> {
    fields.get(key).and_then(Value::as_i64)
}

/// Server instants arrive either as RFC 3339 strings or as integer epoch
/// seconds, depending on the store generation.
fn instant_field(fields: &Map<String, Value>, key: &str) -> Option<NaiveDateTime> {
    match fields.get(key)? {
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|at| at.naive_utc()),
        Value::Number(number) => number
            .as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|at| at.naive_utc()),
        _ => None,
    }
}
