//! Field-level validators.
//!
//! Each validator takes a raw input value and returns either the normalized
//! value or a [`ValidationError`] naming the offending field. They are pure:
//! no storage access happens here.

use chrono::NaiveDate;

use crate::domain::foundation::{EntityId, Timestamp, ValidationError};

/// Maximum length of any name field, in characters.
pub const MAX_NAME_LEN: usize = 100;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trims a name and rejects it when empty or too long.
pub fn required_name(field: &str, raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ValidationError::out_of_range(
            field,
            1,
            MAX_NAME_LEN as i64,
            len as i64,
        ));
    }
    Ok(name.to_string())
}

/// Trims a required free-text field (currency, account type).
pub fn required_text(field: &str, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(value.to_string())
}

/// Trims an email and checks it has the `local@domain.tld` shape.
pub fn email(field: &str, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::empty_field(field));
    }

    let (local, domain) = value
        .split_once('@')
        .ok_or_else(|| ValidationError::invalid_format(field, "missing @ symbol"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(ValidationError::invalid_format(field, "malformed address"));
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(ValidationError::invalid_format(field, "malformed domain"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::invalid_format(field, "contains whitespace"));
    }

    Ok(value.to_string())
}

/// Accepts amounts that are finite and not negative.
pub fn non_negative_amount(field: &str, amount: f64) -> Result<f64, ValidationError> {
    if !amount.is_finite() {
        return Err(ValidationError::invalid_format(field, "must be a finite number"));
    }
    if amount < 0.0 {
        return Err(ValidationError::invalid_format(field, "must not be negative"));
    }
    Ok(amount)
}

/// Accepts any finite amount, negative balances included.
pub fn finite_amount(field: &str, amount: f64) -> Result<f64, ValidationError> {
    if !amount.is_finite() {
        return Err(ValidationError::invalid_format(field, "must be a finite number"));
    }
    Ok(amount)
}

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn date(field: &str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    // chrono accepts single-digit months and days, the wire format does not
    if value.len() != 10 {
        return Err(ValidationError::invalid_format(field, "expected YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ValidationError::invalid_format(field, "expected YYYY-MM-DD"))
}

/// Parses an optional lower date bound: start of the given day.
pub fn range_start(field: &str, raw: &str) -> Result<Option<Timestamp>, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    date(field, raw).map(|d| Some(Timestamp::start_of_day(d)))
}

/// Parses an optional upper date bound: 23:59:59 of the given day.
pub fn range_end(field: &str, raw: &str) -> Result<Option<Timestamp>, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    date(field, raw).map(|d| Some(Timestamp::end_of_day(d)))
}

/// Requires a positive identifier.
pub fn required_id<I: EntityId>(field: &str, raw: i64) -> Result<I, ValidationError> {
    if raw <= 0 {
        return Err(ValidationError::out_of_range(field, 1, i64::MAX, raw));
    }
    Ok(I::from_raw(raw))
}

/// Requires a positive identifier when one is supplied.
pub fn optional_id<I: EntityId>(field: &str, raw: Option<i64>) -> Result<Option<I>, ValidationError> {
    raw.map(|value| required_id(field, value)).transpose()
}

/// Turns a list filter scalar into a filter: zero or negative means "no filter".
pub fn filter_id<I: EntityId>(raw: i64) -> Option<I> {
    (raw > 0).then(|| I::from_raw(raw))
}

/// Trims free-form notes.
pub fn notes(raw: &str) -> String {
    raw.trim().to_string()
}
