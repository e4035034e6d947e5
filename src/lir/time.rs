use ::time::format_description::well_known::Rfc3339;
use ::time::macros::format_description;
use ::time::{Date, OffsetDateTime};

/// A point in time, from an RFC 3339 timestamp or a plain calendar date (at midnight UTC).
pub(crate) fn instant(value: &str) -> Option<OffsetDateTime> {
    let value = value.trim();

    OffsetDateTime::parse(value, &Rfc3339)
        .ok()
        .or_else(|| {
            Date::parse(value, format_description!("[year]-[month]-[day]"))
                .ok()
                .map(|date| date.midnight().assume_utc())
        })
}
