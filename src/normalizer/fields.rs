//! Ordered extraction strategies for fields that feeds spell inconsistently.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::entities::decode_entities;
use super::raw::{DateValue, RawItem};

/// Where a post's timestamp may come from, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Timestamp,
    IsoDate,
    PubDate,
    Date,
}

pub const DATE_STRATEGIES: &[DateField] = &[
    DateField::Timestamp,
    DateField::IsoDate,
    DateField::PubDate,
    DateField::Date,
];

/// Where a post's title may come from, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    Item,
    Feed,
}

pub const TITLE_STRATEGIES: &[TitleSource] = &[TitleSource::Item, TitleSource::Feed];

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

impl DateField {
    fn value<'a>(&self, item: &'a RawItem) -> Option<&'a DateValue> {
        match self {
            DateField::Timestamp => item.timestamp.as_ref(),
            DateField::IsoDate => item.iso_date.as_ref(),
            DateField::PubDate => item.pub_date.as_ref(),
            DateField::Date => item.date.as_ref(),
        }
    }
}

impl TitleSource {
    fn value<'a>(&self, item: &'a RawItem, feed_title: Option<&'a str>) -> Option<&'a str> {
        match self {
            TitleSource::Item => item.title.as_deref(),
            TitleSource::Feed => feed_title,
        }
    }
}

/// First candidate that yields a valid instant, in epoch milliseconds.
/// Falls back to `0`.
pub fn resolve_timestamp(item: &RawItem) -> i64 {
    DATE_STRATEGIES
        .iter()
        .filter_map(|field| field.value(item))
        .find_map(to_millis)
        .unwrap_or(0)
}

/// First non-blank title candidate with entities decoded, or an empty string.
pub fn resolve_title(item: &RawItem, feed_title: Option<&str>) -> String {
    TITLE_STRATEGIES
        .iter()
        .filter_map(|source| source.value(item, feed_title))
        .map(str::trim)
        .find(|t| !t.is_empty())
        .map(decode_entities)
        .unwrap_or_default()
}

pub fn resolve_link(item: &RawItem) -> String {
    item.link
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

pub fn to_millis(value: &DateValue) -> Option<i64> {
    match value {
        DateValue::Millis(ms) => DateTime::from_timestamp_millis(*ms).map(|_| *ms),
        DateValue::Instant(dt) => Some(dt.timestamp_millis()),
        DateValue::Text(text) => parse_date_text(text),
    }
}

/// Parse the date spellings feeds actually use. Zone-less values are
/// taken as UTC.
pub fn parse_date_text(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit()) {
        return text
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc().timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.timestamp_millis());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const JAN_1_2024: i64 = 1_704_067_200_000;

    fn text(s: &str) -> Option<DateValue> {
        Some(DateValue::Text(s.into()))
    }

    #[test]
    fn test_timestamp_field_wins() {
        let item = RawItem {
            timestamp: Some(DateValue::Millis(42_000)),
            iso_date: text("2024-01-01T00:00:00Z"),
            ..Default::default()
        };
        assert_eq!(resolve_timestamp(&item), 42_000);
    }

    #[test]
    fn test_unparseable_candidate_is_skipped() {
        let item = RawItem {
            iso_date: text("not a date"),
            pub_date: text("Mon, 01 Jan 2024 00:00:00 GMT"),
            date: text("1999-01-01"),
            ..Default::default()
        };
        assert_eq!(resolve_timestamp(&item), JAN_1_2024);
    }

    #[test]
    fn test_generic_date_used_last() {
        let item = RawItem {
            date: Some(DateValue::Instant(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())),
            ..Default::default()
        };
        assert_eq!(resolve_timestamp(&item), JAN_1_2024);
    }

    #[test]
    fn test_no_date_defaults_to_zero() {
        assert_eq!(resolve_timestamp(&RawItem::default()), 0);

        let item = RawItem {
            pub_date: text("yesterday-ish"),
            ..Default::default()
        };
        assert_eq!(resolve_timestamp(&item), 0);
    }

    #[test]
    fn test_parse_date_text_formats() {
        assert_eq!(parse_date_text("2024-01-01T00:00:00Z"), Some(JAN_1_2024));
        assert_eq!(parse_date_text("2024-01-01T01:00:00+01:00"), Some(JAN_1_2024));
        assert_eq!(parse_date_text("Mon, 01 Jan 2024 00:00:00 +0000"), Some(JAN_1_2024));
        assert_eq!(parse_date_text("2024-01-01 00:00:00"), Some(JAN_1_2024));
        assert_eq!(parse_date_text("2024-01-01T00:00:00"), Some(JAN_1_2024));
        assert_eq!(parse_date_text("2024-01-01"), Some(JAN_1_2024));
        assert_eq!(parse_date_text("2024"), Some(JAN_1_2024));
        assert_eq!(parse_date_text(""), None);
        assert_eq!(parse_date_text("soon"), None);
    }

    #[test]
    fn test_digit_strings_are_not_millis() {
        assert_eq!(parse_date_text("20240101"), None);
        assert_eq!(parse_date_text("1704067200000"), None);

        let item = RawItem {
            date: text("2024"),
            ..Default::default()
        };
        assert_eq!(resolve_timestamp(&item), JAN_1_2024);
    }

    #[test]
    fn test_title_resolution_order() {
        let item = RawItem {
            title: Some("Item".into()),
            ..Default::default()
        };
        assert_eq!(resolve_title(&item, Some("Feed")), "Item");

        let untitled = RawItem {
            title: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(resolve_title(&untitled, Some("Feed")), "Feed");
        assert_eq!(resolve_title(&untitled, None), "");
    }

    #[test]
    fn test_title_entities_decoded() {
        let item = RawItem {
            title: Some("&#8220;Hello&#8221;".into()),
            ..Default::default()
        };
        assert_eq!(resolve_title(&item, None), "\u{201C}Hello\u{201D}");
    }

    #[test]
    fn test_missing_link_is_empty() {
        assert_eq!(resolve_link(&RawItem::default()), "");
    }
}
