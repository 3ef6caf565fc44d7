//! Format-specific parsing into a common intermediate shape.
//!
//! Nothing here decides which field wins; that is left to the strategy
//! lists in [`fields`](super::fields).

use chrono::{DateTime, Utc};
use feed_rs::model::Link;
use feed_rs::parser;
use serde::Deserialize;
use serde_json::Value;

use crate::app::{BuboError, Result};

/// A date-like value as it appeared in the source.
#[derive(Debug, Clone, PartialEq)]
pub enum DateValue {
    Millis(i64),
    Instant(DateTime<Utc>),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub timestamp: Option<DateValue>,
    pub iso_date: Option<DateValue>,
    pub pub_date: Option<DateValue>,
    pub date: Option<DateValue>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFeed {
    pub title: Option<String>,
    pub items: Vec<RawItem>,
}

/// Sniff the payload and parse it as JSON or XML.
pub fn parse(body: &[u8]) -> Result<RawFeed> {
    let body = body.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(body);
    match body.iter().copied().find(|b| !b.is_ascii_whitespace()) {
        None => Err(BuboError::FeedParse("feed payload is empty".into())),
        Some(b'{') => parse_json(body),
        Some(_) => parse_xml(body),
    }
}

fn parse_xml(body: &[u8]) -> Result<RawFeed> {
    let feed = parser::parse(body).map_err(|e| BuboError::FeedParse(e.to_string()))?;

    let items = feed
        .entries
        .into_iter()
        .map(|entry| RawItem {
            title: entry.title.map(|t| t.content),
            link: article_link(entry.links),
            timestamp: None,
            iso_date: entry.published.map(DateValue::Instant),
            pub_date: None,
            date: entry.updated.map(DateValue::Instant),
        })
        .collect();

    Ok(RawFeed {
        title: feed.title.map(|t| t.content),
        items,
    })
}

/// The `alternate` (or rel-less) link, else whatever comes first.
fn article_link(links: Vec<Link>) -> Option<String> {
    let position = links
        .iter()
        .position(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
        .unwrap_or(0);
    links.into_iter().nth(position).map(|l| l.href)
}

#[derive(Debug, Deserialize)]
struct JsonFeed {
    title: Option<Value>,
    #[serde(default)]
    items: Vec<JsonItem>,
}

#[derive(Debug, Deserialize)]
struct JsonItem {
    title: Option<Value>,
    url: Option<Value>,
    link: Option<Value>,
    external_url: Option<Value>,
    timestamp: Option<Value>,
    #[serde(rename = "isoDate")]
    iso_date: Option<Value>,
    date_published: Option<Value>,
    #[serde(rename = "pubDate")]
    pub_date: Option<Value>,
    date: Option<Value>,
    date_modified: Option<Value>,
}

fn parse_json(body: &[u8]) -> Result<RawFeed> {
    let feed: JsonFeed =
        serde_json::from_slice(body).map_err(|e| BuboError::FeedParse(e.to_string()))?;

    let items = feed
        .items
        .into_iter()
        .map(|item| RawItem {
            title: item.title.as_ref().and_then(json_string),
            link: [&item.url, &item.link, &item.external_url]
                .into_iter()
                .flatten()
                .find_map(json_string),
            timestamp: item.timestamp.as_ref().and_then(json_timestamp),
            iso_date: first_date(&[&item.iso_date, &item.date_published]),
            pub_date: first_date(&[&item.pub_date]),
            date: first_date(&[&item.date, &item.date_modified]),
        })
        .collect();

    Ok(RawFeed {
        title: feed.title.as_ref().and_then(json_string),
        items,
    })
}

fn json_string(value: &Value) -> Option<String> {
    value.as_str().map(String::from)
}

fn first_date(candidates: &[&Option<Value>]) -> Option<DateValue> {
    candidates.iter().copied().flatten().find_map(json_date)
}

/// Like [`json_date`], but a string of digits is epoch milliseconds.
fn json_timestamp(value: &Value) -> Option<DateValue> {
    match value {
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(ms) => Some(DateValue::Millis(ms)),
            Err(_) => Some(DateValue::Text(s.clone())),
        },
        other => json_date(other),
    }
}

fn json_date(value: &Value) -> Option<DateValue> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .map(DateValue::Millis),
        Value::String(s) => Some(DateValue::Text(s.clone())),
        _ => None,
    }
}
