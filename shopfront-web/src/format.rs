//! Display helpers shared by the views.

use chrono::{Local, TimeZone};
use shared::models::Timestamp;

/// Grey 200x200 "no image" tile.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\" height=\"200\"%3E%3Crect fill=\"%23ddd\" width=\"200\" height=\"200\"/%3E%3Ctext fill=\"%23999\" font-family=\"sans-serif\" font-size=\"14\" x=\"50%25\" y=\"50%25\" text-anchor=\"middle\" dy=\".3em\"%3ENo image%3C/text%3E%3C/svg%3E";

const DEV_BACKEND_ORIGINS: [&str; 2] = ["http://localhost:8080", "https://localhost:8080"];

/// Resolve a stored product image reference to something an `<img>` can load.
///
/// Images recorded against the development backend origin are rewritten to
/// paths on the current origin.
#[must_use]
pub fn product_image_url(url: Option<&str>) -> String {
    let Some(url) = url.filter(|url| !url.is_empty()) else {
        return PLACEHOLDER_IMAGE.to_string();
    };
    let url = DEV_BACKEND_ORIGINS
        .iter()
        .find_map(|origin| url.find(origin).map(|at| (at, origin.len())))
        .map_or_else(
            || url.to_string(),
            |(at, len)| format!("{}{}", &url[..at], &url[at + len..]),
        );
    if url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/') {
        url
    } else {
        format!("/{url}")
    }
}

/// `YYYY/MM/DD HH:MM:SS` in the browser's local time zone.
#[must_use]
pub fn format_timestamp(timestamp: &Timestamp) -> String {
    format_timestamp_in(timestamp, &Local)
}

/// `YYYY/MM/DD HH:MM:SS` in `zone`.
#[must_use]
pub fn format_timestamp_in<Tz: TimeZone>(timestamp: &Timestamp, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp
        .0
        .with_timezone(zone)
        .format("%Y/%m/%d %H:%M:%S")
        .to_string()
}
