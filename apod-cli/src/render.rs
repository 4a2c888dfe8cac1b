use anyhow::Context;
use apod_core::{PageData, PageError};
use serde_json::Value;

/// Human-readable view of an APOD payload. Missing fields are skipped.
pub fn render_apod(apod: &Value) -> String {
    let field = |name: &str| apod.get(name).and_then(Value::as_str).map(str::trim);

    let mut out = String::new();

    out.push_str(field("title").unwrap_or("Astronomy Picture of the Day"));
    out.push('\n');

    if let Some(date) = field("date") {
        out.push_str(&format!("Date:      {date}\n"));
    }
    if let Some(copyright) = field("copyright") {
        out.push_str(&format!("Copyright: {copyright}\n"));
    }
    if let Some(url) = field("hdurl").or_else(|| field("url")) {
        let kind = field("media_type").unwrap_or("image");
        out.push_str(&format!("{:<11}{url}\n", format!("{}:", capitalize(kind))));
    }
    if let Some(explanation) = field("explanation").filter(|e| !e.is_empty()) {
        out.push('\n');
        out.push_str(explanation);
        out.push('\n');
    }

    out.trim_end().to_string()
}

pub fn render_failure(status: u16, error: &PageError) -> String {
    format!("error {status}: {error}")
}

pub fn render_json(data: &PageData) -> anyhow::Result<String> {
    serde_json::to_string_pretty(data).context("Failed to serialize page data")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_full_payload() {
        let apod = json!({
            "title": "The Horsehead Nebula",
            "date": "2024-03-01",
            "copyright": "Someone",
            "media_type": "image",
            "url": "https://apod.nasa.gov/apod/image/small.jpg",
            "hdurl": "https://apod.nasa.gov/apod/image/large.jpg",
            "explanation": "A dark nebula in Orion."
        });

        let out = render_apod(&apod);

        assert!(out.starts_with("The Horsehead Nebula\n"));
        assert!(out.contains("Date:      2024-03-01"));
        assert!(out.contains("Copyright: Someone"));
        assert!(out.contains("Image:     https://apod.nasa.gov/apod/image/large.jpg"));
        assert!(out.ends_with("A dark nebula in Orion."));
    }

    #[test]
    fn renders_video_url_when_no_hdurl() {
        let apod = json!({
            "title": "Eclipse",
            "media_type": "video",
            "url": "https://www.youtube.com/embed/xyz"
        });

        let out = render_apod(&apod);

        assert!(out.contains("Video:     https://www.youtube.com/embed/xyz"));
    }

    #[test]
    fn tolerates_unexpected_payload() {
        assert_eq!(render_apod(&json!({})), "Astronomy Picture of the Day");
        assert_eq!(render_apod(&json!([1, 2, 3])), "Astronomy Picture of the Day");
    }

    #[test]
    fn failure_shows_status_and_fixed_message() {
        let out = render_failure(404, &PageError::default());
        assert_eq!(out, "error 404: Could not load data");
    }

    #[test]
    fn json_output_matches_page_data_shape() {
        let out = render_json(&PageData::failed(500)).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value, json!({ "status": 500, "error": { "message": "Could not load data" } }));
    }
}
