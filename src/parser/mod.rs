pub mod labels;

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use crate::record::{IssueRecord, NOT_AVAILABLE};
use labels::{text_of, value_container};

static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1.page-header__title").unwrap());
static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static H2: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2").unwrap());
// Infobox group headings; the story title sits at a fixed offset among them.
// The class list must match exactly, in this order, with nothing extra.
const SECONDARY_CLASSES: &str =
    "pi-item pi-header pi-secondary-font pi-item-spacing pi-secondary-background";
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Turn one issue page into a record.
///
/// Every optional field degrades to `"N/A"`. The page title heading is a
/// precondition: without it the markup is not an issue page and this fails.
pub fn extract(markup: &str) -> Result<IssueRecord> {
    let document = Html::parse_document(markup);

    let issue_name = document
        .select(&HEADING)
        .next()
        .map(|h| text_of(h).trim().to_string())
        .context("primary heading (h1.page-header__title) not found")?;

    Ok(IssueRecord {
        issue_name,
        release_date: labeled_text(&document, "Release Date"),
        cover_date: labeled_text(&document, "Cover Date"),
        writer: credits(&document, "Writer(s)"),
        artist: credits(&document, "Penciler(s)"),
        editor: credits(&document, "Editor(s)"),
        title: story_title(&document),
        solicit_synopsis: synopsis(&document, "Solicit Synopsis"),
    })
}

fn labeled_text(document: &Html, label: &str) -> String {
    match value_container(document, label) {
        Some(el) => text_of(el).trim().to_string(),
        None => missing(label),
    }
}

/// Linked names under a credit label, comma-joined. A label with no links
/// yields an empty string rather than the sentinel.
fn credits(document: &Html, label: &str) -> String {
    let Some(container) = value_container(document, label) else {
        return missing(label);
    };
    container
        .select(&LINK)
        .map(|a| text_of(a).trim().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Third secondary heading, else the second, else N/A.
fn story_title(document: &Html) -> String {
    let headings: Vec<_> = document
        .select(&H2)
        .filter(|h| {
            let classes = h.value().attr("class").unwrap_or("");
            classes.split_whitespace().collect::<Vec<_>>().join(" ") == SECONDARY_CLASSES
        })
        .collect();
    let pick = match headings.len() {
        0 | 1 => None,
        2 => headings.get(1),
        _ => headings.get(2),
    };
    match pick {
        Some(h) => text_of(*h).trim().to_string(),
        None => missing("title"),
    }
}

fn synopsis(document: &Html, label: &str) -> String {
    match value_container(document, label) {
        Some(el) => collapse_whitespace(&text_of(el)),
        None => missing(label),
    }
}

fn collapse_whitespace(s: &str) -> String {
    WHITESPACE_RE.replace_all(s.trim(), " ").into_owned()
}

fn missing(field: &str) -> String {
    debug!("{} not found, using {}", field, NOT_AVAILABLE);
    NOT_AVAILABLE.to_string()
}

// ── Tests ──
