use serde::Serialize;

/// Placeholder for any field whose markup anchor is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// Spreadsheet header row, in column order.
pub const HEADERS: [&str; 8] = [
    "Issue Name",
    "Release Date",
    "Cover Date",
    "Writer",
    "Artist",
    "Editor",
    "Title",
    "Solicit Synopsis",
];

/// Metadata scraped from one issue page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRecord {
    pub issue_name: String,
    pub release_date: String,
    pub cover_date: String,
    pub writer: String,
    pub artist: String,
    pub editor: String,
    pub title: String,
    pub solicit_synopsis: String,
}

impl IssueRecord {
    /// Look a field up by its snake_case key.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "issue_name" => &self.issue_name,
            "release_date" => &self.release_date,
            "cover_date" => &self.cover_date,
            "writer" => &self.writer,
            "artist" => &self.artist,
            "editor" => &self.editor,
            "title" => &self.title,
            "solicit_synopsis" => &self.solicit_synopsis,
            _ => return None,
        };
        Some(value.as_str())
    }
}

/// "Solicit Synopsis" -> "solicit_synopsis"
pub fn header_key(header: &str) -> String {
    header.to_lowercase().replace(' ', "_")
}
