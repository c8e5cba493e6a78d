use lazy_static::lazy_static;
use std::collections::HashMap;
use std::path::Path;

/// Destination bucket a top-level file is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Audio,
    ReportsEmail,
    ReportsWebsite,
    Documents,
    Research,
    Unclassified,
}

/// HTML files below this size are treated as emailed report snippets,
/// everything at or above it as saved website bundles.
pub const EMAIL_REPORT_MAX_BYTES: u64 = 10_240;

/// Landing pages that must never be swept into `reports/`.
const INDEX_FILES: [&str; 2] = ["index.html", "enhanced-index.html"];

const AUDIO_EXTENSIONS: [&str; 7] = ["mp3", "wav", "m4a", "aac", "flac", "ogg", "wma"];

const DOCUMENT_EXTENSIONS: [&str; 8] = ["pdf", "docx", "doc", "txt", "md", "rtf", "odt", "pages"];

const RESEARCH_EXTENSIONS: [&str; 13] = [
    "png", "jpg", "jpeg", "gif", "svg", "csv", "json", "xml", "xlsx", "xls", "zip", "rar", "7z",
];

lazy_static! {
    static ref EXTENSION_TABLE: HashMap<&'static str, Category> = {
        let mut table = HashMap::new();
        for ext in AUDIO_EXTENSIONS {
            table.insert(ext, Category::Audio);
        }
        for ext in DOCUMENT_EXTENSIONS {
            table.insert(ext, Category::Documents);
        }
        for ext in RESEARCH_EXTENSIONS {
            table.insert(ext, Category::Research);
        }
        table
    };
}

impl Category {
    /// Destination directory name relative to the working directory.
    /// `Unclassified` files have none and stay where they are.
    pub fn directory(&self) -> Option<&'static str> {
        match self {
            Category::Audio => Some("audio"),
            Category::ReportsEmail | Category::ReportsWebsite => Some("reports"),
            Category::Documents => Some("documents"),
            Category::Research => Some("research"),
            Category::Unclassified => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Audio => "audio",
            Category::ReportsEmail => "reports (email)",
            Category::ReportsWebsite => "reports (website)",
            Category::Documents => "documents",
            Category::Research => "research",
            Category::Unclassified => "unclassified",
        }
    }
}

/// Assign a file to exactly one category from its name and byte size.
///
/// HTML is the only size-sensitive rule; everything else is a table lookup
/// on the lowercased extension. The two index pages are exempt from the
/// HTML rule and end up unclassified.
pub fn classify(file_name: &str, size: u64) -> Category {
    let extension = extension_of(file_name);
    match extension.as_str() {
        "" => Category::Unclassified,
        "html" | "htm" => {
            if INDEX_FILES.contains(&file_name) {
                Category::Unclassified
            } else if size < EMAIL_REPORT_MAX_BYTES {
                Category::ReportsEmail
            } else {
                Category::ReportsWebsite
            }
        }
        ext => EXTENSION_TABLE
            .get(ext)
            .copied()
            .unwrap_or(Category::Unclassified),
    }
}

/// Lowercased extension of a file name, or an empty string when absent.
pub fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_extensions() {
        for ext in AUDIO_EXTENSIONS {
            let name = format!("song.{}", ext);
            assert_eq!(classify(&name, 1234), Category::Audio, "extension {}", ext);
        }
    }

    #[test]
    fn test_extension_matching_is_case_insensitive() {
        assert_eq!(classify("track.MP3", 1234), Category::Audio);
        assert_eq!(classify("Notes.TXT", 10), Category::Documents);
        assert_eq!(classify("chart.Png", 10), Category::Research);
    }

    #[test]
    fn test_html_size_threshold() {
        assert_eq!(classify("report.html", 5000), Category::ReportsEmail);
        assert_eq!(classify("report.html", 20000), Category::ReportsWebsite);
        assert_eq!(classify("page.htm", 100), Category::ReportsEmail);
    }

    #[test]
    fn test_html_boundary_is_website() {
        // Threshold is strictly-less-than for email.
        assert_eq!(
            classify("report.html", EMAIL_REPORT_MAX_BYTES),
            Category::ReportsWebsite
        );
        assert_eq!(
            classify("report.html", EMAIL_REPORT_MAX_BYTES - 1),
            Category::ReportsEmail
        );
    }

    #[test]
    fn test_index_files_are_unclassified() {
        assert_eq!(classify("index.html", 500), Category::Unclassified);
        assert_eq!(classify("index.html", 50000), Category::Unclassified);
        assert_eq!(classify("enhanced-index.html", 500), Category::Unclassified);
    }

    #[test]
    fn test_document_and_research_extensions() {
        assert_eq!(classify("thesis.pdf", 1_000_000), Category::Documents);
        assert_eq!(classify("notes.md", 42), Category::Documents);
        assert_eq!(classify("data.csv", 42), Category::Research);
        assert_eq!(classify("archive.7z", 42), Category::Research);
    }

    #[test]
    fn test_unknown_and_missing_extensions() {
        assert_eq!(classify("data.xyz", 42), Category::Unclassified);
        assert_eq!(classify("README", 42), Category::Unclassified);
    }

    #[test]
    fn test_category_directories() {
        assert_eq!(Category::Audio.directory(), Some("audio"));
        assert_eq!(Category::ReportsEmail.directory(), Some("reports"));
        assert_eq!(Category::ReportsWebsite.directory(), Some("reports"));
        assert_eq!(Category::Documents.directory(), Some("documents"));
        assert_eq!(Category::Research.directory(), Some("research"));
        assert_eq!(Category::Unclassified.directory(), None);
    }
}
