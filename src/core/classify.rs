//! Extension-based file classification.
//!
//! Two independent lookup tables: one maps extensions to display glyphs,
//! the other to friendly type labels. They do not cover the same set of
//! extensions.

use phf::phf_map;

/// Glyph used when the extension has no entry in [`ICON_MAP`].
pub const DEFAULT_ICON: &str = "📄";

/// Extension → glyph.
static ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    // Documents
    "pdf" => "📄",
    "doc" => "📝",
    "docx" => "📝",

    // Spreadsheets
    "xls" => "📊",
    "xlsx" => "📈",
    "csv" => "📊",

    // Presentations
    "ppt" => "📊",
    "pptx" => "📊",

    // Archives
    "zip" => "📦",
    "rar" => "📦",
    "7z" => "📦",
    "tar" => "📦",
    "gz" => "📦",

    // Images
    "jpg" => "🖼️",
    "jpeg" => "🖼️",
    "png" => "🖼️",
    "gif" => "🖼️",
    "webp" => "🖼️",
    "svg" => "🎨",

    // Video
    "mp4" => "🎬",
    "avi" => "🎬",
    "mov" => "🎬",
    "wmv" => "🎬",
    "mkv" => "🎬",

    // Audio
    "mp3" => "🎵",
    "wav" => "🎵",
    "flac" => "🎵",
    "ogg" => "🎵",

    // Text
    "txt" => "📃",
    "md" => "📃",
    "rtf" => "📃",

    // Source code
    "html" => "🌐",
    "css" => "🎨",
    "js" => "⚡",
    "py" => "🐍",
    "java" => "☕",
    "cpp" => "⚙️",
    "c" => "⚙️",
    "php" => "🐘",
    "rb" => "💎",
    "go" => "🔵",
    "rs" => "🦀",

    // Data
    "json" => "📋",
    "xml" => "📋",
    "sql" => "🗄️",
};

/// Extension → friendly label. Unlisted extensions use the uppercased
/// extension itself.
static TYPE_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "pdf" => "PDF",
    "doc" => "DOC",
    "docx" => "DOCX",
    "xls" => "XLS",
    "xlsx" => "XLSX",
    "ppt" => "PPT",
    "pptx" => "PPTX",
    "zip" => "ZIP",
    "rar" => "RAR",
    "jpg" => "JPG",
    "jpeg" => "JPEG",
    "png" => "PNG",
    "gif" => "GIF",
    "mp4" => "MP4",
    "mp3" => "MP3",
    "txt" => "TXT",
    "md" => "Markdown",
};

/// Lower-cased extension of `filename`.
///
/// Names without a dot yield the whole name, which then misses both tables.
pub fn extension(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map_or(filename, |(_, ext)| ext)
        .to_lowercase()
}

/// Glyph for a filename.
pub fn file_icon(filename: &str) -> &'static str {
    ICON_MAP
        .get(extension(filename).as_str())
        .copied()
        .unwrap_or(DEFAULT_ICON)
}

/// Type label for a filename.
pub fn file_type(filename: &str) -> String {
    let ext = extension(filename);
    match TYPE_MAP.get(ext.as_str()) {
        Some(label) => (*label).to_string(),
        None => ext.to_uppercase(),
    }
}

/// Type label and glyph for a filename.
pub fn classify(filename: &str) -> (String, &'static str) {
    (file_type(filename), file_icon(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(extension("report.PDF"), "pdf");
        assert_eq!(extension("archive.tar.gz"), "gz");
        assert_eq!(extension("noext"), "noext");
        assert_eq!(extension("trailing."), "");
    }

    #[test]
    fn test_classify_known() {
        assert_eq!(classify("notes.md"), ("Markdown".to_string(), "📃"));
        assert_eq!(classify("photo.jpeg"), ("JPEG".to_string(), "🖼️"));
        assert_eq!(classify("main.rs"), ("RS".to_string(), "🦀"));
    }

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(classify("report.PDF"), classify("report.pdf"));
        assert_eq!(classify("Slides.PpTx"), ("PPTX".to_string(), "📊"));
    }

    #[test]
    fn test_classify_unrecognized() {
        assert_eq!(classify("noext"), ("NOEXT".to_string(), DEFAULT_ICON));
        assert_eq!(classify("data.parquet"), ("PARQUET".to_string(), DEFAULT_ICON));
    }

    #[test]
    fn test_tables_differ_in_coverage() {
        // in the icon table only
        assert_eq!(file_icon("song.flac"), "🎵");
        assert_eq!(file_type("song.flac"), "FLAC");
        assert!(TYPE_MAP.len() < ICON_MAP.len());
    }
}
