//! String helpers shared by the session, the controller and the desktop shell.

use std::borrow::Cow;
use std::path::Path;

/// Marker appended to text that was shortened.
pub const ELLIPSIS: &str = "...";

const PDF_EXTENSION: &str = ".pdf";
const MERGED_SUFFIX: &str = "_merged.pdf";

/// Check whether a file name ends in `.pdf`, ignoring case.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.file_name()
        .map(|name| pdf_stem(&name.to_string_lossy()).is_some())
        .unwrap_or(false)
}

/// Name without its trailing `.pdf` (any case), if it has one.
fn pdf_stem(name: &str) -> Option<&str> {
    let cut = name.len().checked_sub(PDF_EXTENSION.len())?;
    if !name.is_char_boundary(cut) {
        return None;
    }
    let (stem, extension) = name.split_at(cut);
    extension.eq_ignore_ascii_case(PDF_EXTENSION).then_some(stem)
}

/// Final path component as a display string, or the whole path if it has none.
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Keep the first `limit` characters of `text`, appending [`ELLIPSIS`] when
/// anything was cut.
///
/// Counts `char`s, so multi-byte names are never split inside a code point.
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Keep at most the first `limit` characters of `text`.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}

/// Remove the wrapping that drag-and-drop transports put around a path.
///
/// Handles Tk-style `{...}` braces, surrounding whitespace and quotes, and
/// `file://` URIs, whose percent escapes are decoded.
///
/// # Examples
///
/// ```
/// use pdfpair::utils::strip_drop_artifacts;
///
/// assert_eq!(strip_drop_artifacts("{/home/me/My Invoice.pdf}"), "/home/me/My Invoice.pdf");
/// assert_eq!(strip_drop_artifacts(" \"/tmp/a.pdf\" "), "/tmp/a.pdf");
/// assert_eq!(strip_drop_artifacts("file:///tmp/My%20Invoice.pdf"), "/tmp/My Invoice.pdf");
/// ```
pub fn strip_drop_artifacts(raw: &str) -> Cow<'_, str> {
    let trimmed = raw
        .trim()
        .trim_matches(|c| c == '{' || c == '}')
        .trim_matches('"')
        .trim();

    match trimmed.strip_prefix("file://") {
        // Escapes that do not decode to UTF-8 are kept verbatim.
        Some(uri_path) => urlencoding::decode(uri_path).unwrap_or(Cow::Borrowed(uri_path)),
        None => Cow::Borrowed(trimmed),
    }
}

/// Suggested file name for the merged output, derived from the first input.
///
/// The trailing `.pdf` extension (any case) is replaced by `_merged.pdf`.
/// Earlier occurrences of `.pdf` inside the name are left alone.
///
/// # Examples
///
/// ```
/// use pdfpair::utils::suggested_output_name;
///
/// assert_eq!(suggested_output_name("invoice.pdf"), "invoice_merged.pdf");
/// assert_eq!(suggested_output_name("my.pdf.backup.pdf"), "my.pdf.backup_merged.pdf");
/// ```
pub fn suggested_output_name(first_basename: &str) -> String {
    let stem = pdf_stem(first_basename).unwrap_or(first_basename);
    format!("{stem}{MERGED_SUFFIX}")
}
