//! Step identifier formatting.

use crate::location::CRUMB_SEPARATOR;

/// Markers the tracker appends to raw step identifiers.
const STEP_MARKERS: [&str; 2] = [".typed", ".used"];

/// Normalize a raw step identifier into a display breadcrumb.
///
/// Strips one trailing `.typed`/`.used` marker, then turns the `:`-separated
/// segments into a breadcrumb. Total: any input string is valid, and an
/// identifier without marker or separator passes through unchanged.
pub fn format_step(raw: &str) -> String {
    let clean = STEP_MARKERS
        .iter()
        .find_map(|marker| raw.strip_suffix(marker))
        .unwrap_or(raw);

    clean.split(':').collect::<Vec<_>>().join(CRUMB_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_trailing_markers() {
        assert_eq!(format_step("Pipeline.typed"), "Pipeline");
        assert_eq!(format_step("Pipeline.used"), "Pipeline");
    }

    #[test]
    fn test_separator_becomes_breadcrumb() {
        assert_eq!(format_step("Accounts:Overview"), "Accounts › Overview");
        assert_eq!(
            format_step("Salesforce:Accounts:Overview"),
            "Salesforce › Accounts › Overview"
        );
    }

    #[test]
    fn test_marker_and_separator_combined() {
        assert_eq!(format_step("Accounts:Overview.used"), "Accounts › Overview");
    }

    #[test]
    fn test_plain_identifier_is_untouched() {
        assert_eq!(format_step("Dashboard"), "Dashboard");
        assert_eq!(format_step(""), "");
    }

    #[test]
    fn test_marker_only_stripped_at_end() {
        // An interior marker is part of the name, not a suffix.
        assert_eq!(format_step("notes.typed.backup"), "notes.typed.backup");
        assert_eq!(format_step("draft.typed.used"), "draft.typed");
    }
}
