//! Response segmentation — splits a raw completion into named sections.
//!
//! The contract is positional: the upstream prompt requests unlabeled
//! sections separated by blank lines, and this module assigns them by index.
//! Fewer segments than expected silently yields a partial result.

use crate::generation::models::{BioSections, OutputType};

/// Maximum number of variations kept from a Variations/All response.
pub const MAX_VARIATIONS: usize = 3;

/// Splits on blank-line boundaries (one or more consecutive empty lines)
/// into trimmed, non-empty segments.
fn split_segments(content: &str) -> Vec<&str> {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Maps a raw completion onto the requested output type.
///
/// - `Hook` / `Bio` / `CTA`: the whole trimmed text, no splitting.
/// - `Variations`: up to the first 3 segments.
/// - `All`: segment 0 = hook, 1 = bio, 2 = cta, 3–5 = variations;
///   anything past segment 5 is discarded.
pub fn parse_sections(content: &str, output: OutputType) -> BioSections {
    let mut sections = BioSections::default();

    match output {
        OutputType::Hook => sections.hook = non_empty(content),
        OutputType::Cta => sections.cta = non_empty(content),
        OutputType::Bio => sections.bio = non_empty(content),
        OutputType::Variations => {
            sections.variations = split_segments(content)
                .into_iter()
                .take(MAX_VARIATIONS)
                .map(str::to_string)
                .collect();
        }
        OutputType::All => {
            let segments = split_segments(content);
            sections.hook = segments.first().map(|s| s.to_string());
            sections.bio = segments.get(1).map(|s| s.to_string());
            sections.cta = segments.get(2).map(|s| s.to_string());
            sections.variations = segments
                .iter()
                .skip(3)
                .take(MAX_VARIATIONS)
                .map(|s| s.to_string())
                .collect();
        }
    }

    sections
}

fn non_empty(content: &str) -> Option<String> {
    let trimmed = content.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_assigns_seven_segments_positionally() {
        let content = "Line A\n\nLine B\n\nLine C\n\nLine D\n\nLine E\n\nLine F\n\nLine G";
        let sections = parse_sections(content, OutputType::All);

        assert_eq!(sections.hook.as_deref(), Some("Line A"));
        assert_eq!(sections.bio.as_deref(), Some("Line B"));
        assert_eq!(sections.cta.as_deref(), Some("Line C"));
        assert_eq!(sections.variations, vec!["Line D", "Line E", "Line F"]);
        // Line G discarded
    }

    #[test]
    fn test_all_with_fewer_segments_is_partial_not_error() {
        let sections = parse_sections("Only a hook\n\nAnd a bio", OutputType::All);
        assert_eq!(sections.hook.as_deref(), Some("Only a hook"));
        assert_eq!(sections.bio.as_deref(), Some("And a bio"));
        assert_eq!(sections.cta, None);
        assert!(sections.variations.is_empty());
    }

    #[test]
    fn test_hook_takes_whole_text_without_splitting() {
        let sections = parse_sections("  First part\n\nSecond part  ", OutputType::Hook);
        assert_eq!(sections.hook.as_deref(), Some("First part\n\nSecond part"));
        assert_eq!(sections.bio, None);
    }

    #[test]
    fn test_bio_and_cta_assign_directly() {
        let bio = parse_sections(" my bio ", OutputType::Bio);
        assert_eq!(bio.bio.as_deref(), Some("my bio"));

        let cta = parse_sections("DM to connect", OutputType::Cta);
        assert_eq!(cta.cta.as_deref(), Some("DM to connect"));
    }

    #[test]
    fn test_variations_capped_at_three() {
        let content = "v1\n\nv2\n\nv3\n\nv4\n\nv5";
        let sections = parse_sections(content, OutputType::Variations);
        assert_eq!(sections.variations, vec!["v1", "v2", "v3"]);
    }

    #[test]
    fn test_multiple_consecutive_blank_lines_collapse() {
        let content = "a\n\n\n\nb\n\n\nc";
        let sections = parse_sections(content, OutputType::Variations);
        assert_eq!(sections.variations, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_single_newlines_do_not_split() {
        let content = "line one\nline two\n\nsecond segment";
        let sections = parse_sections(content, OutputType::Variations);
        assert_eq!(sections.variations, vec!["line one\nline two", "second segment"]);
    }

    #[test]
    fn test_empty_content_yields_empty_sections() {
        let sections = parse_sections("   \n\n  ", OutputType::All);
        assert_eq!(sections, BioSections::default());

        let hook = parse_sections("", OutputType::Hook);
        assert_eq!(hook.hook, None);
    }

    #[test]
    fn test_all_never_exceeds_named_fields_plus_three_variations() {
        let content = (0..20)
            .map(|i| format!("segment {i}"))
            .collect::<Vec<_>>()
            .join("\n\n");
        let sections = parse_sections(&content, OutputType::All);
        assert!(sections.hook.is_some());
        assert!(sections.bio.is_some());
        assert!(sections.cta.is_some());
        assert_eq!(sections.variations.len(), MAX_VARIATIONS);
    }
}
