//! Local template generator — the offline alternative to the remote engine.
//!
//! Pure function of the request plus an injected RNG: a fixed seed is
//! byte-reproducible, an unseeded run varies only within the candidate set
//! picked by the niche keywords and goal.
//!
//! Hook selection: the niche text is matched against ordered keyword buckets
//! by case-insensitive substring containment, first match wins, then one
//! candidate line is drawn uniformly. Value lines key off the goal; CTA lines
//! key off (goal, style) and are fixed strings, not draws.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::generation::models::{BioRequest, Goal, OutputType, Platform, Style};

// ────────────────────────────────────────────────────────────────────────────
// Template tables
// ────────────────────────────────────────────────────────────────────────────

struct HookBucket {
    triggers: &'static [&'static str],
    lines: &'static [&'static str],
}

/// Ordered keyword buckets — earlier buckets win on overlapping niches.
/// Lines carry `{niche}` / `{audience}` placeholders filled per request.
const HOOK_BUCKETS: &[HookBucket] = &[
    HookBucket {
        triggers: &["fitness", "gym", "workout", "trainer", "nutrition"],
        lines: &[
            "Helping {audience} get stronger without living in the gym",
            "Training that fits real life for {audience}",
            "Simple {niche} that actually sticks",
            "No-nonsense coaching for {audience}",
        ],
    },
    HookBucket {
        triggers: &["tech", "software", "developer", "coding", "ai"],
        lines: &[
            "Making {niche} make sense for {audience}",
            "I break down {niche} so {audience} don't have to",
            "Practical {niche}, zero jargon",
            "{niche} explained like a human",
        ],
    },
    HookBucket {
        triggers: &["business", "marketing", "entrepreneur", "startup", "freelance"],
        lines: &[
            "Helping {audience} grow without the hustle theater",
            "Real {niche} lessons from the trenches",
            "{niche} strategies {audience} can use today",
            "Building in public, sharing what works",
        ],
    },
    HookBucket {
        triggers: &["fashion", "style", "beauty", "outfit"],
        lines: &[
            "Everyday style for {audience}",
            "Making {niche} effortless for {audience}",
            "Wear it well, keep it simple",
            "{niche} without the price tag",
        ],
    },
    HookBucket {
        triggers: &["content", "creator", "youtube", "video", "writing"],
        lines: &[
            "Helping {audience} create content people actually watch",
            "{niche} tips that took me years to learn",
            "Create more, overthink less",
            "Behind the scenes of {niche}",
        ],
    },
];

/// Fallback bucket when no keyword matches the niche text.
const DEFAULT_HOOKS: &[&str] = &[
    "{niche} for {audience}",
    "Helping {audience} with {niche}, one day at a time",
    "Everything I know about {niche}, shared freely",
    "Your shortcut to better {niche}",
];

const FALLBACK_LINE: &str = "{niche} for {audience}";

/// Value lines, one bucket per goal.
fn value_lines(goal: Goal) -> &'static [&'static str] {
    match goal {
        Goal::Followers => &[
            "Daily {niche} ideas for {audience}",
            "New posts every week, zero fluff",
            "Join {audience} who learn {niche} here first",
        ],
        Goal::Dms => &[
            "I answer every message personally",
            "Helping {audience} one conversation at a time",
            "Questions about {niche}? My inbox is open",
        ],
        Goal::Sales => &[
            "Real results for {audience}, no fluff",
            "Programs built for {audience} who want {niche} done right",
            "Proven {niche} offers, priced fairly",
        ],
        Goal::Clicks => &[
            "Everything you need is one tap away",
            "Free {niche} resources for {audience}",
            "The full library lives at the link",
        ],
    }
}

/// One fixed CTA per (goal, style) — a lookup, not a draw.
fn cta_line(goal: Goal, style: Style) -> &'static str {
    match (goal, style) {
        (Goal::Followers, Style::Minimal) => "Follow for daily posts",
        (Goal::Followers, Style::Balanced) => "Follow along for daily tips",
        (Goal::Followers, Style::Expressive) => "Tap follow and stick around ✨",
        (Goal::Dms, Style::Minimal) => "DM to connect",
        (Goal::Dms, Style::Balanced) => "DM me to get started",
        (Goal::Dms, Style::Expressive) => "Slide into the DMs 💬 let's talk",
        (Goal::Sales, Style::Minimal) => "Link below",
        (Goal::Sales, Style::Balanced) => "Grab yours at the link below",
        (Goal::Sales, Style::Expressive) => "Don't miss it 🔥 link below",
        (Goal::Clicks, Style::Minimal) => "More at the link",
        (Goal::Clicks, Style::Balanced) => "Full details at the link below",
        (Goal::Clicks, Style::Expressive) => "👇 Tap the link for more",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Line selection and assembly
// ────────────────────────────────────────────────────────────────────────────

fn fill(template: &str, request: &BioRequest) -> String {
    template
        .replace("{niche}", &request.niche)
        .replace("{audience}", &request.audience)
}

fn hook_candidates(niche: &str) -> &'static [&'static str] {
    let niche_lower = niche.to_lowercase();
    HOOK_BUCKETS
        .iter()
        .find(|bucket| bucket.triggers.iter().any(|t| niche_lower.contains(t)))
        .map(|bucket| bucket.lines)
        .unwrap_or(DEFAULT_HOOKS)
}

fn hook_line<R: Rng>(request: &BioRequest, rng: &mut R) -> String {
    let line = hook_candidates(&request.niche)
        .choose(rng)
        .unwrap_or(&FALLBACK_LINE);
    fill(line, request)
}

fn value_line<R: Rng>(request: &BioRequest, rng: &mut R) -> String {
    let line = value_lines(request.goal)
        .choose(rng)
        .unwrap_or(&FALLBACK_LINE);
    fill(line, request)
}

fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Joins bio fragments per the platform line-break rule: hard breaks where
/// the platform renders them, ". " with sentence-case joins otherwise.
fn join_fragments(platform: Platform, fragments: &[String]) -> String {
    if platform.multiline_bio() {
        fragments.join("\n")
    } else {
        let joined = fragments
            .iter()
            .map(|f| sentence_case(f.trim().trim_end_matches('.')))
            .collect::<Vec<_>>()
            .join(". ");
        format!("{joined}.")
    }
}

fn full_bio<R: Rng>(request: &BioRequest, rng: &mut R) -> String {
    let fragments = [
        hook_line(request, rng),
        value_line(request, rng),
        cta_line(request.goal, request.style).to_string(),
    ];
    join_fragments(request.platform, &fragments)
}

/// Exactly three structured alternatives — direct, outcome-focused, and
/// story-angle — each reusing the same CTA line. Not three random draws.
fn variations(request: &BioRequest) -> [String; 3] {
    let cta = cta_line(request.goal, request.style).to_string();

    let direct = fill("{niche} for {audience}", request);
    let outcome = fill("Helping {audience} get real results with {niche}", request);
    let story = fill(
        "Started with {niche}. Now showing {audience} how it's done",
        request,
    );

    [
        join_fragments(request.platform, &[sentence_case(&direct), cta.clone()]),
        join_fragments(request.platform, &[outcome, cta.clone()]),
        join_fragments(request.platform, &[story, cta]),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Produces the content string for a request. Multi-section outputs are
/// flattened with blank-line separators so both engines share one wire
/// contract and one segmentation path.
pub fn generate_with_rng<R: Rng>(request: &BioRequest, rng: &mut R) -> String {
    match request.output {
        OutputType::Hook => hook_line(request, rng),
        OutputType::Cta => cta_line(request.goal, request.style).to_string(),
        OutputType::Bio => full_bio(request, rng),
        OutputType::Variations => variations(request).join("\n\n"),
        OutputType::All => {
            let mut sections = vec![
                hook_line(request, rng),
                full_bio(request, rng),
                cta_line(request.goal, request.style).to_string(),
            ];
            sections.extend(variations(request));
            sections.join("\n\n")
        }
    }
}

pub fn generate(request: &BioRequest) -> String {
    generate_with_rng(request, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn request(goal: Goal, style: Style, output: OutputType) -> BioRequest {
        BioRequest {
            platform: Platform::X,
            niche: "fitness coaching".to_string(),
            audience: "busy professionals".to_string(),
            goal,
            style,
            output,
        }
    }

    #[test]
    fn test_dms_minimal_cta_is_exact_fixed_string() {
        let req = request(Goal::Dms, Style::Minimal, OutputType::Cta);
        assert_eq!(generate(&req), "DM to connect");
    }

    #[test]
    fn test_fixed_seed_is_byte_identical() {
        let req = request(Goal::Followers, Style::Balanced, OutputType::Bio);
        let first = generate_with_rng(&req, &mut StdRng::seed_from_u64(42));
        let second = generate_with_rng(&req, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unseeded_hook_stays_within_niche_bucket() {
        let req = request(Goal::Followers, Style::Balanced, OutputType::Hook);
        let candidates: Vec<String> = HOOK_BUCKETS[0]
            .lines
            .iter()
            .map(|line| fill(line, &req))
            .collect();

        for _ in 0..20 {
            let hook = generate(&req);
            assert!(
                candidates.contains(&hook),
                "hook '{hook}' not in the fitness bucket"
            );
        }
    }

    #[test]
    fn test_keyword_match_is_case_insensitive_substring() {
        assert_eq!(
            hook_candidates("FITNESS and wellness"),
            HOOK_BUCKETS[0].lines
        );
        assert_eq!(hook_candidates("indie software"), HOOK_BUCKETS[1].lines);
    }

    #[test]
    fn test_first_matching_bucket_wins() {
        // Contains both fitness and tech triggers; fitness is earlier.
        assert_eq!(
            hook_candidates("fitness tech gadgets"),
            HOOK_BUCKETS[0].lines
        );
    }

    #[test]
    fn test_unmatched_niche_falls_back_to_default_bucket() {
        assert_eq!(hook_candidates("competitive birdwatching"), DEFAULT_HOOKS);
    }

    #[test]
    fn test_single_line_platform_joins_with_sentence_case() {
        let req = request(Goal::Dms, Style::Minimal, OutputType::Bio);
        let bio = generate_with_rng(&req, &mut StdRng::seed_from_u64(7));
        assert!(!bio.contains('\n'), "X bios must not contain line breaks");
        assert!(bio.ends_with('.'));
        assert!(bio.contains(". "));
    }

    #[test]
    fn test_multiline_platform_joins_with_newlines() {
        let mut req = request(Goal::Dms, Style::Minimal, OutputType::Bio);
        req.platform = Platform::Instagram;
        let bio = generate_with_rng(&req, &mut StdRng::seed_from_u64(7));
        assert_eq!(bio.lines().count(), 3);
        assert!(bio.ends_with("DM to connect"));
    }

    #[test]
    fn test_variations_are_three_structured_alternatives_sharing_cta() {
        let req = request(Goal::Dms, Style::Minimal, OutputType::Variations);
        let content = generate(&req);
        let parts: Vec<&str> = content.split("\n\n").collect();

        assert_eq!(parts.len(), 3);
        for part in &parts {
            assert!(
                part.contains("DM to connect"),
                "every variation reuses the CTA: {part}"
            );
        }
        assert_ne!(parts[0], parts[1]);
        assert_ne!(parts[1], parts[2]);
    }

    #[test]
    fn test_variations_are_deterministic_without_seed() {
        let req = request(Goal::Sales, Style::Balanced, OutputType::Variations);
        assert_eq!(generate(&req), generate(&req));
    }

    #[test]
    fn test_all_output_flattens_to_six_segments() {
        let req = request(Goal::Followers, Style::Minimal, OutputType::All);
        let content = generate(&req);
        let segments: Vec<&str> = content
            .split("\n\n")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        // hook, bio, cta, 3 variations
        assert_eq!(segments.len(), 6);
        assert_eq!(segments[2], "Follow for daily posts");
    }

    #[test]
    fn test_every_goal_style_pair_has_a_cta() {
        for goal in [Goal::Followers, Goal::Dms, Goal::Sales, Goal::Clicks] {
            for style in [Style::Minimal, Style::Balanced, Style::Expressive] {
                assert!(!cta_line(goal, style).is_empty());
            }
        }
    }

    #[test]
    fn test_placeholders_are_filled() {
        let req = request(Goal::Followers, Style::Minimal, OutputType::All);
        let content = generate(&req);
        assert!(!content.contains("{niche}"));
        assert!(!content.contains("{audience}"));
    }
}
