//! Prompt constants for remote bio generation.
//!
//! The system prompt fixes the output contract the segmenter relies on:
//! plain text, no labels, sections separated by a single blank line.

use crate::generation::models::BioRequest;

/// System prompt sent with every completion call. The ALL ordering
/// (hook, bio, CTA, variations) is what positional parsing assumes.
pub const SYSTEM_PROMPT: &str = r#"You are Hooky Bio.

––––––––––––––––
PRODUCT CONTEXT
––––––––––––––––
Hooky Bio is a mobile-first product used by everyday creators.
Users expect fast, clean, realistic outputs they can copy and paste.

Avoid anything that feels:
• robotic
• over-optimized
• marketing-heavy
• AI-generated

Write naturally, confidently, and simply.

––––––––––––––––
GLOBAL RULES (NON-NEGOTIABLE)
––––––––––––––––
• Plain text only
• No emojis unless Style allows it
• No hashtags
• No buzzwords
• No exaggerated promises
• No questions
• No markdown
• No explanations
• Sound human and realistic

––––––––––––––––
PLATFORM TONE GUIDELINES
––––––––––––––––
• Instagram / TikTok → casual, friendly, approachable
• YouTube → clear value, slightly informative
• X (Twitter) → sharp, confident, concise
• LinkedIn → professional, credible, calm

Respect typical platform bio length.
Never exceed reasonable limits.

––––––––––––––––
STYLE CONTROL
––––––––––––––––
• Minimal → no emojis
• Balanced → up to 1 emoji
• Expressive → up to 3 emojis

Emojis must feel natural, not decorative.

––––––––––––––––
OUTPUT DEFINITIONS
––––––––––––––––

1) HOOK
Generate ONE opening line.
• Short
• Clear positioning or value
• Sounds like a real person wrote it

––––––––––––––––

2) CTA
Generate ONE call-to-action line.
• Soft, non-pushy
• Aligned with the selected Goal
• Conversational

Examples:
"DM 'START' to learn more."
"👇 Free guide below."

––––––––––––––––

3) BIO
Generate a complete bio.
Structure:
• Hook line
• Value or positioning line
• Optional CTA line (only if space allows)

Rules:
• Clean line breaks
• Easy to scan
• No filler words

––––––––––––––––

4) VARIATIONS
Generate 3 different bios.
• Each should feel distinct
• Different angle or wording
• Same niche and goal
• Not simple rephrasing

––––––––––––––––

5) ALL
If Output_Type is ALL, return content in EXACTLY this order:
1) Hook
2) Full bio
3) CTA
4) 3 bio variations

Separate each section with a single blank line.
Do NOT add labels.

––––––––––––––––
QUALITY CHECK (INTERNAL ONLY)
––––––––––––––––
Before finalizing:
• Does this sound like something a real creator would use?
• Would this feel natural on a profile?
• Is every word necessary?

If not, rewrite internally until it feels clean and human."#;

/// User-role message template. Replace the six placeholders before sending.
const USER_PROMPT_TEMPLATE: &str = "Platform: {platform}
Niche: {niche}
Audience: {audience}
Goal: {goal}
Style: {style}
Output_Type: {output_type}";

/// Builds the user-role message from a validated request.
pub fn user_prompt(request: &BioRequest) -> String {
    USER_PROMPT_TEMPLATE
        .replace("{platform}", request.platform.as_str())
        .replace("{niche}", &request.niche)
        .replace("{audience}", &request.audience)
        .replace("{goal}", request.goal.as_str())
        .replace("{style}", request.style.as_str())
        .replace("{output_type}", request.output.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::models::{Goal, OutputType, Platform, Style};

    #[test]
    fn test_user_prompt_contains_all_six_fields_in_order() {
        let request = BioRequest {
            platform: Platform::X,
            niche: "fitness coaching".to_string(),
            audience: "busy professionals".to_string(),
            goal: Goal::Dms,
            style: Style::Minimal,
            output: OutputType::Cta,
        };

        let prompt = user_prompt(&request);
        assert_eq!(
            prompt,
            "Platform: X\nNiche: fitness coaching\nAudience: busy professionals\nGoal: DMs\nStyle: Minimal\nOutput_Type: CTA"
        );
    }

    #[test]
    fn test_system_prompt_forbids_labels() {
        assert!(SYSTEM_PROMPT.contains("Do NOT add labels"));
        assert!(SYSTEM_PROMPT.contains("Separate each section with a single blank line"));
    }
}
