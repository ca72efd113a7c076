//! Request/response shapes for bio generation.
//!
//! The wire body keeps the original loose string fields; `BioRequest` is the
//! validated, immutable record rebuilt on every submission. Unknown goal and
//! style values fall back to their default buckets (Followers / Balanced)
//! instead of failing.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Raw request body for `POST /api/generate`.
///
/// All fields default to empty so a missing field is indistinguishable from
/// a blank one — both are rejected with `Missing required fields` before any
/// upstream call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateBody {
    pub platform: String,
    pub niche: String,
    pub audience: String,
    pub goal: String,
    pub style: String,
    pub output_type: String,
}

/// Target platform. Drives tone upstream and the bio line-break rule locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Instagram,
    TikTok,
    YouTube,
    X,
    LinkedIn,
}

impl Platform {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tiktok" => Platform::TikTok,
            "youtube" => Platform::YouTube,
            "x" | "twitter" | "x (twitter)" => Platform::X,
            "linkedin" => Platform::LinkedIn,
            _ => Platform::Instagram,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
            Platform::X => "X",
            Platform::LinkedIn => "LinkedIn",
        }
    }

    /// Whether bios on this platform render hard line breaks.
    /// X bios are a single run of text, so fragments are joined with ". ".
    pub fn multiline_bio(&self) -> bool {
        !matches!(self, Platform::X)
    }
}

/// What the user wants out of their profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Followers,
    Dms,
    Sales,
    Clicks,
}

impl Goal {
    /// Unrecognized goals fall back to the Followers bucket.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "dms" | "dm" => Goal::Dms,
            "sales" => Goal::Sales,
            "clicks" | "link clicks" => Goal::Clicks,
            _ => Goal::Followers,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Followers => "Followers",
            Goal::Dms => "DMs",
            Goal::Sales => "Sales",
            Goal::Clicks => "Clicks",
        }
    }
}

/// Writing style, mostly an emoji budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Minimal,
    Balanced,
    Expressive,
}

impl Style {
    /// Unrecognized styles fall back to Balanced.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "minimal" => Style::Minimal,
            "expressive" => Style::Expressive,
            _ => Style::Balanced,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Minimal => "Minimal",
            Style::Balanced => "Balanced",
            Style::Expressive => "Expressive",
        }
    }

    pub fn requires_pro(&self) -> bool {
        matches!(self, Style::Expressive)
    }
}

/// Requested output shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    Hook,
    Bio,
    Cta,
    Variations,
    All,
}

impl OutputType {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "hook" => OutputType::Hook,
            "cta" => OutputType::Cta,
            "variations" => OutputType::Variations,
            "all" => OutputType::All,
            _ => OutputType::Bio,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::Hook => "Hook",
            OutputType::Bio => "Bio",
            OutputType::Cta => "CTA",
            OutputType::Variations => "Variations",
            OutputType::All => "All",
        }
    }

    /// Everything except the plain bio is gated behind PRO.
    pub fn requires_pro(&self) -> bool {
        !matches!(self, OutputType::Bio)
    }
}

/// Validated generation request, rebuilt fresh per submission and discarded
/// after the response is rendered.
#[derive(Debug, Clone)]
pub struct BioRequest {
    pub platform: Platform,
    pub niche: String,
    pub audience: String,
    pub goal: Goal,
    pub style: Style,
    pub output: OutputType,
}

impl BioRequest {
    /// Validates the six required fields, then resolves the enumerations.
    /// Runs before any gate check or network call.
    pub fn from_body(body: &GenerateBody) -> Result<Self, AppError> {
        let required = [
            &body.platform,
            &body.niche,
            &body.audience,
            &body.goal,
            &body.style,
            &body.output_type,
        ];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Err(AppError::MissingFields);
        }

        Ok(BioRequest {
            platform: Platform::parse(&body.platform),
            niche: body.niche.trim().to_string(),
            audience: body.audience.trim().to_string(),
            goal: Goal::parse(&body.goal),
            style: Style::parse(&body.style),
            output: OutputType::parse(&body.output_type),
        })
    }
}

/// Segmented generation result. Field order is fixed: hook, bio, cta,
/// variations. Missing sections are omitted from the JSON, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BioSections {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_body() -> GenerateBody {
        GenerateBody {
            platform: "Instagram".to_string(),
            niche: "fitness coaching".to_string(),
            audience: "busy professionals".to_string(),
            goal: "DMs".to_string(),
            style: "Minimal".to_string(),
            output_type: "CTA".to_string(),
        }
    }

    #[test]
    fn test_full_body_parses() {
        let request = BioRequest::from_body(&full_body()).unwrap();
        assert_eq!(request.platform, Platform::Instagram);
        assert_eq!(request.goal, Goal::Dms);
        assert_eq!(request.style, Style::Minimal);
        assert_eq!(request.output, OutputType::Cta);
    }

    #[test]
    fn test_each_missing_field_is_rejected() {
        for i in 0..6 {
            let mut body = full_body();
            match i {
                0 => body.platform.clear(),
                1 => body.niche.clear(),
                2 => body.audience.clear(),
                3 => body.goal.clear(),
                4 => body.style.clear(),
                _ => body.output_type.clear(),
            }
            let result = BioRequest::from_body(&body);
            assert!(
                matches!(result, Err(AppError::MissingFields)),
                "field {i} blank must be rejected"
            );
        }
    }

    #[test]
    fn test_whitespace_only_field_is_rejected() {
        let mut body = full_body();
        body.niche = "   ".to_string();
        assert!(matches!(
            BioRequest::from_body(&body),
            Err(AppError::MissingFields)
        ));
    }

    #[test]
    fn test_absent_fields_deserialize_to_empty() {
        let body: GenerateBody = serde_json::from_str(r#"{"platform": "X"}"#).unwrap();
        assert_eq!(body.platform, "X");
        assert!(body.niche.is_empty());
        assert!(body.output_type.is_empty());
    }

    #[test]
    fn test_unknown_goal_falls_back_to_followers() {
        assert_eq!(Goal::parse("World domination"), Goal::Followers);
    }

    #[test]
    fn test_unknown_style_falls_back_to_balanced() {
        assert_eq!(Style::parse("Shouty"), Style::Balanced);
    }

    #[test]
    fn test_platform_line_break_rule() {
        assert!(!Platform::X.multiline_bio());
        assert!(Platform::Instagram.multiline_bio());
        assert!(Platform::LinkedIn.multiline_bio());
    }

    #[test]
    fn test_pro_gated_values() {
        assert!(OutputType::Hook.requires_pro());
        assert!(OutputType::Cta.requires_pro());
        assert!(OutputType::Variations.requires_pro());
        assert!(OutputType::All.requires_pro());
        assert!(!OutputType::Bio.requires_pro());
        assert!(Style::Expressive.requires_pro());
        assert!(!Style::Minimal.requires_pro());
    }

    #[test]
    fn test_sections_serialization_omits_missing() {
        let sections = BioSections {
            hook: Some("A hook".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&sections).unwrap();
        assert_eq!(value, serde_json::json!({"hook": "A hook"}));
    }
}
