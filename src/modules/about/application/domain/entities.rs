use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A stored About entry. Several may exist; readers use the newest.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutRecord {
    pub id: Uuid,
    pub name: String,
    pub bio: String,
    pub photo: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Minimal About payload served when nothing is stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AboutSummary {
    pub name: &'static str,
    pub bio: &'static str,
    pub photo: &'static str,
}

//
// ──────────────────────────────────────────────────────────
// Full profile (static only)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutProfile {
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub short_description: &'static str,
    pub photo: &'static str,
    pub education: &'static [Education],
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub social_links: SocialLinks,
    pub skills: SkillHighlights,
    pub experience: ExperienceHighlights,
    pub languages: &'static [SpokenLanguage],
    pub interests: &'static [&'static str],
    pub availability: &'static str,
    pub timezone: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
    pub gpa: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SocialLinks {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub twitter: &'static str,
    pub portfolio: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkillHighlights {
    pub frontend: &'static [&'static str],
    pub backend: &'static [&'static str],
    pub tools: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExperienceHighlights {
    pub years: &'static str,
    pub projects: &'static str,
    pub clients: &'static str,
    pub satisfaction: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpokenLanguage {
    pub name: &'static str,
    pub proficiency: &'static str,
}

/// Body of a `GET /api/about` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AboutContent {
    Profile(&'static AboutProfile),
    Summary(AboutSummary),
    Record(AboutRecord),
}
