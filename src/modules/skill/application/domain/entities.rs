use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::content::PROFILE_YEARS_CODING;

//
// ──────────────────────────────────────────────────────────
// Category
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    DevOps,
    Design,
    Tools,
}

impl SkillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Database => "Database",
            SkillCategory::DevOps => "DevOps",
            SkillCategory::Design => "Design",
            SkillCategory::Tools => "Tools",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown skill category: {0}")]
pub struct UnknownSkillCategory(pub String);

impl FromStr for SkillCategory {
    type Err = UnknownSkillCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Frontend" => Ok(SkillCategory::Frontend),
            "Backend" => Ok(SkillCategory::Backend),
            "Database" => Ok(SkillCategory::Database),
            "DevOps" => Ok(SkillCategory::DevOps),
            "Design" => Ok(SkillCategory::Design),
            "Tools" => Ok(SkillCategory::Tools),
            other => Err(UnknownSkillCategory(other.to_string())),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Stored records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct SkillRecord {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    pub level: u8,
    pub description: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificationRecord {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image: Option<String>,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Skill to be inserted; the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSkill {
    pub name: String,
    pub category: SkillCategory,
    pub level: u8,
    pub description: String,
    pub icon: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCertification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image: Option<String>,
    pub skills: Vec<String>,
}

//
// ──────────────────────────────────────────────────────────
// Read payload
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillItem {
    pub name: String,
    pub level: u8,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationItem {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsSummary {
    pub total_skills: u32,
    pub years_coding: u32,
    pub technologies_mastered: u32,
    pub average_proficiency: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsOverview {
    pub categories: BTreeMap<SkillCategory, Vec<SkillItem>>,
    pub summary: SkillsSummary,
    pub certifications: Vec<CertificationItem>,
}

impl SkillsOverview {
    /// Groups skills by category (highest level first within each group),
    /// derives the summary and orders certifications newest first.
    pub fn from_records(
        skills: Vec<SkillRecord>,
        certifications: Vec<CertificationRecord>,
    ) -> Self {
        let total = skills.len() as u32;
        let level_sum: u32 = skills.iter().map(|s| u32::from(s.level)).sum();
        let average_proficiency = if total == 0 {
            0
        } else {
            (f64::from(level_sum) / f64::from(total)).round() as u32
        };

        let mut categories: BTreeMap<SkillCategory, Vec<SkillItem>> = BTreeMap::new();
        let mut ordered = skills;
        ordered.sort_by(|a, b| b.level.cmp(&a.level));
        for skill in ordered {
            categories.entry(skill.category).or_default().push(SkillItem {
                name: skill.name,
                level: skill.level,
                description: skill.description,
                icon: skill.icon,
                color: skill.color,
            });
        }

        let mut certifications = certifications;
        certifications.sort_by(|a, b| b.date.cmp(&a.date));

        Self {
            categories,
            summary: SkillsSummary {
                total_skills: total,
                years_coding: PROFILE_YEARS_CODING,
                technologies_mastered: total,
                average_proficiency,
            },
            certifications: certifications
                .into_iter()
                .map(|c| CertificationItem {
                    name: c.name,
                    issuer: c.issuer,
                    date: c.date,
                    credential_id: c.credential_id,
                    credential_url: c.credential_url,
                    image: c.image,
                    skills: Some(c.skills),
                })
                .collect(),
        }
    }
}
