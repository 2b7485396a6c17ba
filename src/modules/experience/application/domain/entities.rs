use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::content::{ContentId, PROFILE_TOTAL_EXPERIENCE, PROFILE_TOTAL_PROJECTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Freelance,
    Internship,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Freelance => "Freelance",
            EmploymentType::Internship => "Internship",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown employment type: {0}")]
pub struct UnknownEmploymentType(pub String);

impl FromStr for EmploymentType {
    type Err = UnknownEmploymentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Full-time" => Ok(EmploymentType::FullTime),
            "Part-time" => Ok(EmploymentType::PartTime),
            "Contract" => Ok(EmploymentType::Contract),
            "Freelance" => Ok(EmploymentType::Freelance),
            "Internship" => Ok(EmploymentType::Internship),
            other => Err(UnknownEmploymentType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceRecord {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub period: String,
    pub duration: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub description: String,
    pub long_description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub metrics: BTreeMap<String, String>,
    pub color: Option<String>,
    pub bg_color: Option<String>,
    pub border_color: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExperience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub duration: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub description: String,
    pub long_description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub metrics: BTreeMap<String, String>,
    pub color: Option<String>,
    pub bg_color: Option<String>,
    pub border_color: Option<String>,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: ContentId,
    pub role: String,
    pub company: String,
    pub period: String,
    pub duration: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub description: String,
    pub long_description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub metrics: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

impl From<ExperienceRecord> for ExperienceEntry {
    fn from(record: ExperienceRecord) -> Self {
        Self {
            id: record.id.into(),
            role: record.role,
            company: record.company,
            period: record.period,
            duration: record.duration,
            location: record.location,
            employment_type: record.employment_type,
            description: record.description,
            long_description: record.long_description,
            achievements: record.achievements,
            technologies: record.technologies,
            metrics: record.metrics,
            color: record.color,
            bg_color: record.bg_color,
            border_color: record.border_color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceSummary {
    pub total_experience: &'static str,
    pub companies: u32,
    pub positions: u32,
    pub total_projects: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceOverview {
    pub experiences: Vec<ExperienceEntry>,
    pub summary: ExperienceSummary,
}

impl ExperienceOverview {
    /// Builds the timeline in display order. Positions count every record,
    /// companies count distinct employers.
    pub fn from_records(records: Vec<ExperienceRecord>) -> Self {
        let mut records = records;
        records.sort_by_key(|r| r.display_order);

        let companies = records
            .iter()
            .map(|r| r.company.as_str())
            .collect::<HashSet<_>>()
            .len() as u32;
        let positions = records.len() as u32;

        Self {
            experiences: records.into_iter().map(ExperienceEntry::from).collect(),
            summary: ExperienceSummary {
                total_experience: PROFILE_TOTAL_EXPERIENCE,
                companies,
                positions,
                total_projects: PROFILE_TOTAL_PROJECTS,
            },
        }
    }
}
