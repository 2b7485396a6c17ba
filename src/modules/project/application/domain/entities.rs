use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::shared::content::ContentId;

/// Filter tabs offered to the client, in display order.
pub const PROJECT_CATEGORY_TABS: [&str; 7] = [
    "All",
    "AI/ML",
    "Full-Stack",
    "FinTech",
    "IoT",
    "CMS",
    "Collaboration",
];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown project {kind}: {value}")]
pub struct UnknownProjectValue {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! labelled_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownProjectValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err(UnknownProjectValue {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

labelled_enum!(ProjectCategory, "category", {
    AiMl => "AI/ML",
    FullStack => "Full-Stack",
    FinTech => "FinTech",
    IoT => "IoT",
    Cms => "CMS",
    Collaboration => "Collaboration",
    Mobile => "Mobile",
    Web => "Web",
    Desktop => "Desktop",
});

labelled_enum!(ProjectStatus, "status", {
    Live => "Live",
    InDevelopment => "In Development",
    OpenSource => "Open Source",
    Completed => "Completed",
    OnHold => "On Hold",
});

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: String,
    pub category: ProjectCategory,
    pub desc: String,
    pub long_desc: String,
    pub tech: Vec<String>,
    pub status: ProjectStatus,
    pub href: Option<String>,
    pub demo_href: Option<String>,
    pub metrics: BTreeMap<String, String>,
    pub features: Vec<String>,
    pub image: Option<String>,
    pub display_order: i32,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub category: ProjectCategory,
    pub desc: String,
    pub long_desc: String,
    pub tech: Vec<String>,
    pub status: ProjectStatus,
    pub href: Option<String>,
    pub demo_href: Option<String>,
    pub metrics: BTreeMap<String, String>,
    pub features: Vec<String>,
    pub image: Option<String>,
    pub display_order: i32,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: ContentId,
    pub title: String,
    pub category: ProjectCategory,
    pub desc: String,
    pub long_desc: String,
    pub tech: Vec<String>,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_href: Option<String>,
    pub metrics: BTreeMap<String, String>,
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Absent from the static showcase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl From<ProjectRecord> for ProjectEntry {
    fn from(record: ProjectRecord) -> Self {
        Self {
            id: record.id.into(),
            title: record.title,
            category: record.category,
            desc: record.desc,
            long_desc: record.long_desc,
            tech: record.tech,
            status: record.status,
            href: record.href,
            demo_href: record.demo_href,
            metrics: record.metrics,
            features: record.features,
            image: record.image,
            featured: Some(record.featured),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsSummary {
    pub total_projects: u32,
    pub live_projects: u32,
    pub in_development: u32,
    pub open_source: u32,
}

impl ProjectsSummary {
    fn count(records: &[ProjectRecord]) -> Self {
        let with_status =
            |status: ProjectStatus| records.iter().filter(|p| p.status == status).count() as u32;

        Self {
            total_projects: records.len() as u32,
            live_projects: with_status(ProjectStatus::Live),
            in_development: with_status(ProjectStatus::InDevelopment),
            open_source: with_status(ProjectStatus::OpenSource),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectsOverview {
    pub projects: Vec<ProjectEntry>,
    pub categories: Vec<&'static str>,
    pub summary: ProjectsSummary,
}

impl ProjectsOverview {
    pub fn from_records(records: Vec<ProjectRecord>) -> Self {
        let mut records = records;
        records.sort_by_key(|p| p.display_order);
        let summary = ProjectsSummary::count(&records);

        Self {
            projects: records.into_iter().map(ProjectEntry::from).collect(),
            categories: PROJECT_CATEGORY_TABS.to_vec(),
            summary,
        }
    }
}
