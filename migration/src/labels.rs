//! Allowed values of the enumerated text columns, as stored.

pub const SKILL_CATEGORIES: &[&str] = &[
    "Frontend", "Backend", "Database", "DevOps", "Design", "Tools",
];

pub const EMPLOYMENT_TYPES: &[&str] = &[
    "Full-time",
    "Part-time",
    "Contract",
    "Freelance",
    "Internship",
];

pub const PROJECT_CATEGORIES: &[&str] = &[
    "AI/ML",
    "Full-Stack",
    "FinTech",
    "IoT",
    "CMS",
    "Collaboration",
    "Mobile",
    "Web",
    "Desktop",
];

pub const PROJECT_STATUSES: &[&str] = &[
    "Live",
    "In Development",
    "Open Source",
    "Completed",
    "On Hold",
];
