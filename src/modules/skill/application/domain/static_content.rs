use std::collections::BTreeMap;

use crate::modules::skill::application::domain::entities::{
    CertificationItem, SkillCategory, SkillItem, SkillsOverview, SkillsSummary,
};
use crate::shared::content::{FallbackContent, PROFILE_YEARS_CODING};

const STATIC_SKILLS: &[(SkillCategory, &[(&str, u8, &str)])] = &[
    (
        SkillCategory::Frontend,
        &[
            ("React", 90, "Building dynamic and responsive user interfaces."),
            ("JavaScript (ES6+)", 95, "Core language for web development, modern features."),
            ("TypeScript", 80, "Adding type safety and improving code quality."),
            ("Tailwind CSS", 90, "Rapid UI development with utility-first CSS."),
            ("HTML5/CSS3", 95, "Foundational web technologies, semantic markup, modern styling."),
            ("Vite", 85, "Fast build tool for modern web projects."),
        ],
    ),
    (
        SkillCategory::Backend,
        &[
            ("Node.js", 85, "Server-side JavaScript runtime for scalable applications."),
            ("Express.js", 88, "Minimalist web framework for Node.js."),
            ("Python", 75, "Versatile language for scripting, data analysis, and backend."),
            ("RESTful APIs", 90, "Designing and implementing robust API services."),
            ("Authentication (JWT)", 80, "Securing applications with token-based authentication."),
        ],
    ),
    (
        SkillCategory::Database,
        &[
            ("MongoDB", 85, "NoSQL database for flexible data storage."),
            ("Mongoose", 88, "MongoDB object data modeling for Node.js."),
            ("PostgreSQL", 70, "Powerful open-source relational database."),
            ("SQL", 75, "Querying and managing relational databases."),
        ],
    ),
    (
        SkillCategory::DevOps,
        &[
            ("Git", 90, "Version control system for collaborative development."),
            ("Docker", 70, "Containerization for consistent environments."),
            ("CI/CD", 65, "Automating build, test, and deployment pipelines."),
        ],
    ),
    (
        SkillCategory::Design,
        &[
            ("Figma", 70, "Collaborative interface design tool."),
            ("Responsive Design", 90, "Building layouts that adapt to any screen size."),
            ("User Experience (UX)", 80, "Focusing on intuitive and enjoyable user journeys."),
        ],
    ),
];

const STATIC_CERTIFICATIONS: &[(&str, &str, &str, &str)] = &[
    ("AWS Certified Developer", "Amazon Web Services", "2023", "AWS-DEV-123456"),
    ("React Developer Certification", "Meta", "2022", "META-REACT-789012"),
];

// The offline summary is a curated figure, not derived from the list above.
const STATIC_SUMMARY: SkillsSummary = SkillsSummary {
    total_skills: 20,
    years_coding: PROFILE_YEARS_CODING,
    technologies_mastered: 15,
    average_proficiency: 90,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSkillsContent;

impl FallbackContent for StaticSkillsContent {
    type Payload = SkillsOverview;

    fn offline(&self) -> SkillsOverview {
        let categories: BTreeMap<SkillCategory, Vec<SkillItem>> = STATIC_SKILLS
            .iter()
            .map(|(category, skills)| {
                let items = skills
                    .iter()
                    .map(|(name, level, description)| SkillItem {
                        name: name.to_string(),
                        level: *level,
                        description: description.to_string(),
                        icon: None,
                        color: None,
                    })
                    .collect();
                (*category, items)
            })
            .collect();

        let certifications = STATIC_CERTIFICATIONS
            .iter()
            .map(|(name, issuer, date, credential_id)| CertificationItem {
                name: name.to_string(),
                issuer: issuer.to_string(),
                date: date.to_string(),
                credential_id: Some(credential_id.to_string()),
                credential_url: None,
                image: None,
                skills: None,
            })
            .collect();

        SkillsOverview {
            categories,
            summary: STATIC_SUMMARY,
            certifications,
        }
    }
}
