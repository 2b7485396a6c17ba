use std::collections::BTreeMap;

use crate::modules::experience::application::domain::entities::{
    EmploymentType, ExperienceEntry, ExperienceOverview, ExperienceSummary,
};
use crate::shared::content::{
    ContentId, FallbackContent, PROFILE_TOTAL_EXPERIENCE, PROFILE_TOTAL_PROJECTS,
};

const STATIC_SUMMARY: ExperienceSummary = ExperienceSummary {
    total_experience: PROFILE_TOTAL_EXPERIENCE,
    companies: 4,
    positions: 4,
    total_projects: PROFILE_TOTAL_PROJECTS,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn metrics(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticExperienceContent;

impl FallbackContent for StaticExperienceContent {
    type Payload = ExperienceOverview;

    fn offline(&self) -> ExperienceOverview {
        let experiences = vec![
            ExperienceEntry {
                id: ContentId::Static(1),
                role: "Senior Full-Stack Developer".to_string(),
                company: "TechCorp Solutions".to_string(),
                period: "2023 - Present".to_string(),
                duration: "1+ years".to_string(),
                location: "San Francisco, CA".to_string(),
                employment_type: EmploymentType::FullTime,
                description: "Leading development of enterprise-scale applications and mentoring junior developers.".to_string(),
                long_description: "Spearheading the development of microservices architecture for a SaaS platform serving 100K+ users. Implemented CI/CD pipelines reducing deployment time by 60% and led a team of 5 developers.".to_string(),
                achievements: strings(&[
                    "Reduced application load time by 40% through performance optimization",
                    "Led migration from monolithic to microservices architecture",
                    "Mentored 3 junior developers and improved team productivity by 25%",
                    "Implemented automated testing increasing code coverage to 90%",
                ]),
                technologies: strings(&["React", "Node.js", "TypeScript", "AWS", "Docker", "Kubernetes"]),
                metrics: metrics(&[("teamSize", "5"), ("users", "100K+"), ("performance", "+40%")]),
                color: Some("from-blue-500 to-cyan-500".to_string()),
                bg_color: Some("bg-blue-50 dark:bg-blue-900/20".to_string()),
                border_color: Some("border-blue-200 dark:border-blue-800".to_string()),
            },
            ExperienceEntry {
                id: ContentId::Static(2),
                role: "Full-Stack Developer".to_string(),
                company: "InnovateLab".to_string(),
                period: "2021 - 2023".to_string(),
                duration: "2 years".to_string(),
                location: "Remote".to_string(),
                employment_type: EmploymentType::FullTime,
                description: "Developed full-stack web applications and collaborated with cross-functional teams.".to_string(),
                long_description: "Built responsive web applications using modern JavaScript frameworks. Collaborated with designers and product managers to deliver user-centric solutions. Contributed to open-source projects and maintained high code quality standards.".to_string(),
                achievements: strings(&[
                    "Developed 15+ production applications with 99.9% uptime",
                    "Improved user engagement by 35% through UX optimization",
                    "Reduced bug reports by 60% through comprehensive testing",
                    "Contributed to 3 open-source projects with 500+ GitHub stars",
                ]),
                technologies: strings(&["Vue.js", "Express.js", "MongoDB", "PostgreSQL", "Redis", "GraphQL"]),
                metrics: metrics(&[("projects", "15+"), ("uptime", "99.9%"), ("engagement", "+35%")]),
                color: Some("from-green-500 to-emerald-500".to_string()),
                bg_color: Some("bg-green-50 dark:bg-green-900/20".to_string()),
                border_color: Some("border-green-200 dark:border-green-800".to_string()),
            },
        ];

        ExperienceOverview {
            experiences,
            summary: STATIC_SUMMARY,
        }
    }
}
