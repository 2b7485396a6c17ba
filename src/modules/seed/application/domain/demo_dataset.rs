//! Demo records written into empty collections at startup.
//!
//! Experiences and projects are the showcased entries of their static
//! payloads, numbered in display order.

use crate::modules::experience::application::domain::{
    entities::NewExperience, static_content::StaticExperienceContent,
};
use crate::modules::project::application::domain::{
    entities::NewProject, static_content::StaticProjectsContent,
};
use crate::modules::skill::application::domain::entities::{
    NewCertification, NewSkill, SkillCategory,
};
use crate::shared::content::FallbackContent;

const DEMO_SKILLS: &[(&str, SkillCategory, u8, &str, &str, &str)] = &[
    ("React", SkillCategory::Frontend, 90, "Building dynamic and responsive user interfaces.", "⚛️", "#61DAFB"),
    ("JavaScript (ES6+)", SkillCategory::Frontend, 95, "Core language for web development, modern features.", "🟨", "#F7DF1E"),
    ("TypeScript", SkillCategory::Frontend, 80, "Adding type safety and improving code quality.", "🔷", "#3178C6"),
    ("Tailwind CSS", SkillCategory::Frontend, 90, "Rapid UI development with utility-first CSS.", "🎨", "#06B6D4"),
    ("HTML5/CSS3", SkillCategory::Frontend, 95, "Foundational web technologies, semantic markup, modern styling.", "🌐", "#E34F26"),
    ("Vite", SkillCategory::Frontend, 85, "Fast build tool for modern web projects.", "⚡", "#646CFF"),
    ("Node.js", SkillCategory::Backend, 85, "Server-side JavaScript runtime for scalable applications.", "🟢", "#339933"),
    ("Express.js", SkillCategory::Backend, 88, "Minimalist web framework for Node.js.", "🚀", "#000000"),
    ("Python", SkillCategory::Backend, 75, "Versatile language for scripting, data analysis, and backend.", "🐍", "#3776AB"),
    ("RESTful APIs", SkillCategory::Backend, 90, "Designing and implementing robust API services.", "🔌", "#FF6B6B"),
    ("Authentication (JWT)", SkillCategory::Backend, 80, "Securing applications with token-based authentication.", "🔐", "#FFD93D"),
    ("MongoDB", SkillCategory::Database, 85, "NoSQL database for flexible data storage.", "🍃", "#47A248"),
    ("Mongoose", SkillCategory::Database, 88, "MongoDB object data modeling for Node.js.", "📦", "#880000"),
    ("PostgreSQL", SkillCategory::Database, 70, "Powerful open-source relational database.", "🐘", "#336791"),
    ("SQL", SkillCategory::Database, 75, "Querying and managing relational databases.", "🗄️", "#CC2927"),
    ("Git", SkillCategory::DevOps, 90, "Version control system for collaborative development.", "📋", "#F05032"),
    ("Docker", SkillCategory::DevOps, 70, "Containerization for consistent environments.", "🐳", "#2496ED"),
    ("CI/CD", SkillCategory::DevOps, 65, "Automating build, test, and deployment pipelines.", "🔄", "#2088FF"),
    ("Figma", SkillCategory::Design, 70, "Collaborative interface design tool.", "🎨", "#F24E1E"),
    ("Responsive Design", SkillCategory::Design, 90, "Building layouts that adapt to any screen size.", "📱", "#FF6B6B"),
    ("User Experience (UX)", SkillCategory::Design, 80, "Focusing on intuitive and enjoyable user journeys.", "👤", "#4ECDC4"),
];

pub fn demo_skills() -> Vec<NewSkill> {
    DEMO_SKILLS
        .iter()
        .map(|(name, category, level, description, icon, color)| NewSkill {
            name: name.to_string(),
            category: *category,
            level: *level,
            description: description.to_string(),
            icon: Some(icon.to_string()),
            color: Some(color.to_string()),
        })
        .collect()
}

pub fn demo_experiences() -> Vec<NewExperience> {
    StaticExperienceContent
        .offline()
        .experiences
        .into_iter()
        .zip(1..)
        .map(|(entry, order)| NewExperience {
            role: entry.role,
            company: entry.company,
            period: entry.period,
            duration: entry.duration,
            location: entry.location,
            employment_type: entry.employment_type,
            description: entry.description,
            long_description: entry.long_description,
            achievements: entry.achievements,
            technologies: entry.technologies,
            metrics: entry.metrics,
            color: entry.color,
            bg_color: entry.bg_color,
            border_color: entry.border_color,
            display_order: order,
        })
        .collect()
}

pub fn demo_projects() -> Vec<NewProject> {
    StaticProjectsContent
        .offline()
        .projects
        .into_iter()
        .zip(1..)
        .map(|(entry, order)| NewProject {
            title: entry.title,
            category: entry.category,
            desc: entry.desc,
            long_desc: entry.long_desc,
            tech: entry.tech,
            status: entry.status,
            href: entry.href,
            demo_href: entry.demo_href,
            metrics: entry.metrics,
            features: entry.features,
            image: entry.image,
            display_order: order,
            featured: true,
        })
        .collect()
}

pub fn demo_certifications() -> Vec<NewCertification> {
    let skills = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };

    vec![
        NewCertification {
            name: "AWS Certified Developer".to_string(),
            issuer: "Amazon Web Services".to_string(),
            date: "2023".to_string(),
            credential_id: Some("AWS-DEV-123456".to_string()),
            credential_url: Some("https://aws.amazon.com/certification/".to_string()),
            image: Some(
                "https://images.aws.amazon.com/certification/aws-certified-developer-associate.png"
                    .to_string(),
            ),
            skills: skills(&["AWS", "Cloud Computing", "Serverless", "Lambda", "API Gateway"]),
        },
        NewCertification {
            name: "React Developer Certification".to_string(),
            issuer: "Meta".to_string(),
            date: "2022".to_string(),
            credential_id: Some("META-REACT-789012".to_string()),
            credential_url: Some("https://www.meta.com/careers/".to_string()),
            image: Some("https://react.dev/images/react-logo.png".to_string()),
            skills: skills(&["React", "JavaScript", "JSX", "Hooks", "State Management"]),
        },
    ]
}
