use crate::modules::project::application::domain::entities::{
    ProjectCategory, ProjectEntry, ProjectStatus, ProjectsOverview, ProjectsSummary,
    PROJECT_CATEGORY_TABS,
};
use crate::shared::content::{ContentId, FallbackContent};

// Counts the whole portfolio, not just the two showcased entries.
const STATIC_SUMMARY: ProjectsSummary = ProjectsSummary {
    total_projects: 6,
    live_projects: 3,
    in_development: 2,
    open_source: 1,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticProjectsContent;

impl FallbackContent for StaticProjectsContent {
    type Payload = ProjectsOverview;

    fn offline(&self) -> ProjectsOverview {
        let projects = vec![
            ProjectEntry {
                id: ContentId::Static(1),
                title: "AI-Powered Chatbot".to_string(),
                category: ProjectCategory::AiMl,
                desc: "A conversational AI assistant integrated with various platforms.".to_string(),
                long_desc: "Developed a robust AI chatbot using natural language processing (NLP) and machine learning models. The bot can handle complex queries, provide personalized responses, and integrate with CRM systems. Features include sentiment analysis, intent recognition, and multi-language support.".to_string(),
                tech: strings(&["Python", "TensorFlow", "Flask", "React", "MongoDB"]),
                status: ProjectStatus::Live,
                href: Some("https://github.com/example/ai-chatbot".to_string()),
                demo_href: Some("https://ai-chatbot.example.com".to_string()),
                metrics: [("users", "10K+"), ("accuracy", "92%"), ("uptime", "99.9%")]
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                features: strings(&[
                    "Natural Language Processing",
                    "Sentiment Analysis",
                    "Multi-platform Integration",
                    "Scalable Architecture",
                ]),
                image: Some("https://images.unsplash.com/photo-1677442136019-21780ecad995?w=600&h=400&fit=crop&auto=format&q=80".to_string()),
                featured: None,
            },
            ProjectEntry {
                id: ContentId::Static(2),
                title: "E-Commerce Platform".to_string(),
                category: ProjectCategory::FullStack,
                desc: "A scalable online store with secure payment processing.".to_string(),
                long_desc: "Built a full-stack e-commerce platform from scratch, featuring product management, user authentication, shopping cart functionality, and secure payment gateway integration. Optimized for performance and SEO, providing a seamless shopping experience.".to_string(),
                tech: strings(&["Node.js", "Express", "React", "PostgreSQL", "Stripe"]),
                status: ProjectStatus::Live,
                href: Some("https://github.com/example/ecommerce".to_string()),
                demo_href: Some("https://ecommerce.example.com".to_string()),
                metrics: [("revenue", "$50K+"), ("orders", "2K+"), ("conversion", "3.5%")]
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                features: strings(&[
                    "Product Catalog",
                    "User Authentication",
                    "Secure Payments",
                    "Order Management",
                    "Admin Dashboard",
                ]),
                image: Some("https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=600&h=400&fit=crop&auto=format&q=80".to_string()),
                featured: None,
            },
        ];

        ProjectsOverview {
            projects,
            categories: PROJECT_CATEGORY_TABS.to_vec(),
            summary: STATIC_SUMMARY,
        }
    }
}
