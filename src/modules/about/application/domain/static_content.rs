use crate::modules::about::application::domain::entities::{
    AboutContent, AboutProfile, AboutSummary, Education, ExperienceHighlights, SkillHighlights,
    SocialLinks, SpokenLanguage,
};
use crate::shared::content::FallbackContent;

const PHOTO_URL: &str = "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=400&h=400&fit=crop&crop=face&auto=format&q=80";

pub static ABOUT_PROFILE: AboutProfile = AboutProfile {
    name: "Anshika Gupta",
    title: "Full-Stack Developer & UI/UX Designer",
    bio: "Passionate Full-Stack Developer with 5+ years of experience in creating innovative and user-centric web applications. I specialize in React, Node.js, and modern web technologies, with a strong focus on clean code, performance optimization, and exceptional user experiences.",
    short_description: "Crafting performant, accessible, and beautiful web experiences with a passion for innovation and clean code.",
    photo: PHOTO_URL,
    education: &[
        Education {
            degree: "Bachelor of Technology in Computer Science",
            institution: "Delhi Technological University",
            year: "2019-2023",
            gpa: "8.5/10",
        },
        Education {
            degree: "Full-Stack Web Development Certification",
            institution: "FreeCodeCamp",
            year: "2022",
            gpa: "N/A",
        },
    ],
    location: "New Delhi, India",
    email: "anshika.gupta@example.com",
    phone: "+91 98765 43210",
    social_links: SocialLinks {
        github: "https://github.com/anshikagupta",
        linkedin: "https://linkedin.com/in/anshikagupta",
        twitter: "https://twitter.com/anshikagupta",
        portfolio: "https://anshikagupta.dev",
    },
    skills: SkillHighlights {
        frontend: &[
            "React",
            "Vue.js",
            "TypeScript",
            "Next.js",
            "Tailwind CSS",
            "HTML5",
            "CSS3",
        ],
        backend: &[
            "Node.js",
            "Express.js",
            "Python",
            "GraphQL",
            "REST APIs",
            "MongoDB",
            "PostgreSQL",
        ],
        tools: &["Git", "Docker", "AWS", "Figma", "VS Code", "Postman", "Jest"],
    },
    experience: ExperienceHighlights {
        years: "5+",
        projects: "20+",
        clients: "15+",
        satisfaction: "100%",
    },
    languages: &[
        SpokenLanguage {
            name: "English",
            proficiency: "Fluent",
        },
        SpokenLanguage {
            name: "Hindi",
            proficiency: "Native",
        },
        SpokenLanguage {
            name: "Spanish",
            proficiency: "Intermediate",
        },
    ],
    interests: &[
        "Web Development",
        "UI/UX Design",
        "Open Source",
        "Machine Learning",
        "Photography",
        "Travel",
    ],
    availability: "Available for freelance projects",
    timezone: "IST (UTC+5:30)",
};

pub const ABOUT_SUMMARY: AboutSummary = AboutSummary {
    name: "Anshika Gupta",
    bio: "Passionate Full-Stack Developer with 5+ years of experience in creating innovative and user-centric web applications.",
    photo: PHOTO_URL,
};

/// Full profile while offline, short summary when connected but empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAboutContent;

impl FallbackContent for StaticAboutContent {
    type Payload = AboutContent;

    fn offline(&self) -> AboutContent {
        AboutContent::Profile(&ABOUT_PROFILE)
    }

    fn empty(&self) -> AboutContent {
        AboutContent::Summary(ABOUT_SUMMARY)
    }
}
