mod get_skills_service;

pub use get_skills_service::GetSkillsService;
