mod get_experience_service;

pub use get_experience_service::GetExperienceService;
