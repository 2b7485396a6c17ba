mod get_skills;

pub use get_skills::{GetSkillsError, GetSkillsUseCase};
