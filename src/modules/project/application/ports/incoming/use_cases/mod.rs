mod get_projects;

pub use get_projects::{GetProjectsError, GetProjectsUseCase};
