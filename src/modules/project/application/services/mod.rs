mod get_projects_service;

pub use get_projects_service::GetProjectsService;
