mod get_projects;

pub use get_projects::get_projects_handler;
