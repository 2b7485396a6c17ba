mod create_about_service;
mod delete_about_service;
mod get_about_service;
mod update_about_service;

pub use create_about_service::CreateAboutService;
pub use delete_about_service::DeleteAboutService;
pub use get_about_service::GetAboutService;
pub use update_about_service::UpdateAboutService;
