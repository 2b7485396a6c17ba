mod about_request;
mod create_about;
mod delete_about;
mod get_about;
mod get_static_about;
mod update_about;

pub use about_request::AboutRequest;
pub use create_about::create_about_handler;
pub use delete_about::delete_about_handler;
pub use get_about::get_about_handler;
pub use get_static_about::get_static_about_handler;
pub use update_about::update_about_handler;
