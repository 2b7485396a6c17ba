mod get_experience;

pub use get_experience::get_experience_handler;
