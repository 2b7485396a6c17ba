mod app_error;
mod error_handlers;
mod json_config;
mod not_found;
mod response;

pub use app_error::{parse_record_id, AppError};
pub use error_handlers::attach_internal_detail;
pub use json_config::{custom_json_config, JSON_BODY_LIMIT};
pub use not_found::{route_not_found, AVAILABLE_ROUTES};
pub use response::{ApiError, ApiResponse};
