use actix_web::{get, web, HttpResponse};

use crate::modules::experience::application::ports::incoming::use_cases::GetExperienceError;
use crate::shared::api::{ApiResponse, AppError};
use crate::AppState;

#[get("/api/experience")]
pub async fn get_experience_handler(
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    match data.get_experience_use_case.execute().await {
        Ok(resolved) => Ok(ApiResponse::resolved(resolved)),
        Err(GetExperienceError::QueryFailed(msg)) => Err(AppError::Internal(msg)),
    }
}
