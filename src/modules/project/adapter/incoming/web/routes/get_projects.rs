use actix_web::{get, web, HttpResponse};

use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::shared::api::{ApiResponse, AppError};
use crate::AppState;

#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let resolved = data
        .get_projects_use_case
        .execute()
        .await
        .map_err(|GetProjectsError::QueryFailed(msg)| AppError::Internal(msg))?;

    Ok(ApiResponse::resolved(resolved))
}
