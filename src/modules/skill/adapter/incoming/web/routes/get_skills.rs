use actix_web::{get, web, HttpResponse};

use crate::modules::skill::application::ports::incoming::use_cases::GetSkillsError;
use crate::shared::api::{ApiResponse, AppError};
use crate::AppState;

#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let resolved = data
        .get_skills_use_case
        .execute()
        .await
        .map_err(map_get_skills_error)?;

    Ok(ApiResponse::resolved(resolved))
}

fn map_get_skills_error(err: GetSkillsError) -> AppError {
    match err {
        GetSkillsError::QueryFailed(msg) => AppError::Internal(msg),
    }
}
