use actix_web::{post, web, HttpResponse};

use crate::modules::about::adapter::incoming::web::routes::AboutRequest;
use crate::modules::about::application::ports::incoming::use_cases::CreateAboutError;
use crate::shared::api::{ApiResponse, AppError};
use crate::AppState;

#[post("/api/about")]
pub async fn create_about_handler(
    req: web::Json<AboutRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let command = req.into_inner().into_command()?;

    let created = data
        .about
        .create
        .execute(command)
        .await
        .map_err(map_create_about_error)?;

    Ok(ApiResponse::created_with_message(
        "About information created successfully",
        created,
    ))
}

fn map_create_about_error(err: CreateAboutError) -> AppError {
    match err {
        CreateAboutError::DatastoreUnavailable => AppError::DatastoreUnavailable,
        CreateAboutError::DuplicateKey(field) => AppError::DuplicateKey(field),
        CreateAboutError::RepositoryError(msg) => AppError::Internal(msg),
    }
}
