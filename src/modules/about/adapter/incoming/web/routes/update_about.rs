use actix_web::{put, web, HttpResponse};

use crate::modules::about::adapter::incoming::web::routes::AboutRequest;
use crate::modules::about::application::ports::incoming::use_cases::UpdateAboutError;
use crate::shared::api::{parse_record_id, ApiResponse, AppError};
use crate::AppState;

#[put("/api/about/{id}")]
pub async fn update_about_handler(
    path: web::Path<String>,
    req: web::Json<AboutRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let command = req.into_inner().into_command()?;
    if !data.datastore_probe.is_available().await {
        return Err(AppError::DatastoreUnavailable);
    }
    let id = parse_record_id(&path.into_inner())?;

    let updated = data
        .about
        .update
        .execute(id, command)
        .await
        .map_err(map_update_about_error)?;

    Ok(ApiResponse::success_with_message(
        "About information updated successfully",
        updated,
    ))
}

fn map_update_about_error(err: UpdateAboutError) -> AppError {
    match err {
        UpdateAboutError::DatastoreUnavailable => AppError::DatastoreUnavailable,
        UpdateAboutError::NotFound => {
            AppError::not_found("ABOUT_NOT_FOUND", "About information not found")
        }
        UpdateAboutError::DuplicateKey(field) => AppError::DuplicateKey(field),
        UpdateAboutError::RepositoryError(msg) => AppError::Internal(msg),
    }
}
