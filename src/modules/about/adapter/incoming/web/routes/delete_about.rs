use actix_web::{delete, web, HttpResponse};

use crate::modules::about::application::ports::incoming::use_cases::DeleteAboutError;
use crate::shared::api::{parse_record_id, ApiResponse, AppError};
use crate::AppState;

#[delete("/api/about/{id}")]
pub async fn delete_about_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if !data.datastore_probe.is_available().await {
        return Err(AppError::DatastoreUnavailable);
    }
    let id = parse_record_id(&path.into_inner())?;

    let deleted = data
        .about
        .delete
        .execute(id)
        .await
        .map_err(map_delete_about_error)?;

    Ok(ApiResponse::success_with_message(
        "About information deleted successfully",
        deleted,
    ))
}

fn map_delete_about_error(err: DeleteAboutError) -> AppError {
    match err {
        DeleteAboutError::DatastoreUnavailable => AppError::DatastoreUnavailable,
        DeleteAboutError::NotFound => {
            AppError::not_found("ABOUT_NOT_FOUND", "About information not found")
        }
        DeleteAboutError::RepositoryError(msg) => AppError::Internal(msg),
    }
}
