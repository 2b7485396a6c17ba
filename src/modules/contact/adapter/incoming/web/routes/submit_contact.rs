use actix_web::{post, web, HttpResponse};
use serde::Serialize;

use crate::modules::contact::adapter::incoming::web::routes::ContactRequest;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactError;
use crate::shared::api::AppError;
use crate::AppState;

#[derive(Serialize)]
struct ContactAccepted {
    success: bool,
    message: &'static str,
    id: String,
}

#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let command = req.into_inner().into_command()?;

    let receipt = data
        .contact
        .submit
        .execute(command)
        .await
        .map_err(|SubmitContactError::RepositoryError(msg)| AppError::Internal(msg))?;

    let message = if receipt.stored {
        "Message saved successfully"
    } else {
        "Message received successfully (saved locally)"
    };

    Ok(HttpResponse::Created().json(ContactAccepted {
        success: true,
        message,
        id: receipt.id,
    }))
}
