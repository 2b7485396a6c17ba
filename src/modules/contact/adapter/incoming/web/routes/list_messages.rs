use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::modules::contact::application::domain::entities::{MessageInbox, MessageRecord};
use crate::modules::contact::application::ports::incoming::use_cases::ListMessagesError;
use crate::shared::api::AppError;
use crate::AppState;

#[derive(Serialize)]
struct InboxResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    messages: Vec<MessageRecord>,
}

#[get("/api/contact")]
pub async fn list_messages_handler(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let inbox = data
        .contact
        .list
        .execute()
        .await
        .map_err(|ListMessagesError::QueryFailed(msg)| AppError::Internal(msg))?;

    let body = match inbox {
        MessageInbox::Offline => InboxResponse {
            success: true,
            message: Some("Database not connected"),
            messages: Vec::new(),
        },
        MessageInbox::Messages(messages) => InboxResponse {
            success: true,
            message: None,
            messages,
        },
    };

    Ok(HttpResponse::Ok().json(body))
}
