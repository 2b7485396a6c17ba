// src/shared/api/error_handlers.rs
use actix_web::{
    body::MessageBody,
    dev::ServiceResponse,
    middleware::ErrorHandlerResponse,
    web,
};

use crate::config::RuntimeMode;
use crate::shared::api::{ApiResponse, AppError};

/// Rewrites 500 responses to include the internal detail when the runtime
/// mode allows it. Register with `ErrorHandlers::handler(INTERNAL_SERVER_ERROR, ..)`.
pub fn attach_internal_detail<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>>
where
    B: MessageBody + 'static,
{
    let detail = res
        .request()
        .app_data::<web::Data<RuntimeMode>>()
        .filter(|mode| mode.exposes_internal_detail())
        .and_then(|_| res.response().error())
        .and_then(|err| err.as_error::<AppError>())
        .and_then(|err| err.internal_detail().map(str::to_string));

    match detail {
        Some(stack) => {
            let (req, _) = res.into_parts();
            let response = ApiResponse::internal_error_with_stack(&stack).map_into_right_body();
            Ok(ErrorHandlerResponse::Response(ServiceResponse::new(
                req, response,
            )))
        }
        None => Ok(ErrorHandlerResponse::Response(res.map_into_left_body())),
    }
}
