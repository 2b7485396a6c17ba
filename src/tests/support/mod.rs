pub mod app_state_builder;
pub mod in_memory;
pub mod stubs;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;

/// Works for plain apps and for apps wrapped in `ErrorHandlers` (`EitherBody`).
pub async fn read_json<B: MessageBody>(resp: ServiceResponse<B>) -> serde_json::Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("response body is not JSON")
}
