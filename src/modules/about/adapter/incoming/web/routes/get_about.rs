use actix_web::{get, web, HttpResponse};

use crate::modules::about::application::ports::incoming::use_cases::GetAboutError;
use crate::shared::api::{ApiResponse, AppError};
use crate::AppState;

#[get("/api/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let resolved = data
        .about
        .get
        .execute()
        .await
        .map_err(map_get_about_error)?;

    Ok(ApiResponse::resolved(resolved))
}

fn map_get_about_error(err: GetAboutError) -> AppError {
    match err {
        GetAboutError::QueryFailed(msg) => AppError::Internal(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use chrono::Utc;
    use uuid::Uuid;

    use crate::modules::about::application::domain::entities::{AboutContent, AboutRecord};
    use crate::modules::about::application::domain::static_content::StaticAboutContent;
    use crate::shared::content::{FallbackContent, Resolved};
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, read_json, stubs::StubGetAboutUseCase,
    };

    #[actix_web::test]
    async fn static_profile_is_tagged_static() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_get_about(StubGetAboutUseCase::returning(Resolved::from_static(
                StaticAboutContent.offline(),
            )))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_about_handler)).await;

        // Act
        let req = test::TestRequest::get().uri("/api/about").to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["source"], "static");
        assert_eq!(json["data"]["title"], "Full-Stack Developer & UI/UX Designer");
        assert!(json["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn stored_record_is_tagged_database() {
        // Arrange
        let record = AboutRecord {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            bio: "Engineer".to_string(),
            photo: "ada.png".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let state = TestAppStateBuilder::default()
            .with_get_about(StubGetAboutUseCase::returning(Resolved::from_database(
                AboutContent::Record(record.clone()),
            )))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_about_handler)).await;

        // Act
        let req = test::TestRequest::get().uri("/api/about").to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        let json = read_json(resp).await;
        assert_eq!(json["source"], "database");
        assert_eq!(json["data"]["id"], record.id.to_string());
        assert_eq!(json["data"]["name"], "Ada");
        assert!(json["data"]["createdAt"].is_string());
    }

    #[actix_web::test]
    async fn query_failure_is_internal_error() {
        // Arrange
        let state = TestAppStateBuilder::default()
            .with_get_about(StubGetAboutUseCase::failure("db down"))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_about_handler)).await;

        // Act
        let req = test::TestRequest::get().uri("/api/about").to_request();
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }
}
