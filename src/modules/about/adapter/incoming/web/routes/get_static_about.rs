use actix_web::{get, HttpResponse};

use crate::modules::about::application::domain::{
    entities::AboutContent, static_content::ABOUT_PROFILE,
};
use crate::shared::api::ApiResponse;
use crate::shared::content::Resolved;

/// Always the literal profile; the datastore is not consulted.
#[get("/api/about/static")]
pub async fn get_static_about_handler() -> HttpResponse {
    ApiResponse::resolved(Resolved::from_static(AboutContent::Profile(&ABOUT_PROFILE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::read_json;

    #[actix_web::test]
    async fn returns_literal_profile() {
        let app = test::init_service(App::new().service(get_static_about_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/about/static")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["source"], "static");
        assert_eq!(json["data"]["name"], ABOUT_PROFILE.name);
        assert_eq!(json["data"]["languages"].as_array().unwrap().len(), 3);
        assert_eq!(json["data"]["experience"]["satisfaction"], "100%");
    }
}
