// src/shared/api/not_found.rs
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;

use crate::shared::api::ApiError;

pub const AVAILABLE_ROUTES: &[&str] = &[
    "GET /api/health",
    "GET /api/ready",
    "GET /api/about",
    "GET /api/about/static",
    "POST /api/about",
    "PUT /api/about/:id",
    "DELETE /api/about/:id",
    "GET /api/skills",
    "GET /api/experience",
    "GET /api/projects",
    "POST /api/contact",
    "GET /api/contact",
];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RouteNotFoundResponse {
    success: bool,
    error: ApiError,
    available_routes: &'static [&'static str],
}

/// Fallback service for any request no route matched.
pub async fn route_not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(RouteNotFoundResponse {
        success: false,
        error: ApiError::new(
            "ROUTE_NOT_FOUND",
            &format!("Route {} not found", req.uri()),
        ),
        available_routes: AVAILABLE_ROUTES,
    })
}
