pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{about, contact, experience, project, seed, skill};

use crate::about::adapter::outgoing::{AboutQueryPostgres, AboutRepositoryPostgres};
use crate::about::application::about_use_cases::AboutUseCases;
use crate::about::application::services::{
    CreateAboutService, DeleteAboutService, GetAboutService, UpdateAboutService,
};
use crate::contact::adapter::outgoing::{MessageQueryPostgres, MessageRepositoryPostgres};
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::services::{ListMessagesService, SubmitContactService};
use crate::experience::adapter::outgoing::ExperienceQueryPostgres;
use crate::experience::application::ports::incoming::use_cases::GetExperienceUseCase;
use crate::experience::application::services::GetExperienceService;
use crate::project::adapter::outgoing::ProjectQueryPostgres;
use crate::project::application::ports::incoming::use_cases::GetProjectsUseCase;
use crate::project::application::services::GetProjectsService;
use crate::seed::adapter::outgoing::SeedStorePostgres;
use crate::seed::application::ports::incoming::use_cases::SeedDemoContentUseCase;
use crate::seed::application::services::SeedDemoContentService;
use crate::skill::adapter::outgoing::SkillQueryPostgres;
use crate::skill::application::ports::incoming::use_cases::GetSkillsUseCase;
use crate::skill::application::services::GetSkillsService;

use crate::config::{load_env_files, ServerConfig};
use crate::shared::api::{attach_internal_detail, custom_json_config, route_not_found, AVAILABLE_ROUTES};
use crate::shared::content::ContentResolver;
use crate::shared::datastore::{connect, DatastoreProbe, PostgresProbe};

use actix_cors::Cors;
use actix_web::http::{header, StatusCode};
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub about: AboutUseCases,
    pub get_skills_use_case: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub get_experience_use_case: Arc<dyn GetExperienceUseCase + Send + Sync>,
    pub get_projects_use_case: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub contact: ContactUseCases,
    pub datastore_probe: Arc<dyn DatastoreProbe>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    load_env_files();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    // Database connection (lazy: the server starts even when Postgres is down)
    let db_arc = Arc::new(connect(&config.datastore).await);
    let probe: Arc<dyn DatastoreProbe> = Arc::new(PostgresProbe::new(Arc::clone(&db_arc)));

    let datastore_online = probe.is_available().await;
    if datastore_online {
        prepare_datastore(&config, &db_arc).await;
    } else {
        warn!("Datastore unavailable, read endpoints will serve static content");
    }

    let resolver = ContentResolver::new(Arc::clone(&probe));

    let state = AppState {
        about: AboutUseCases {
            get: Arc::new(GetAboutService::new(
                AboutQueryPostgres::new(Arc::clone(&db_arc)),
                resolver.clone(),
            )),
            create: Arc::new(CreateAboutService::new(
                AboutRepositoryPostgres::new(Arc::clone(&db_arc)),
                Arc::clone(&probe),
            )),
            update: Arc::new(UpdateAboutService::new(
                AboutRepositoryPostgres::new(Arc::clone(&db_arc)),
                Arc::clone(&probe),
            )),
            delete: Arc::new(DeleteAboutService::new(
                AboutRepositoryPostgres::new(Arc::clone(&db_arc)),
                Arc::clone(&probe),
            )),
        },
        get_skills_use_case: Arc::new(GetSkillsService::new(
            SkillQueryPostgres::new(Arc::clone(&db_arc)),
            resolver.clone(),
        )),
        get_experience_use_case: Arc::new(GetExperienceService::new(
            ExperienceQueryPostgres::new(Arc::clone(&db_arc)),
            resolver.clone(),
        )),
        get_projects_use_case: Arc::new(GetProjectsService::new(
            ProjectQueryPostgres::new(Arc::clone(&db_arc)),
            resolver,
        )),
        contact: ContactUseCases {
            submit: Arc::new(SubmitContactService::new(
                MessageRepositoryPostgres::new(Arc::clone(&db_arc)),
                Arc::clone(&probe),
            )),
            list: Arc::new(ListMessagesService::new(
                MessageQueryPostgres::new(Arc::clone(&db_arc)),
                Arc::clone(&probe),
            )),
        },
        datastore_probe: probe,
    };

    let bind_address = config.bind_address();
    log_banner(&config, datastore_online);

    let mode = config.mode;
    let allowed_origins = config.allowed_origins.clone();

    let result = HttpServer::new(move || {
        App::new()
            .wrap(
                ErrorHandlers::new()
                    .handler(StatusCode::INTERNAL_SERVER_ERROR, attach_internal_detail),
            )
            .wrap(Logger::new("%r %s %Dms - IP: %a"))
            .wrap(cors(&allowed_origins))
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(mode))
            .app_data(custom_json_config())
            .configure(init_routes)
            .default_service(web::to(route_not_found))
    })
    .bind(bind_address)?
    .run()
    .await;

    // The server has stopped accepting connections; release the pool.
    match Arc::try_unwrap(db_arc) {
        Ok(conn) => {
            if let Err(e) = conn.close().await {
                warn!("Error closing datastore connection: {}", e);
            }
        }
        Err(_) => warn!("Datastore connection still shared at shutdown"),
    }
    info!("Server stopped");

    result
}

/// Runs migrations and demo seeding. Failures are logged, never fatal.
#[cfg(not(tarpaulin_include))]
async fn prepare_datastore(config: &ServerConfig, db: &Arc<DatabaseConnection>) {
    if config.datastore.run_migrations {
        match Migrator::up(&**db, None).await {
            Ok(()) => info!("Migrations applied"),
            Err(e) => error!("Migration failed: {}", e),
        }
    }

    if config.datastore.seed_demo_data {
        let seeder = SeedDemoContentService::new(SeedStorePostgres::new(Arc::clone(db)));
        if let Err(e) = seeder.execute().await {
            error!("Error populating demo data: {}", e);
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CACHE_CONTROL,
        ])
        .supports_credentials()
}

#[cfg(not(tarpaulin_include))]
fn log_banner(config: &ServerConfig, datastore_online: bool) {
    info!("Server running on http://{}", config.bind_address());
    info!("Environment: {}", config.mode.as_str());
    info!(
        "Database: {}",
        if datastore_online {
            "connected"
        } else {
            "not connected (static content)"
        }
    );
    info!("Available routes:");
    for route in AVAILABLE_ROUTES {
        info!("  {}", route);
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // About
    cfg.service(crate::about::adapter::incoming::web::routes::get_static_about_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::get_about_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::create_about_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::update_about_handler);
    cfg.service(crate::about::adapter::incoming::web::routes::delete_about_handler);
    // Content
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::get_experience_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::list_messages_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
