pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use actix_web::{middleware::Logger, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::config::{AppConfig, LogFormat};
use crate::modules::career::adapter::outgoing::CareerQueryPostgres;
use crate::modules::career::application::career_use_cases::CareerUseCases;
use crate::modules::career::application::services::{
    ListEducationService, ListExperienceService, ListTimelineService,
};
use crate::modules::contact::adapter::outgoing::{ContactQueryPostgres, ContactRepositoryPostgres};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::services::{
    ApplyContactMessageActionService, ListContactMessagesService, SubmitContactMessageService,
};
use crate::modules::management::application::domain::management_token::ManagementToken;
use crate::modules::newsletter::adapter::outgoing::NewsletterRepositoryPostgres;
use crate::modules::newsletter::application::newsletter_use_cases::NewsletterUseCases;
use crate::modules::newsletter::application::services::{
    ApplySubscriberActionService, SubscribeService,
};
use crate::modules::pages::application::pages_use_cases::PagesUseCases;
use crate::modules::pages::application::services::{
    GetAboutPageService, GetExperiencePageService, GetHomepageService, GetSkillsPageService,
};
use crate::modules::profile::adapter::outgoing::{ProfileQueryPostgres, ProfileRepositoryPostgres};
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::profile::application::services::{
    CreatePersonalInfoService, GetCoreExpertiseService, GetPersonalInfoService,
};
use crate::modules::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::services::{
    ApplyProjectActionService, CreateProjectCategoryService, CreateProjectService,
    GetProjectService, ListProjectCategoriesService, ListProjectsService,
};
use crate::modules::site_settings::adapter::outgoing::{
    SiteSettingsQueryPostgres, SiteSettingsRepositoryPostgres,
};
use crate::modules::site_settings::application::services::{
    CreateSiteSettingsService, GetSiteSettingsService,
};
use crate::modules::site_settings::application::site_settings_use_cases::SiteSettingsUseCases;
use crate::modules::skill::adapter::outgoing::SkillQueryPostgres;
use crate::modules::skill::application::services::{
    GetSkillsByCategoryService, ListSkillsService, ListToolsService,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::modules::testimonial::adapter::outgoing::TestimonialQueryPostgres;
use crate::modules::testimonial::application::services::ListTestimonialsService;
use crate::modules::testimonial::application::testimonial_use_cases::TestimonialUseCases;
use crate::shared::api::{custom_json_config, custom_query_config};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub profile: ProfileUseCases,
    pub site_settings: SiteSettingsUseCases,
    pub skill: SkillUseCases,
    pub project: ProjectUseCases,
    pub career: CareerUseCases,
    pub testimonial: TestimonialUseCases,
    pub contact: ContactUseCases,
    pub newsletter: NewsletterUseCases,
    pub pages: PagesUseCases,
}

impl AppState {
    /// Wires every use case to its Postgres adapter.
    pub fn from_connection(db: &Arc<DatabaseConnection>) -> Self {
        let profile_query = ProfileQueryPostgres::new(Arc::clone(db));
        let site_settings_query = SiteSettingsQueryPostgres::new(Arc::clone(db));
        let skill_query = SkillQueryPostgres::new(Arc::clone(db));
        let project_query = ProjectQueryPostgres::new(Arc::clone(db));
        let project_repo = ProjectRepositoryPostgres::new(Arc::clone(db));
        let career_query = CareerQueryPostgres::new(Arc::clone(db));
        let contact_repo = ContactRepositoryPostgres::new(Arc::clone(db));
        let newsletter_repo = NewsletterRepositoryPostgres::new(Arc::clone(db));

        Self {
            profile: ProfileUseCases {
                get_personal_info: Arc::new(GetPersonalInfoService::new(profile_query.clone())),
                get_core_expertise: Arc::new(GetCoreExpertiseService::new(profile_query.clone())),
                create_personal_info: Arc::new(CreatePersonalInfoService::new(
                    ProfileRepositoryPostgres::new(Arc::clone(db)),
                )),
            },
            site_settings: SiteSettingsUseCases {
                get: Arc::new(GetSiteSettingsService::new(site_settings_query)),
                create: Arc::new(CreateSiteSettingsService::new(
                    SiteSettingsRepositoryPostgres::new(Arc::clone(db)),
                )),
            },
            skill: SkillUseCases {
                list_skills: Arc::new(ListSkillsService::new(skill_query.clone())),
                by_category: Arc::new(GetSkillsByCategoryService::new(skill_query.clone())),
                list_tools: Arc::new(ListToolsService::new(skill_query.clone())),
            },
            project: ProjectUseCases {
                list_categories: Arc::new(ListProjectCategoriesService::new(project_query.clone())),
                list: Arc::new(ListProjectsService::new(project_query.clone())),
                get_by_slug: Arc::new(GetProjectService::new(project_query.clone())),
                create_category: Arc::new(CreateProjectCategoryService::new(project_repo.clone())),
                create: Arc::new(CreateProjectService::new(project_repo.clone())),
                apply_action: Arc::new(ApplyProjectActionService::new(project_repo)),
            },
            career: CareerUseCases {
                list_experience: Arc::new(ListExperienceService::new(career_query.clone())),
                list_education: Arc::new(ListEducationService::new(career_query.clone())),
                list_timeline: Arc::new(ListTimelineService::new(career_query.clone())),
            },
            testimonial: TestimonialUseCases {
                list: Arc::new(ListTestimonialsService::new(TestimonialQueryPostgres::new(
                    Arc::clone(db),
                ))),
            },
            contact: ContactUseCases {
                submit: Arc::new(SubmitContactMessageService::new(contact_repo.clone())),
                list: Arc::new(ListContactMessagesService::new(ContactQueryPostgres::new(
                    Arc::clone(db),
                ))),
                apply_action: Arc::new(ApplyContactMessageActionService::new(contact_repo)),
            },
            newsletter: NewsletterUseCases {
                subscribe: Arc::new(SubscribeService::new(newsletter_repo.clone())),
                apply_action: Arc::new(ApplySubscriberActionService::new(newsletter_repo)),
            },
            pages: PagesUseCases {
                homepage: Arc::new(GetHomepageService::new(
                    Arc::new(profile_query.clone()),
                    Arc::new(project_query),
                    Arc::new(career_query.clone()),
                )),
                about: Arc::new(GetAboutPageService::new(
                    Arc::new(profile_query),
                    Arc::new(career_query.clone()),
                )),
                skills: Arc::new(GetSkillsPageService::new(Arc::new(skill_query))),
                experience: Arc::new(GetExperiencePageService::new(Arc::new(career_query))),
            },
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    init_tracing(config.log_format);

    info!(?config, "Starting application...");

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .expect("Failed to run database migrations");
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);
    let state = AppState::from_connection(&db_arc);

    let management_token = config
        .management_api_token
        .as_deref()
        .map(|secret| web::Data::new(ManagementToken::from_secret(secret)));
    if management_token.is_none() {
        warn!("MANAGEMENT_API_TOKEN is not set; management routes are disabled");
    }

    let server_url = config.bind_address();
    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            );

        if let Some(token) = &management_token {
            app = app
                .app_data(token.clone())
                .configure(crate::modules::management::adapter::incoming::web::routes::configure);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{
        career, contact, newsletter, pages, profile, project, site_settings, skill, testimonial,
    };

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profile and settings
    cfg.service(profile::adapter::incoming::web::routes::get_personal_info_handler);
    cfg.service(profile::adapter::incoming::web::routes::get_core_expertise_handler);
    cfg.service(site_settings::adapter::incoming::web::routes::get_site_settings_handler);
    // Skills
    cfg.service(skill::adapter::incoming::web::routes::get_skills_by_category_handler);
    cfg.service(skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(skill::adapter::incoming::web::routes::get_tools_handler);
    // Projects; featured must precede the slug route
    cfg.service(project::adapter::incoming::web::routes::get_project_categories_handler);
    cfg.service(project::adapter::incoming::web::routes::get_featured_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::get_project_handler);
    // Career
    cfg.service(career::adapter::incoming::web::routes::get_experience_handler);
    cfg.service(career::adapter::incoming::web::routes::get_education_handler);
    cfg.service(career::adapter::incoming::web::routes::get_timeline_handler);
    cfg.service(testimonial::adapter::incoming::web::routes::get_testimonials_handler);
    // Audience
    cfg.service(contact::adapter::incoming::web::routes::submit_contact_message_handler);
    cfg.service(newsletter::adapter::incoming::web::routes::subscribe_handler);
    // Pages
    cfg.service(pages::adapter::incoming::web::routes::get_homepage_handler);
    cfg.service(pages::adapter::incoming::web::routes::get_about_page_handler);
    cfg.service(pages::adapter::incoming::web::routes::get_skills_page_handler);
    cfg.service(pages::adapter::incoming::web::routes::get_experience_page_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
