use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::management::adapter::incoming::web::routes::{
    ActionResult, ContactMessageActionRequest, ProjectActionRequest, SubscriberActionRequest,
};
use crate::shared::api::{DetailBody, SubmissionBody};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Read API for a personal portfolio site, plus token-guarded management writes"
    ),
    paths(
        // Profile and settings
        crate::modules::profile::adapter::incoming::web::routes::get_personal_info_handler,
        crate::modules::profile::adapter::incoming::web::routes::get_core_expertise_handler,
        crate::modules::site_settings::adapter::incoming::web::routes::get_site_settings_handler,

        // Skills
        crate::modules::skill::adapter::incoming::web::routes::get_skills_handler,
        crate::modules::skill::adapter::incoming::web::routes::get_skills_by_category_handler,
        crate::modules::skill::adapter::incoming::web::routes::get_tools_handler,

        // Projects
        crate::modules::project::adapter::incoming::web::routes::get_project_categories_handler,
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_featured_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_handler,

        // Career
        crate::modules::career::adapter::incoming::web::routes::get_experience_handler,
        crate::modules::career::adapter::incoming::web::routes::get_education_handler,
        crate::modules::career::adapter::incoming::web::routes::get_timeline_handler,
        crate::modules::testimonial::adapter::incoming::web::routes::get_testimonials_handler,

        // Audience writes
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_message_handler,
        crate::modules::newsletter::adapter::incoming::web::routes::subscribe_handler,

        // Page aggregates
        crate::modules::pages::adapter::incoming::web::routes::get_homepage_handler,
        crate::modules::pages::adapter::incoming::web::routes::get_about_page_handler,
        crate::modules::pages::adapter::incoming::web::routes::get_skills_page_handler,
        crate::modules::pages::adapter::incoming::web::routes::get_experience_page_handler,

        // Management
        crate::modules::management::adapter::incoming::web::routes::create_personal_info_handler,
        crate::modules::management::adapter::incoming::web::routes::create_site_settings_handler,
        crate::modules::management::adapter::incoming::web::routes::create_project_category_handler,
        crate::modules::management::adapter::incoming::web::routes::create_project_handler,
        crate::modules::management::adapter::incoming::web::routes::apply_project_action_handler,
        crate::modules::management::adapter::incoming::web::routes::list_contact_messages_handler,
        crate::modules::management::adapter::incoming::web::routes::apply_contact_message_action_handler,
        crate::modules::management::adapter::incoming::web::routes::apply_subscriber_action_handler,
    ),
    components(
        schemas(
            DetailBody,
            SubmissionBody,
            ActionResult,
            ProjectActionRequest,
            ContactMessageActionRequest,
            SubscriberActionRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "profile", description = "Owner profile and core expertise"),
        (name = "site", description = "Site-wide settings"),
        (name = "skills", description = "Skills and tools"),
        (name = "projects", description = "Portfolio projects and categories"),
        (name = "career", description = "Experience, education and timeline"),
        (name = "testimonials", description = "Client testimonials"),
        (name = "contact", description = "Contact form"),
        (name = "newsletter", description = "Newsletter subscriptions"),
        (name = "pages", description = "Per-page aggregates"),
        (name = "management", description = "Administrative writes, bearer token required"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "management_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Value of MANAGEMENT_API_TOKEN"))
                        .build(),
                ),
            )
        }
    }
}
