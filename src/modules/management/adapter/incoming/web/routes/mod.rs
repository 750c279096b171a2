mod apply_contact_message_action;
mod apply_project_action;
mod apply_subscriber_action;
mod bulk_action;
mod create_personal_info;
mod create_project;
mod create_project_category;
mod create_site_settings;
mod list_contact_messages;

pub use apply_contact_message_action::*;
pub use apply_project_action::*;
pub use apply_subscriber_action::*;
pub use bulk_action::*;
pub use create_personal_info::*;
pub use create_project::*;
pub use create_project_category::*;
pub use create_site_settings::*;
pub use list_contact_messages::*;

use actix_web::web;

/// Registers every management route. Callers must also provide the `ManagementToken`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_personal_info_handler)
        .service(create_site_settings_handler)
        .service(create_project_category_handler)
        .service(apply_project_action_handler)
        .service(create_project_handler)
        .service(list_contact_messages_handler)
        .service(apply_contact_message_action_handler)
        .service(apply_subscriber_action_handler);
}
