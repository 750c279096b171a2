mod apply_contact_message_action_service;
mod list_contact_messages_service;
mod submit_contact_message_service;

pub use apply_contact_message_action_service::ApplyContactMessageActionService;
pub use list_contact_messages_service::ListContactMessagesService;
pub use submit_contact_message_service::SubmitContactMessageService;
