mod apply_contact_message_action;
mod list_contact_messages;
mod submit_contact_message;

pub use apply_contact_message_action::{
    ApplyContactMessageActionError, ApplyContactMessageActionUseCase,
};
pub use list_contact_messages::{ListContactMessagesError, ListContactMessagesUseCase};
pub use submit_contact_message::{
    ContactMessageDraft, SubmitContactMessageCommand, SubmitContactMessageError,
    SubmitContactMessageUseCase,
};
