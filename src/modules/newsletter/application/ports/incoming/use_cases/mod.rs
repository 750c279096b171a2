mod apply_subscriber_action;
mod subscribe;

pub use apply_subscriber_action::{ApplySubscriberActionError, ApplySubscriberActionUseCase};
pub use subscribe::{SubscribeCommand, SubscribeDraft, SubscribeError, SubscribeUseCase};
