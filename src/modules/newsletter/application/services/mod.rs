mod apply_subscriber_action_service;
mod subscribe_service;

pub use apply_subscriber_action_service::ApplySubscriberActionService;
pub use subscribe_service::SubscribeService;
