use std::sync::Arc;

use crate::modules::newsletter::application::ports::incoming::use_cases::{
    ApplySubscriberActionUseCase, SubscribeUseCase,
};

#[derive(Clone)]
pub struct NewsletterUseCases {
    pub subscribe: Arc<dyn SubscribeUseCase + Send + Sync>,
    pub apply_action: Arc<dyn ApplySubscriberActionUseCase + Send + Sync>,
}
