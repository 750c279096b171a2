use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ApplyContactMessageActionUseCase, ListContactMessagesUseCase, SubmitContactMessageUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    pub list: Arc<dyn ListContactMessagesUseCase + Send + Sync>,
    pub apply_action: Arc<dyn ApplyContactMessageActionUseCase + Send + Sync>,
}
