use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::site_settings::application::domain::entities::{
    SiteSettingsView, DEFAULT_PRIMARY_COLOR,
};
use crate::modules::site_settings::application::ports::outgoing::CreateSiteSettingsData;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SiteSettingsDraft {
    pub site_title: String,
    pub site_description: String,
    pub favicon: Option<String>,
    pub logo: Option<String>,
    pub meta_keywords: String,
    pub google_analytics_id: String,
    /// Hex colour, `#RRGGBB`. Defaults to gold.
    pub primary_color: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateSiteSettingsCommand {
    data: CreateSiteSettingsData,
}

impl CreateSiteSettingsCommand {
    pub fn new(draft: SiteSettingsDraft) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        let primary_color = draft
            .primary_color
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_PRIMARY_COLOR)
            .to_string();
        if !is_hex_color(&primary_color) {
            errors.add("primary_color", "Enter a colour in #RRGGBB form.");
        }

        let data = CreateSiteSettingsData {
            site_title: errors.required_text("site_title", &draft.site_title, 200),
            site_description: errors.required_text(
                "site_description",
                &draft.site_description,
                usize::MAX,
            ),
            favicon: errors.optional_text("favicon", draft.favicon.as_deref(), 255),
            logo: errors.optional_text("logo", draft.logo.as_deref(), 255),
            meta_keywords: errors
                .optional_text("meta_keywords", Some(&draft.meta_keywords), 500)
                .unwrap_or_default(),
            google_analytics_id: errors
                .optional_text("google_analytics_id", Some(&draft.google_analytics_id), 50)
                .unwrap_or_default(),
            primary_color,
        };

        errors.finish(Self { data })
    }

    pub fn into_data(self) -> CreateSiteSettingsData {
        self.data
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSiteSettingsError {
    #[error("Only one active site settings record is allowed")]
    AlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateSiteSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateSiteSettingsCommand,
    ) -> Result<SiteSettingsView, CreateSiteSettingsError>;
}
