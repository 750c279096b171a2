use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PRIMARY_COLOR: &str = "#D4AF37";

/// Site-wide branding and SEO settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SiteSettingsView {
    #[schema(example = "Jane Doe | Portfolio")]
    pub site_title: String,
    pub site_description: String,
    pub favicon: Option<String>,
    pub logo: Option<String>,
    pub meta_keywords: String,
    pub google_analytics_id: String,
    #[schema(example = "#D4AF37")]
    pub primary_color: String,
}
