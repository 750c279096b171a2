use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::create_project_category::resolve_slug;
use crate::modules::project::application::domain::entities::ProjectDetail;
use crate::modules::project::application::ports::outgoing::CreateProjectData;
use crate::shared::formatting::{join_technologies, split_technologies};
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProjectDraft {
    pub category_id: Option<Uuid>,
    pub title: String,
    /// Derived from `title` when absent.
    pub slug: Option<String>,
    pub short_description: String,
    pub full_description: String,
    pub thumbnail: Option<String>,
    pub featured_image: Option<String>,
    /// Comma-separated, e.g. `"React, Node.js, MongoDB"`.
    pub technologies: String,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub case_study_url: Option<String>,
    pub is_featured: bool,
    pub order: i32,
}

#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    data: CreateProjectData,
}

impl CreateProjectCommand {
    pub fn new(draft: ProjectDraft) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        let category_id = draft.category_id.unwrap_or_else(|| {
            errors.add("category_id", "This field is required.");
            Uuid::nil()
        });
        let title = errors.required_text("title", &draft.title, 200);
        let slug = resolve_slug(&mut errors, draft.slug.as_deref(), &title, 220);
        let short_description =
            errors.required_text("short_description", &draft.short_description, 300);

        let technologies = join_technologies(&split_technologies(&draft.technologies));
        if technologies.is_empty() {
            errors.add("technologies", "This field may not be blank.");
        } else if technologies.chars().count() > 500 {
            errors.add(
                "technologies",
                "Ensure this field has no more than 500 characters.",
            );
        }

        let data = CreateProjectData {
            category_id,
            title,
            slug,
            short_description,
            full_description: draft.full_description.trim().to_string(),
            thumbnail: errors.optional_text("thumbnail", draft.thumbnail.as_deref(), 255),
            featured_image: errors.optional_text(
                "featured_image",
                draft.featured_image.as_deref(),
                255,
            ),
            technologies,
            live_url: errors.optional_url("live_url", draft.live_url.as_deref()),
            github_url: errors.optional_url("github_url", draft.github_url.as_deref()),
            case_study_url: errors.optional_url("case_study_url", draft.case_study_url.as_deref()),
            is_featured: draft.is_featured,
            order: draft.order,
        };

        errors.finish(Self { data })
    }

    pub fn data(&self) -> &CreateProjectData {
        &self.data
    }

    pub fn into_data(self) -> CreateProjectData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Project category not found")]
    CategoryNotFound,

    #[error("A project with this slug already exists")]
    SlugTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, command: CreateProjectCommand) -> Result<ProjectDetail, CreateProjectError>;
}
