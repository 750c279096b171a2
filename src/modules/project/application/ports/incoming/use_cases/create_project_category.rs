use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::project::application::domain::entities::ProjectCategoryView;
use crate::modules::project::application::ports::outgoing::CreateProjectCategoryData;
use crate::shared::formatting::{normalize_slug, slugify};
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProjectCategoryDraft {
    pub name: String,
    /// Derived from `name` when absent.
    pub slug: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone)]
pub struct CreateProjectCategoryCommand {
    data: CreateProjectCategoryData,
}

impl CreateProjectCategoryCommand {
    pub fn new(draft: ProjectCategoryDraft) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = errors.required_text("name", &draft.name, 100);
        let slug = resolve_slug(&mut errors, draft.slug.as_deref(), &name, 120);

        errors.finish(Self {
            data: CreateProjectCategoryData {
                name,
                slug,
                order: draft.order,
            },
        })
    }

    pub fn data(&self) -> &CreateProjectCategoryData {
        &self.data
    }

    pub fn into_data(self) -> CreateProjectCategoryData {
        self.data
    }
}

/// Uses the given slug when present, otherwise derives one from `source`.
pub(crate) fn resolve_slug(
    errors: &mut FieldErrors,
    given: Option<&str>,
    source: &str,
    max_len: usize,
) -> String {
    let slug = match given.map(str::trim).filter(|s| !s.is_empty()) {
        Some(given) => {
            let slug = normalize_slug(given);
            if slug != slugify(&slug) {
                errors.add(
                    "slug",
                    "Enter a valid slug consisting of letters, numbers, underscores or hyphens.",
                );
            }
            slug
        }
        None => slugify(source),
    };

    if slug.is_empty() && !source.is_empty() {
        errors.add("slug", "Could not derive a slug; provide one explicitly.");
    } else if slug.chars().count() > max_len {
        errors.add(
            "slug",
            &format!("Ensure this field has no more than {max_len} characters."),
        );
    }

    slug
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectCategoryError {
    #[error("A project category with this slug already exists")]
    SlugTaken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateProjectCategoryCommand,
    ) -> Result<ProjectCategoryView, CreateProjectCategoryError>;
}
