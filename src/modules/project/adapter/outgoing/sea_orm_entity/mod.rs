pub mod project_categories;
pub mod projects;
