use chrono::Utc;
use uuid::Uuid;

use crate::modules::career::application::domain::entities::TimelineView;
use crate::modules::profile::adapter::outgoing::sea_orm_entity::personal_info;
use crate::modules::profile::application::domain::entities::PersonalInfoView;
use crate::modules::profile::application::ports::incoming::use_cases::PersonalInfoDraft;
use crate::modules::profile::application::ports::outgoing::CreatePersonalInfoData;
use crate::modules::project::adapter::outgoing::sea_orm_entity::{project_categories, projects};
use crate::modules::project::application::domain::entities::{ProjectDetail, ProjectListItem};
use crate::modules::site_settings::application::domain::entities::{
    SiteSettingsView, DEFAULT_PRIMARY_COLOR,
};
use crate::modules::skill::application::domain::entities::{SkillCategory, SkillView};

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

pub fn sample_personal_info() -> PersonalInfoView {
    let data = sample_personal_info_data();
    PersonalInfoView {
        name: data.name,
        title: data.title,
        tagline: data.tagline,
        hero_description: data.hero_description,
        about_heading: data.about_heading,
        about_description: data.about_description,
        about_detail: data.about_detail,
        email: data.email,
        phone: data.phone,
        location: data.location,
        availability_status: data.availability_status,
        years_experience: data.years_experience,
        projects_completed: data.projects_completed,
        awards_won: data.awards_won,
        happy_clients: data.happy_clients,
        linkedin_url: data.linkedin_url,
        github_url: data.github_url,
        twitter_url: data.twitter_url,
        dribbble_url: data.dribbble_url,
        resume_pdf: data.resume_pdf,
        footer_tagline: data.footer_tagline,
        copyright_text: data.copyright_text,
    }
}

pub fn sample_personal_info_data() -> CreatePersonalInfoData {
    CreatePersonalInfoData {
        name: "Jane Doe".into(),
        title: "Product Engineer".into(),
        tagline: "Shipping calm software".into(),
        hero_description: "I design and build web products.".into(),
        about_heading: "About me".into(),
        about_description: "Eight years across agencies and startups.".into(),
        about_detail: "Currently freelancing.".into(),
        email: "jane@example.com".into(),
        phone: "+1 555 0100".into(),
        location: "Lisbon, Portugal".into(),
        availability_status: "Available for freelance".into(),
        years_experience: 8,
        projects_completed: 40,
        awards_won: 3,
        happy_clients: 25,
        linkedin_url: Some("https://linkedin.com/in/janedoe".into()),
        github_url: Some("https://github.com/janedoe".into()),
        twitter_url: None,
        dribbble_url: None,
        resume_pdf: None,
        footer_tagline: "Thanks for stopping by".into(),
        copyright_text: "Jane Doe. All rights reserved.".into(),
    }
}

pub fn sample_personal_info_draft() -> PersonalInfoDraft {
    let data = sample_personal_info_data();
    PersonalInfoDraft {
        name: data.name,
        title: data.title,
        tagline: data.tagline,
        hero_description: data.hero_description,
        about_heading: data.about_heading,
        about_description: data.about_description,
        about_detail: data.about_detail,
        email: "  Jane@Example.com ".into(),
        phone: data.phone,
        location: data.location,
        availability_status: data.availability_status,
        years_experience: data.years_experience,
        projects_completed: data.projects_completed,
        awards_won: data.awards_won,
        happy_clients: data.happy_clients,
        linkedin_url: data.linkedin_url,
        github_url: data.github_url,
        twitter_url: data.twitter_url,
        dribbble_url: data.dribbble_url,
        resume_pdf: data.resume_pdf,
        footer_tagline: data.footer_tagline,
        copyright_text: data.copyright_text,
    }
}

pub fn personal_info_model() -> personal_info::Model {
    let data = sample_personal_info_data();
    let now = Utc::now().fixed_offset();
    personal_info::Model {
        id: Uuid::now_v7(),
        name: data.name,
        title: data.title,
        tagline: data.tagline,
        hero_description: data.hero_description,
        about_heading: data.about_heading,
        about_description: data.about_description,
        about_detail: data.about_detail,
        email: data.email,
        phone: data.phone,
        location: data.location,
        availability_status: data.availability_status,
        years_experience: data.years_experience,
        projects_completed: data.projects_completed,
        awards_won: data.awards_won,
        happy_clients: data.happy_clients,
        linkedin_url: data.linkedin_url,
        github_url: data.github_url,
        twitter_url: data.twitter_url,
        dribbble_url: data.dribbble_url,
        resume_pdf: data.resume_pdf,
        footer_tagline: data.footer_tagline,
        copyright_text: data.copyright_text,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

// ---------------------------------------------------------------------------
// Site settings and skills
// ---------------------------------------------------------------------------

pub fn sample_site_settings() -> SiteSettingsView {
    SiteSettingsView {
        site_title: "Jane Doe | Portfolio".into(),
        site_description: "Design and engineering work.".into(),
        favicon: None,
        logo: Some("branding/logo.svg".into()),
        meta_keywords: "portfolio, design".into(),
        google_analytics_id: String::new(),
        primary_color: DEFAULT_PRIMARY_COLOR.into(),
    }
}

pub fn sample_skill(name: &str) -> SkillView {
    SkillView {
        id: Uuid::now_v7(),
        name: name.into(),
        category: SkillCategory::Frontend,
        category_display: SkillCategory::Frontend.display_name().into(),
        proficiency: 4,
        icon_name: name.to_lowercase(),
        order: 0,
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

pub fn sample_project_item(slug: &str) -> ProjectListItem {
    ProjectListItem {
        id: Uuid::now_v7(),
        title: "Shop".into(),
        slug: slug.into(),
        category_name: "Web Design".into(),
        category_slug: "web-design".into(),
        short_description: "Headless storefront".into(),
        thumbnail: None,
        technologies_list: vec!["React".into(), "Node.js".into()],
        is_featured: true,
        live_url: Some("https://shop.example.com".into()),
        github_url: None,
        case_study_url: None,
    }
}

pub fn sample_project_detail(slug: &str) -> ProjectDetail {
    let now = Utc::now();
    ProjectDetail {
        id: Uuid::now_v7(),
        title: "Shop".into(),
        slug: slug.into(),
        category_name: "Web Design".into(),
        category_slug: "web-design".into(),
        short_description: "Headless storefront".into(),
        full_description: "Full write-up".into(),
        thumbnail: None,
        featured_image: None,
        technologies_list: vec!["React".into(), "Node.js".into()],
        is_featured: false,
        live_url: None,
        github_url: Some("https://github.com/janedoe/shop".into()),
        case_study_url: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn category_model(name: &str, slug: &str) -> project_categories::Model {
    project_categories::Model {
        id: Uuid::now_v7(),
        name: name.into(),
        slug: slug.into(),
        sort_order: 0,
        is_active: true,
    }
}

pub fn project_model(category_id: Uuid, title: &str, slug: &str) -> projects::Model {
    let now = Utc::now().fixed_offset();
    projects::Model {
        id: Uuid::now_v7(),
        category_id,
        title: title.into(),
        slug: slug.into(),
        short_description: format!("{title} in short"),
        full_description: "Full write-up".into(),
        thumbnail: None,
        featured_image: None,
        technologies: "React, Node.js".into(),
        live_url: None,
        github_url: None,
        case_study_url: None,
        is_featured: false,
        sort_order: 0,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

// ---------------------------------------------------------------------------
// Career
// ---------------------------------------------------------------------------

pub fn sample_timeline(year: i32) -> TimelineView {
    TimelineView {
        id: Uuid::now_v7(),
        year,
        title: format!("Milestone {year}"),
        description: "Something happened".into(),
        order: 0,
    }
}
