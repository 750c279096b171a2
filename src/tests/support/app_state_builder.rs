use std::sync::Arc;

use actix_web::web;

use crate::modules::career::application::career_use_cases::CareerUseCases;
use crate::modules::career::application::ports::incoming::use_cases::{
    ListEducationUseCase, ListExperienceUseCase, ListTimelineUseCase,
};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::{
    ApplyContactMessageActionUseCase, ListContactMessagesUseCase, SubmitContactMessageUseCase,
};
use crate::modules::newsletter::application::newsletter_use_cases::NewsletterUseCases;
use crate::modules::newsletter::application::ports::incoming::use_cases::{
    ApplySubscriberActionUseCase, SubscribeUseCase,
};
use crate::modules::pages::application::pages_use_cases::PagesUseCases;
use crate::modules::pages::application::ports::incoming::use_cases::{
    GetAboutPageUseCase, GetExperiencePageUseCase, GetHomepageUseCase, GetSkillsPageUseCase,
};
use crate::modules::profile::application::ports::incoming::use_cases::{
    CreatePersonalInfoUseCase, GetCoreExpertiseUseCase, GetPersonalInfoUseCase,
};
use crate::modules::profile::application::profile_use_cases::ProfileUseCases;
use crate::modules::project::application::ports::incoming::use_cases::{
    ApplyProjectActionUseCase, CreateProjectCategoryUseCase, CreateProjectUseCase,
    GetProjectUseCase, ListProjectCategoriesUseCase, ListProjectsUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::site_settings::application::ports::incoming::use_cases::{
    CreateSiteSettingsUseCase, GetSiteSettingsUseCase,
};
use crate::modules::site_settings::application::site_settings_use_cases::SiteSettingsUseCases;
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsByCategoryUseCase, ListSkillsUseCase, ListToolsUseCase,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::modules::testimonial::application::ports::incoming::use_cases::ListTestimonialsUseCase;
use crate::modules::testimonial::application::testimonial_use_cases::TestimonialUseCases;
use crate::tests::support::stubs::Unused;
use crate::AppState;

/// Builds an `AppState` where every use case panics unless replaced with `with_*`.
pub struct TestAppStateBuilder {
    profile: ProfileUseCases,
    site_settings: SiteSettingsUseCases,
    skill: SkillUseCases,
    project: ProjectUseCases,
    career: CareerUseCases,
    testimonial: TestimonialUseCases,
    contact: ContactUseCases,
    newsletter: NewsletterUseCases,
    pages: PagesUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            profile: ProfileUseCases {
                get_personal_info: Arc::new(Unused),
                get_core_expertise: Arc::new(Unused),
                create_personal_info: Arc::new(Unused),
            },
            site_settings: SiteSettingsUseCases {
                get: Arc::new(Unused),
                create: Arc::new(Unused),
            },
            skill: SkillUseCases {
                list_skills: Arc::new(Unused),
                by_category: Arc::new(Unused),
                list_tools: Arc::new(Unused),
            },
            project: ProjectUseCases {
                list_categories: Arc::new(Unused),
                list: Arc::new(Unused),
                get_by_slug: Arc::new(Unused),
                create_category: Arc::new(Unused),
                create: Arc::new(Unused),
                apply_action: Arc::new(Unused),
            },
            career: CareerUseCases {
                list_experience: Arc::new(Unused),
                list_education: Arc::new(Unused),
                list_timeline: Arc::new(Unused),
            },
            testimonial: TestimonialUseCases {
                list: Arc::new(Unused),
            },
            contact: ContactUseCases {
                submit: Arc::new(Unused),
                list: Arc::new(Unused),
                apply_action: Arc::new(Unused),
            },
            newsletter: NewsletterUseCases {
                subscribe: Arc::new(Unused),
                apply_action: Arc::new(Unused),
            },
            pages: PagesUseCases {
                homepage: Arc::new(Unused),
                about: Arc::new(Unused),
                skills: Arc::new(Unused),
                experience: Arc::new(Unused),
            },
        }
    }
}

impl TestAppStateBuilder {
    // profile

    pub fn with_get_personal_info(mut self, uc: impl GetPersonalInfoUseCase + 'static) -> Self {
        self.profile.get_personal_info = Arc::new(uc);
        self
    }

    pub fn with_get_core_expertise(mut self, uc: impl GetCoreExpertiseUseCase + 'static) -> Self {
        self.profile.get_core_expertise = Arc::new(uc);
        self
    }

    pub fn with_create_personal_info(
        mut self,
        uc: impl CreatePersonalInfoUseCase + 'static,
    ) -> Self {
        self.profile.create_personal_info = Arc::new(uc);
        self
    }

    // site settings

    pub fn with_get_site_settings(mut self, uc: impl GetSiteSettingsUseCase + 'static) -> Self {
        self.site_settings.get = Arc::new(uc);
        self
    }

    pub fn with_create_site_settings(
        mut self,
        uc: impl CreateSiteSettingsUseCase + 'static,
    ) -> Self {
        self.site_settings.create = Arc::new(uc);
        self
    }

    // skills

    pub fn with_list_skills(mut self, uc: impl ListSkillsUseCase + 'static) -> Self {
        self.skill.list_skills = Arc::new(uc);
        self
    }

    pub fn with_skills_by_category(
        mut self,
        uc: impl GetSkillsByCategoryUseCase + 'static,
    ) -> Self {
        self.skill.by_category = Arc::new(uc);
        self
    }

    pub fn with_list_tools(mut self, uc: impl ListToolsUseCase + 'static) -> Self {
        self.skill.list_tools = Arc::new(uc);
        self
    }

    // projects

    pub fn with_list_project_categories(
        mut self,
        uc: impl ListProjectCategoriesUseCase + 'static,
    ) -> Self {
        self.project.list_categories = Arc::new(uc);
        self
    }

    pub fn with_list_projects(mut self, uc: impl ListProjectsUseCase + 'static) -> Self {
        self.project.list = Arc::new(uc);
        self
    }

    pub fn with_get_project(mut self, uc: impl GetProjectUseCase + 'static) -> Self {
        self.project.get_by_slug = Arc::new(uc);
        self
    }

    pub fn with_create_project_category(
        mut self,
        uc: impl CreateProjectCategoryUseCase + 'static,
    ) -> Self {
        self.project.create_category = Arc::new(uc);
        self
    }

    pub fn with_create_project(mut self, uc: impl CreateProjectUseCase + 'static) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_apply_project_action(
        mut self,
        uc: impl ApplyProjectActionUseCase + 'static,
    ) -> Self {
        self.project.apply_action = Arc::new(uc);
        self
    }

    // career

    pub fn with_list_experience(mut self, uc: impl ListExperienceUseCase + 'static) -> Self {
        self.career.list_experience = Arc::new(uc);
        self
    }

    pub fn with_list_education(mut self, uc: impl ListEducationUseCase + 'static) -> Self {
        self.career.list_education = Arc::new(uc);
        self
    }

    pub fn with_list_timeline(mut self, uc: impl ListTimelineUseCase + 'static) -> Self {
        self.career.list_timeline = Arc::new(uc);
        self
    }

    pub fn with_list_testimonials(mut self, uc: impl ListTestimonialsUseCase + 'static) -> Self {
        self.testimonial.list = Arc::new(uc);
        self
    }

    // contact and newsletter

    pub fn with_submit_contact_message(
        mut self,
        uc: impl SubmitContactMessageUseCase + 'static,
    ) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn with_list_contact_messages(
        mut self,
        uc: impl ListContactMessagesUseCase + 'static,
    ) -> Self {
        self.contact.list = Arc::new(uc);
        self
    }

    pub fn with_apply_contact_message_action(
        mut self,
        uc: impl ApplyContactMessageActionUseCase + 'static,
    ) -> Self {
        self.contact.apply_action = Arc::new(uc);
        self
    }

    pub fn with_subscribe(mut self, uc: impl SubscribeUseCase + 'static) -> Self {
        self.newsletter.subscribe = Arc::new(uc);
        self
    }

    pub fn with_apply_subscriber_action(
        mut self,
        uc: impl ApplySubscriberActionUseCase + 'static,
    ) -> Self {
        self.newsletter.apply_action = Arc::new(uc);
        self
    }

    // pages

    pub fn with_homepage(mut self, uc: impl GetHomepageUseCase + 'static) -> Self {
        self.pages.homepage = Arc::new(uc);
        self
    }

    pub fn with_about_page(mut self, uc: impl GetAboutPageUseCase + 'static) -> Self {
        self.pages.about = Arc::new(uc);
        self
    }

    pub fn with_skills_page(mut self, uc: impl GetSkillsPageUseCase + 'static) -> Self {
        self.pages.skills = Arc::new(uc);
        self
    }

    pub fn with_experience_page(mut self, uc: impl GetExperiencePageUseCase + 'static) -> Self {
        self.pages.experience = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            profile: self.profile,
            site_settings: self.site_settings,
            skill: self.skill,
            project: self.project,
            career: self.career,
            testimonial: self.testimonial,
            contact: self.contact,
            newsletter: self.newsletter,
            pages: self.pages,
        })
    }
}
