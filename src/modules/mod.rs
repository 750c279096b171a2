pub mod career;
pub mod contact;
pub mod management;
pub mod newsletter;
pub mod pages;
pub mod profile;
pub mod project;
pub mod site_settings;
pub mod skill;
pub mod testimonial;
