pub mod newsletter_subscribers;
