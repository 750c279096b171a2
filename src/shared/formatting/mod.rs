mod date_range;
mod slug;
mod technologies;

pub use date_range::format_date_range;
pub use slug::{normalize_slug, slugify};
pub use technologies::{join_technologies, split_technologies};
