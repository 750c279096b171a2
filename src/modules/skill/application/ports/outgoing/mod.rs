mod skill_query;

pub use skill_query::{SkillQuery, SkillQueryError};
