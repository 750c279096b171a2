pub mod skills;
pub mod tools;
