pub mod domain;
pub mod pages_use_cases;
pub mod ports;
pub mod services;
