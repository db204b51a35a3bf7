pub mod domain;
pub mod favorite_use_cases;
pub mod ports;
pub mod services;
