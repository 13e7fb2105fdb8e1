pub mod api;
pub mod config;
pub mod generation;
pub mod links;
pub mod need;
pub mod prompt;
pub mod variants;
