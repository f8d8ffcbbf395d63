pub mod backend;
pub mod config;
pub mod dashboard;
pub mod endpoints;
pub mod error;
pub mod global;
pub mod html;
pub mod http;
pub mod landing;
pub mod notifier;
pub mod types;
