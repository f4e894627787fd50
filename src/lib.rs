pub mod config;
pub mod enums;
pub mod error;
pub mod db;
pub mod providers;
pub mod services;
pub mod api;
pub mod bot;
pub mod notifier;

pub use config::Config;
pub use enums::{ Platform, TokenWindow };
pub use error::{ AppError, Result };
