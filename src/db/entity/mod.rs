pub mod keyword;
pub mod detected_token;
pub mod notified_token;
pub mod platform_preference;

pub use keyword::Entity as Keyword;
pub use detected_token::Entity as DetectedToken;
pub use notified_token::Entity as NotifiedToken;
pub use platform_preference::Entity as PlatformPreference;
