pub const APP_NAME: &str = "Bulletin";

// Limits
pub const MAX_MESSAGE_LENGTH: usize = 5000;
pub const MAX_AUTHOR_LENGTH: usize = 32;
pub const MAX_USERNAME_LENGTH: usize = 32;
pub const MIN_USERNAME_LENGTH: usize = 2;

pub const MESSAGE_PAGE_SIZE: i64 = 50;
pub const MAX_MESSAGE_PAGE_SIZE: i64 = 100;

// Reactions
pub const ALLOWED_REACTION_TYPES: &[&str] = &["like", "dislike"];
