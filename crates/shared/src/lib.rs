pub mod constants;
pub mod moderation;
pub mod validation;
