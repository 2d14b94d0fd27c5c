use crate::constants::*;

pub fn validate_username(username: &str) -> Result<(), String> {
    if username.len() < MIN_USERNAME_LENGTH {
        return Err(format!(
            "Username must be at least {} characters",
            MIN_USERNAME_LENGTH
        ));
    }
    if username.len() > MAX_USERNAME_LENGTH {
        return Err(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_LENGTH
        ));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(
            "Username can only contain letters, numbers, hyphens, and underscores".into(),
        );
    }
    Ok(())
}

pub fn validate_author(author: &str) -> Result<(), String> {
    let trimmed = author.trim();
    if trimmed.is_empty() {
        return Err("Author is required".into());
    }
    if trimmed.len() > MAX_AUTHOR_LENGTH {
        return Err(format!(
            "Author must be at most {} characters",
            MAX_AUTHOR_LENGTH
        ));
    }
    Ok(())
}

pub fn validate_message_content(content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err("Message content is required".into());
    }
    if content.len() > MAX_MESSAGE_LENGTH {
        return Err(format!(
            "Message must be at most {} characters",
            MAX_MESSAGE_LENGTH
        ));
    }
    Ok(())
}

pub fn is_allowed_reaction(reaction_type: &str) -> bool {
    ALLOWED_REACTION_TYPES.contains(&reaction_type)
}
