use crate::modules::about::application::ports::outgoing::AboutFields;

pub const NAME_MAX_CHARS: usize = 100;
pub const BIO_MAX_CHARS: usize = 2000;

//
// ──────────────────────────────────────────────────────────
// About Command (shared by create and update)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct AboutCommand {
    name: String,
    bio: String,
    photo: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AboutCommandError {
    #[error("Name, bio, and photo are required")]
    MissingFields,

    #[error("Validation failed: {0:?}")]
    Invalid(Vec<String>),
}

impl AboutCommand {
    pub fn new(
        name: Option<String>,
        bio: Option<String>,
        photo: Option<String>,
    ) -> Result<Self, AboutCommandError> {
        let name = required(name)?;
        let bio = required(bio)?;
        let photo = required(photo)?;

        let mut errors = Vec::new();
        if name.chars().count() > NAME_MAX_CHARS {
            errors.push(format!("name must be at most {} characters", NAME_MAX_CHARS));
        }
        if bio.chars().count() > BIO_MAX_CHARS {
            errors.push(format!("bio must be at most {} characters", BIO_MAX_CHARS));
        }
        if !errors.is_empty() {
            return Err(AboutCommandError::Invalid(errors));
        }

        Ok(Self { name, bio, photo })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn photo(&self) -> &str {
        &self.photo
    }

    pub fn into_fields(self) -> AboutFields {
        AboutFields {
            name: self.name,
            bio: self.bio,
            photo: self.photo,
        }
    }
}

fn required(value: Option<String>) -> Result<String, AboutCommandError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AboutCommandError::MissingFields),
    }
}
