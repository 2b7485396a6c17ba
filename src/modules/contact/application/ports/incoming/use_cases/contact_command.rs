use crate::modules::contact::application::domain::entities::NewMessage;

#[derive(Debug, Clone, PartialEq)]
pub struct ContactCommand {
    name: String,
    email: String,
    message: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContactCommandError {
    #[error("All fields are required")]
    MissingFields,
}

impl ContactCommand {
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Result<Self, ContactCommandError> {
        let present = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ContactCommandError::MissingFields)
        };

        Ok(Self {
            name: present(name)?,
            email: present(email)?,
            message: present(message)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First 50 characters of the message, for log lines.
    pub fn preview(&self) -> String {
        let head: String = self.message.chars().take(50).collect();
        format!("{}...", head)
    }

    pub fn into_new_message(self) -> NewMessage {
        NewMessage {
            name: self.name,
            email: self.email,
            message: self.message,
        }
    }
}
