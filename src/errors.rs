use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    NotEnoughArgs,
    NotFound(String),
    ParseCommand(String),
    Regex(regex::Error),
    Validation(String),
}

impl AppError {
    /// Canonical one-line reply for failures the loop answers itself.
    /// Variants returning `None` are unanticipated and must propagate.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            AppError::NotFound(_) => Some("Contact not found."),
            AppError::Validation(_) => Some("Give me the correct name and phone please."),
            AppError::NotEnoughArgs => Some("Provide enough arguments."),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::NotEnoughArgs => {
                write!(f, "Not enough arguments for this command")
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid validation pattern: {}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}
