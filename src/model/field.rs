use std::fmt;

/// Identifies a single form field.
///
/// Keys the validation [`ErrorMap`](super::ErrorMap) and names the target of
/// [`FormState::update_field`](super::FormState::update_field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Age,
    Country,
    Interests,
    Message,
}

impl Field {
    /// Display label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Age => "Age",
            Self::Country => "Country",
            Self::Interests => "Interests",
            Self::Message => "Message",
        }
    }

    /// Whether the field can block submission.
    ///
    /// Age only blocks while advanced fields are shown; it is still marked
    /// required so the form renders it as such whenever it is visible.
    pub fn required(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Age)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Age => "age",
            Self::Country => "country",
            Self::Interests => "interests",
            Self::Message => "message",
        };
        write!(f, "{name}")
    }
}
