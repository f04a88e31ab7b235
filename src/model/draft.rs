use super::field::Field;

/// Countries offered by the registration form.
pub const COUNTRIES: [&str; 6] = ["USA", "Canada", "UK", "Australia", "India", "Germany"];

/// Interests offered by the registration form.
pub const INTERESTS: [&str; 6] = ["Technology", "Sports", "Music", "Travel", "Reading", "Gaming"];

/// The in-progress, not-yet-submitted form data.
///
/// `age` stays raw text until the validator looks at it. `interests` holds
/// values from [`INTERESTS`] in the order they were first selected; it can
/// never contain a duplicate or an unknown value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub age: String,
    pub country: String,
    pub interests: Vec<String>,
    pub message: String,
}

impl Draft {
    /// Returns the current text of a scalar field.
    ///
    /// [`Field::Interests`] is not a scalar and always returns the empty
    /// string.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Age => &self.age,
            Field::Country => &self.country,
            Field::Message => &self.message,
            Field::Interests => "",
        }
    }

    /// Replaces the text of a scalar field.
    ///
    /// [`Field::Interests`] is a no-op; interests change only through
    /// [`toggle_interest`](Self::toggle_interest).
    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Age => &mut self.age,
            Field::Country => &mut self.country,
            Field::Message => &mut self.message,
            Field::Interests => return,
        };
        *slot = value.to_string();
    }

    /// Inserts or removes an interest based on the explicit `include` signal.
    ///
    /// Values outside [`INTERESTS`] are ignored on include, and including an
    /// already-present value inserts nothing.
    pub fn toggle_interest(&mut self, interest: &str, include: bool) {
        if include {
            if INTERESTS.contains(&interest) && !self.has_interest(interest) {
                self.interests.push(interest.to_string());
            }
        } else {
            self.interests.retain(|i| i != interest);
        }
    }

    /// `true` if the interest is currently selected.
    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.iter().any(|i| i == interest)
    }
}
