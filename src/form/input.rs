/// Identifies one of the four signup fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Password,
    Age,
}

impl FieldId {
    /// All fields in display and focus order.
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Password,
        FieldId::Age,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
            FieldId::Age => "Age",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldId::Name => "Your full name",
            FieldId::Email => "you@example.com",
            FieldId::Password => "At least 6 characters",
            FieldId::Age => "Your age",
        }
    }

    /// Whether a typed character is accepted by this field's input control.
    ///
    /// Only the age control filters keystrokes, and only down to characters
    /// that can appear in a number. `SignupForm::set_field` never filters.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            FieldId::Age => ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E'),
            _ => !ch.is_control(),
        }
    }

    pub fn next(self) -> FieldId {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> FieldId {
        let index = self.index();
        if index == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[index - 1]
        }
    }

    fn index(self) -> usize {
        match self {
            FieldId::Name => 0,
            FieldId::Email => 1,
            FieldId::Password => 2,
            FieldId::Age => 3,
        }
    }
}

/// Raw values as typed by the user. Age stays text until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: String,
}

impl FormInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            age: age.into(),
        }
    }

    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::Age => &self.age,
        }
    }

    pub fn set(&mut self, field: FieldId, value: String) {
        let slot = match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
            FieldId::Age => &mut self.age,
        };
        *slot = value;
    }

    /// True when any field is empty or whitespace only.
    pub fn has_blank_field(&self) -> bool {
        FieldId::ALL
            .iter()
            .any(|field| self.get(*field).trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        FieldId::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}
