//! Modal input forms used to collect arguments for list operations.

/// Which operation a form collects input for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormKind {
    Append,
    Insert,
    Remove,
    Search,
}

impl FormKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Append => " add a song to the end ",
            Self::Insert => " insert a song at position ",
            Self::Remove => " remove a song by title ",
            Self::Search => " search for a song ",
        }
    }

    fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Append => &["Title", "Artist", "Duration (s)"],
            Self::Insert => &["Position", "Title", "Artist", "Duration (s)"],
            Self::Remove => &["Title"],
            Self::Search => &["Part of title"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
}

/// A form being filled in; `focus` is the field receiving keystrokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub kind: FormKind,
    pub fields: Vec<FormField>,
    pub focus: usize,
}

impl Form {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            fields: kind
                .labels()
                .iter()
                .map(|&label| FormField {
                    label,
                    value: String::new(),
                })
                .collect(),
            focus: 0,
        }
    }

    /// Build a form with the first field pre-filled.
    pub fn with_first_value(kind: FormKind, value: &str) -> Self {
        let mut form = Self::new(kind);
        if let Some(field) = form.fields.first_mut() {
            field.value = value.to_string();
        }
        form
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    /// Move focus forward. Returns `false` when already on the last field.
    pub fn advance(&mut self) -> bool {
        if self.focus + 1 < self.fields.len() {
            self.focus += 1;
            true
        } else {
            false
        }
    }

    /// Move focus back one field, staying on the first.
    pub fn retreat(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    /// Trimmed value of field `idx`.
    pub fn value(&self, idx: usize) -> &str {
        self.fields.get(idx).map(|f| f.value.trim()).unwrap_or("")
    }
}
