/// A saved external profile link.
///
/// Whitespace is trimmed; no format validation is applied. An empty value
/// means no profile is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProfileUrl(String);

impl ProfileUrl {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let raw = value.into();
        Self(raw.trim().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The link to display, if one is saved.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        if self.0.is_empty() {
            None
        } else {
            Some(&self.0)
        }
    }
}

impl std::fmt::Display for ProfileUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
