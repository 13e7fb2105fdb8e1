use std::fmt;

/// A user's free-text need, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Need(String);

impl Need {
    pub fn parse(raw: &str) -> Option<Need> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Need(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Need {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
