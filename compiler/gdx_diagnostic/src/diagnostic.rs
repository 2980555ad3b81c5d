use std::fmt;

/// A user-facing error message anchored to a source line.
///
/// `location` narrows down where on the line the problem is (`at end`,
/// `at 'x'`); it is empty when the line alone is all there is to say.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Diagnostic {
    pub line: u32,
    pub location: String,
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic with no location detail.
    #[cold]
    pub fn error(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            line,
            location: String::new(),
            message: message.into(),
        }
    }

    /// Attach a location detail such as `at end`.
    #[must_use]
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// The `Error<where>` label, without colour.
    pub fn label(&self) -> String {
        if self.location.is_empty() {
            "Error".to_owned()
        } else {
            format!("Error {}", self.location)
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {}: {}", self.line, self.label(), self.message)
    }
}
