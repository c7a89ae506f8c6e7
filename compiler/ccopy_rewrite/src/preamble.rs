//! Tool metadata prepended to every output unit.

use std::fmt;

/// `#define AUTHOR ...` / `#define PROGRAM ...` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preamble {
    pub author: String,
    pub program: String,
}

impl Preamble {
    pub const DEFAULT_AUTHOR: &'static str = "ccopy";
    pub const DEFAULT_PROGRAM: &'static str = "ccopy";

    pub fn new(author: impl Into<String>, program: impl Into<String>) -> Self {
        Preamble {
            author: author.into(),
            program: program.into(),
        }
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }
}

impl Default for Preamble {
    fn default() -> Self {
        Preamble::new(Self::DEFAULT_AUTHOR, Self::DEFAULT_PROGRAM)
    }
}

impl fmt::Display for Preamble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#define AUTHOR {}", self.author)?;
        writeln!(f, "#define PROGRAM {}", self.program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_preamble() {
        assert_eq!(
            Preamble::default().to_string(),
            "#define AUTHOR ccopy\n#define PROGRAM ccopy\n"
        );
    }

    #[test]
    fn test_custom_author() {
        let preamble = Preamble::default().with_author("majerv");
        assert_eq!(
            preamble.to_string(),
            "#define AUTHOR majerv\n#define PROGRAM ccopy\n"
        );
    }
}
