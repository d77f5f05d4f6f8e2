//! Task-name patterns
//!
//! A pattern is a template string with exactly one placeholder in angle
//! brackets, e.g. `helmPackage<Chart>Chart`. It works in both directions:
//! extract the embedded key from a candidate name, or generate the canonical
//! name for a key.

use crate::error::{CoreError, Result};

/// A compiled name pattern: literal prefix + placeholder + literal suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePattern {
    prefix: String,
    suffix: String,
    placeholder: String,
}

impl NamePattern {
    /// Parse a template string into a pattern
    ///
    /// Fails if the template contains zero or more than one `<...>`
    /// placeholder. This is a programmer error and aborts configuration.
    pub fn parse(template: &str) -> Result<Self> {
        let malformed = |reason: &str| CoreError::MalformedPattern {
            template: template.to_string(),
            reason: reason.to_string(),
        };

        let open = template.find('<').ok_or_else(|| malformed("expected exactly one '<Placeholder>'"))?;
        if template[..open].contains('>') {
            return Err(malformed("'>' before the placeholder"));
        }
        let close = template[open..]
            .find('>')
            .map(|i| open + i)
            .ok_or_else(|| malformed("unclosed placeholder"))?;
        if template[open + 1..close].contains('<') {
            return Err(malformed("'<' inside the placeholder"));
        }

        let rest = &template[close + 1..];
        if rest.contains('<') || rest.contains('>') {
            return Err(malformed("expected exactly one '<Placeholder>'"));
        }

        Ok(Self {
            prefix: template[..open].to_string(),
            suffix: rest.to_string(),
            placeholder: template[open + 1..close].to_string(),
        })
    }

    /// Match a candidate against the whole pattern, returning the captured key
    ///
    /// Returns `None` (never an error) unless `candidate` starts with the
    /// prefix, ends with the suffix, and the middle section is non-empty.
    pub fn match_entire<'a>(&self, candidate: &'a str) -> Option<&'a str> {
        let middle = candidate
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())?;
        if middle.is_empty() { None } else { Some(middle) }
    }

    /// Generate the canonical name for a key
    pub fn generate(&self, key: &str) -> String {
        format!("{}{}{}", self.prefix, key, self.suffix)
    }

    /// The placeholder identifier from the template (e.g. `Chart`)
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The literal prefix
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The literal suffix
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl std::fmt::Display for NamePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}<{}>{}", self.prefix, self.placeholder, self.suffix)
    }
}
