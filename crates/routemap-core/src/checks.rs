//! Diagnostic messages for routemap checks.
//!
//! [`CheckMessage`] is the common currency of route-table checks and of the
//! deprecation channel: each message carries a severity, a human-readable
//! message, an optional hint, the object it relates to, and a stable id that
//! tooling can filter on.
//!
//! ```
//! use routemap_core::checks::{CheckLevel, CheckMessage};
//!
//! let msg = CheckMessage::warning(
//!     "Route name 'posts' is declared twice.",
//!     Some("Rename one of the routes."),
//!     Some("posts"),
//!     Some("routes.W001"),
//! );
//! assert_eq!(msg.level, CheckLevel::Warning);
//! assert!(msg.is_serious());
//! ```

/// Severity level for a check message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckLevel {
    /// Debugging information.
    Debug = 0,
    /// Informational message.
    Info = 1,
    /// A potential problem.
    Warning = 2,
    /// A definite problem that should be fixed.
    Error = 3,
    /// A critical error that prevents the route table from being used.
    Critical = 4,
}

impl std::fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A diagnostic message produced by a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckMessage {
    /// The severity level.
    pub level: CheckLevel,
    /// The human-readable message describing the issue.
    pub msg: String,
    /// An optional hint on how to fix the issue.
    pub hint: Option<String>,
    /// The object (route name, setting, etc.) that has the issue.
    pub obj: Option<String>,
    /// A unique identifier for this check message (e.g. "routes.W001").
    pub id: Option<String>,
}

impl CheckMessage {
    /// Creates a new `CheckMessage` with the given level and details.
    pub fn new(
        level: CheckLevel,
        msg: impl Into<String>,
        hint: Option<&str>,
        obj: Option<&str>,
        id: Option<&str>,
    ) -> Self {
        Self {
            level,
            msg: msg.into(),
            hint: hint.map(String::from),
            obj: obj.map(String::from),
            id: id.map(String::from),
        }
    }

    /// Creates an info-level message.
    pub fn info(msg: impl Into<String>, hint: Option<&str>, obj: Option<&str>, id: Option<&str>) -> Self {
        Self::new(CheckLevel::Info, msg, hint, obj, id)
    }

    /// Creates a warning-level message.
    pub fn warning(msg: impl Into<String>, hint: Option<&str>, obj: Option<&str>, id: Option<&str>) -> Self {
        Self::new(CheckLevel::Warning, msg, hint, obj, id)
    }

    /// Creates an error-level message.
    pub fn error(msg: impl Into<String>, hint: Option<&str>, obj: Option<&str>, id: Option<&str>) -> Self {
        Self::new(CheckLevel::Error, msg, hint, obj, id)
    }

    /// Returns `true` if this is a warning or higher severity.
    pub fn is_serious(&self) -> bool {
        self.level >= CheckLevel::Warning
    }
}

impl std::fmt::Display for CheckMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref id) = self.id {
            write!(f, "({id}) ")?;
        }
        write!(f, "{}: {}", self.level, self.msg)?;
        if let Some(ref hint) = self.hint {
            write!(f, "\n\tHINT: {hint}")?;
        }
        if let Some(ref obj) = self.obj {
            write!(f, "\n\tObject: {obj}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_level_ordering() {
        assert!(CheckLevel::Debug < CheckLevel::Info);
        assert!(CheckLevel::Info < CheckLevel::Warning);
        assert!(CheckLevel::Warning < CheckLevel::Error);
        assert!(CheckLevel::Error < CheckLevel::Critical);
    }

    #[test]
    fn test_check_level_display() {
        assert_eq!(CheckLevel::Warning.to_string(), "WARNING");
        assert_eq!(CheckLevel::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn test_check_message_is_serious() {
        assert!(!CheckMessage::info("", None, None, None).is_serious());
        assert!(CheckMessage::warning("", None, None, None).is_serious());
        assert!(CheckMessage::error("", None, None, None).is_serious());
    }

    #[test]
    fn test_check_message_display() {
        let m = CheckMessage::warning(
            "Bad path",
            Some("Start it with '/'"),
            Some("posts"),
            Some("routes.W002"),
        );
        assert_eq!(
            m.to_string(),
            "(routes.W002) WARNING: Bad path\n\tHINT: Start it with '/'\n\tObject: posts"
        );
    }

    #[test]
    fn test_check_message_display_minimal() {
        let m = CheckMessage::info("Just so you know", None, None, None);
        assert_eq!(m.to_string(), "INFO: Just so you know");
    }
}
