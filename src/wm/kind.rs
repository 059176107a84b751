//! Window kinds
//!
//! Desktop icons and start-menu items name a window by a string type
//! identifier. The identifier is parsed into a closed set of kinds; anything
//! unrecognized is kept as `Unknown` so it still gets a window of its own.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WindowKind {
    About,
    Projects,
    Skills,
    Contact,
    Pinball,
    Winamp,
    /// Unrecognized type identifier (opened with the default configuration)
    Unknown(String),
}

impl WindowKind {
    pub fn parse(type_id: &str) -> Self {
        match type_id {
            "about" => Self::About,
            "projects" => Self::Projects,
            "skills" => Self::Skills,
            "contact" => Self::Contact,
            "pinball" => Self::Pinball,
            "winamp" => Self::Winamp,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The type identifier this kind was opened with
    pub fn as_str(&self) -> &str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
            Self::Pinball => "pinball",
            Self::Winamp => "winamp",
            Self::Unknown(id) => id,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<&str> for WindowKind {
    fn from(type_id: &str) -> Self {
        Self::parse(type_id)
    }
}

impl From<String> for WindowKind {
    fn from(type_id: String) -> Self {
        Self::parse(&type_id)
    }
}

impl From<WindowKind> for String {
    fn from(kind: WindowKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_identifier_is_preserved() {
        let kind = WindowKind::parse("minesweeper");
        assert_eq!(kind, WindowKind::Unknown("minesweeper".into()));
        assert_eq!(kind.as_str(), "minesweeper");
        assert!(!kind.is_known());
    }

    #[test]
    fn serializes_as_type_identifier() {
        let json = serde_json::to_string(&WindowKind::Projects).unwrap();
        assert_eq!(json, "\"projects\"");
        let kind: WindowKind = serde_json::from_str("\"contact\"").unwrap();
        assert_eq!(kind, WindowKind::Contact);
    }
}
