//! Capability granted to a board link holder.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role carried by a board access link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkRole {
    /// Read-only access.
    Viewer,
    /// Read-write access.
    Editor,
}

impl LinkRole {
    /// Parse a stored role value. Only exact lowercase names are accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "viewer" => Some(Self::Viewer),
            "editor" => Some(Self::Editor),
            _ => None,
        }
    }

    /// Normalize a requested role: anything but an exact `viewer` or
    /// `editor` becomes `viewer`.
    pub fn normalize(requested: Option<&str>) -> Self {
        requested.and_then(Self::parse).unwrap_or(Self::Viewer)
    }

    /// The stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Editor => "editor",
        }
    }
}

impl fmt::Display for LinkRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
