//! The resource an access link is bound to.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use flowboard_core::types::{BoardId, BusinessUnitId};

/// Which kind of resource (and which link table) a link belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkScope {
    /// A board link, stored in `board_access_links`.
    Board,
    /// A business unit link, stored in `bu_access_links`.
    BusinessUnit,
}

impl LinkScope {
    /// Stable string name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::BusinessUnit => "business_unit",
        }
    }
}

impl fmt::Display for LinkScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed reference to a shareable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", content = "id", rename_all = "snake_case")]
pub enum ResourceRef {
    /// A board.
    Board(BoardId),
    /// A business unit.
    BusinessUnit(BusinessUnitId),
}

impl ResourceRef {
    /// Build a reference from a scope and raw id.
    pub fn from_parts(scope: LinkScope, id: Uuid) -> Self {
        match scope {
            LinkScope::Board => Self::Board(BoardId::from_uuid(id)),
            LinkScope::BusinessUnit => Self::BusinessUnit(BusinessUnitId::from_uuid(id)),
        }
    }

    /// The link scope for this resource kind.
    pub fn scope(&self) -> LinkScope {
        match self {
            Self::Board(_) => LinkScope::Board,
            Self::BusinessUnit(_) => LinkScope::BusinessUnit,
        }
    }

    /// The raw resource id.
    pub fn uuid(&self) -> Uuid {
        match self {
            Self::Board(id) => id.into_uuid(),
            Self::BusinessUnit(id) => id.into_uuid(),
        }
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scope(), self.uuid())
    }
}
