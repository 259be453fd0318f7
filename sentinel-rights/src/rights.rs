//! # Rights catalog
//!
//! Defines the fixed catalog of administrable rights.
//! Every rights-administration flow enumerates rights in catalog order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A right a user may hold on the platform.
///
/// The catalog is closed: these five rights are the only administrable
/// permissions. Catalog order is significant for presentation only —
/// menus and diffs always enumerate rights in this order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Right {
    /// Administer the rights of other users.
    AdminRights,

    /// Administer user accounts.
    AdminUsers,

    /// Administer sensor rules.
    AdminRules,

    /// Administer sensor nodes.
    AdminSensors,

    /// View sensor reports.
    ViewReports,
}

impl Right {
    /// Get the string representation of the right.
    pub fn as_str(&self) -> &'static str {
        match self {
            Right::AdminRights => "AdminRights",
            Right::AdminUsers => "AdminUsers",
            Right::AdminRules => "AdminRules",
            Right::AdminSensors => "AdminSensors",
            Right::ViewReports => "ViewReports",
        }
    }

    /// Parse a right from its string representation (case-insensitive).
    ///
    /// # Returns
    ///
    /// `Some(Right)` if valid, `None` otherwise
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "adminrights" => Some(Right::AdminRights),
            "adminusers" => Some(Right::AdminUsers),
            "adminrules" => Some(Right::AdminRules),
            "adminsensors" => Some(Right::AdminSensors),
            "viewreports" => Some(Right::ViewReports),
            _ => None,
        }
    }

    /// Get the full catalog, in presentation order.
    pub fn all() -> Vec<Self> {
        vec![
            Right::AdminRights,
            Right::AdminUsers,
            Right::AdminRules,
            Right::AdminSensors,
            Right::ViewReports,
        ]
    }
}

impl fmt::Display for Right {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
