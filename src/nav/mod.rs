//! Role-filtered navigation menu.
//!
//! The menu is a static tree in which every node lists the roles allowed
//! to see it. Filtering prunes the tree for one role; it decides what is
//! displayed and is not an access-control check.
//!
//! # Example
//!
//! ```
//! use academy::nav::*;
//!
//! let menu = filter_for_role(&default_menu(), Role::Instructor);
//! assert!(menu.iter().any(|item| item.id == "attendance"));
//! assert!(!menu.iter().any(|item| item.id == "billing"));
//! ```

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::AcademyError;

/// Back-office user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Secretary,
    Instructor,
}

impl Role {
    pub const ALL: &'static [Role] = &[Role::Admin, Role::Secretary, Role::Instructor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Secretary => "secretary",
            Self::Instructor => "instructor",
        }
    }
}

impl FromStr for Role {
    type Err = AcademyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AcademyError::Config(format!("unknown role '{s}'")))
    }
}

/// A menu entry. Entries without a path are groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub path: Option<String>,
    pub roles: Vec<Role>,
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// A leaf entry pointing at `path`.
    pub fn link(
        id: impl Into<String>,
        label: impl Into<String>,
        path: impl Into<String>,
        roles: &[Role],
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: Some(path.into()),
            roles: roles.to_vec(),
            children: Vec::new(),
        }
    }

    /// A group of entries.
    pub fn group(
        id: impl Into<String>,
        label: impl Into<String>,
        roles: &[Role],
        children: Vec<NavItem>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            path: None,
            roles: roles.to_vec(),
            children,
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_group(&self) -> bool {
        self.path.is_none()
    }
}

/// The back-office menu.
pub fn default_menu() -> Vec<NavItem> {
    use Role::*;

    vec![
        NavItem::link("dashboard", "Dashboard", "/", &[Admin, Secretary, Instructor]),
        NavItem::link("students", "Students", "/students", &[Admin, Secretary]),
        NavItem::link("courses", "Courses", "/courses", &[Admin, Secretary, Instructor]),
        NavItem::link("schedule", "Schedule", "/schedule", &[Admin, Secretary, Instructor]),
        NavItem::link("attendance", "Attendance", "/attendance", &[Admin, Instructor]),
        NavItem::group(
            "billing",
            "Billing",
            &[Admin, Secretary],
            vec![
                NavItem::link("receipts", "Receipts", "/billing/receipts", &[Admin, Secretary]),
                NavItem::link("reports", "Reports", "/billing/reports", &[Admin]),
            ],
        ),
        NavItem::link("staff", "Staff", "/staff", &[Admin]),
        NavItem::link("settings", "Settings", "/settings", &[Admin, Secretary, Instructor]),
    ]
}

/// Prune `items` down to the entries `role` may see.
///
/// A node is kept when its own role set contains `role`; its children are
/// pruned the same way. Groups left without children are dropped.
pub fn filter_for_role(items: &[NavItem], role: Role) -> Vec<NavItem> {
    items
        .iter()
        .filter(|item| item.allows(role))
        .filter_map(|item| {
            let children = filter_for_role(&item.children, role);
            if item.is_group() && children.is_empty() {
                return None;
            }
            Some(NavItem {
                children,
                ..item.clone()
            })
        })
        .collect()
}

/// Whether `role` sees an entry for `path` anywhere in `items`.
pub fn is_visible(items: &[NavItem], role: Role, path: &str) -> bool {
    filter_for_role(items, role)
        .iter()
        .any(|item| contains_path(item, path))
}

fn contains_path(item: &NavItem, path: &str) -> bool {
    item.path.as_deref() == Some(path) || item.children.iter().any(|c| contains_path(c, path))
}

/// One line per entry, indented two spaces per level. Links show their path.
pub fn outline(items: &[NavItem]) -> String {
    let mut out = String::new();
    write_outline(items, 0, &mut out);
    out
}

fn write_outline(items: &[NavItem], depth: usize, out: &mut String) {
    for item in items {
        let indent = "  ".repeat(depth);
        match &item.path {
            Some(path) => {
                let _ = writeln!(out, "{indent}{} ({path})", item.label);
            }
            None => {
                let _ = writeln!(out, "{indent}{}", item.label);
            }
        }
        write_outline(&item.children, depth + 1, out);
    }
}
