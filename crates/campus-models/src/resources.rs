//! Protected resources and navigation metadata.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a protected route, page, or action (e.g. `"finance"`,
/// `"grades:record"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource(String);

impl Resource {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Resource {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Resource {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for Resource {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Resource {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A sidebar entry: the resource it leads to plus display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub resource: Resource,
    pub label: String,
    pub icon: String,
    pub href: String,
}

impl NavItem {
    /// Builds an item whose href is `/<resource>`.
    pub fn new(resource: impl Into<Resource>, label: &str, icon: &str) -> Self {
        let resource = resource.into();
        let href = format!("/{}", resource);
        Self {
            resource,
            label: label.to_string(),
            icon: icon.to_string(),
            href,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_item_href() {
        let item = NavItem::new("finance", "Finance", "credit-card");
        assert_eq!(item.href, "/finance");
        assert_eq!(item.resource.as_str(), "finance");
    }

    #[test]
    fn test_resource_borrow_lookup() {
        let set: HashSet<Resource> = [Resource::from("hr")].into_iter().collect();
        assert!(set.contains("hr"));
        assert!(!set.contains("assets"));
    }
}
