//! Grouped permission selection with tri-state group checkboxes

use std::collections::{BTreeMap, BTreeSet};

use crate::types::Permission;

/// Selection state of a permission group, derived from its members
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
    None,
    Some,
    All,
}

impl GroupState {
    pub fn checked(&self) -> bool {
        matches!(self, GroupState::All)
    }

    pub fn indeterminate(&self) -> bool {
        matches!(self, GroupState::Some)
    }
}

/// Group a permission belongs to: the explicit group, else the name prefix
/// before the first `.`, `-` or space (`posts.create` -> `posts`).
pub fn group_of(permission: &Permission) -> String {
    if let Some(group) = permission.group.as_deref().filter(|g| !g.trim().is_empty()) {
        return group.to_string();
    }
    permission
        .name
        .split(['.', '-', ' '])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(permission.name.as_str())
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGroup {
    pub name: String,
    pub permissions: Vec<Permission>,
}

impl PermissionGroup {
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.permissions.iter().map(|p| p.id)
    }
}

/// Groups sorted by name; members keep their backend order
pub fn group_permissions(permissions: &[Permission]) -> Vec<PermissionGroup> {
    let mut groups: BTreeMap<String, Vec<Permission>> = BTreeMap::new();
    for p in permissions {
        groups.entry(group_of(p)).or_default().push(p.clone());
    }
    groups
        .into_iter()
        .map(|(name, permissions)| PermissionGroup { name, permissions })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSelection {
    selected: BTreeSet<u64>,
}

impl PermissionSelection {
    pub fn new(selected: impl IntoIterator<Item = u64>) -> Self {
        Self {
            selected: selected.into_iter().collect(),
        }
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected.contains(&id)
    }

    pub fn toggle(&mut self, id: u64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn state(&self, group: &PermissionGroup) -> GroupState {
        let total = group.permissions.len();
        let chosen = group.ids().filter(|id| self.selected.contains(id)).count();
        match chosen {
            0 => GroupState::None,
            n if n == total => GroupState::All,
            _ => GroupState::Some,
        }
    }

    /// Select every member, or clear them all when all are already selected
    pub fn toggle_group(&mut self, group: &PermissionGroup) {
        if self.state(group) == GroupState::All {
            for id in group.ids() {
                self.selected.remove(&id);
            }
        } else {
            self.selected.extend(group.ids());
        }
    }

    pub fn ids(&self) -> Vec<u64> {
        self.selected.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(id: u64, name: &str) -> Permission {
        Permission {
            id,
            name: name.into(),
            group: None,
        }
    }

    fn catalog() -> Vec<Permission> {
        vec![
            perm(1, "posts.view"),
            perm(2, "posts.create"),
            perm(3, "posts.delete"),
            perm(4, "users-manage"),
            Permission {
                id: 5,
                name: "publish".into(),
                group: Some("posts".into()),
            },
        ]
    }

    #[test]
    fn test_grouping() {
        let groups = group_permissions(&catalog());
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["posts", "users"]);
        assert_eq!(groups[0].permissions.len(), 4);
        assert_eq!(group_of(&perm(9, "dashboard")), "dashboard");
    }

    #[test]
    fn test_group_state_transitions() {
        let groups = group_permissions(&catalog());
        let posts = &groups[0];
        let mut selection = PermissionSelection::default();
        assert_eq!(selection.state(posts), GroupState::None);

        selection.toggle(2);
        assert_eq!(selection.state(posts), GroupState::Some);
        assert!(selection.state(posts).indeterminate());

        selection.toggle_group(posts);
        assert_eq!(selection.state(posts), GroupState::All);
        assert!(selection.state(posts).checked());

        selection.toggle_group(posts);
        assert_eq!(selection.state(posts), GroupState::None);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_group_toggle_leaves_other_groups() {
        let groups = group_permissions(&catalog());
        let mut selection = PermissionSelection::new([4]);
        selection.toggle_group(&groups[0]);
        assert_eq!(selection.ids(), vec![1, 2, 3, 4, 5]);
        selection.toggle_group(&groups[0]);
        assert_eq!(selection.ids(), vec![4]);
        assert_eq!(selection.state(&groups[1]), GroupState::All);
    }

    #[test]
    fn test_toggle_single() {
        let mut selection = PermissionSelection::new([1]);
        selection.toggle(1);
        assert!(!selection.is_selected(1));
        selection.toggle(1);
        assert!(selection.is_selected(1));
        assert_eq!(selection.len(), 1);
    }
}
