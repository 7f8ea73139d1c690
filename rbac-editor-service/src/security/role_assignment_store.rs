use rbac_editor_api::extension::Extension;
use rbac_editor_domain::security::RoleAssignment;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// RoleAssignmentCollection 有序的角色分配集合，以 `metadata.name` 为键
///
/// 每个操作都返回新的集合，原集合保持不变。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleAssignmentCollection {
    items: Vec<RoleAssignment>,
}

impl RoleAssignmentCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用给定的集合整体覆盖，不做合并
    pub fn load(seed: Vec<RoleAssignment>) -> Self {
        debug!("Loaded {} role assignments", seed.len());
        Self { items: seed }
    }

    /// 追加到末尾，不检查名称是否重复
    pub fn add(&self, assignment: RoleAssignment) -> Self {
        debug!("Adding role assignment {}", assignment.name());
        let mut items = self.items.clone();
        items.push(assignment);
        Self { items }
    }

    /// 原位替换第一个同名元素；没有同名元素时原样返回
    pub fn update(&self, assignment: RoleAssignment) -> Self {
        let mut items = self.items.clone();
        match items.iter().position(|a| a.name() == assignment.name()) {
            Some(index) => items[index] = assignment,
            None => debug!("No role assignment named {} to update", assignment.name()),
        }
        Self { items }
    }

    /// 删除所有同名元素，其余元素保持顺序
    pub fn delete(&self, name: &str) -> Self {
        let mut items = self.items.clone();
        items.retain(|a| a.name() != name);
        if items.len() == self.items.len() {
            debug!("No role assignment named {} to delete", name);
        }
        Self { items }
    }

    pub fn get(&self, name: &str) -> Option<&RoleAssignment> {
        self.items.iter().find(|a| a.name() == name)
    }

    pub fn items(&self) -> &[RoleAssignment] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoleAssignment> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbac_editor_domain::security::{ClusterScope, RoleAssignmentSpec, RoleAssignmentSubject};

    fn assignment(name: &str, role: &str) -> RoleAssignment {
        RoleAssignment::new(
            name,
            RoleAssignmentSpec {
                role: role.to_string(),
                subjects: vec![RoleAssignmentSubject {
                    kind: "User".to_string(),
                    name: format!("{}-user", name),
                    clusters: vec![ClusterScope {
                        name: "cluster1".to_string(),
                        cluster_wide: true,
                        namespaces: Vec::new(),
                    }],
                }],
            },
        )
    }

    fn seeded() -> RoleAssignmentCollection {
        RoleAssignmentCollection::load(vec![
            assignment("cluster-admin-role", "admin"),
            assignment("developer-role", "edit"),
            assignment("viewer-role", "view"),
        ])
    }

    fn names(collection: &RoleAssignmentCollection) -> Vec<&str> {
        collection.iter().map(|a| a.name()).collect()
    }

    #[test]
    fn test_load_overwrites() {
        let collection = seeded().add(assignment("extra", "view"));
        assert_eq!(collection.len(), 4);

        let reloaded = RoleAssignmentCollection::load(vec![assignment("only", "admin")]);
        assert_eq!(names(&reloaded), vec!["only"]);
        assert!(RoleAssignmentCollection::new().is_empty());
    }

    #[test]
    fn test_add_appends() {
        let collection = seeded();
        let next = collection.add(assignment("new-role", "editor"));
        assert_eq!(
            names(&next),
            vec!["cluster-admin-role", "developer-role", "viewer-role", "new-role"]
        );
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn test_add_allows_duplicate_names() {
        let next = seeded().add(assignment("viewer-role", "admin"));
        assert_eq!(next.len(), 4);
        assert_eq!(next.iter().filter(|a| a.name() == "viewer-role").count(), 2);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let collection = seeded();
        let mut updated = collection.items()[0].clone();
        updated.spec.role = "super-admin".to_string();

        let next = collection.update(updated.clone());
        assert_eq!(next.items()[0], updated);
        assert_eq!(&next.items()[1..], &collection.items()[1..]);
    }

    #[test]
    fn test_update_only_first_match() {
        let collection = seeded().add(assignment("developer-role", "edit"));
        let next = collection.update(assignment("developer-role", "admin"));
        assert_eq!(next.items()[1].spec.role, "admin");
        assert_eq!(next.items()[3].spec.role, "edit");
    }

    #[test]
    fn test_update_missing_is_noop() {
        let collection = seeded();
        let next = collection.update(RoleAssignment::new("non-existent", RoleAssignmentSpec::default()));
        assert_eq!(next, collection);
    }

    #[test]
    fn test_delete_by_name() {
        let collection = seeded();
        let next = collection.delete("cluster-admin-role");
        assert_eq!(next.items(), &collection.items()[1..]);
    }

    #[test]
    fn test_delete_removes_all_matches() {
        let collection = seeded().add(assignment("developer-role", "admin"));
        let next = collection.delete("developer-role");
        assert_eq!(names(&next), vec!["cluster-admin-role", "viewer-role"]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let collection = seeded();
        assert_eq!(collection.delete("non-existent-role"), collection);
    }

    #[test]
    fn test_get_and_serialize_as_array() {
        let collection = seeded();
        assert_eq!(collection.get("viewer-role").map(|a| a.spec.role.as_str()), Some("view"));
        assert!(collection.get("missing").is_none());

        let json = serde_json::to_value(&collection).unwrap();
        assert!(json.is_array());
        let back: RoleAssignmentCollection = serde_json::from_value(json).unwrap();
        assert_eq!(back, collection);
    }

    #[test]
    fn test_loaded_literal_serializes_verbatim() {
        let input = serde_json::json!([{
            "apiVersion": "rbac.open-cluster-management.io/v1alpha1",
            "kind": "RoleAssignment",
            "metadata": { "name": "new-role" },
            "spec": {
                "role": "editor",
                "subjects": [
                    { "kind": "User", "name": "newuser", "clusters": [{ "name": "cluster3", "clusterWide": true }] }
                ]
            }
        }]);
        let seed: Vec<RoleAssignment> = serde_json::from_value(input.clone()).unwrap();
        let collection = RoleAssignmentCollection::load(seed);
        assert_eq!(serde_json::to_value(&collection).unwrap(), input);

        let added = RoleAssignmentCollection::new().add(collection.items()[0].clone());
        assert_eq!(serde_json::to_value(&added).unwrap(), input);
    }
}
