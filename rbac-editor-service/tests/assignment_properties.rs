//! 角色分配集合操作的属性测试

use proptest::prelude::*;
use rbac_editor_api::Extension;
use rbac_editor_domain::security::{RoleAssignment, RoleAssignmentSpec};
use rbac_editor_service::RoleAssignmentCollection;

/// 集合中的名称只取 a-m，保证 n-z 组成的名称一定不存在
fn present_name() -> impl Strategy<Value = String> {
    "[a-m]{1,4}"
}

fn absent_name() -> impl Strategy<Value = String> {
    "[n-z]{1,4}"
}

fn assignment(name: impl Strategy<Value = String>) -> impl Strategy<Value = RoleAssignment> {
    (name, "[a-z]{1,6}").prop_map(|(name, role)| {
        RoleAssignment::new(
            name,
            RoleAssignmentSpec {
                role,
                subjects: Vec::new(),
            },
        )
    })
}

fn collection() -> impl Strategy<Value = RoleAssignmentCollection> {
    prop::collection::vec(assignment(present_name()), 0..10).prop_map(RoleAssignmentCollection::load)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// 删除不存在的名称时集合不变
    #[test]
    fn delete_absent_is_noop(current in collection(), name in absent_name()) {
        prop_assert_eq!(current.delete(&name), current);
    }

    /// 更新不存在的名称时集合不变
    #[test]
    fn update_absent_is_noop(current in collection(), missing in assignment(absent_name())) {
        prop_assert_eq!(current.update(missing), current);
    }

    /// 追加恰好增加一个元素，原有顺序不变
    #[test]
    fn add_appends_one(current in collection(), added in assignment(present_name())) {
        let next = current.add(added.clone());
        prop_assert_eq!(next.len(), current.len() + 1);
        prop_assert_eq!(&next.items()[..current.len()], current.items());
        prop_assert_eq!(next.items().last(), Some(&added));
    }

    /// 删除移除所有同名元素，其余元素保持顺序
    #[test]
    fn delete_filters_matches(current in collection(), name in present_name()) {
        let next = current.delete(&name);
        let expected: Vec<RoleAssignment> = current
            .iter()
            .filter(|a| a.name() != name)
            .cloned()
            .collect();
        prop_assert_eq!(next.items(), expected.as_slice());
    }

    /// 更新最多只替换第一个同名元素
    #[test]
    fn update_replaces_first_match_only(current in collection(), replacement in assignment(present_name())) {
        let next = current.update(replacement.clone());
        prop_assert_eq!(next.len(), current.len());
        let first = current.iter().position(|a| a.name() == replacement.name());
        for (index, (before, after)) in current.iter().zip(next.iter()).enumerate() {
            if Some(index) == first {
                prop_assert_eq!(after, &replacement);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }
}
