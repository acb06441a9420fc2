//! 分类结果聚合
//! 每次分类全量重建：分组保持规则表序，成员保持目录快照遍历序；
//! 零命中分组保留空成员序列，是否隐藏由展示层消费方决定

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::EntryId;
use crate::error::CollapseResult;
use crate::rule::LabelKey;

/// 单个分组及其成员
/// 成员为条目标识符（快照内唯一，即目录句柄）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMembers {
    pub group_key: EntryId,
    pub label_key: LabelKey,
    pub members: Vec<EntryId>,
}

impl GroupMembers {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }
}

/// 分类结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassifyResult {
    groups: Vec<GroupMembers>,
    /// 分组键 → 分组下标索引（按键查询用）
    #[serde(skip)]
    index: FxHashMap<EntryId, usize>,
}

impl ClassifyResult {
    pub(crate) fn from_groups(groups: Vec<GroupMembers>) -> Self {
        let index = groups
            .iter()
            .enumerate()
            .map(|(i, g)| (g.group_key.clone(), i))
            .collect();
        Self { groups, index }
    }

    pub fn get(&self, group_key: &EntryId) -> Option<&GroupMembers> {
        self.index.get(group_key).map(|&i| &self.groups[i])
    }

    /// 指定分组的成员序列（分组不存在时为None，空分组为Some空切片）
    pub fn members(&self, group_key: &EntryId) -> Option<&[EntryId]> {
        self.get(group_key).map(|g| g.members.as_slice())
    }

    /// 按规则表序遍历全部分组（含空分组）
    pub fn iter(&self) -> impl Iterator<Item = &GroupMembers> {
        self.groups.iter()
    }

    /// 仅遍历有成员的分组（展示层常用视图）
    pub fn non_empty(&self) -> impl Iterator<Item = &GroupMembers> {
        self.groups.iter().filter(|g| !g.is_empty())
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// 全部分组成员总数（多分组归属的条目按归属次数计）
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(|g| g.members.len()).sum()
    }

    /// 导出JSON（展示层边界，引擎不渲染文本）
    pub fn to_json(&self) -> CollapseResult<String> {
        Ok(serde_json::to_string(&self.groups)?)
    }
}

/// 相等性只看分组内容（索引由分组派生）
impl PartialEq for ClassifyResult {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::LabelPrefix;

    fn group(path: &str, members: Vec<&str>) -> GroupMembers {
        let group_key = EntryId::new("mc", path).unwrap();
        GroupMembers {
            label_key: LabelKey::derive(LabelPrefix::Col, &group_key),
            group_key,
            members: members
                .into_iter()
                .map(|p| EntryId::new("mc", p).unwrap())
                .collect(),
        }
    }

    #[test]
    fn test_lookup_and_order() {
        let result = ClassifyResult::from_groups(vec![
            group("wool", vec!["red_wool", "blue_wool"]),
            group("empty", vec![]),
        ]);

        assert_eq!(result.group_count(), 2);
        assert_eq!(result.member_count(), 2);
        assert_eq!(
            result.members(&EntryId::new("mc", "wool").unwrap()).unwrap().len(),
            2
        );
        // 空分组保留，按键可查
        assert_eq!(
            result.members(&EntryId::new("mc", "empty").unwrap()),
            Some(&[][..])
        );
        assert_eq!(result.non_empty().count(), 1);
        assert!(result.members(&EntryId::new("mc", "missing").unwrap()).is_none());
    }

    #[test]
    fn test_to_json() {
        let result = ClassifyResult::from_groups(vec![group("wool", vec!["red_wool"])]);
        let json = result.to_json().unwrap();
        assert!(json.contains("\"group_key\""));
        assert!(json.contains("red_wool"));
    }
}
