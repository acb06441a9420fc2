//! 规则表构造与校验
//! 规则在启动期以声明式构建器一次性累积为不可变GroupRule序列；
//! 构建末尾统一校验（重复分组键fail fast），插入序即分类求值序

use rustc_hash::FxHashMap;

use crate::core::{CatalogEntry, EntryId};
use crate::error::{CollapseError, CollapseResult};
use crate::rule::label::{LabelKey, LabelPrefix};
use crate::rule::predicate::EntryPredicate;

/// 单条分组规则
/// group_key是机器身份（map键/UI展开状态键，跨运行稳定）；
/// label_key是派生的翻译查询键，两者角色不同
#[derive(Debug, Clone)]
pub struct GroupRule {
    group_key: EntryId,
    label_key: LabelKey,
    predicate: EntryPredicate,
}

impl GroupRule {
    #[inline(always)]
    pub fn group_key(&self) -> &EntryId {
        &self.group_key
    }

    #[inline(always)]
    pub fn label_key(&self) -> &LabelKey {
        &self.label_key
    }

    #[inline(always)]
    pub fn predicate(&self) -> &EntryPredicate {
        &self.predicate
    }
}

/// 规则表
/// 构建完成后不可变，可跨多次分类只读共享
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<GroupRule>,
    /// 分组键 → 规则下标索引（按键查询用，不参与求值序）
    index: FxHashMap<EntryId, usize>,
}

impl RuleTable {
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::new()
    }

    pub fn rules(&self) -> &[GroupRule] {
        &self.rules
    }

    pub fn get(&self, group_key: &EntryId) -> Option<&GroupRule> {
        self.index.get(group_key).map(|&i| &self.rules[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 按表序返回首条命中规则（first-match求值策略）
    pub fn first_match<E: CatalogEntry + ?Sized>(&self, entry: &E) -> Option<&GroupRule> {
        self.rules.iter().find(|rule| rule.predicate().matches(entry))
    }

    /// 按表序遍历全部命中规则（all-match求值策略，分类引擎使用）
    pub fn matches_for<'a, E: CatalogEntry + ?Sized>(
        &'a self,
        entry: &'a E,
    ) -> impl Iterator<Item = &'a GroupRule> + 'a {
        self.rules.iter().filter(move |rule| rule.predicate().matches(entry))
    }
}

/// 规则表构建器（链式API）
/// 三种注册入口：
/// 1. group - 自定义谓词分组（标签前缀由调用方指定）
/// 2. group_from_tag - tag派生分组：分组键=tag标识符，谓词=tag归属（占规则主体）
/// 3. collection - 静态成分清单分组
#[derive(Debug, Default)]
pub struct RuleTableBuilder {
    rules: Vec<GroupRule>,
}

impl RuleTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册自定义谓词分组
    pub fn group(
        mut self,
        group_key: EntryId,
        label_prefix: LabelPrefix,
        predicate: EntryPredicate,
    ) -> Self {
        let label_key = LabelKey::derive(label_prefix, &group_key);
        self.rules.push(GroupRule {
            group_key,
            label_key,
            predicate,
        });
        self
    }

    /// 注册tag派生分组：分组/标签键均机械取自tag标识符
    pub fn group_from_tag(self, tag_id: EntryId) -> Self {
        let predicate = EntryPredicate::has_tag(tag_id.clone());
        self.group(tag_id, LabelPrefix::Tag, predicate)
    }

    /// 注册静态成分清单分组
    pub fn collection<I: IntoIterator<Item = EntryId>>(
        self,
        group_key: EntryId,
        ids: I,
    ) -> Self {
        self.group(group_key, LabelPrefix::Col, EntryPredicate::in_set(ids))
    }

    /// 结束构建并执行一次性校验
    /// 重复分组键在此处报错（启动期失败），不延迟到分类期、不静默合并
    pub fn build(self) -> CollapseResult<RuleTable> {
        let mut index = FxHashMap::default();
        for (i, rule) in self.rules.iter().enumerate() {
            if index.insert(rule.group_key.clone(), i).is_some() {
                return Err(CollapseError::DuplicateGroupKey(rule.group_key.clone()));
            }
        }

        log::info!("Rule table built | Group rule count: {}", self.rules.len());
        Ok(RuleTable {
            rules: self.rules,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(path: &str) -> EntryId {
        EntryId::new("mc", path).unwrap()
    }

    #[test]
    fn test_build_preserves_insertion_order() {
        let table = RuleTable::builder()
            .group_from_tag(key("logs"))
            .group_from_tag(key("planks"))
            .collection(key("wool"), vec![key("red_wool"), key("blue_wool")])
            .build()
            .unwrap();

        let keys: Vec<&str> = table.iter().map(|r| r.group_key().path()).collect();
        assert_eq!(keys, vec!["logs", "planks", "wool"]);
    }

    #[test]
    fn test_duplicate_group_key_rejected() {
        let result = RuleTable::builder()
            .group_from_tag(key("logs"))
            .group_from_tag(key("logs"))
            .build();

        match result {
            Err(CollapseError::DuplicateGroupKey(dup)) => assert_eq!(dup, key("logs")),
            other => panic!("expected duplicate group key error, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn test_group_from_tag_derivation() {
        let table = RuleTable::builder()
            .group_from_tag(EntryId::new("c", "ores").unwrap())
            .build()
            .unwrap();

        let rule = table.get(&EntryId::new("c", "ores").unwrap()).unwrap();
        assert_eq!(rule.label_key().as_str(), "tag.c.ores");
        assert_eq!(rule.predicate().describe(), "has_tag: c:ores");
    }

    #[test]
    fn test_get_unknown_key() {
        let table = RuleTable::builder().build().unwrap();
        assert!(table.is_empty());
        assert!(table.get(&key("missing")).is_none());
    }

    #[test]
    fn test_first_match_and_all_match_policies() {
        use crate::core::{EntryKind, SimpleEntry};
        use crate::rule::predicate::EntryPredicate;
        use crate::rule::label::LabelPrefix;

        // 两条规则都命中bucket条目；first-match取表序首条，all-match全取
        let table = RuleTable::builder()
            .group(
                key("buckets"),
                LabelPrefix::Col,
                EntryPredicate::path_suffix(None, "bucket"),
            )
            .group(
                key("lava_things"),
                LabelPrefix::Col,
                EntryPredicate::path_prefix(None, "lava"),
            )
            .build()
            .unwrap();

        let entry = SimpleEntry::new(key("lava_bucket"), EntryKind::Item);
        assert_eq!(table.first_match(&entry).unwrap().group_key(), &key("buckets"));
        assert_eq!(table.matches_for(&entry).count(), 2);

        let miss = SimpleEntry::new(key("stick"), EntryKind::Item);
        assert!(table.first_match(&miss).is_none());
        assert_eq!(table.matches_for(&miss).count(), 0);
    }
}
