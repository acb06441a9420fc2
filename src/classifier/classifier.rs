//! 条目分类器核心
//! 核心职责：
//! 1. 持有构建完成的规则表（Arc共享，多次分类零拷贝）
//! 2. 对目录快照单遍扫描，逐条目独立求值全部规则
//! 3. 聚合 分组键→成员序列 结果
//! 4. 提供基础分类/带耗时统计双版本接口

use std::sync::Arc;
use std::time::Instant;

use crate::classifier::result::{ClassifyResult, GroupMembers};
use crate::core::{Catalog, CatalogEntry};
use crate::rule::RuleTable;

/// 条目分类器
/// 设计说明：
/// - table: 规则表（Arc保证多线程共享只读；并发分类由宿主保证快照稳定即可，引擎无锁）
/// - 分类是两输入的纯函数：同快照+同表 ⇒ 结果逐位一致，可重复执行
/// - 条目命中多少分组就归入多少分组，规则间互不影响（不设优先级与互斥）
#[derive(Debug, Clone)]
pub struct EntryClassifier {
    table: Arc<RuleTable>,
}

impl EntryClassifier {
    /// 使用构建完成的规则表创建分类器
    pub fn new(table: RuleTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// 使用已共享的规则表创建分类器（多目录视图共用一张表的场景）
    pub fn with_shared_table(table: Arc<RuleTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// 核心分类方法（高性能版，无耗时统计）
    /// 流程：
    /// 1. 按规则表序预建全部分组（零命中分组保留空成员序列）
    /// 2. 快照单遍扫描 × 全规则独立求值，命中即追加成员
    /// 复杂度 O(条目数 × 规则数 × 谓词深度)，只读无副作用
    #[inline(always)]
    pub fn classify<E: CatalogEntry>(&self, snapshot: &[E]) -> ClassifyResult {
        // 1. 预建空分组
        let mut groups: Vec<GroupMembers> = self
            .table
            .rules()
            .iter()
            .map(|rule| GroupMembers {
                group_key: rule.group_key().clone(),
                label_key: rule.label_key().clone(),
                members: Vec::new(),
            })
            .collect();

        // 2. 单遍扫描快照，逐条目求值全部规则
        for entry in snapshot {
            for (slot, rule) in groups.iter_mut().zip(self.table.rules()) {
                if rule.predicate().matches(entry) {
                    slot.members.push(entry.id().clone());
                }
            }
        }

        ClassifyResult::from_groups(groups)
    }

    /// 目录快照抽象输入版（委托基础分类方法）
    #[inline(always)]
    pub fn classify_catalog<C: Catalog>(&self, catalog: &C) -> ClassifyResult {
        self.classify(catalog.entries())
    }

    /// 核心分类方法（带分阶段耗时统计+日志版）
    /// 与classify逻辑一致，仅增加统计和日志
    pub fn classify_log<E: CatalogEntry>(&self, snapshot: &[E]) -> ClassifyResult {
        let total_start = Instant::now();

        // 1. 预建空分组 + 耗时统计
        let prebuild_start = Instant::now();
        let mut groups: Vec<GroupMembers> = self
            .table
            .rules()
            .iter()
            .map(|rule| GroupMembers {
                group_key: rule.group_key().clone(),
                label_key: rule.label_key().clone(),
                members: Vec::new(),
            })
            .collect();
        let prebuild_cost = prebuild_start.elapsed();
        log::info!(
            "[Stage 1] Group slots prebuilt | Time: {}ms | Group count: {}",
            prebuild_cost.as_millis(),
            groups.len()
        );

        // 2. 扫描求值 + 耗时统计
        let scan_start = Instant::now();
        for entry in snapshot {
            for (slot, rule) in groups.iter_mut().zip(self.table.rules()) {
                if rule.predicate().matches(entry) {
                    slot.members.push(entry.id().clone());
                }
            }
        }
        let scan_cost = scan_start.elapsed();

        let result = ClassifyResult::from_groups(groups);
        log::info!(
            "[Stage 2] Snapshot scanned | Time: {}ms | Entry count: {} | Matched members: {}",
            scan_cost.as_millis(),
            snapshot.len(),
            result.member_count()
        );

        let total_cost = total_start.elapsed();
        log::info!(
            "[Classify Complete] Time: {}ms | Entries: {} | Rules: {} | Non-empty groups: {}",
            total_cost.as_millis(),
            snapshot.len(),
            self.table.len(),
            result.non_empty().count()
        );

        result
    }
}
