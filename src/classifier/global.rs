//! 全局分类器单例管理
//! 核心职责：
//! 1. 维护进程生命周期内唯一的EntryClassifier实例
//! 2. 提供幂等初始化接口；preset-rules开启时支持标准规则表惰性初始化
//! 3. 统一错误处理和状态管理

use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};

use super::classifier::EntryClassifier;
use super::result::ClassifyResult;
use crate::core::CatalogEntry;
use crate::error::{CollapseError, CollapseResult};
use crate::rule::RuleTable;

/// 全局分类器实例 - 线程安全单例
/// 设计说明：
/// - Lazy：延迟初始化，首次使用时创建
/// - Arc：多线程共享所有权
/// - OnceCell：确保实例仅初始化一次，进程内唯一
static GLOBAL_CLASSIFIER: Lazy<Arc<OnceCell<EntryClassifier>>> =
    Lazy::new(|| Arc::new(OnceCell::new()));

/// 使用外部构建的规则表初始化全局分类器
/// 特性：
/// 1. 幂等设计：已初始化则直接返回Ok(())
/// 2. 线程安全：基于OnceCell保证仅初始化一次
/// 参数：table - 构建完成的规则表
/// 返回：初始化结果 | 错误（仅当并发初始化冲突时返回）
pub fn init_global_classifier(table: RuleTable) -> CollapseResult<()> {
    // 幂等检查：已初始化则直接返回
    if GLOBAL_CLASSIFIER.get().is_some() {
        log::debug!("Global classifier already initialized, skip reinitialization");
        return Ok(());
    }

    GLOBAL_CLASSIFIER
        .set(EntryClassifier::new(table))
        .map_err(|_| {
            CollapseError::ClassifierInitError(
                "Global classifier initialization failed: instance already initialized by another thread"
                    .to_string(),
            )
        })?;

    log::info!("Global EntryClassifier initialized successfully");
    Ok(())
}

/// 惰性初始化全局分类器（内部辅助函数，标准预置规则表）
/// 特性：仅当实例未初始化时执行初始化
#[cfg(feature = "preset-rules")]
fn lazy_init() -> CollapseResult<()> {
    if GLOBAL_CLASSIFIER.get().is_none() {
        log::debug!("Lazy initializing global EntryClassifier with standard preset table");
        let table = crate::preset::standard_table().map_err(|e| {
            CollapseError::ClassifierInitError(format!(
                "Failed to build standard preset rule table: {}",
                e
            ))
        })?;
        init_global_classifier(table)?;
    }
    Ok(())
}

/// 获取全局分类器实例
/// 特性：
/// 1. preset-rules开启时自动惰性初始化（标准预置规则表）
/// 2. 返回静态引用：进程生命周期内有效
/// 3. 精准错误：明确返回未初始化/初始化失败原因
pub fn get_global_classifier() -> CollapseResult<&'static EntryClassifier> {
    #[cfg(feature = "preset-rules")]
    lazy_init()?;

    GLOBAL_CLASSIFIER.get().ok_or_else(|| {
        CollapseError::ClassifierNotInitialized(
            "Global EntryClassifier not initialized! Please call init_global_classifier first"
                .to_string(),
        )
    })
}

/// 全局单例分类接口（基础版）
#[inline(always)]
pub fn classify<E: CatalogEntry>(snapshot: &[E]) -> CollapseResult<ClassifyResult> {
    let classifier = get_global_classifier()?;
    Ok(classifier.classify(snapshot))
}

/// 全局单例分类接口（带耗时统计版）
#[inline(always)]
pub fn classify_log<E: CatalogEntry>(snapshot: &[E]) -> CollapseResult<ClassifyResult> {
    let classifier = get_global_classifier()?;
    Ok(classifier.classify_log(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntryId, EntryKind, SimpleEntry};

    #[test]
    fn test_init_idempotent_and_classify() {
        // 首次初始化（preset-rules开启时也可能已被其他用例惰性初始化，均应幂等通过）
        let table = RuleTable::builder()
            .group_from_tag(EntryId::new("c", "ores").unwrap())
            .build()
            .unwrap();
        init_global_classifier(table.clone()).unwrap();
        init_global_classifier(table).unwrap();

        let snapshot = vec![SimpleEntry::new(
            EntryId::new("mc", "stick").unwrap(),
            EntryKind::Item,
        )];
        let result = classify(&snapshot).unwrap();
        assert_eq!(result.member_count(), 0);
    }
}
