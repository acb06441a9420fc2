//! rscollapse - 大规模条目目录的声明式可折叠分组分类引擎

pub mod classifier;
pub mod core;
pub mod error;
pub mod query;
pub mod rule;

// 预置标准规则集 - 仅在开启preset-rules特性时编译
#[cfg(feature = "preset-rules")]
pub mod preset;

// 导出全局错误类型
pub use self::error::{CollapseError, CollapseResult};

// 导出核心数据模型（标识符/命名空间/目录条目契约）
pub use crate::core::{
    join_segments, Catalog, CatalogEntry, EntryId, EntryKind, NamespaceRegistry, SimpleEntry,
    SourceNamespace,
};

// 导出规则模块核心接口与数据结构
pub use crate::rule::{EntryPredicate, GroupRule, LabelKey, LabelPrefix, RuleTable, RuleTableBuilder};

// 导出分类模块核心接口（包含全局单例封装接口）
pub use crate::classifier::{
    get_global_classifier, init_global_classifier, ClassifyResult, EntryClassifier, GroupMembers,
};

// 导出手持条目tag查询
pub use crate::query::HeldTagsReport;

// 导出预置标准规则集入口
#[cfg(feature = "preset-rules")]
pub use crate::preset::{standard_registry, standard_table, standard_table_with};
