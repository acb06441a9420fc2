//! 分类模块：条目分类核心逻辑
pub mod classifier;
pub mod global;
pub mod result;

// 导出核心接口
pub use self::classifier::EntryClassifier;
pub use self::global::{classify, classify_log, get_global_classifier, init_global_classifier};
pub use self::result::{ClassifyResult, GroupMembers};
