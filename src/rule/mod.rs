//! 规则模块：谓词组合器、标签键派生与规则表构造
pub mod label;
pub mod predicate;
pub mod table;

// 统一导出核心公共接口
pub use label::{LabelKey, LabelPrefix};
pub use predicate::EntryPredicate;
pub use table::{GroupRule, RuleTable, RuleTableBuilder};
