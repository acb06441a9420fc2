//! 预置规则模块：标准命名空间表与标准可折叠分组规则集
pub mod namespaces;
pub mod rules;

// 统一导出核心公共接口
pub use namespaces::{standard_registry, STANDARD_NAMESPACES};
pub use rules::{standard_table, standard_table_with};
