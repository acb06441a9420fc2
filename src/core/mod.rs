//! 核心公共结构体+特质（标识符/命名空间/目录条目契约）
pub mod entry;
pub mod entry_id;
pub mod namespace;

// 统一导出核心数据模型
pub use entry::{Catalog, CatalogEntry, EntryKind, SimpleEntry};
pub use entry_id::{join_segments, EntryId};
pub use namespace::{NamespaceRegistry, SourceNamespace};
