//! 目录条目契约（外部目录协作者接口）
//! 引擎对宿主目录的全部要求：标识符、tag集合、运行时类别；
//! 分类过程中目录快照保持稳定只读，由宿主保证

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::core::entry_id::EntryId;

/// 条目运行时类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    Item,
    Fluid,
    Other,
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Item => write!(f, "item"),
            EntryKind::Fluid => write!(f, "fluid"),
            EntryKind::Other => write!(f, "other"),
        }
    }
}

/// 目录条目抽象
/// 快照内任意两个条目不共享标识符（宿主目录不变量）
pub trait CatalogEntry {
    fn id(&self) -> &EntryId;

    fn kind(&self) -> EntryKind;

    /// 条目已解析的tag集合（标识符形式，保持目录解析顺序）
    fn tags(&self) -> &[EntryId];

    /// tag归属判定：按标识符相等比较，而非字符串比较
    /// 内部别名过的tag不会被误判为不同tag
    #[inline]
    fn has_tag(&self, tag: &EntryId) -> bool {
        self.tags().iter().any(|t| t == tag)
    }
}

/// 目录快照抽象（外部目录协作者接口）
/// 按稳定顺序提供全部条目；分类过程中由宿主保证快照不被并发修改
pub trait Catalog {
    type Entry: CatalogEntry;

    fn entries(&self) -> &[Self::Entry];
}

/// 任意条目向量即目录快照
impl<E: CatalogEntry> Catalog for Vec<E> {
    type Entry = E;

    fn entries(&self) -> &[E] {
        self.as_slice()
    }
}

/// 内存目录条目（参考实现，测试与演示用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleEntry {
    pub id: EntryId,
    pub kind: EntryKind,
    pub tags: Vec<EntryId>,
}

impl SimpleEntry {
    pub fn new(id: EntryId, kind: EntryKind) -> Self {
        Self {
            id,
            kind,
            tags: Vec::new(),
        }
    }

    pub fn with_tags(id: EntryId, kind: EntryKind, tags: Vec<EntryId>) -> Self {
        Self { id, kind, tags }
    }
}

impl CatalogEntry for SimpleEntry {
    #[inline(always)]
    fn id(&self) -> &EntryId {
        &self.id
    }

    #[inline(always)]
    fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline(always)]
    fn tags(&self) -> &[EntryId] {
        &self.tags
    }
}
