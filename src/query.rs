//! 手持条目tag查询
//! 命令/反馈协作层的薄封装：采集单个条目的tag归属并给出概要翻译键；
//! 文本渲染与悬浮/点击装饰由反馈层完成，引擎只提供标识符数据

use serde::Serialize;

use crate::core::{CatalogEntry, EntryId};

/// 手持条目tag报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeldTagsReport {
    pub entry: EntryId,
    pub tags: Vec<EntryId>,
}

impl HeldTagsReport {
    /// 采集条目的全部tag（保持目录解析顺序）
    pub fn for_entry<E: CatalogEntry + ?Sized>(entry: &E) -> Self {
        Self {
            entry: entry.id().clone(),
            tags: entry.tags().to_vec(),
        }
    }

    /// 概要翻译键：按tag数量三分
    pub fn summary_key(&self) -> &'static str {
        match self.tags.len() {
            0 => "tagged.none",
            1 => "tagged.only",
            _ => "tagged.more",
        }
    }

    /// 每个tag一行标识符文本
    pub fn tag_lines(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntryKind, SimpleEntry};

    fn tag(path: &str) -> EntryId {
        EntryId::new("c", path).unwrap()
    }

    #[test]
    fn test_summary_key_thresholds() {
        let bare = SimpleEntry::new(EntryId::new("mc", "stick").unwrap(), EntryKind::Item);
        assert_eq!(HeldTagsReport::for_entry(&bare).summary_key(), "tagged.none");

        let one = SimpleEntry::with_tags(
            EntryId::new("mc", "iron_ore").unwrap(),
            EntryKind::Item,
            vec![tag("ores")],
        );
        assert_eq!(HeldTagsReport::for_entry(&one).summary_key(), "tagged.only");

        let many = SimpleEntry::with_tags(
            EntryId::new("mc", "oak_planks").unwrap(),
            EntryKind::Item,
            vec![tag("planks"), tag("wooden")],
        );
        assert_eq!(HeldTagsReport::for_entry(&many).summary_key(), "tagged.more");
    }

    #[test]
    fn test_tag_lines_keep_order() {
        let entry = SimpleEntry::with_tags(
            EntryId::new("mc", "oak_planks").unwrap(),
            EntryKind::Item,
            vec![tag("planks"), tag("wooden")],
        );
        let report = HeldTagsReport::for_entry(&entry);
        assert_eq!(report.tag_lines(), vec!["c:planks", "c:wooden"]);
    }
}
