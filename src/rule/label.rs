//! 分组标签键派生
//! 翻译键约定 prefix.namespace.path 集中在单一派生点，规则侧不再各自拼接；
//! 引擎自身不渲染文本，解析交由外部本地化协作者（缺失键由其兜底显示）

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::core::EntryId;

/// 标签键前缀约定
/// Tag：tag来源分组；Col：自定义谓词/成分清单分组
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelPrefix {
    Tag,
    Col,
}

impl LabelPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelPrefix::Tag => "tag",
            LabelPrefix::Col => "col",
        }
    }
}

impl Display for LabelPrefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 翻译查询键（由分组键机械派生，相异标识符派生结果必相异）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelKey(String);

impl LabelKey {
    /// 由标识符派生：prefix + "." + namespace + "." + path
    pub fn derive(prefix: LabelPrefix, id: &EntryId) -> Self {
        LabelKey(format!("{}.{}.{}", prefix.as_str(), id.namespace(), id.path()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LabelKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
