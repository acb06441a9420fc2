//! 条目标识符模型
//! namespace:path 双段命名，所有规则判定的原子单元
//! 不变量：namespace与path均为非空小写ASCII token，结构相等即同一条目

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CollapseError, CollapseResult};

/// 路径段连接符（join_segments使用，生成同族条目命名）
const SEGMENT_SEPARATOR: char = '_';

/// namespace段允许的字符集
#[inline(always)]
fn valid_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.')
}

/// path段允许的字符集（较namespace多'/'，支持层级分组键）
#[inline(always)]
fn valid_path_char(c: char) -> bool {
    valid_namespace_char(c) || c == '/'
}

/// namespace token校验（SourceNamespace名称复用同一命名约束）
pub(crate) fn validate_namespace_token(namespace: &str) -> CollapseResult<()> {
    if namespace.is_empty() || !namespace.chars().all(valid_namespace_char) {
        return Err(CollapseError::InvalidIdentifier(format!(
            "namespace must be a non-empty lowercase token, got: {:?}",
            namespace
        )));
    }
    Ok(())
}

fn validate_path_token(path: &str) -> CollapseResult<()> {
    if path.is_empty() || !path.chars().all(valid_path_char) {
        return Err(CollapseError::InvalidIdentifier(format!(
            "path must be a non-empty lowercase token, got: {:?}",
            path
        )));
    }
    Ok(())
}

/// 条目标识符
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId {
    namespace: String,
    path: String,
}

impl EntryId {
    /// 构造标识符（带校验）
    /// 参数：
    /// - namespace: 来源命名空间（如基础目录或第三方来源名）
    /// - path: 条目路径
    /// 返回：标识符实例 | 格式错误
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> CollapseResult<Self> {
        let namespace = namespace.into();
        let path = path.into();
        validate_namespace_token(&namespace)?;
        validate_path_token(&path)?;
        Ok(Self { namespace, path })
    }

    #[inline(always)]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[inline(always)]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// 保持path不变，替换namespace
    pub fn with_namespace(&self, namespace: impl Into<String>) -> CollapseResult<Self> {
        Self::new(namespace, self.path.clone())
    }

    #[inline(always)]
    pub fn path_starts_with(&self, prefix: &str) -> bool {
        self.path.starts_with(prefix)
    }

    #[inline(always)]
    pub fn path_ends_with(&self, suffix: &str) -> bool {
        self.path.ends_with(suffix)
    }

    #[inline(always)]
    pub fn path_contains(&self, needle: &str) -> bool {
        self.path.contains(needle)
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for EntryId {
    type Err = CollapseError;

    /// 解析 "namespace:path" 文本形式
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Err(CollapseError::InvalidIdentifier(format!(
                "expected namespace:path form, got: {:?}",
                s
            ))),
        }
    }
}

/// 以下划线连接所有存在且非空的段，忽略None与空串
/// 许多规则按（染料色/材质）批量生成同族条目名，全部依赖此连接器；
/// 任何段缺省时不得产生前导/尾随/重复连接符
/// <code>[Some("red"), None, Some("pane")] -> "red_pane"</code>
/// 全部缺省时退化为空串，由调用方自行容忍
pub fn join_segments(segments: &[Option<&str>]) -> String {
    let mut joined = String::new();
    for seg in segments.iter().flatten() {
        if seg.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(SEGMENT_SEPARATOR);
        }
        joined.push_str(seg);
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_malformed() {
        assert!(EntryId::new("", "stick").is_err());
        assert!(EntryId::new("mc", "").is_err());
        assert!(EntryId::new("MC", "stick").is_err());
        assert!(EntryId::new("mc", "Stick Item").is_err());
        assert!(EntryId::new("mc", "casts/gold").is_ok());
        assert!(EntryId::new("mc/sub", "stick").is_err());
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let id = EntryId::new("tconstruct", "casts/gold").unwrap();
        assert_eq!(id.to_string(), "tconstruct:casts/gold");
        let parsed: EntryId = "tconstruct:casts/gold".parse().unwrap();
        assert_eq!(parsed, id);
        assert!("no_separator".parse::<EntryId>().is_err());
    }

    #[test]
    fn test_path_tests() {
        let id = EntryId::new("mc", "cow_spawn_egg").unwrap();
        assert!(id.path_ends_with("spawn_egg"));
        assert!(id.path_starts_with("cow"));
        assert!(id.path_contains("spawn"));
        assert!(!id.path_ends_with("bucket"));
    }

    #[test]
    fn test_with_namespace() {
        let id = EntryId::new("mc", "glass").unwrap();
        let moved = id.with_namespace("ae2").unwrap();
        assert_eq!(moved.namespace(), "ae2");
        assert_eq!(moved.path(), "glass");
    }

    #[test]
    fn test_join_segments() {
        assert_eq!(join_segments(&[Some("a"), None, Some("b")]), "a_b");
        assert_eq!(join_segments(&[None]), "");
        assert_eq!(join_segments(&[Some("a")]), "a");
        assert_eq!(join_segments(&[Some("a"), Some(""), Some("b")]), "a_b");
        assert_eq!(
            join_segments(&[None, Some("lingering"), Some("potion")]),
            "lingering_potion"
        );
        assert_eq!(join_segments(&[]), "");
    }
}
