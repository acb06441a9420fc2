//! 谓词组合器
//! 封闭代数类型 + 结构递归求值器
//! 规则以可枚举、可打印的谓词树表达，替代不可内省的布尔闭包；
//! 求值纯函数、全函数：同一快照内对同一条目重复求值结果一致，无副作用无部分失败

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::core::{CatalogEntry, EntryId, EntryKind, SourceNamespace};

/// 条目谓词
/// 叶子覆盖全部规则判定维度：标识符相等、path前后缀/子串（可选namespace守卫）、
/// tag归属、静态成分清单、运行时类别；组合节点提供布尔代数
#[derive(Debug, Clone)]
pub enum EntryPredicate {
    /// 标识符完全相等
    IdEquals(EntryId),
    /// path前缀匹配，可选namespace守卫
    PathPrefix {
        namespace: Option<Arc<SourceNamespace>>,
        prefix: String,
    },
    /// path后缀匹配，可选namespace守卫
    PathSuffix {
        namespace: Option<Arc<SourceNamespace>>,
        suffix: String,
    },
    /// path子串匹配，可选namespace守卫
    PathContains {
        namespace: Option<Arc<SourceNamespace>>,
        needle: String,
    },
    /// tag集合归属（按标识符相等判定）
    HasTag(EntryId),
    /// 静态成分清单归属
    InSet(FxHashSet<EntryId>),
    /// 运行时类别判定
    KindIs(EntryKind),
    /// 全部成立
    AllOf(Vec<EntryPredicate>),
    /// 任一成立
    AnyOf(Vec<EntryPredicate>),
    /// 取反
    Not(Box<EntryPredicate>),
}

impl EntryPredicate {
    // ===================== 叶子构造器 =====================

    pub fn id_equals(id: EntryId) -> Self {
        Self::IdEquals(id)
    }

    pub fn path_prefix(
        namespace: Option<Arc<SourceNamespace>>,
        prefix: impl Into<String>,
    ) -> Self {
        Self::PathPrefix {
            namespace,
            prefix: prefix.into(),
        }
    }

    pub fn path_suffix(
        namespace: Option<Arc<SourceNamespace>>,
        suffix: impl Into<String>,
    ) -> Self {
        Self::PathSuffix {
            namespace,
            suffix: suffix.into(),
        }
    }

    pub fn path_contains(
        namespace: Option<Arc<SourceNamespace>>,
        needle: impl Into<String>,
    ) -> Self {
        Self::PathContains {
            namespace,
            needle: needle.into(),
        }
    }

    /// 纯namespace归属守卫（空前缀的PathPrefix：任意path均通过前缀测试）
    pub fn in_namespace(namespace: Arc<SourceNamespace>) -> Self {
        Self::PathPrefix {
            namespace: Some(namespace),
            prefix: String::new(),
        }
    }

    pub fn has_tag(tag: EntryId) -> Self {
        Self::HasTag(tag)
    }

    pub fn in_set<I: IntoIterator<Item = EntryId>>(ids: I) -> Self {
        Self::InSet(ids.into_iter().collect())
    }

    pub fn kind_is(kind: EntryKind) -> Self {
        Self::KindIs(kind)
    }

    // ===================== 组合器 =====================

    pub fn all_of(predicates: Vec<EntryPredicate>) -> Self {
        Self::AllOf(predicates)
    }

    pub fn any_of(predicates: Vec<EntryPredicate>) -> Self {
        Self::AnyOf(predicates)
    }

    /// 逻辑与；已是AllOf时就地展平，保持谓词树浅层
    pub fn and(self, other: EntryPredicate) -> Self {
        match self {
            Self::AllOf(mut predicates) => {
                predicates.push(other);
                Self::AllOf(predicates)
            }
            first => Self::AllOf(vec![first, other]),
        }
    }

    /// 逻辑或；已是AnyOf时就地展平
    pub fn or(self, other: EntryPredicate) -> Self {
        match self {
            Self::AnyOf(mut predicates) => {
                predicates.push(other);
                Self::AnyOf(predicates)
            }
            first => Self::AnyOf(vec![first, other]),
        }
    }

    /// 逻辑非；双重取反直接消去
    pub fn negate(self) -> Self {
        match self {
            Self::Not(inner) => *inner,
            other => Self::Not(Box::new(other)),
        }
    }

    // ===================== 求值 =====================

    /// namespace守卫判定：无守卫恒通过
    #[inline(always)]
    fn namespace_allows(namespace: &Option<Arc<SourceNamespace>>, id: &EntryId) -> bool {
        match namespace {
            Some(ns) => ns.contains(id),
            None => true,
        }
    }

    /// 执行谓词求值（核心匹配逻辑，谓词树结构递归）
    pub fn matches<E: CatalogEntry + ?Sized>(&self, entry: &E) -> bool {
        match self {
            Self::IdEquals(id) => entry.id() == id,
            Self::PathPrefix { namespace, prefix } => {
                Self::namespace_allows(namespace, entry.id())
                    && entry.id().path_starts_with(prefix)
            }
            Self::PathSuffix { namespace, suffix } => {
                Self::namespace_allows(namespace, entry.id()) && entry.id().path_ends_with(suffix)
            }
            Self::PathContains { namespace, needle } => {
                Self::namespace_allows(namespace, entry.id()) && entry.id().path_contains(needle)
            }
            Self::HasTag(tag) => entry.has_tag(tag),
            Self::InSet(ids) => ids.contains(entry.id()),
            Self::KindIs(kind) => entry.kind() == *kind,
            Self::AllOf(predicates) => predicates.iter().all(|p| p.matches(entry)),
            Self::AnyOf(predicates) => predicates.iter().any(|p| p.matches(entry)),
            Self::Not(inner) => !inner.matches(entry),
        }
    }

    /// 描述谓词规则（用于日志/调试输出）
    pub fn describe(&self) -> String {
        fn guard(namespace: &Option<Arc<SourceNamespace>>) -> String {
            match namespace {
                Some(ns) => format!("[{}]", ns.name()),
                None => String::new(),
            }
        }

        match self {
            Self::IdEquals(id) => format!("id_equals: {}", id),
            Self::PathPrefix { namespace, prefix } => {
                format!("path_prefix{}: {}", guard(namespace), prefix)
            }
            Self::PathSuffix { namespace, suffix } => {
                format!("path_suffix{}: {}", guard(namespace), suffix)
            }
            Self::PathContains { namespace, needle } => {
                format!("path_contains{}: {}", guard(namespace), needle)
            }
            Self::HasTag(tag) => format!("has_tag: {}", tag),
            Self::InSet(ids) => format!("in_set: {} ids", ids.len()),
            Self::KindIs(kind) => format!("kind_is: {}", kind),
            Self::AllOf(predicates) => {
                let parts: Vec<String> = predicates.iter().map(|p| p.describe()).collect();
                format!("all_of({})", parts.join(", "))
            }
            Self::AnyOf(predicates) => {
                let parts: Vec<String> = predicates.iter().map(|p| p.describe()).collect();
                format!("any_of({})", parts.join(", "))
            }
            Self::Not(inner) => format!("not({})", inner.describe()),
        }
    }
}
