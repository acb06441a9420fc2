//! 条目来源命名空间注册表
//! 核心职责：
//! 1. 描述单一条目来源（基础目录或某个第三方来源）及其已知路径前缀
//! 2. 提供 contains 归属判定，供谓词做namespace守卫
//! 3. 注册表启动时一次性构造，之后只读，显式传入规则构造点（不做环境全局量）

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::core::entry_id::EntryId;
use crate::error::{CollapseError, CollapseResult};

/// 单一条目来源
/// 生命周期：启动时从静态表构造一次，之后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceNamespace {
    name: String,
    /// 已知路径前缀约束；为空表示该namespace下全部条目均归属
    known_prefixes: FxHashSet<String>,
}

impl SourceNamespace {
    /// 构造无前缀约束的来源（整个namespace归属）
    pub fn new(name: impl Into<String>) -> CollapseResult<Self> {
        let name = name.into();
        // 复用标识符namespace段校验（同一命名约束）
        crate::core::entry_id::validate_namespace_token(&name)?;
        Ok(Self {
            name,
            known_prefixes: FxHashSet::default(),
        })
    }

    /// 构造带已知路径前缀约束的来源
    pub fn with_prefixes<I, S>(name: impl Into<String>, prefixes: I) -> CollapseResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ns = Self::new(name)?;
        ns.known_prefixes = prefixes.into_iter().map(Into::into).collect();
        Ok(ns)
    }

    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn known_prefixes(&self) -> &FxHashSet<String> {
        &self.known_prefixes
    }

    /// 归属判定：namespace名相同，且（无前缀约束 或 path命中任一已知前缀）
    /// 用作谓词内的namespace守卫，避免同名path的跨来源误命中
    #[inline(always)]
    pub fn contains(&self, id: &EntryId) -> bool {
        if id.namespace() != self.name {
            return false;
        }
        self.known_prefixes.is_empty()
            || self.known_prefixes.iter().any(|p| id.path_starts_with(p))
    }
}

/// 命名空间注册表（name → Arc共享来源）
/// Arc导出后由谓词持有，多条规则共享同一来源实例，零拷贝
#[derive(Debug, Clone, Default)]
pub struct NamespaceRegistry {
    namespaces: FxHashMap<String, Arc<SourceNamespace>>,
}

impl NamespaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册来源并返回共享句柄
    /// 注册表一次性构造，重复注册同名来源视为配置错误（fail fast）
    pub fn register(&mut self, namespace: SourceNamespace) -> CollapseResult<Arc<SourceNamespace>> {
        let name = namespace.name().to_string();
        if self.namespaces.contains_key(&name) {
            return Err(CollapseError::DuplicateNamespace(name));
        }
        let shared = Arc::new(namespace);
        self.namespaces.insert(name, shared.clone());
        Ok(shared)
    }

    pub fn get(&self, name: &str) -> Option<Arc<SourceNamespace>> {
        self.namespaces.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}
