//! rscollapse 全局错误类型定义
//! 封装构造期与边界层所有错误，基于thiserror实现类型安全处理
//!
//! 错误分层约定：
//! 1. 构造期错误（标识符/规则表/分类器初始化）：启动时立即失败，不延迟到分类期
//! 2. 求值期：谓词求值是全函数，无错误路径（无tag/空路径等场景一律判否）
//! 3. 协作层边界错误（如翻译键缺失）：由外部协作者兜底，不进入本错误枚举
use thiserror::Error;

use serde_json::Error as SerdeJsonError;

use crate::core::EntryId;

/// 全局错误枚举
#[derive(Error, Debug)]
pub enum CollapseError {
    // ===================== 标识符相关错误 =====================
    /// 标识符格式非法（空namespace/path或含非法字符）
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    // ===================== 规则表构造错误 =====================
    /// 规则表内分组键重复（分组键兼作UI/状态身份，禁止静默合并）
    #[error("Duplicate group key in rule table: {0}")]
    DuplicateGroupKey(EntryId),

    /// 命名空间注册冲突（注册表启动时一次性构造，重复注册视为配置错误）
    #[error("Namespace already registered: {0}")]
    DuplicateNamespace(String),

    // ===================== 分类器相关错误 =====================
    /// 分类器未初始化（全局单例调用前未完成初始化）
    #[error("Classifier not initialized: {0}")]
    ClassifierNotInitialized(String),

    /// 分类器初始化失败（规则表构造/并发初始化冲突）
    #[error("Classifier initialization failed: {0}")]
    ClassifierInitError(String),

    // ===================== 序列化错误 =====================
    /// JSON序列化失败（结果导出边界）
    #[error("JSON serialization failed: {0}")]
    JsonError(#[from] SerdeJsonError),

    // ===================== 基础错误 =====================
    /// 无效输入参数（入参校验失败）
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// 全局Result类型别名
pub type CollapseResult<T> = Result<T, CollapseError>;
