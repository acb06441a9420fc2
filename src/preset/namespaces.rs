//! 预置命名空间表（标准条目来源）
//! 来源集合以数据形式一次性注册，显式传入规则构造点

use crate::core::{NamespaceRegistry, SourceNamespace};
use crate::error::CollapseResult;

pub const MINECRAFT: &str = "minecraft";
/// 通用约定tag命名空间
pub const COMMON: &str = "c";
pub const TCONSTRUCT: &str = "tconstruct";
pub const AE2: &str = "ae2";
pub const CREATE: &str = "create";
pub const COMPUTERCRAFT: &str = "computercraft";
pub const CATWALKS: &str = "catwalksinc";
pub const KIBE: &str = "kibe";
pub const INDREV: &str = "indrev";
pub const AD_ASTRA: &str = "ad_astra";
pub const FARMERS_DELIGHT: &str = "farmersdelight";
pub const ITEM_FILTERS: &str = "item_filters";
pub const PROMENADE: &str = "promenade";

/// 标准来源名称全集（注册顺序固定）
pub const STANDARD_NAMESPACES: [&str; 13] = [
    MINECRAFT,
    COMMON,
    TCONSTRUCT,
    AE2,
    CREATE,
    COMPUTERCRAFT,
    CATWALKS,
    KIBE,
    INDREV,
    AD_ASTRA,
    FARMERS_DELIGHT,
    ITEM_FILTERS,
    PROMENADE,
];

/// 构建标准命名空间注册表
/// 标准来源均无已知前缀约束（整namespace归属）；
/// 宿主可自建注册表并用with_prefixes收紧范围
pub fn standard_registry() -> CollapseResult<NamespaceRegistry> {
    let mut registry = NamespaceRegistry::new();
    for name in STANDARD_NAMESPACES {
        registry.register(SourceNamespace::new(name)?)?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntryId;

    #[test]
    fn test_standard_registry() {
        let registry = standard_registry().unwrap();
        assert_eq!(registry.len(), STANDARD_NAMESPACES.len());

        let tc = registry.get(TCONSTRUCT).unwrap();
        assert!(tc.contains(&EntryId::new("tconstruct", "cleaver").unwrap()));
        assert!(!tc.contains(&EntryId::new("minecraft", "cleaver").unwrap()));
        assert!(registry.get("unknown_mod").is_none());
    }
}
