//! 预置标准规则表
//! 标准目录的全部可折叠分组注册为声明式规则：
//! tag派生分组占主体，其余为标识符相等/同族清单/跨来源特判的自定义谓词分组

use std::sync::Arc;

use crate::core::{join_segments, EntryId, EntryKind, NamespaceRegistry, SourceNamespace};
use crate::error::{CollapseError, CollapseResult};
use crate::preset::namespaces::{
    standard_registry, AD_ASTRA, AE2, CATWALKS, COMMON, COMPUTERCRAFT, CREATE, FARMERS_DELIGHT,
    INDREV, ITEM_FILTERS, KIBE, MINECRAFT, PROMENADE, TCONSTRUCT,
};
use crate::rule::{EntryPredicate, LabelPrefix, RuleTable};

/// 染料十六色表（按颜色批量生成同族成分清单）
const DYE_COLORS: [&str; 16] = [
    "black",
    "red",
    "green",
    "brown",
    "blue",
    "purple",
    "cyan",
    "light_gray",
    "gray",
    "pink",
    "lime",
    "yellow",
    "light_blue",
    "magenta",
    "orange",
    "white",
];

#[inline]
fn id(namespace: &str, path: impl Into<String>) -> CollapseResult<EntryId> {
    EntryId::new(namespace, path)
}

/// 层级分组键（head/tail形式，与tag注册路径同构）
#[inline]
fn sub_id(namespace: &str, head: &str, tail: &str) -> CollapseResult<EntryId> {
    EntryId::new(namespace, format!("{}/{}", head, tail))
}

fn require_ns(
    registry: &NamespaceRegistry,
    name: &str,
) -> CollapseResult<Arc<SourceNamespace>> {
    registry
        .get(name)
        .ok_or_else(|| CollapseError::InvalidInput(format!("Namespace not registered: {}", name)))
}

/// 按染料色展开同族条目清单（color_tail命名族）
fn dye_family(namespace: &str, tail: &[Option<&str>]) -> CollapseResult<Vec<EntryId>> {
    let mut ids = Vec::with_capacity(DYE_COLORS.len());
    for color in DYE_COLORS {
        let mut parts: Vec<Option<&str>> = Vec::with_capacity(tail.len() + 1);
        parts.push(Some(color));
        parts.extend_from_slice(tail);
        ids.push(EntryId::new(namespace, join_segments(&parts))?);
    }
    Ok(ids)
}

/// 构建标准规则表（使用标准命名空间注册表）
pub fn standard_table() -> CollapseResult<RuleTable> {
    let registry = standard_registry()?;
    standard_table_with(&registry)
}

/// 基于调用方注册表构建标准规则表
/// 注册表需包含全部标准来源；缺失视为配置错误，启动期立即失败
pub fn standard_table_with(registry: &NamespaceRegistry) -> CollapseResult<RuleTable> {
    let mc = require_ns(registry, MINECRAFT)?;
    let tc = require_ns(registry, TCONSTRUCT)?;
    let ae2 = require_ns(registry, AE2)?;
    let create = require_ns(registry, CREATE)?;
    let catwalks = require_ns(registry, CATWALKS)?;
    let indrev = require_ns(registry, INDREV)?;
    let ad_astra = require_ns(registry, AD_ASTRA)?;
    let promenade = require_ns(registry, PROMENADE)?;

    let mut b = RuleTable::builder();

    // ===================== 类别分组 =====================

    // 流体
    b = b.group(
        id(MINECRAFT, "fluids")?,
        LabelPrefix::Col,
        EntryPredicate::kind_is(EntryKind::Fluid),
    );

    // 刷怪蛋（任意来源，按后缀归并）
    b = b.group(
        id(MINECRAFT, "spawn_eggs")?,
        LabelPrefix::Col,
        EntryPredicate::path_suffix(None, "spawn_egg"),
    );

    // ===================== 通用约定tag分组 =====================

    for tag in ["shulker_boxes", "ores", "dyes"] {
        b = b.group_from_tag(id(COMMON, tag)?);
    }

    // 玻璃块：基础tag已覆盖基础来源；tconstruct/ae2的玻璃按来源限定的后缀特判补入，
    // 流体（熔融玻璃）排除在外
    let glass_blocks = EntryPredicate::has_tag(id(COMMON, "glass")?).or(
        EntryPredicate::kind_is(EntryKind::Fluid).negate().and(
            EntryPredicate::path_suffix(Some(tc.clone()), "glass")
                .or(EntryPredicate::path_suffix(Some(ae2.clone()), "glass")),
        ),
    );
    b = b.group(id(COMMON, "glass_blocks")?, LabelPrefix::Tag, glass_blocks);

    // 玻璃板：tconstruct特判同上
    let glass_panes = EntryPredicate::has_tag(id(COMMON, "glass_panes")?).or(
        EntryPredicate::kind_is(EntryKind::Fluid)
            .negate()
            .and(EntryPredicate::path_suffix(Some(tc.clone()), "glass_pane")),
    );
    b = b.group(id(COMMON, "glass_panes")?, LabelPrefix::Tag, glass_panes);

    // ===================== minecraft =====================

    // tag派生分组
    for tag in [
        "music_discs",
        "carpets",
        "banners",
        "candles",
        "beds",
        "signs",
        "hanging_signs",
        "leaves",
        "logs",
        "planks",
        "stairs",
        "slabs",
        "doors",
        "trapdoors",
        "fence_gates",
        "boats",
        "walls",
        "fences",
        "trim_templates",
        "decorated_pot_sherds",
    ] {
        b = b.group_from_tag(id(MINECRAFT, tag)?);
    }

    // 单条目家族（附魔书/药水箭等，运行时数据变体折叠为单条目分组）
    for (group, item) in [
        ("enchanted_books", "enchanted_book"),
        ("tipped_arrows", "tipped_arrow"),
        ("paintings", "painting"),
        ("goat_horns", "goat_horn"),
        ("suspicious_stews", "suspicious_stew"),
    ] {
        b = b.group(
            id(MINECRAFT, group)?,
            LabelPrefix::Col,
            EntryPredicate::id_equals(id(MINECRAFT, item)?),
        );
    }

    // 药水家族（可缺省前缀：potion/lingering_potion/splash_potion）
    for prefix in [None, Some("lingering"), Some("splash")] {
        b = b.group(
            id(MINECRAFT, join_segments(&[prefix, Some("potions")]))?,
            LabelPrefix::Col,
            EntryPredicate::id_equals(id(MINECRAFT, join_segments(&[prefix, Some("potion")]))?),
        );
    }

    // 染色方块同族清单
    for ty in ["terracotta", "glazed_terracotta", "concrete", "concrete_powder"] {
        b = b.collection(sub_id(MINECRAFT, "blocks", ty)?, dye_family(MINECRAFT, &[Some(ty)])?);
    }

    // 杂项尾缀族
    for ty in ["button", "pressure_plate", "banner_pattern"] {
        b = b.group(
            sub_id(MINECRAFT, "misc", ty)?,
            LabelPrefix::Col,
            EntryPredicate::path_suffix(Some(mc.clone()), ty),
        );
    }

    // ===================== ad_astra =====================

    b = b.group(
        id(AD_ASTRA, "flags")?,
        LabelPrefix::Col,
        EntryPredicate::path_suffix(Some(ad_astra.clone()), "flag"),
    );

    // ===================== ae2 =====================

    // 颜料球（普通/流明两族 × 十六色）
    for ty in [None, Some("lumen")] {
        b = b.collection(
            id(AE2, join_segments(&[ty, Some("paint_balls")]))?,
            dye_family(AE2, &[ty, Some("paint_ball")])?,
        );
    }

    // ===================== catwalksinc =====================

    let filled_paint_rollers = EntryPredicate::in_namespace(catwalks.clone()).and(
        EntryPredicate::has_tag(id(CATWALKS, "filled_paint_rollers")?)
            .or(EntryPredicate::path_contains(None, "filled_paint_rollers")),
    );
    b = b.group(
        id(CATWALKS, "filled_paint_rollers")?,
        LabelPrefix::Tag,
        filled_paint_rollers,
    );

    // ===================== computercraft =====================

    b = b.group(
        id(COMPUTERCRAFT, "disks")?,
        LabelPrefix::Col,
        EntryPredicate::id_equals(id(COMPUTERCRAFT, "disk")?),
    );

    // 海龟与掌上电脑（advanced/normal两档）
    for thing in ["turtle", "pocket_computer"] {
        let mut variants = Vec::with_capacity(2);
        for postfix in ["advanced", "normal"] {
            variants.push(EntryPredicate::id_equals(id(
                COMPUTERCRAFT,
                join_segments(&[Some(thing), Some(postfix)]),
            )?));
        }
        b = b.group(
            sub_id(COMPUTERCRAFT, "things", thing)?,
            LabelPrefix::Col,
            EntryPredicate::any_of(variants),
        );
    }

    // ===================== create =====================

    // 石材族（tag优先，path子串兜底）
    for ty in [
        "veridium",
        "scorchia",
        "scoria",
        "ochrum",
        "limestone",
        "crimsite",
        "asurine",
        "tuff",
        "deepslate",
        "dripstone",
        "calcite",
        "andesite",
        "diorite",
        "granite",
    ] {
        let stone = EntryPredicate::in_namespace(create.clone()).and(
            EntryPredicate::has_tag(sub_id(CREATE, "stone_types", ty)?)
                .or(EntryPredicate::path_contains(None, ty)),
        );
        b = b.group(sub_id(CREATE, "stone_types", ty)?, LabelPrefix::Tag, stone);
    }

    // 铜瓦与铜瓦片
    for ty in ["tile", "shingle"] {
        let family = join_segments(&[Some("copper"), Some(ty)]);
        b = b.group(
            sub_id(CREATE, "blocks", &family)?,
            LabelPrefix::Col,
            EntryPredicate::path_contains(Some(create.clone()), family),
        );
    }

    for tag in ["toolboxes", "seats"] {
        b = b.group_from_tag(id(CREATE, tag)?);
    }

    // ===================== farmersdelight =====================

    b = b.group_from_tag(id(FARMERS_DELIGHT, "canvas_signs")?);

    // ===================== tconstruct =====================

    // 强化组件（来源归属即成员）
    b = b.group(
        id(TCONSTRUCT, "modifiers")?,
        LabelPrefix::Col,
        EntryPredicate::in_namespace(tc.clone()),
    );

    b = b.group(
        id(TCONSTRUCT, "slime_helmets")?,
        LabelPrefix::Col,
        EntryPredicate::id_equals(id(TCONSTRUCT, "slime_helmet")?),
    );

    b = b.group(
        id(TCONSTRUCT, "modifier_crystals")?,
        LabelPrefix::Col,
        EntryPredicate::id_equals(id(TCONSTRUCT, "modifier_crystal")?),
    );

    b = b.group(
        id(TCONSTRUCT, "platforms")?,
        LabelPrefix::Col,
        EntryPredicate::path_suffix(Some(tc.clone()), "platform"),
    );

    // 铸模tag族
    for cast in ["red_sand", "sand", "gold"] {
        b = b.group_from_tag(sub_id(TCONSTRUCT, "casts", cast)?);
    }

    // 工具族
    for tool in [
        "cleaver",
        "sword",
        "dagger",
        "scythe",
        "kama",
        "broad_axe",
        "hand_axe",
        "excavator",
        "pickadze",
        "mattock",
        "vein_hammer",
        "sledge_hammer",
        "pickaxe",
        "crossbow",
        "longbow",
    ] {
        b = b.group(
            sub_id(TCONSTRUCT, "tools", tool)?,
            LabelPrefix::Col,
            EntryPredicate::id_equals(id(TCONSTRUCT, tool)?),
        );
    }

    // 部件族
    for part in [
        "tough_handle",
        "tool_handle",
        "tool_binding",
        "large_plate",
        "round_plate",
        "broad_blade",
        "small_blade",
        "broad_axe_head",
        "small_axe_head",
        "hammer_head",
        "pick_head",
        "repair_kit",
        "bow_limb",
        "bow_grip",
        "bowstring",
    ] {
        b = b.group(
            sub_id(TCONSTRUCT, "parts", part)?,
            LabelPrefix::Col,
            EntryPredicate::id_equals(id(TCONSTRUCT, part)?),
        );
    }

    // 锻造砧（两种变体）
    let anvils = EntryPredicate::id_equals(id(TCONSTRUCT, "scorched_anvil")?)
        .or(EntryPredicate::id_equals(id(TCONSTRUCT, "tinkers_anvil")?));
    b = b.group(id(TCONSTRUCT, "anvils")?, LabelPrefix::Col, anvils);

    // 工作站
    for station in ["part_builder", "tinker_station", "crafting_station"] {
        b = b.group(
            sub_id(TCONSTRUCT, "stations", station)?,
            LabelPrefix::Col,
            EntryPredicate::id_equals(id(TCONSTRUCT, station)?),
        );
    }

    // 铸造厂与冶炼炉（tag承载，分组键挂在blocks层级下）
    for ty in ["foundry", "smeltery"] {
        b = b.group(
            sub_id(TCONSTRUCT, "blocks", ty)?,
            LabelPrefix::Tag,
            EntryPredicate::has_tag(id(TCONSTRUCT, ty)?),
        );
    }

    // 桶：五个来源按bucket后缀归并，排除tconstruct的potion_bucket（独立分组），
    // kibe的经验桶按标识符单独补入
    let bucket_sources = EntryPredicate::any_of(vec![
        EntryPredicate::in_namespace(mc.clone()),
        EntryPredicate::in_namespace(tc.clone()),
        EntryPredicate::in_namespace(create.clone()),
        EntryPredicate::in_namespace(indrev.clone()),
        EntryPredicate::in_namespace(ad_astra.clone()),
    ]);
    let buckets = bucket_sources
        .and(EntryPredicate::path_suffix(None, "bucket"))
        .and(EntryPredicate::id_equals(id(TCONSTRUCT, "potion_bucket")?).negate())
        .or(EntryPredicate::id_equals(id(KIBE, "liquid_xp_bucket")?));
    b = b.group(id(MINECRAFT, "buckets")?, LabelPrefix::Col, buckets);

    // 药水桶
    b = b.group(
        sub_id(TCONSTRUCT, "buckets", "potion")?,
        LabelPrefix::Col,
        EntryPredicate::id_equals(id(TCONSTRUCT, "potion_bucket")?),
    );

    // 史莱姆草族
    for ty in ["ichor", "ender", "sky", "earth", "vanilla"] {
        b = b.group(
            sub_id(TCONSTRUCT, "slime_grasses", ty)?,
            LabelPrefix::Col,
            EntryPredicate::path_suffix(
                Some(tc.clone()),
                join_segments(&[Some(ty), Some("slime_grass")]),
            ),
        );
    }

    // 史莱姆土/凝胶/史莱姆块
    for suffix in ["slime_dirt", "congealed_slime", "slime"] {
        b = b.group(
            sub_id(TCONSTRUCT, "blocks", suffix)?,
            LabelPrefix::Col,
            EntryPredicate::path_suffix(Some(tc.clone()), suffix),
        );
    }

    // ===================== indrev =====================

    b = b.group(
        id(INDREV, "modules")?,
        LabelPrefix::Col,
        EntryPredicate::path_prefix(Some(indrev.clone()), "module"),
    );

    // ===================== item_filters =====================

    b = b.group_from_tag(id(ITEM_FILTERS, "filters")?);

    // ===================== kibe =====================

    // 彩色物件族；滑翔翼额外含左右翼部件
    for ty in ["sleeping_bag", "glider", "rune", "elevator"] {
        let mut family = dye_family(KIBE, &[Some(ty)])?;
        if ty == "glider" {
            family.push(id(KIBE, "glider_right_wing")?);
            family.push(id(KIBE, "glider_left_wing")?);
        }
        b = b.collection(sub_id(KIBE, "things", ty)?, family);
    }

    // ===================== promenade =====================

    b = b.group(
        id(PROMENADE, "piles")?,
        LabelPrefix::Col,
        EntryPredicate::path_suffix(Some(promenade.clone()), "pile"),
    );

    // 蘑菇与蘑菇方块
    for ty in [None, Some("block")] {
        let family = join_segments(&[Some("mushroom"), ty]);
        b = b.group(
            sub_id(PROMENADE, "blocks", &family)?,
            LabelPrefix::Col,
            EntryPredicate::path_contains(Some(promenade.clone()), family),
        );
    }

    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::EntryClassifier;
    use crate::core::{EntryKind, SimpleEntry};

    fn item(ns: &str, path: &str) -> SimpleEntry {
        SimpleEntry::new(EntryId::new(ns, path).unwrap(), EntryKind::Item)
    }

    fn fluid(ns: &str, path: &str) -> SimpleEntry {
        SimpleEntry::new(EntryId::new(ns, path).unwrap(), EntryKind::Fluid)
    }

    #[test]
    fn test_standard_table_builds() {
        let table = standard_table().unwrap();
        assert_eq!(table.len(), 130);

        for key in [
            id(MINECRAFT, "fluids").unwrap(),
            id(COMMON, "glass_blocks").unwrap(),
            id(MINECRAFT, "buckets").unwrap(),
            sub_id(TCONSTRUCT, "tools", "cleaver").unwrap(),
            sub_id(KIBE, "things", "glider").unwrap(),
            id(MINECRAFT, "splash_potions").unwrap(),
        ] {
            assert!(table.get(&key).is_some(), "missing group: {}", key);
        }
    }

    #[test]
    fn test_missing_namespace_fails_fast() {
        let registry = NamespaceRegistry::new();
        assert!(standard_table_with(&registry).is_err());
    }

    #[test]
    fn test_glass_cross_namespace_special_case() {
        let table = standard_table().unwrap();
        let classifier = EntryClassifier::new(table);

        let snapshot = vec![
            item("tconstruct", "soul_glass"),
            // 同后缀但来源不在特判名单，且无tag → 不归组
            item("promenade", "amber_glass"),
            // 熔融玻璃是流体 → 排除
            fluid("tconstruct", "molten_glass"),
        ];
        let result = classifier.classify(&snapshot);

        let members = result.members(&id(COMMON, "glass_blocks").unwrap()).unwrap();
        assert_eq!(members, &[EntryId::new("tconstruct", "soul_glass").unwrap()]);
    }

    #[test]
    fn test_bucket_group_exclusions() {
        let table = standard_table().unwrap();
        let classifier = EntryClassifier::new(table);

        let snapshot = vec![
            item("minecraft", "lava_bucket"),
            item("tconstruct", "copper_can_bucket"),
            // potion_bucket归入独立分组，不进通用桶分组
            item("tconstruct", "potion_bucket"),
            // 来源不在名单内
            item("promenade", "maple_sap_bucket"),
            // 按标识符显式补入
            item("kibe", "liquid_xp_bucket"),
        ];
        let result = classifier.classify(&snapshot);

        let buckets = result.members(&id(MINECRAFT, "buckets").unwrap()).unwrap();
        assert_eq!(
            buckets,
            &[
                EntryId::new("minecraft", "lava_bucket").unwrap(),
                EntryId::new("tconstruct", "copper_can_bucket").unwrap(),
                EntryId::new("kibe", "liquid_xp_bucket").unwrap(),
            ]
        );
        assert_eq!(
            result
                .members(&sub_id(TCONSTRUCT, "buckets", "potion").unwrap())
                .unwrap(),
            &[EntryId::new("tconstruct", "potion_bucket").unwrap()]
        );
    }

    #[test]
    fn test_colored_block_families() {
        let table = standard_table().unwrap();
        let rule = table
            .get(&sub_id(MINECRAFT, "blocks", "terracotta").unwrap())
            .unwrap();
        // 十六色全集
        match rule.predicate() {
            EntryPredicate::InSet(ids) => {
                assert_eq!(ids.len(), 16);
                assert!(ids.contains(&id(MINECRAFT, "light_blue_terracotta").unwrap()));
            }
            other => panic!("expected in_set predicate, got {}", other.describe()),
        }

        // 滑翔翼族：十六色 + 左右翼
        let glider = table.get(&sub_id(KIBE, "things", "glider").unwrap()).unwrap();
        match glider.predicate() {
            EntryPredicate::InSet(ids) => {
                assert_eq!(ids.len(), 18);
                assert!(ids.contains(&id(KIBE, "glider_left_wing").unwrap()));
            }
            other => panic!("expected in_set predicate, got {}", other.describe()),
        }
    }

    #[test]
    fn test_potion_family_keys() {
        let table = standard_table().unwrap();
        let classifier = EntryClassifier::new(table);

        let snapshot = vec![
            item("minecraft", "potion"),
            item("minecraft", "splash_potion"),
            item("minecraft", "lingering_potion"),
        ];
        let result = classifier.classify(&snapshot);

        assert_eq!(
            result.members(&id(MINECRAFT, "potions").unwrap()).unwrap(),
            &[id(MINECRAFT, "potion").unwrap()]
        );
        assert_eq!(
            result
                .members(&id(MINECRAFT, "splash_potions").unwrap())
                .unwrap(),
            &[id(MINECRAFT, "splash_potion").unwrap()]
        );
        assert_eq!(
            result
                .members(&id(MINECRAFT, "lingering_potions").unwrap())
                .unwrap(),
            &[id(MINECRAFT, "lingering_potion").unwrap()]
        );
    }

    #[test]
    fn test_spawn_eggs_any_namespace() {
        let table = standard_table().unwrap();
        let classifier = EntryClassifier::new(table);

        let snapshot = vec![
            item("minecraft", "cow_spawn_egg"),
            item("promenade", "capybara_spawn_egg"),
            item("minecraft", "egg"),
        ];
        let result = classifier.classify(&snapshot);

        assert_eq!(
            result
                .members(&id(MINECRAFT, "spawn_eggs").unwrap())
                .unwrap()
                .len(),
            2
        );
    }
}
