//! rscollapse classification demo
//! rscollapse 可折叠分组分类演示
//! 核心流程：
//! 1. 构建内存目录快照（含多分组归属/跨来源特判条目）
//! 2. 初始化全局分类器（标准预置规则表）
//! 3. 执行分类并输出非空分组与JSON导出
//!
//! 运行命令:
//! cargo run --example classify_demo --features preset-rules

use rscollapse::{classifier, EntryId, EntryKind, SimpleEntry};

fn item(ns: &str, path: &str) -> SimpleEntry {
    SimpleEntry::new(EntryId::new(ns, path).unwrap(), EntryKind::Item)
}

fn tagged(ns: &str, path: &str, tags: &[&str]) -> SimpleEntry {
    let tags = tags
        .iter()
        .map(|t| t.parse::<EntryId>().unwrap())
        .collect();
    SimpleEntry::with_tags(EntryId::new(ns, path).unwrap(), EntryKind::Item, tags)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // ========== 1. 构建目录快照 ==========
    let snapshot = vec![
        tagged("minecraft", "oak_planks", &["minecraft:planks"]),
        tagged("minecraft", "birch_planks", &["minecraft:planks"]),
        item("minecraft", "cow_spawn_egg"),
        item("promenade", "capybara_spawn_egg"),
        item("minecraft", "lava_bucket"),
        item("tconstruct", "copper_can_bucket"),
        item("tconstruct", "potion_bucket"),
        item("kibe", "liquid_xp_bucket"),
        tagged("minecraft", "tinted_glass", &["c:glass"]),
        item("tconstruct", "soul_glass"),
        item("minecraft", "stick"),
        SimpleEntry::new(
            EntryId::new("minecraft", "water").unwrap(),
            EntryKind::Fluid,
        ),
    ];
    println!("Catalog snapshot: {} entries", snapshot.len());

    // ========== 2. 分类（全局分类器，惰性加载标准预置规则表） ==========
    let result = classifier::classify_log(&snapshot)?;

    // ========== 3. 输出非空分组 ==========
    println!("----------------------------------------------------------------------");
    for group in result.non_empty() {
        println!("{} ({})", group.group_key, group.label_key);
        for member in &group.members {
            println!("    {}", member);
        }
    }

    println!("----------------------------------------------------------------------");
    println!("JSON export: {}", result.to_json()?);

    Ok(())
}
