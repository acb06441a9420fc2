//! Held entry tag query demo
//! 手持条目tag查询演示
//!
//! 运行命令:
//! cargo run --example held_tags_demo --features preset-rules

use rscollapse::{EntryId, EntryKind, HeldTagsReport, SimpleEntry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let held = SimpleEntry::with_tags(
        EntryId::new("minecraft", "oak_planks")?,
        EntryKind::Item,
        vec![
            EntryId::new("minecraft", "planks")?,
            EntryId::new("c", "wooden_blocks")?,
        ],
    );

    let report = HeldTagsReport::for_entry(&held);
    println!("entry: {}", report.entry);
    println!("summary key: {}", report.summary_key());
    for line in report.tag_lines() {
        println!("    {}", line);
    }

    Ok(())
}
