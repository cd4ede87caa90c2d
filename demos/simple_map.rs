//! 演示如何在 library 模式下使用 bwt-rust 完成构建、逆变换与映射。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_map
//! ```

use bwt_rust::align;
use bwt_rust::index::fm::BwtIndex;
use bwt_rust::index::registry::Registry;
use bwt_rust::index::rotation;

fn main() {
    // 1. 小序列上演示排序旋转矩阵
    let small = b"GATTACA";
    println!("序列: {}", std::str::from_utf8(small).unwrap());
    println!("排序旋转矩阵（行 = 旋转串 + 起始偏移）:");
    for row in rotation::build_matrix(small) {
        println!("  {} {}", std::str::from_utf8(&row.text).unwrap(), row.offset);
    }

    // 2. 出现次数登记表
    let reg = Registry::build(small);
    println!("\n登记表（符号升序，含终止符）:");
    for (symbol, count) in &reg.entries {
        println!("  {} -> {}", *symbol as char, count);
    }

    // 3. 构建查询结构并做逆变换 round-trip
    let target = b"ACGTACGTAGCTGATCGTAGCTAGCTAGCTGAT";
    let index = BwtIndex::build(target).unwrap();
    let rebuilt = index.invert();
    println!("\n目标序列: {}", std::str::from_utf8(target).unwrap());
    println!("逆变换结果: {}", std::str::from_utf8(&rebuilt).unwrap());
    assert_eq!(&rebuilt[..rebuilt.len() - 1], target);

    // 4. 反向搜索精确匹配并打印对齐窗口
    let pattern = b"GCTGAT";
    let hits = index.find_all(pattern).unwrap();
    match &hits {
        Some(offs) => println!("\n匹配 '{}': 共 {} 处", std::str::from_utf8(pattern).unwrap(), offs.len()),
        None => println!("\n匹配 '{}': 末符号不存在", std::str::from_utf8(pattern).unwrap()),
    }

    let mut out = std::io::stdout();
    align::write_alignments(&mut out, target, pattern, hits.as_deref()).unwrap();

    println!("完成！");
}
