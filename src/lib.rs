//! # bwt-rust
//!
//! 朴素但完全正确的 Burrows-Wheeler 变换工具集。
//!
//! 本 crate 围绕排序旋转矩阵实现 BWT 的构建、逆变换与 FM 风格的
//! 反向搜索精确匹配：
//!
//! - **登记表**：按符号升序统计出现次数，前缀累计即 LF 定位，无需 F 列
//! - **旋转矩阵**：含终止符序列的全部循环旋转按字典序排序（O(m² log m) 参考实现）
//! - **带序号 L 列**：L 列条目附加同符号组内序号与旋转偏移
//! - **逆变换**：从终止符行沿 LF 回溯重建原序列
//! - **反向搜索**：从模式末符号播种，逐符号回溯核对，产出升序命中偏移
//!
//! ## 快速示例
//!
//! ```rust,no_run
//! use bwt_rust::index::fm::BwtIndex;
//!
//! let target = b"ACGTACGTAGCTGATCGTAG";
//! let index = BwtIndex::build(target).unwrap();
//!
//! // 精确匹配：偏移指向每处命中的末符号（升序）
//! if let Some(hits) = index.find_all(b"GCTGATC").unwrap() {
//!     println!("Found {} occurrences", hits.len());
//! }
//!
//! // BWT 逆变换：重建 `目标 + '$'`
//! let rebuilt = index.invert();
//! assert_eq!(&rebuilt[..rebuilt.len() - 1], target);
//! ```
//!
//! ## 模块说明
//!
//! - [`index`] — 登记表、旋转矩阵、带序号 L 列与 `BwtIndex` 查询结构
//! - [`align`] — 批量映射驱动与对齐窗口输出
//! - [`util`] — 字母表 / 终止符配置、随机序列与测试样例构造

pub mod align;
pub mod index;
pub mod util;
