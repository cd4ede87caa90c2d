use anyhow::Result;

use crate::index::ranked::{build_ranked_l, RankedEntry};
use crate::index::registry::Registry;
use crate::util::dna;

/// 朴素 FM 风格查询结构：
/// - 登记表提供任意符号的前缀累计（LF 定位），无需保存 F 列。
/// - 带序号 L 列提供每行的 (符号, 组内序号, 旋转偏移)。
///
/// 两者都是单一输入序列的只读派生物，构建后不再修改；
/// 宿主程序可按序列缓存整个结构以复用多次查询。
#[derive(Debug, Clone)]
pub struct BwtIndex {
    pub registry: Registry,
    pub ranked: Vec<RankedEntry>,
}

impl BwtIndex {
    /// 从原始序列（不含终止符）构建。序列内部出现终止符属非法输入，
    /// 直接拒绝而不是产出错误偏移。
    pub fn build(seq: &[u8]) -> Result<Self> {
        dna::ensure_no_sentinel(seq)?;
        let registry = Registry::build(seq);
        let ranked = build_ranked_l(seq, &registry);
        Ok(Self { registry, ranked })
    }

    /// BWT 逆变换：从第 0 行（终止符旋转）出发沿 LF 回溯，逐个收集符号，
    /// 遇到终止符停止；反转累加器即得 `原序列 + 终止符`。
    /// 共 n 步 LF，每步对登记表一次 O(|字母表|) 扫描。
    pub fn invert(&self) -> Vec<u8> {
        let mut reversed = vec![dna::SENTINEL];
        let mut cur = &self.ranked[0];
        while cur.symbol != dna::SENTINEL {
            reversed.push(cur.symbol);
            let next = match self.registry.lf_step(cur.symbol, cur.rank) {
                Some(pos) => pos,
                // L 列中的符号必然已计入登记表
                None => unreachable!("L column symbol missing from registry"),
            };
            cur = &self.ranked[next];
        }
        reversed.reverse();
        reversed
    }

    /// 反向搜索精确匹配。
    ///
    /// 返回值区分两种"无结果"：
    /// - `None`：模式末符号不在登记表中，整个查询不可能命中；
    /// - `Some(空表)`：种子行存在，但没有候选走完整个模式。
    ///
    /// 命中时返回升序偏移表，每个偏移是模式**末**符号在原序列
    /// （不含终止符）中的 0 起位置；起始位置为 `offset - len + 1`。
    pub fn find_all(&self, pattern: &[u8]) -> Result<Option<Vec<usize>>> {
        anyhow::ensure!(!pattern.is_empty(), "pattern must not be empty");
        dna::ensure_no_sentinel(pattern)?;

        let last = pattern[pattern.len() - 1];
        let (start, count) = match self.registry.seed_range(last) {
            Some(range) => range,
            None => return Ok(None),
        };

        // 种子区间 [start, start+count) 覆盖末符号的全部出现，
        // 各候选独立走完剩余模式
        let rest = &pattern[..pattern.len() - 1];
        let mut offsets = Vec::new();
        for seed in &self.ranked[start..start + count] {
            if self.walk_back(seed, rest) {
                offsets.push(seed.offset);
            }
        }
        offsets.sort_unstable();
        Ok(Some(offsets))
    }

    /// 从种子行出发自右向左核对剩余模式：每步先比对当前行符号，
    /// 再经 LF 步进到前驱行；模式耗尽即确认命中。
    fn walk_back(&self, seed: &RankedEntry, rest: &[u8]) -> bool {
        let mut cur = seed;
        for &expected in rest.iter().rev() {
            if cur.symbol != expected {
                return false;
            }
            let next = match self.registry.lf_step(cur.symbol, cur.rank) {
                Some(pos) => pos,
                None => return false,
            };
            cur = &self.ranked[next];
        }
        true
    }
}

/// BWT 逆变换的独立入口：重建 `seq + 终止符`。
pub fn invert(seq: &[u8]) -> Result<Vec<u8>> {
    Ok(BwtIndex::build(seq)?.invert())
}

/// 反向搜索的独立入口。每次调用都会重建索引；
/// 同一目标的批量查询请复用 [`BwtIndex`]。
pub fn match_offsets(seq: &[u8], pattern: &[u8]) -> Result<Option<Vec<usize>>> {
    BwtIndex::build(seq)?.find_all(pattern)
}
