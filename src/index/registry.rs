use crate::util::dna;

/// 出现次数登记表：按符号升序保存序列（含隐式终止符）中每个符号的总数。
/// 终止符最小，恒排在表首。有了前缀累计就不必保存 F 列，
/// LF 定位可以直接在这张表上完成。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    /// 升序的 (符号, 出现次数) 表
    pub entries: Vec<(u8, usize)>,
}

/// LF 定位命中：符号在排序旋转矩阵中的绝对行号，以及该符号的总出现次数。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LfHit {
    pub position: usize,
    pub count: usize,
}

impl Registry {
    /// 统计原始序列的符号出现次数，终止符在此处按概念追加计入。
    /// 空序列得到只含终止符的登记表。
    pub fn build(seq: &[u8]) -> Self {
        let mut freq = [0usize; 256];
        for &b in seq {
            freq[b as usize] += 1;
        }
        freq[dna::SENTINEL as usize] += 1;

        let mut entries = Vec::new();
        for (sym, &count) in freq.iter().enumerate() {
            if count > 0 {
                entries.push((sym as u8, count));
            }
        }
        Self { entries }
    }

    /// 符号总数，恒等于序列长度 + 1。
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// LF 定位：给定符号及其在 L 列中的组内序号，返回该符号占据的
    /// 绝对行号与该符号的总出现次数。行号 = 所有更小符号的累计数 + 序号。
    /// 符号不在登记表中时返回 None，调用方据此判定整个查询不可能命中。
    pub fn lf_map(&self, symbol: u8, rank: usize) -> Option<LfHit> {
        let mut base = 0usize;
        for &(sym, count) in &self.entries {
            if sym < symbol {
                base += count;
            } else if sym == symbol {
                return Some(LfHit { position: base + rank, count });
            } else {
                // entries 升序，后面不会再出现
                break;
            }
        }
        None
    }

    /// 种子查询：模式末符号的全部候选行构成 `[start, start + count)`
    /// 的连续区间，返回 (start, count)。
    pub fn seed_range(&self, symbol: u8) -> Option<(usize, usize)> {
        self.lf_map(symbol, 0).map(|hit| (hit.position, hit.count))
    }

    /// 步进查询：由 L 列某一项的 (符号, 组内序号) 取得前驱所在的行号。
    pub fn lf_step(&self, symbol: u8, rank: usize) -> Option<usize> {
        self.lf_map(symbol, rank).map(|hit| hit.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_seq(len: usize) -> Vec<u8> {
        let bases = [b'A', b'C', b'G', b'T'];
        let mut x: u32 = 1_234_567;
        let mut v = Vec::with_capacity(len);
        for _ in 0..len {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            v.push(bases[(x >> 16) as usize % 4]);
        }
        v
    }

    #[test]
    fn registry_basic() {
        // "ACA" -> [($,1), (A,2), (C,1)]
        let reg = Registry::build(b"ACA");
        assert_eq!(reg.entries, vec![(b'$', 1), (b'A', 2), (b'C', 1)]);
        assert_eq!(reg.total(), 4);
    }

    #[test]
    fn registry_empty_sequence() {
        let reg = Registry::build(b"");
        assert_eq!(reg.entries, vec![(b'$', 1)]);
        assert_eq!(reg.total(), 1);
    }

    #[test]
    fn counts_sum_to_len_plus_one() {
        for len in 0..=50 {
            let seq = make_seq(len);
            assert_eq!(Registry::build(&seq).total(), len + 1);
        }
    }

    #[test]
    fn lf_map_resolves_absolute_rows() {
        let reg = Registry::build(b"ACA");
        // 终止符行恒为第 0 行
        assert_eq!(reg.lf_map(b'$', 0), Some(LfHit { position: 0, count: 1 }));
        assert_eq!(reg.lf_map(b'A', 0), Some(LfHit { position: 1, count: 2 }));
        assert_eq!(reg.lf_map(b'A', 1), Some(LfHit { position: 2, count: 2 }));
        assert_eq!(reg.lf_map(b'C', 0), Some(LfHit { position: 3, count: 1 }));
    }

    #[test]
    fn lf_map_absent_symbol_is_none() {
        let reg = Registry::build(b"ACA");
        assert_eq!(reg.lf_map(b'T', 0), None);
        assert_eq!(reg.seed_range(b'T'), None);
        assert_eq!(reg.lf_step(b'T', 0), None);
    }

    #[test]
    fn seed_range_and_step_agree_with_lf_map() {
        let reg = Registry::build(b"ACA");
        assert_eq!(reg.seed_range(b'A'), Some((1, 2)));
        assert_eq!(reg.seed_range(b'C'), Some((3, 1)));
        assert_eq!(reg.lf_step(b'A', 1), Some(2));
    }
}
