use anyhow::Result;
use rand::Rng;

/// 终止符：固定为 `$`（0x24），按字节序小于所有字母表符号。
pub const SENTINEL: u8 = b'$';

/// 默认字母表（4 符号 DNA）。只约束随机生成；
/// 索引结构本身接受任意非终止符字节。
pub const ALPHABET: [u8; 4] = *b"ACGT";

/// 在序列末尾追加终止符。
pub fn add_sentinel(seq: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.len() + 1);
    out.extend_from_slice(seq);
    out.push(SENTINEL);
    out
}

/// 校验输入中不含终止符。终止符一旦在序列内部出现，
/// 旋转排序的全序即被破坏，得到的偏移不再可信，必须拒绝。
pub fn ensure_no_sentinel(input: &[u8]) -> Result<()> {
    if let Some(pos) = input.iter().position(|&b| b == SENTINEL) {
        anyhow::bail!(
            "sentinel '{}' not allowed inside input (found at position {})",
            SENTINEL as char,
            pos
        );
    }
    Ok(())
}

/// 规整输入：统一为大写字节，不做字母表替换。
pub fn normalize_seq(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(u8::to_ascii_uppercase).collect()
}

/// 生成指定长度的随机序列，符号均匀取自 [`ALPHABET`]。
pub fn random_seq<R: Rng>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        out.push(ALPHABET[rng.gen_range(0..ALPHABET.len())]);
    }
    out
}

/// 把查询串插入目标序列 `times` 次，用于构造必然可命中的测试样例。
/// 插入点对齐到查询长度的整数倍，多次插入不会拆散先前插入的副本。
pub fn insert_random<R: Rng>(rng: &mut R, target: &[u8], query: &[u8], times: usize) -> Vec<u8> {
    let mut out = target.to_vec();
    if query.is_empty() {
        return out;
    }
    let step = query.len();
    for _ in 0..times {
        let slots = out.len() / step + 1;
        let at = (step * rng.gen_range(0..slots)).min(out.len());
        let tail = out.split_off(at);
        out.extend_from_slice(query);
        out.extend_from_slice(&tail);
    }
    out
}
