use crate::util::dna;

/// 一条循环旋转：旋转后的完整串与其起始偏移。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    pub text: Vec<u8>,
    pub offset: usize,
}

/// 朴素构建排序旋转矩阵：为含终止符的序列（长度 m = n+1）生成全部
/// m 条循环旋转并按完整串的字典序排序。O(m² log m) 次长度 m 的比较，
/// 属参考实现，长序列应换用后缀数组构建，可观察输出（行序、偏移）不变。
pub fn build_matrix(seq: &[u8]) -> Vec<Rotation> {
    let text = dna::add_sentinel(seq);
    let m = text.len();
    let mut matrix = Vec::with_capacity(m);
    for offset in 0..m {
        let mut rotated = Vec::with_capacity(m);
        rotated.extend_from_slice(&text[offset..]);
        rotated.extend_from_slice(&text[..offset]);
        matrix.push(Rotation { text: rotated, offset });
    }
    // 终止符唯一且最小，任意两行不可能相等，排序结果是严格全序
    matrix.sort_unstable_by(|a, b| a.text.cmp(&b.text));
    matrix
}

/// 提取 L 列：每行旋转的末符号与该行的起始偏移，保持矩阵行序。
pub fn l_column(matrix: &[Rotation]) -> Vec<(u8, usize)> {
    matrix
        .iter()
        .map(|row| (row.text[row.text.len() - 1], row.offset))
        .collect()
}
