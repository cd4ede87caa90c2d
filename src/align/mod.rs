use anyhow::Result;
use rayon::prelude::*;
use std::io::Write;

use crate::index::fm::BwtIndex;

/// 批量映射选项
#[derive(Debug, Clone, Copy)]
pub struct MapOpt {
    pub threads: usize,
}

impl Default for MapOpt {
    fn default() -> Self {
        Self { threads: 1 }
    }
}

/// 单条查询的映射结果。
/// `offsets` 为 None 表示查询末符号不存在于目标（整条查询判负）；
/// Some 内是升序的匹配末偏移，可能为空。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapResult {
    pub query: Vec<u8>,
    pub offsets: Option<Vec<usize>>,
}

/// 对同一目标映射一批查询：索引只建一次，查询之间相互独立，
/// threads > 1 时经 rayon 线程池并行执行，结果顺序与输入一致。
pub fn map_queries(target: &[u8], queries: &[Vec<u8>], opt: MapOpt) -> Result<Vec<MapResult>> {
    let index = BwtIndex::build(target)?;

    if opt.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(opt.threads)
            .build()?;
        pool.install(|| {
            queries
                .par_iter()
                .map(|q| {
                    Ok(MapResult {
                        query: q.clone(),
                        offsets: index.find_all(q)?,
                    })
                })
                .collect()
        })
    } else {
        queries
            .iter()
            .map(|q| {
                Ok(MapResult {
                    query: q.clone(),
                    offsets: index.find_all(q)?,
                })
            })
            .collect()
    }
}

/// 打印一条查询的全部对齐窗口：每处命中输出
/// `range-> [start:end]`、按 start 缩进的查询串、目标串与一个空行。
/// 无命中（末符号缺失或候选全部淘汰）输出 `read/s not mappable`。
pub fn write_alignments(
    out: &mut dyn Write,
    target: &[u8],
    query: &[u8],
    offsets: Option<&[usize]>,
) -> Result<()> {
    match offsets {
        Some(offs) if !offs.is_empty() => {
            for &end in offs {
                let start = end + 1 - query.len();
                writeln!(out, "range-> [{}:{}]", start, start + query.len())?;
                writeln!(out, "{}{}", " ".repeat(start), String::from_utf8_lossy(query))?;
                writeln!(out, "{}\n", String::from_utf8_lossy(target))?;
            }
        }
        _ => {
            writeln!(out, "read/s not mappable")?;
        }
    }
    Ok(())
}
