use super::hand::{TileCounts, HAND_SIZE};
use super::tile::{Suit, Tile};
use derive_more::{Display, Error};
use smallvec::SmallVec;
use std::collections::HashMap;
use tracing::debug;

/// 一手胡牌中面子的数量
pub const MELD_COUNT: usize = 5;

/// 胡牌判定错误
///
/// 都属于调用方违反前置条件，不是"不能胡"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum WinCheckError {
    /// 牌数不是 17 张
    #[display("胡牌判定需要 17 张牌，实际 {found} 张")]
    WrongTileCount { found: usize },
    /// 存在无效的牌，或同一种牌超过 4 张
    #[display("牌组中有无效的牌")]
    InvalidTiles,
    /// 牌组无法组成胡牌（只在要求必须能胡的场合使用）
    #[display("无法胡牌")]
    NotWinning,
}

/// 胡牌拆解结果：1 个对子 + 5 个面子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinResult {
    /// 对子（雀头）
    pub pair: Tile,
    /// 顺子/刻子组合，按排序顺序
    pub groups: SmallVec<[Group; MELD_COUNT]>,
}

/// 面子（顺子或刻子）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Group {
    /// 顺子（同花色连续三张数牌）
    Sequence { suit: Suit, start: u8 },
    /// 刻子（三张相同牌）
    Triplet { tile: Tile },
}

impl Group {
    /// 面子是否合法：字牌不能组成顺子，顺子起点为 1-7
    pub fn is_valid(&self) -> bool {
        match *self {
            Group::Sequence { suit, start } => {
                suit != Suit::Honor && start >= Tile::MIN_RANK && start + 2 <= Tile::MAX_RANK
            }
            Group::Triplet { tile } => tile.is_valid(),
        }
    }

    /// 组成这一组的三张牌，不合法的面子返回空
    pub fn tiles(&self) -> SmallVec<[Tile; 3]> {
        if !self.is_valid() {
            return SmallVec::new();
        }
        match *self {
            Group::Sequence { suit, start } => {
                (0..3).filter_map(|k| Tile::new(suit, start + k)).collect()
            }
            Group::Triplet { tile } => SmallVec::from_elem(tile, 3),
        }
    }
}

/// 胡牌判定器
///
/// 递归回溯：先枚举对子，再从最小的牌开始依次尝试刻子、顺子
///
/// 按计数表缓存结果，同一手牌无论顺序如何都只计算一次
pub struct WinChecker {
    /// 结果缓存
    result_cache: HashMap<TileCounts, Option<WinResult>>,
    /// 最大缓存大小（超过此大小后清空缓存）
    max_cache_size: usize,
}

impl WinChecker {
    /// 创建新的胡牌判定器
    pub fn new() -> Self {
        Self::with_cache_size(1000)
    }

    /// 创建新的胡牌判定器（自定义缓存大小）
    pub fn with_cache_size(max_cache_size: usize) -> Self {
        Self {
            result_cache: HashMap::new(),
            max_cache_size,
        }
    }

    /// 判定 17 张牌能否胡牌，并给出拆解
    ///
    /// # 算法
    ///
    /// 1. 统计每种牌的数量
    /// 2. 按排序顺序尝试每个出现至少 2 次的牌作为对子
    /// 3. 剩余 15 张交给 `find_groups` 拆成 5 个面子
    ///
    /// # Errors
    ///
    /// 牌数不是 17 张或含有无效的牌
    pub fn check_win(&mut self, tiles: &[Tile]) -> Result<Option<WinResult>, WinCheckError> {
        let counts = count_hand(tiles)?;

        if let Some(cached) = self.result_cache.get(&counts) {
            return Ok(cached.clone());
        }

        let result = decompose_counts(&counts);

        if self.result_cache.len() >= self.max_cache_size {
            self.result_cache.clear();
        }
        self.result_cache.insert(counts, result.clone());
        Ok(result)
    }

    /// 判定是否胡牌
    pub fn is_win(&mut self, tiles: &[Tile]) -> Result<bool, WinCheckError> {
        Ok(self.check_win(tiles)?.is_some())
    }

    /// 清空缓存
    pub fn clear_cache(&mut self) {
        self.result_cache.clear();
    }

    /// 获取当前缓存大小
    pub fn cache_size(&self) -> usize {
        self.result_cache.len()
    }
}

impl Default for WinChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// 统计 17 张牌，检查前置条件
fn count_hand(tiles: &[Tile]) -> Result<TileCounts, WinCheckError> {
    if tiles.len() != HAND_SIZE {
        return Err(WinCheckError::WrongTileCount { found: tiles.len() });
    }
    let counts = TileCounts::from_tiles(tiles);
    if counts.total_count() != tiles.len() {
        return Err(WinCheckError::InvalidTiles);
    }
    Ok(counts)
}

/// 枚举对子，剩余部分拆成面子
fn decompose_counts(counts: &TileCounts) -> Option<WinResult> {
    for pair in counts.distinct_tiles() {
        let mut rest = *counts;
        if !rest.take(pair, 2) {
            continue;
        }
        if let Some(groups) = find_groups(rest) {
            if groups.len() == MELD_COUNT {
                return Some(WinResult { pair, groups });
            }
        }
    }
    None
}

/// 递归查找顺子/刻子组合
///
/// 每次取排序最靠前的牌 f：先试刻子，再试顺子（f, f+1, f+2）；两条分支都失败则返回 None
///
/// 计数表按值传入，分支之间互不影响
fn find_groups(counts: TileCounts) -> Option<SmallVec<[Group; MELD_COUNT]>> {
    let first = match counts.first_tile() {
        Some(tile) => tile,
        None => return Some(SmallVec::new()),
    };

    // 尝试刻子（三张相同牌）
    let mut rest = counts;
    if rest.take(first, 3) {
        if let Some(mut groups) = find_groups(rest) {
            groups.insert(0, Group::Triplet { tile: first });
            return Some(groups);
        }
    }

    // 尝试顺子（连续三张牌）
    let second = first.successor()?;
    let third = second.successor()?;
    let mut rest = counts;
    if rest.remove_tile(first) && rest.remove_tile(second) && rest.remove_tile(third) {
        if let Some(mut groups) = find_groups(rest) {
            groups.insert(
                0,
                Group::Sequence {
                    suit: first.suit(),
                    start: first.rank(),
                },
            );
            return Some(groups);
        }
    }

    None
}

/// 判定计数表中的牌能否恰好拆成若干面子
///
/// 空表视为可以
pub fn can_form_melds(counts: &TileCounts) -> bool {
    find_groups(*counts).is_some()
}

/// 判定 17 张牌能否胡牌
///
/// # Errors
///
/// 牌数不是 17 张或含有无效的牌
pub fn try_can_win(tiles: &[Tile]) -> Result<bool, WinCheckError> {
    let counts = count_hand(tiles)?;
    Ok(decompose_counts(&counts).is_some())
}

/// 便捷函数：判定 17 张牌能否胡牌
///
/// 牌数不对或含有无效的牌属于调用方错误：记录日志并返回 false，需要错误信息时用 `try_can_win`
pub fn can_win(tiles: &[Tile]) -> bool {
    try_can_win(tiles).unwrap_or_else(|err| {
        debug!(%err, len = tiles.len(), "can_win precondition violated");
        false
    })
}

/// 便捷函数：获取胡牌拆解
pub fn check_win(tiles: &[Tile]) -> Result<Option<WinResult>, WinCheckError> {
    let counts = count_hand(tiles)?;
    Ok(decompose_counts(&counts))
}
