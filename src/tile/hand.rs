use super::tile::Tile;
use smallvec::SmallVec;

/// 一手牌的张数
pub const HAND_SIZE: usize = 17;

/// 手牌（有序，17 张）
///
/// 题目与玩家提交的答案都是这个类型；题目按（花色、数字）排序
pub type Hand = [Tile; HAND_SIZE];

/// 牌的计数表
///
/// 以 34 种牌面为下标的定长数组，每种最多 4 张
///
/// 胡牌判定、评分和选牌记录都用它统计牌的数量，复制开销很小，递归时直接按值传递
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCounts {
    /// 每种牌的数量（0-4）
    counts: [u8; Tile::KIND_COUNT],
    /// 总牌数（用于快速查询）
    total_count: usize,
}

impl TileCounts {
    /// 创建空计数表
    pub fn new() -> Self {
        Self {
            counts: [0; Tile::KIND_COUNT],
            total_count: 0,
        }
    }

    /// 每种牌各 4 张的完整计数表（136 张）
    pub fn full() -> Self {
        Self {
            counts: [Tile::COPIES; Tile::KIND_COUNT],
            total_count: Tile::TOTAL_COUNT,
        }
    }

    /// 从一组牌统计
    ///
    /// 超过 4 张或无效的牌会被忽略，调用方可以对比 `total_count` 发现
    pub fn from_tiles<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> Self {
        let mut counts = Self::new();
        for &tile in tiles {
            counts.add_tile(tile);
        }
        counts
    }

    /// 添加一张牌
    ///
    /// # Returns
    ///
    /// - `true`：成功添加
    /// - `false`：该牌已有 4 张，或牌无效
    pub fn add_tile(&mut self, tile: Tile) -> bool {
        let Some(index) = tile.to_index() else {
            return false;
        };
        let count = &mut self.counts[index];
        if *count >= Tile::COPIES {
            return false;
        }
        *count += 1;
        self.total_count += 1;
        true
    }

    /// 移除一张牌
    ///
    /// # Returns
    ///
    /// - `true`：成功移除
    /// - `false`：没有该牌
    pub fn remove_tile(&mut self, tile: Tile) -> bool {
        self.take(tile, 1)
    }

    /// 一次移除 n 张同样的牌，数量不足时不做任何修改
    pub fn take(&mut self, tile: Tile, n: u8) -> bool {
        let Some(index) = tile.to_index() else {
            return false;
        };
        let count = &mut self.counts[index];
        if *count < n {
            return false;
        }
        *count -= n;
        self.total_count -= n as usize;
        true
    }

    /// 移除某种牌的全部剩余张数，返回移除的张数
    pub fn remove_all(&mut self, tile: Tile) -> u8 {
        let n = self.tile_count(tile);
        self.take(tile, n);
        n
    }

    /// 检查是否有某张牌
    pub fn has_tile(&self, tile: Tile) -> bool {
        self.tile_count(tile) > 0
    }

    /// 查询某张牌的数量
    pub fn tile_count(&self, tile: Tile) -> u8 {
        tile.to_index().map_or(0, |index| self.counts[index])
    }

    /// 获取总牌数
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// 检查是否为空
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// 排序最靠前的一张牌
    pub fn first_tile(&self) -> Option<Tile> {
        self.counts
            .iter()
            .position(|&c| c > 0)
            .and_then(Tile::from_index)
    }

    /// 转换为排序后的牌向量
    ///
    /// 排序规则：先按花色（万、筒、条、字），再按数字
    pub fn to_sorted_vec(&self) -> Vec<Tile> {
        let mut result = Vec::with_capacity(self.total_count);
        for tile in Tile::all() {
            for _ in 0..self.tile_count(tile) {
                result.push(tile);
            }
        }
        result
    }

    /// 获取所有不同的牌（按排序顺序）
    pub fn distinct_tiles(&self) -> SmallVec<[Tile; HAND_SIZE]> {
        Tile::all().filter(|&t| self.has_tile(t)).collect()
    }
}

impl Default for TileCounts {
    fn default() -> Self {
        Self::new()
    }
}
