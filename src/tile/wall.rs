use super::hand::TileCounts;
use super::tile::Tile;
use super::win_check::Group;
use rand::Rng;

/// 牌池（TilePool）
///
/// 存储尚未被取走的牌，每种牌最多 4 张，共 136 张
///
/// 出题时从这里按张随机抽样、按组取牌；计数永远不会为负
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePool {
    /// 剩余牌的计数
    remaining: TileCounts,
}

impl TilePool {
    /// 创建一个完整的牌池（136 张）
    pub fn new() -> Self {
        Self {
            remaining: TileCounts::full(),
        }
    }

    /// 从剩余的牌中均匀随机选一张（不取走）
    ///
    /// 按张均匀，即剩余张数多的牌面被选中的概率更高
    ///
    /// # Returns
    ///
    /// - `Some(Tile)`：选中的牌
    /// - `None`：牌池已空
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Tile> {
        if self.is_empty() {
            return None;
        }
        let mut target = rng.gen_range(0..self.remaining_count());
        for tile in Tile::all() {
            let count = self.remaining.tile_count(tile) as usize;
            if target < count {
                return Some(tile);
            }
            target -= count;
        }
        None
    }

    /// 取走 n 张同样的牌，数量不足时不做任何修改
    pub fn take(&mut self, tile: Tile, n: u8) -> bool {
        self.remaining.take(tile, n)
    }

    /// 取走某种牌的全部剩余张数
    pub fn remove_all(&mut self, tile: Tile) -> u8 {
        self.remaining.remove_all(tile)
    }

    /// 牌池中是否还有足够的牌组成这一组
    pub fn can_take_group(&self, group: &Group) -> bool {
        match *group {
            Group::Triplet { tile } => self.count(tile) >= 3,
            Group::Sequence { .. } => {
                let tiles = group.tiles();
                tiles.len() == 3 && tiles.iter().all(|&t| self.count(t) >= 1)
            }
        }
    }

    /// 取走一组牌，不够时不做任何修改
    pub fn take_group(&mut self, group: &Group) -> bool {
        if !self.can_take_group(group) {
            return false;
        }
        for tile in group.tiles() {
            self.remaining.remove_tile(tile);
        }
        true
    }

    /// 某种牌的剩余张数
    pub fn count(&self, tile: Tile) -> u8 {
        self.remaining.tile_count(tile)
    }

    /// 查询剩余牌数
    pub fn remaining_count(&self) -> usize {
        self.remaining.total_count()
    }

    /// 检查牌池是否为空
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

}

impl Default for TilePool {
    fn default() -> Self {
        Self::new()
    }
}
