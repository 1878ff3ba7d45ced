use crate::game::constants::{COPIES_PER_TILE, HAND_SIZE};
use crate::tile::{Hand, Tile, TileCounts};
use derive_more::{Display, Error};

/// 选牌操作被拒绝的原因
///
/// 被拒绝的操作不会修改任何状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum LedgerError {
    /// 牌面不存在（数字超出范围）
    #[display("无效的牌 {tile}")]
    InvalidTile { tile: Tile },
    /// 同一种牌已经选了 4 张
    #[display("{tile} 已经选满 4 张")]
    CopyLimit { tile: Tile },
    /// 答案区已满
    #[display("答案已满")]
    AnswerFull,
    /// 该格已锁定（上一轮位置和牌都正确）
    #[display("第 {slot} 格已锁定")]
    SlotLocked { slot: usize },
    /// 该格没有牌
    #[display("第 {slot} 格没有牌")]
    SlotEmpty { slot: usize },
    /// 格子编号超出范围
    #[display("第 {slot} 格不存在")]
    SlotOutOfRange { slot: usize },
    /// 作答次数已用完或已经答对，需要换题
    #[display("本题已结束")]
    SessionOver,
}

/// 选牌记录（作答状态）
///
/// 记录当前这一列答案的 17 个格子、每种牌已选的张数，以及跨轮保留的锁定格
///
/// 不变式：锁定格 i 上的牌一定等于 `answer[i]`，且不能被移除
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionLedger {
    /// 当前答案，None 表示空格
    answer: [Option<Tile>; HAND_SIZE],
    /// 锁定的牌，同一道题内只增不减
    locked: [Option<Tile>; HAND_SIZE],
    /// 当前答案中每种牌的张数（包括锁定格）
    counts: TileCounts,
}

impl SelectionLedger {
    /// 创建空的选牌记录
    pub fn new() -> Self {
        Self {
            answer: [None; HAND_SIZE],
            locked: [None; HAND_SIZE],
            counts: TileCounts::new(),
        }
    }

    /// 把一张牌放进第一个空格
    ///
    /// # Returns
    ///
    /// 放入的格子编号
    ///
    /// # Errors
    ///
    /// 牌无效、该牌已选满 4 张，或答案区没有空格
    pub fn place(&mut self, tile: Tile) -> Result<usize, LedgerError> {
        if !tile.is_valid() {
            return Err(LedgerError::InvalidTile { tile });
        }
        if self.counts.tile_count(tile) >= COPIES_PER_TILE {
            return Err(LedgerError::CopyLimit { tile });
        }
        let slot = self
            .answer
            .iter()
            .position(Option::is_none)
            .ok_or(LedgerError::AnswerFull)?;
        if !self.counts.add_tile(tile) {
            return Err(LedgerError::CopyLimit { tile });
        }
        self.answer[slot] = Some(tile);
        Ok(slot)
    }

    /// 移除某一格的牌
    ///
    /// # Errors
    ///
    /// 格子不存在、已锁定或为空
    pub fn remove(&mut self, slot: usize) -> Result<Tile, LedgerError> {
        if slot >= HAND_SIZE {
            return Err(LedgerError::SlotOutOfRange { slot });
        }
        if self.locked[slot].is_some() {
            return Err(LedgerError::SlotLocked { slot });
        }
        let tile = self.answer[slot].ok_or(LedgerError::SlotEmpty { slot })?;
        self.counts.remove_tile(tile);
        self.answer[slot] = None;
        Ok(tile)
    }

    /// 锁定格子：`mask[i]` 为 true 的格子锁定为当前答案中的牌
    ///
    /// 空格和已锁定的格子保持不变
    pub fn lock(&mut self, mask: &[bool; HAND_SIZE]) {
        for slot in 0..HAND_SIZE {
            if mask[slot] && self.locked[slot].is_none() {
                self.locked[slot] = self.answer[slot];
            }
        }
    }

    /// 开始新的一列：答案只保留锁定格，重新统计张数
    ///
    /// 也用于"清除当前答案"
    pub fn reseed(&mut self) {
        self.answer = self.locked;
        self.counts = TileCounts::from_tiles(self.answer.iter().flatten());
    }

    /// 换题：清除所有格子和锁定
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// 答案全部填满时返回完整的 17 张牌
    pub fn complete_answer(&self) -> Option<Hand> {
        let mut hand = [Tile::Man(1); HAND_SIZE];
        for (slot, tile) in self.answer.iter().enumerate() {
            hand[slot] = (*tile)?;
        }
        Some(hand)
    }

    /// 当前答案
    pub fn answer(&self) -> &[Option<Tile>; HAND_SIZE] {
        &self.answer
    }

    /// 锁定的牌
    pub fn locked(&self) -> &[Option<Tile>; HAND_SIZE] {
        &self.locked
    }

    /// 锁定掩码
    pub fn locked_mask(&self) -> [bool; HAND_SIZE] {
        self.locked.map(|t| t.is_some())
    }

    /// 某格是否锁定
    pub fn is_locked(&self, slot: usize) -> bool {
        self.locked.get(slot).is_some_and(Option::is_some)
    }

    /// 某种牌已选的张数
    pub fn selected_count(&self, tile: Tile) -> u8 {
        self.counts.tile_count(tile)
    }

    /// 已填的格子数
    pub fn filled_count(&self) -> usize {
        self.counts.total_count()
    }
}

impl Default for SelectionLedger {
    fn default() -> Self {
        Self::new()
    }
}
