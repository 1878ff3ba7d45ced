use crate::game::constants::HAND_SIZE;
use crate::tile::{Hand, TileCounts};

/// 单格评分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Tier {
    /// 牌和位置都正确（蓝色）
    Exact,
    /// 牌正确、位置不对（黄色）
    Present,
    /// 题目中没有这张牌，或者这张牌已经被其他格子用完
    Absent,
}

/// 一轮作答的评分结果
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoundScore {
    /// 每一格的评分
    pub per_slot: [Tier; HAND_SIZE],
    /// 本轮新锁定的格子（之前已锁定的格子不计入）
    pub newly_locked: [bool; HAND_SIZE],
}

impl RoundScore {
    /// 全部 17 格都正确
    pub fn is_solved(&self) -> bool {
        self.per_slot.iter().all(|&t| t == Tier::Exact)
    }

    /// 某一评分的格子数
    pub fn count(&self, tier: Tier) -> usize {
        self.per_slot.iter().filter(|&&t| t == tier).count()
    }

    /// 本轮评分为 Exact 的格子
    pub fn exact_mask(&self) -> [bool; HAND_SIZE] {
        self.per_slot.map(|t| t == Tier::Exact)
    }
}

/// 评分器
///
/// 两遍扫描，按题目中每种牌的剩余张数递减：
///
/// 1. 位置和牌都相同的格子记为 Exact
/// 2. 其余格子若该牌仍有剩余张数记为 Present，否则记为 Absent
///
/// 因此任意一种牌被记为 Exact 或 Present 的格子数都不会超过它在题目中的张数
pub struct RoundScorer;

impl RoundScorer {
    /// 对一份完整的答案评分
    ///
    /// # 参数
    ///
    /// - `answer`: 玩家答案（调用方需保证已填满且能胡牌）
    /// - `target`: 题目
    /// - `locked`: 之前轮次已锁定的格子，这些格子直接视为 Exact
    pub fn score(answer: &Hand, target: &Hand, locked: &[bool; HAND_SIZE]) -> RoundScore {
        let mut remaining = TileCounts::from_tiles(target);
        let mut per_slot = [Tier::Absent; HAND_SIZE];
        let mut newly_locked = [false; HAND_SIZE];

        // 完全正确
        for slot in 0..HAND_SIZE {
            if locked[slot] || answer[slot] == target[slot] {
                per_slot[slot] = Tier::Exact;
                newly_locked[slot] = !locked[slot];
                remaining.remove_tile(target[slot]);
            }
        }

        // 牌对位置错
        for slot in 0..HAND_SIZE {
            if per_slot[slot] == Tier::Exact {
                continue;
            }
            if remaining.remove_tile(answer[slot]) {
                per_slot[slot] = Tier::Present;
            }
        }

        RoundScore {
            per_slot,
            newly_locked,
        }
    }
}
