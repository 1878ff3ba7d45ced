use crate::tile::{Tile, HAND_SIZE as TILES_PER_HAND, MELD_COUNT as MELDS_PER_HAND};

/// 游戏常量定义
///
/// 集中管理所有魔法数字

/// 一手牌的张数（1 个对子 + 5 个面子）
pub const HAND_SIZE: usize = TILES_PER_HAND;

/// 面子数量
pub const MELD_COUNT: usize = MELDS_PER_HAND;

/// 牌面种类数（34 种：3 种数牌 × 9 + 7 种字牌）
pub const NUM_TILE_KINDS: usize = Tile::KIND_COUNT;

/// 每种牌的数量（4 张），也是玩家同一种牌最多可选的张数
pub const COPIES_PER_TILE: u8 = Tile::COPIES;

/// 每道题最多作答次数（4 列）
pub const MAX_ROUNDS: usize = 4;

/// 顺子起点的最大数字（7-8-9）
pub const MAX_SEQUENCE_START: u8 = 7;

/// 出题时每个面子的随机尝试次数上限
pub const MAX_ATTEMPTS_PER_MELD: u32 = 64;

/// 出题失败后从完整牌池重来的次数上限
pub const MAX_GENERATION_RESTARTS: u32 = 8;
