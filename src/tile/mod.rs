/// 牌相关模块
///
/// 包含牌（Tile）、牌池（TilePool）、计数表（TileCounts）和胡牌判定

pub mod tile;
pub mod wall;
pub mod hand;
pub mod win_check;

// 重新导出常用类型
pub use tile::{palette, Suit, Tile};
pub use wall::TilePool;
pub use hand::{Hand, TileCounts, HAND_SIZE};
pub use win_check::{
    can_form_melds, can_win, check_win, try_can_win, Group, WinCheckError, WinChecker, WinResult,
    MELD_COUNT,
};
