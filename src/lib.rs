/// 麻将记忆拼牌引擎
///
/// 出一手 17 张的胡牌（1 个对子 + 5 个面子），玩家凭记忆在 4 次机会内拼出原题，
/// 每次提交后按格子给出"完全正确 / 牌对位置错 / 没有这张牌"三级提示

pub mod tile;
pub mod game;

// 重新导出常用类型
pub use tile::{
    can_win, palette, Group, Hand, Suit, Tile, TileCounts, TilePool, WinChecker, WinResult,
};
pub use game::generator::HandGenerator;
pub use game::ledger::{LedgerError, SelectionLedger};
pub use game::rules::{GeneratorConfig, Rules};
pub use game::scoring::{RoundScore, RoundScorer, Tier};
pub use game::session::{GameSession, SubmitError, SubmitOutcome};
