/// 游戏逻辑模块
///
/// 包含出题、选牌记录、评分和一局游戏的流程控制

pub mod constants;
pub mod rules;
pub mod generator;
pub mod ledger;
pub mod scoring;
pub mod session;
