use crate::game::constants::HAND_SIZE;
use crate::game::generator::HandGenerator;
use crate::game::ledger::{LedgerError, SelectionLedger};
use crate::game::rules::Rules;
use crate::game::scoring::{RoundScore, RoundScorer, Tier};
use crate::tile::{palette, try_can_win, Hand, Tile, WinCheckError};
use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// 提交答案被拒绝的原因
///
/// 被拒绝时不进入下一轮，也不锁定任何格子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SubmitError {
    /// 还有空格
    #[display("答案尚未填满")]
    Incomplete,
    /// 答案不能组成胡牌
    #[display("无法胡牌！")]
    CannotWin,
    /// 4 次作答机会已用完
    #[display("已达最大作答次数")]
    MaxAttemptsReached,
    /// 本题已经全部答对
    #[display("本题已经答对")]
    AlreadySolved,
}

/// 一次提交的结果
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmitOutcome {
    /// 本次作答的轮次（从 0 开始）
    pub round: usize,
    /// 每一格的评分
    pub per_slot: [Tier; HAND_SIZE],
    /// 本轮新锁定的格子
    pub newly_locked: [bool; HAND_SIZE],
    /// 是否为最后一轮（之后需要换题）
    pub is_final_round: bool,
    /// 是否全部答对
    pub is_solved: bool,
}

/// 一局游戏
///
/// 持有题目和作答状态，对外提供换题、选牌、删牌、清除和提交
///
/// 所有操作都在调用线程上同步完成；多会话的宿主应给每个会话单独加锁
pub struct GameSession<R: Rng = StdRng> {
    rules: Rules,
    generator: HandGenerator<R>,
    /// 当前题目
    target: Hand,
    /// 当前这一列的作答状态
    ledger: SelectionLedger,
    /// 已提交的轮数
    round: usize,
    /// 本题各轮的评分
    history: Vec<RoundScore>,
    solved: bool,
}

impl GameSession<StdRng> {
    /// 使用默认规则和系统熵创建一局，并出第一道题
    pub fn new() -> Self {
        Self::with_rules(Rules::default(), StdRng::from_entropy())
    }

    /// 使用固定种子创建一局
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rules(Rules::default(), StdRng::seed_from_u64(seed))
    }
}

impl Default for GameSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameSession<R> {
    /// 使用指定规则和随机数生成器创建一局，并出第一道题
    pub fn with_rules(rules: Rules, rng: R) -> Self {
        let rules = rules.normalized();
        let mut generator = HandGenerator::with_rng(rng, rules.generator);
        let target = generator.generate();
        Self {
            rules,
            generator,
            target,
            ledger: SelectionLedger::new(),
            round: 0,
            history: Vec::new(),
            solved: false,
        }
    }

    /// 换一道新题，清除所有作答状态（包括锁定格）
    #[instrument(skip(self))]
    pub fn new_question(&mut self) -> &Hand {
        let target = self.generator.generate();
        self.start_question(target);
        &self.target
    }

    /// 使用指定的题目，按给定的顺序作为答案位置
    ///
    /// 不能胡牌的题目被拒绝，当前状态不变
    ///
    /// # Errors
    ///
    /// 题目含无效牌或不能组成胡牌
    pub fn load_question(&mut self, target: Hand) -> Result<(), WinCheckError> {
        if !try_can_win(&target)? {
            return Err(WinCheckError::NotWinning);
        }
        self.start_question(target);
        Ok(())
    }

    fn start_question(&mut self, target: Hand) {
        self.target = target;
        self.ledger.reset();
        self.round = 0;
        self.history.clear();
        self.solved = false;
        info!("new question started");
    }

    /// 选牌区的 34 种牌面
    pub fn palette_tiles(&self) -> impl Iterator<Item = Tile> + Clone {
        palette()
    }

    /// 玩家从选牌区选了一张牌
    ///
    /// # Returns
    ///
    /// 放入的格子编号
    pub fn on_tile_selected(&mut self, tile: Tile) -> Result<usize, LedgerError> {
        if self.is_terminal() {
            return Err(LedgerError::SessionOver);
        }
        self.ledger.place(tile).inspect_err(|err| {
            debug!(%tile, %err, "tile selection rejected");
        })
    }

    /// 玩家点击答案格删除一张牌
    pub fn on_slot_cleared(&mut self, slot: usize) -> Result<Tile, LedgerError> {
        if self.is_terminal() {
            return Err(LedgerError::SessionOver);
        }
        self.ledger.remove(slot).inspect_err(|err| {
            debug!(slot, %err, "slot clear rejected");
        })
    }

    /// 清除当前答案，只保留锁定格
    pub fn clear_current_answer(&mut self) {
        if self.is_terminal() {
            return;
        }
        self.ledger.reseed();
    }

    /// 提交当前答案
    ///
    /// 答案填满且能胡牌时评分，锁定新的正确格并进入下一轮
    ///
    /// # Errors
    ///
    /// 作答次数已用完、已经答对、答案未填满或不能胡牌；出错时状态不变
    #[instrument(skip(self), fields(round = self.round))]
    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        if self.solved {
            return Err(SubmitError::AlreadySolved);
        }
        if self.round >= self.rules.max_rounds {
            return Err(SubmitError::MaxAttemptsReached);
        }
        let answer = self.ledger.complete_answer().ok_or(SubmitError::Incomplete)?;
        if !try_can_win(&answer).map_err(|_| SubmitError::CannotWin)? {
            return Err(SubmitError::CannotWin);
        }

        let score = RoundScorer::score(&answer, &self.target, &self.ledger.locked_mask());
        self.ledger.lock(&score.newly_locked);

        let round = self.round;
        self.round += 1;
        self.solved = score.is_solved();
        let is_final_round = self.round >= self.rules.max_rounds;
        if !is_final_round && !self.solved {
            self.ledger.reseed();
        }

        debug!(
            exact = score.count(Tier::Exact),
            present = score.count(Tier::Present),
            absent = score.count(Tier::Absent),
            solved = self.solved,
            "round scored"
        );

        let outcome = SubmitOutcome {
            round,
            per_slot: score.per_slot,
            newly_locked: score.newly_locked,
            is_final_round,
            is_solved: self.solved,
        };
        self.history.push(score);
        Ok(outcome)
    }

    /// 当前题目
    pub fn target(&self) -> &Hand {
        &self.target
    }

    /// 当前答案
    pub fn answer(&self) -> &[Option<Tile>; HAND_SIZE] {
        self.ledger.answer()
    }

    /// 锁定的牌
    pub fn locked(&self) -> &[Option<Tile>; HAND_SIZE] {
        self.ledger.locked()
    }

    /// 选牌记录
    pub fn ledger(&self) -> &SelectionLedger {
        &self.ledger
    }

    /// 已提交的轮数，也是下一次提交的轮次编号
    pub fn round(&self) -> usize {
        self.round
    }

    /// 本题各轮的评分
    pub fn history(&self) -> &[RoundScore] {
        &self.history
    }

    /// 规则
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// 是否已经答对
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// 本题是否结束（作答次数用完或已经答对），结束后只能换题
    pub fn is_terminal(&self) -> bool {
        self.solved || self.round >= self.rules.max_rounds
    }
}
