use crate::game::constants::{MAX_SEQUENCE_START, MELD_COUNT};
use crate::game::rules::GeneratorConfig;
use crate::tile::{Group, Hand, Suit, Tile, TilePool, HAND_SIZE};
use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use tracing::{debug, warn};

/// 一次出题失败的原因
///
/// 由 `generate` 内部处理：遇到后从完整牌池重新开始
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GenerationError {
    /// 牌池中已经找不到任何可以组成的面子
    #[display("牌池耗尽：已组成 {melds_built} 个面子后无法继续")]
    Starved { melds_built: usize },
}

/// 出题器
///
/// 从 136 张牌的牌池中随机组成 1 个对子 + 5 个面子，结果按（花色、数字）排序
///
/// 随机抽样的次数有上限，用完后按顺序扫描牌池找可以组成的面子；
/// 连扫描都找不到时从完整牌池重来，重来次数也有上限
pub struct HandGenerator<R: Rng = StdRng> {
    rng: R,
    config: GeneratorConfig,
    /// 每次出题开始时的牌池
    initial_pool: TilePool,
}

impl HandGenerator<StdRng> {
    /// 使用系统熵初始化的出题器
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy(), GeneratorConfig::default())
    }

    /// 使用固定种子的出题器，相同种子出同样的题
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), GeneratorConfig::default())
    }
}

impl Default for HandGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> HandGenerator<R> {
    /// 使用指定的随机数生成器和参数
    pub fn with_rng(rng: R, config: GeneratorConfig) -> Self {
        Self {
            rng,
            config,
            initial_pool: TilePool::new(),
        }
    }

    /// 从指定的牌池出题（用于模拟牌池不足）
    #[cfg(test)]
    pub(crate) fn with_initial_pool(mut self, pool: TilePool) -> Self {
        self.initial_pool = pool;
        self
    }

    /// 出题参数
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// 生成一手胡牌（17 张，已排序）
    ///
    /// 总是成功；重来次数用完时退回到一手固定的胡牌
    pub fn generate(&mut self) -> Hand {
        for attempt in 0..=self.config.max_restarts {
            match self.try_generate() {
                Ok(hand) => {
                    let names: Vec<&str> = hand.iter().map(|t| t.canonical_name()).collect();
                    debug!(attempt, question = %names.join(" "), "generated question");
                    return hand;
                }
                Err(err) => {
                    warn!(attempt, %err, "question generation failed, restarting from a full pool")
                }
            }
        }
        warn!("generation restarts exhausted, using fallback hand");
        fallback_hand()
    }

    /// 从完整牌池尝试出一次题
    ///
    /// # Errors
    ///
    /// 牌池被取到无法再组成面子时返回 `GenerationError::Starved`
    pub fn try_generate(&mut self) -> Result<Hand, GenerationError> {
        let mut pool = self.initial_pool.clone();

        // 组成对子：选中的牌取两张，其余同种牌全部移出，避免对子变成刻子
        let pair = pool
            .sample(&mut self.rng)
            .ok_or(GenerationError::Starved { melds_built: 0 })?;
        pool.take(pair, 2);
        pool.remove_all(pair);

        // 组成面子
        let mut groups: SmallVec<[Group; MELD_COUNT]> = SmallVec::new();
        while groups.len() < MELD_COUNT {
            let group = match self.sample_group(&pool) {
                Some(group) => group,
                None => scan_group(&pool).ok_or(GenerationError::Starved {
                    melds_built: groups.len(),
                })?,
            };
            if !pool.take_group(&group) {
                return Err(GenerationError::Starved {
                    melds_built: groups.len(),
                });
            }
            groups.push(group);
        }

        Ok(assemble(pair, &groups))
    }

    /// 随机抽样一个面子
    ///
    /// 一半概率尝试顺子（随机数牌花色、起点 1-7），一半概率尝试刻子（随机一张剩余的牌，
    /// 至少还剩 3 张）；失败不修改牌池，直到尝试次数用完
    fn sample_group(&mut self, pool: &TilePool) -> Option<Group> {
        let numerals = Suit::numerals();
        for _ in 0..self.config.max_attempts_per_meld {
            let group = if self.rng.gen_bool(0.5) {
                Group::Sequence {
                    suit: numerals[self.rng.gen_range(0..numerals.len())],
                    start: self.rng.gen_range(Tile::MIN_RANK..=MAX_SEQUENCE_START),
                }
            } else {
                Group::Triplet {
                    tile: pool.sample(&mut self.rng)?,
                }
            };
            if pool.can_take_group(&group) {
                return Some(group);
            }
        }
        None
    }
}

/// 按顺序扫描牌池，返回第一个可以组成的面子（刻子优先）
pub fn scan_group(pool: &TilePool) -> Option<Group> {
    let triplets = Tile::all().map(|tile| Group::Triplet { tile });
    let sequences = Suit::numerals().into_iter().flat_map(|suit| {
        (Tile::MIN_RANK..=MAX_SEQUENCE_START).map(move |start| Group::Sequence { suit, start })
    });
    triplets.chain(sequences).find(|g| pool.can_take_group(g))
}

/// 把对子和 5 个面子组装成排序后的 17 张牌
fn assemble(pair: Tile, groups: &[Group]) -> Hand {
    let mut hand = [pair; HAND_SIZE];
    let tiles = groups.iter().flat_map(|group| group.tiles());
    for (slot, tile) in hand[2..].iter_mut().zip(tiles) {
        *slot = tile;
    }
    hand.sort_unstable();
    hand
}

/// 固定的胡牌：对子 1万 + 刻子 2-6万
fn fallback_hand() -> Hand {
    std::array::from_fn(|i| {
        if i < 2 {
            Tile::Man(1)
        } else {
            Tile::Man(2 + ((i - 2) / 3) as u8)
        }
    })
}
