//! 可执行文件入口（用于演示和调试）
//!
//! 用法：`mgf_engine [seed]`，日志级别由 RUST_LOG 控制

use mgf_engine::tile::check_win;
use mgf_engine::{GameSession, Group, SubmitOutcome, Tier, Tile};
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seed = std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok());
    let mut session = match seed {
        Some(seed) => {
            info!(seed, "using fixed seed");
            GameSession::with_seed(seed)
        }
        None => GameSession::new(),
    };

    let target = *session.target();
    println!("题目：{}", names(&target));
    if let Some(result) = check_win(&target)? {
        print!("拆解：对子 {}", result.pair);
        for group in &result.groups {
            match group {
                Group::Sequence { .. } => print!(" | 顺子 {}", names(&group.tiles())),
                Group::Triplet { tile } => print!(" | 刻子 {}", tile),
            }
        }
        println!();
    }

    // 第一轮：整体错开 3 格提交
    let mut rotated = target;
    rotated.rotate_left(3);
    for tile in rotated {
        session.on_tile_selected(tile)?;
    }
    let outcome = session.submit()?;
    print_outcome(&rotated, &outcome);
    if outcome.is_solved {
        println!("第 1 轮全部答对");
        return Ok(());
    }

    // 第二轮：锁定格保留，其余格子按题目补齐
    session.clear_current_answer();
    for (slot, &tile) in target.iter().enumerate() {
        if !session.ledger().is_locked(slot) {
            session.on_tile_selected(tile)?;
        }
    }
    let outcome = session.submit()?;
    print_outcome(&target, &outcome);

    if session.is_solved() {
        println!("第 {} 轮全部答对", outcome.round + 1);
    }
    Ok(())
}

fn names(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|t| t.canonical_name())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_outcome(answer: &[Tile], outcome: &SubmitOutcome) {
    println!("第 {} 轮：{}", outcome.round + 1, names(answer));
    let marks: String = outcome
        .per_slot
        .iter()
        .map(|tier| match tier {
            Tier::Exact => '●',
            Tier::Present => '◐',
            Tier::Absent => '○',
        })
        .collect();
    println!("评分：{}", marks);
}
