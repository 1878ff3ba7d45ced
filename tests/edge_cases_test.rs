use mgf_engine::game::constants::{HAND_SIZE, NUM_TILE_KINDS};
use mgf_engine::game::ledger::{LedgerError, SelectionLedger};
use mgf_engine::game::rules::Rules;
use mgf_engine::game::session::{GameSession, SubmitError, SubmitOutcome};
use mgf_engine::tile::{palette, Tile};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// 测试第 5 张同种牌被拒绝，状态不变
#[test]
fn test_fifth_copy_rejected() {
    let mut ledger = SelectionLedger::new();
    for slot in 0..4 {
        assert_eq!(ledger.place(Tile::Pin(5)), Ok(slot));
    }
    let before = ledger.clone();
    assert_eq!(
        ledger.place(Tile::Pin(5)),
        Err(LedgerError::CopyLimit { tile: Tile::Pin(5) })
    );
    assert_eq!(ledger, before);

    // 删掉一张后又可以选
    ledger.remove(2).unwrap();
    assert_eq!(ledger.place(Tile::Pin(5)), Ok(2));
}

/// 测试答案区满了以后再选牌被拒绝
#[test]
fn test_place_into_full_answer() {
    let mut ledger = SelectionLedger::new();
    for tile in Tile::all().take(HAND_SIZE) {
        ledger.place(tile).unwrap();
    }
    let before = ledger.clone();
    assert_eq!(ledger.place(Tile::Honor(7)), Err(LedgerError::AnswerFull));
    assert_eq!(ledger, before);
}

/// 测试不存在的牌面被拒绝
#[test]
fn test_invalid_tile_rejected() {
    let mut session = GameSession::with_seed(4);
    assert_eq!(
        session.on_tile_selected(Tile::Man(0)),
        Err(LedgerError::InvalidTile { tile: Tile::Man(0) })
    );
    assert_eq!(session.ledger().filled_count(), 0);
}

/// 测试锁定只作用于已填的格子，锁定的牌取自答案
#[test]
fn test_lock_uses_answer_tiles() {
    let mut ledger = SelectionLedger::new();
    ledger.place(Tile::Pin(2)).unwrap();
    let mut mask = [false; HAND_SIZE];
    mask[0] = true;
    mask[5] = true;
    ledger.lock(&mask);

    assert_eq!(ledger.locked()[0], Some(Tile::Pin(2)));
    assert_eq!(ledger.locked()[5], None);
    for slot in 0..HAND_SIZE {
        if let Some(tile) = ledger.locked()[slot] {
            assert_eq!(ledger.answer()[slot], Some(tile));
        }
    }
}

/// 测试删除空格、越界格
#[test]
fn test_remove_rejections() {
    let mut ledger = SelectionLedger::new();
    assert_eq!(ledger.remove(0), Err(LedgerError::SlotEmpty { slot: 0 }));
    assert_eq!(
        ledger.remove(HAND_SIZE),
        Err(LedgerError::SlotOutOfRange { slot: HAND_SIZE })
    );
}

/// 测试选牌区：34 种牌，顺序为 万 筒 条 字，名字与素材一致
#[test]
fn test_palette_names() {
    let names: Vec<&str> = palette().map(|t| t.canonical_name()).collect();
    assert_eq!(names.len(), NUM_TILE_KINDS);
    assert_eq!(names[0], "Man1");
    assert_eq!(names[9], "Pin1");
    assert_eq!(names[26], "Sou9");
    assert_eq!(
        &names[27..],
        &["Ton", "Nan", "Shaa", "Pei", "Front", "Hatsu", "Chun"]
    );
    for tile in palette() {
        assert_eq!(Tile::from_name(tile.canonical_name()), Some(tile));
    }
    assert_eq!(Tile::from_name("Man0"), None);
    assert_eq!(Tile::from_name("Haku"), None);
}

/// 测试只允许作答 1 次的规则
#[test]
fn test_single_round_rules() {
    let rules = Rules { max_rounds: 1, ..Rules::default() };
    let mut session = GameSession::with_rules(rules, StdRng::seed_from_u64(9));
    let mut answer = *session.target();
    answer.rotate_left(2);
    for tile in answer {
        session.on_tile_selected(tile).unwrap();
    }
    let outcome = session.submit().unwrap();
    assert!(outcome.is_final_round);
    assert!(session.is_terminal());
    if !outcome.is_solved {
        assert_eq!(session.submit(), Err(SubmitError::MaxAttemptsReached));
    }
}

/// 测试 0 次作答的规则被修正为 1 次
#[test]
fn test_zero_rounds_normalized() {
    let rules = Rules { max_rounds: 0, ..Rules::default() };
    let session = GameSession::with_rules(rules, StdRng::seed_from_u64(9));
    assert_eq!(session.rules().max_rounds, 1);
    assert!(!session.is_terminal());
}

/// 测试规则从 JSON 读取，缺省字段使用默认值
#[test]
fn test_rules_from_json() {
    let rules: Rules = serde_json::from_str("{}").unwrap();
    assert_eq!(rules, Rules::default());

    let rules: Rules = serde_json::from_str(
        r#"{ "max_rounds": 6, "generator": { "max_attempts_per_meld": 8, "max_restarts": 2 } }"#,
    )
    .unwrap();
    assert_eq!(rules.max_rounds, 6);
    assert_eq!(rules.generator.max_attempts_per_meld, 8);
    assert_eq!(rules.generator.max_restarts, 2);
}

/// 测试提交结果可以序列化给前端
#[test]
fn test_outcome_serializes() {
    let mut session = GameSession::with_seed(17);
    let target = *session.target();
    for tile in target {
        session.on_tile_selected(tile).unwrap();
    }
    let outcome = session.submit().unwrap();
    let json = serde_json::to_string(&outcome).unwrap();
    assert!(json.contains("\"Exact\""));
    let back: SubmitOutcome = serde_json::from_str(&json).unwrap();
    assert_eq!(back, outcome);
}

/// 测试错误信息
#[test]
fn test_error_messages() {
    assert_eq!(SubmitError::Incomplete.to_string(), "答案尚未填满");
    assert_eq!(SubmitError::CannotWin.to_string(), "无法胡牌！");
    assert_eq!(SubmitError::MaxAttemptsReached.to_string(), "已达最大作答次数");
    assert_eq!(
        LedgerError::CopyLimit { tile: Tile::Man(3) }.to_string(),
        format!("{} 已经选满 4 张", Tile::Man(3))
    );
}
