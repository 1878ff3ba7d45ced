use mgf_engine::tile::{
    can_win, check_win, try_can_win, Group, Suit, Tile, WinCheckError, WinChecker,
};

fn parse(names: &[&str]) -> Vec<Tile> {
    names.iter().map(|n| Tile::from_name(n).unwrap()).collect()
}

/// 按对子 + 5 个面子构造的牌一定能胡
#[test]
fn test_constructed_hands_win() {
    let pairs = [Tile::Man(5), Tile::Honor(7), Tile::Sou(1)];
    let melds = [
        [
            Group::Sequence { suit: Suit::Man, start: 1 },
            Group::Sequence { suit: Suit::Man, start: 1 },
            Group::Triplet { tile: Tile::Pin(9) },
            Group::Sequence { suit: Suit::Sou, start: 7 },
            Group::Triplet { tile: Tile::Honor(3) },
        ],
        [
            Group::Triplet { tile: Tile::Man(2) },
            Group::Triplet { tile: Tile::Man(3) },
            Group::Triplet { tile: Tile::Man(4) },
            Group::Triplet { tile: Tile::Pin(1) },
            Group::Triplet { tile: Tile::Honor(1) },
        ],
        [
            Group::Sequence { suit: Suit::Pin, start: 3 },
            Group::Sequence { suit: Suit::Pin, start: 4 },
            Group::Sequence { suit: Suit::Pin, start: 5 },
            Group::Sequence { suit: Suit::Sou, start: 2 },
            Group::Sequence { suit: Suit::Sou, start: 2 },
        ],
    ];

    for (pair, groups) in pairs.iter().zip(melds.iter()) {
        let mut tiles = vec![*pair, *pair];
        for group in groups {
            tiles.extend(group.tiles());
        }
        assert_eq!(tiles.len(), 17);
        assert!(can_win(&tiles), "should win: {:?}", tiles);
    }
}

/// 三个对子，其余牌无法拆成面子
#[test]
fn test_three_pairs_no_meld_split() {
    let tiles = parse(&[
        "Man1", "Man1", "Pin3", "Pin3", "Sou8", "Sou8", "Man5", "Man9", "Pin1", "Pin6", "Sou2",
        "Sou5", "Ton", "Nan", "Shaa", "Hatsu", "Chun",
    ]);
    assert!(!can_win(&tiles));
}

/// 17 张互不相同的单张，不可能有对子
#[test]
fn test_distinct_singletons() {
    let tiles: Vec<Tile> = Tile::all().skip(10).take(17).collect();
    assert_eq!(tiles.len(), 17);
    assert!(!can_win(&tiles));
}

/// 字牌的"顺子"不算面子
#[test]
fn test_honor_run_is_not_a_meld() {
    let tiles = parse(&[
        "Man1", "Man1", "Front", "Hatsu", "Chun", "Pin2", "Pin3", "Pin4", "Sou6", "Sou7", "Sou8",
        "Man9", "Man9", "Man9", "Pin7", "Pin8", "Pin9",
    ]);
    assert!(!can_win(&tiles));

    // 把字牌换成刻子就可以
    let mut tiles = tiles;
    tiles[2] = Tile::Honor(6);
    tiles[4] = Tile::Honor(6);
    assert!(can_win(&tiles));
}

/// 不同的对子选择只有一种能胡：必须回溯尝试下一个对子
#[test]
fn test_pair_backtracking() {
    // 1万 x2 看起来是对子，但正解是 1-2-3万 x2 + 对子 9条
    let tiles = parse(&[
        "Man1", "Man1", "Man2", "Man2", "Man3", "Man3", "Sou9", "Sou9", "Pin4", "Pin5", "Pin6",
        "Pei", "Pei", "Pei", "Sou1", "Sou2", "Sou3",
    ]);
    let result = check_win(&tiles).unwrap().unwrap();
    assert_eq!(result.pair, Tile::Sou(9));
    let man_run = Group::Sequence { suit: Suit::Man, start: 1 };
    assert_eq!(result.groups.iter().filter(|g| **g == man_run).count(), 2);
}

/// 牌数不对属于前置条件错误
#[test]
fn test_wrong_count_is_precondition_error() {
    let tiles = parse(&["Man1", "Man1", "Man1"]);
    assert_eq!(
        try_can_win(&tiles),
        Err(WinCheckError::WrongTileCount { found: 3 })
    );
    let mut checker = WinChecker::new();
    assert!(checker.check_win(&[]).is_err());

    // can_win 对前置条件错误只返回 false
    assert!(!can_win(&[Tile::Man(1); 3]));
    assert!(!can_win(&[]));
}

/// 判定不修改输入
#[test]
fn test_input_untouched() {
    let tiles = parse(&[
        "Man1", "Man1", "Man2", "Man3", "Man4", "Pin5", "Pin5", "Pin5", "Sou1", "Sou2", "Sou3",
        "Ton", "Ton", "Ton", "Man7", "Man8", "Man9",
    ]);
    let copy = tiles.clone();
    assert!(can_win(&tiles));
    assert_eq!(tiles, copy);
}
