use std::fmt;

/// 麻将牌
///
/// 共 34 种牌面：万、筒、条各 1-9，字牌 1-7（东南西北白发中），每种 4 张，合计 136 张
///
/// 变体顺序即排序顺序：先按花色（万、筒、条、字），再按数字
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Tile {
    /// 万子（1-9）
    Man(u8),
    /// 筒子（1-9）
    Pin(u8),
    /// 条子（1-9）
    Sou(u8),
    /// 字牌（1-7）
    Honor(u8),
}

/// 全部牌面的规范名称，下标即 `Tile::to_index`；字牌部分按 rank 1-7 排列
///
/// 同时也是显示资源的名称
const CANONICAL_NAMES: [&str; Tile::KIND_COUNT] = [
    "Man1", "Man2", "Man3", "Man4", "Man5", "Man6", "Man7", "Man8", "Man9",
    "Pin1", "Pin2", "Pin3", "Pin4", "Pin5", "Pin6", "Pin7", "Pin8", "Pin9",
    "Sou1", "Sou2", "Sou3", "Sou4", "Sou5", "Sou6", "Sou7", "Sou8", "Sou9",
    "Ton", "Nan", "Shaa", "Pei", "Front", "Hatsu", "Chun",
];

impl Tile {
    /// 牌面种类数：34
    pub const KIND_COUNT: usize = 34;

    /// 每种牌的张数：4
    pub const COPIES: u8 = 4;

    /// 总牌数：136 张
    pub const TOTAL_COUNT: usize = Self::KIND_COUNT * Self::COPIES as usize;

    /// 数牌的数字范围：1-9
    pub const MIN_RANK: u8 = 1;
    pub const MAX_RANK: u8 = 9;

    /// 字牌的数字范围：1-7
    pub const MAX_HONOR_RANK: u8 = 7;

    /// 创建一张牌，验证输入有效性
    pub fn new(suit: Suit, rank: u8) -> Option<Self> {
        if rank < Self::MIN_RANK || rank > suit.max_rank() {
            return None;
        }
        Some(match suit {
            Suit::Man => Tile::Man(rank),
            Suit::Pin => Tile::Pin(rank),
            Suit::Sou => Tile::Sou(rank),
            Suit::Honor => Tile::Honor(rank),
        })
    }

    /// 获取花色
    pub fn suit(&self) -> Suit {
        match self {
            Tile::Man(_) => Suit::Man,
            Tile::Pin(_) => Suit::Pin,
            Tile::Sou(_) => Suit::Sou,
            Tile::Honor(_) => Suit::Honor,
        }
    }

    /// 获取数字
    pub fn rank(&self) -> u8 {
        match self {
            Tile::Man(r) | Tile::Pin(r) | Tile::Sou(r) | Tile::Honor(r) => *r,
        }
    }

    /// 是否为字牌
    pub fn is_honor(&self) -> bool {
        matches!(self, Tile::Honor(_))
    }

    /// 数字是否在花色允许的范围内
    ///
    /// 变体是公开的，`Tile::Man(12)` 这样的值可以被直接构造出来
    pub fn is_valid(&self) -> bool {
        let rank = self.rank();
        rank >= Self::MIN_RANK && rank <= self.suit().max_rank()
    }

    /// 转换为牌面索引（0-33）
    ///
    /// 映射规则：
    /// - 万子：0-8
    /// - 筒子：9-17
    /// - 条子：18-26
    /// - 字牌：27-33
    ///
    /// 索引顺序与排序顺序一致；数字超出范围的牌返回 None
    pub fn to_index(&self) -> Option<usize> {
        self.is_valid()
            .then(|| self.suit() as usize * 9 + (self.rank() - 1) as usize)
    }

    /// 从牌面索引创建牌
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= Self::KIND_COUNT {
            return None;
        }
        let rank = (index % 9) as u8 + 1;
        match index / 9 {
            0 => Some(Tile::Man(rank)),
            1 => Some(Tile::Pin(rank)),
            2 => Some(Tile::Sou(rank)),
            _ => Some(Tile::Honor(rank)),
        }
    }

    /// 规范名称
    ///
    /// 数牌为 `Man1`、`Pin5`、`Sou9` 形式，字牌为其名称；用于显示资源查找，互不重复
    ///
    /// 无效的牌返回 `"?"`
    pub fn canonical_name(&self) -> &'static str {
        self.to_index().map_or("?", |index| CANONICAL_NAMES[index])
    }

    /// 从规范名称解析
    pub fn from_name(name: &str) -> Option<Self> {
        CANONICAL_NAMES
            .iter()
            .position(|&n| n == name)
            .and_then(Self::from_index)
    }

    /// 同花色的下一张牌（字牌没有顺子，返回 None）
    pub fn successor(&self) -> Option<Self> {
        if self.is_honor() {
            return None;
        }
        Self::new(self.suit(), self.rank() + 1)
    }

    /// 全部 34 种牌面，按万 1-9、筒 1-9、条 1-9、字 1-7 的固定顺序
    ///
    /// 每次调用都从头开始
    pub fn all() -> impl Iterator<Item = Tile> + Clone {
        (0..Self::KIND_COUNT).filter_map(Self::from_index)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            f.write_str(self.canonical_name())
        } else {
            write!(f, "{:?}?", self)
        }
    }
}

/// 花色枚举
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Suit {
    Man = 0,
    Pin = 1,
    Sou = 2,
    Honor = 3,
}

impl Suit {
    /// 可以组成顺子的数牌花色
    pub fn numerals() -> [Suit; 3] {
        [Suit::Man, Suit::Pin, Suit::Sou]
    }

    /// 该花色的最大数字
    pub fn max_rank(&self) -> u8 {
        match self {
            Suit::Honor => Tile::MAX_HONOR_RANK,
            _ => Tile::MAX_RANK,
        }
    }
}

/// 选牌区使用的牌面列表（34 种，顺序固定）
pub fn palette() -> impl Iterator<Item = Tile> + Clone {
    Tile::all()
}
