use super::*;

// [Action]
// 牌譜から復元した行動 (mjai形式)
// actor: 行動を行ったプレイヤーの座席
// target: 行動の対象となるプレイヤー(ロン, チー, ポン, 大明槓)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum Action {
    StartGame {
        uri: String,
        names: [String; SEAT],
    },
    StartKyoku {
        bakaze: Tile,
        kyoku: usize, // counts from 1
        honba: usize,
        kyotaku: usize,
        oya: Seat,
        dora_marker: Tile,
        #[serde(skip_serializing_if = "Option::is_none")]
        scores: Option<[Score; SEAT]>,
    },
    Haipai {
        actor: Seat,
        pais: Vec<Tile>,
    },
    Tsumo {
        actor: Seat,
        pai: Tile,
    },
    Dahai {
        actor: Seat,
        pai: Tile,
    },
    Reach {
        actor: Seat,
    },
    ReachAccepted {
        actor: Seat,
        #[serde(skip_serializing_if = "Option::is_none")]
        scores: Option<[Score; SEAT]>,
    },
    Chi {
        actor: Seat,
        target: Seat,
        pai: Tile,
        consumed: Vec<Tile>,
    },
    Pon {
        actor: Seat,
        target: Seat,
        pai: Tile,
        consumed: Vec<Tile>,
    },
    Kakan {
        actor: Seat,
        pai: Tile,
        consumed: Vec<Tile>,
    },
    Ankan {
        actor: Seat,
        consumed: Vec<Tile>,
    },
    Daiminkan {
        actor: Seat,
        target: Seat,
        pai: Tile,
        consumed: Vec<Tile>,
    },
    Nukidora {
        actor: Seat,
        pai: Tile,
    },
    Hora {
        actor: Seat,
        target: Seat,
        pai: Tile,
        #[serde(skip_serializing_if = "Option::is_none")]
        deltas: Option<[Point; SEAT]>,
        #[serde(skip_serializing_if = "Option::is_none")]
        scores: Option<[Score; SEAT]>,
    },
    Ryukyoku {
        reason: DrawReason,
        #[serde(skip_serializing_if = "Option::is_none")]
        deltas: Option<[Point; SEAT]>,
        #[serde(skip_serializing_if = "Option::is_none")]
        scores: Option<[Score; SEAT]>,
    },
    Dora {
        dora_marker: Tile,
    },
    EndKyoku {},
    EndGame {
        #[serde(skip_serializing_if = "Option::is_none")]
        scores: Option<[Score; SEAT]>,
    },
}

impl Action {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::StartGame { .. } => "start_game",
            Self::StartKyoku { .. } => "start_kyoku",
            Self::Haipai { .. } => "haipai",
            Self::Tsumo { .. } => "tsumo",
            Self::Dahai { .. } => "dahai",
            Self::Reach { .. } => "reach",
            Self::ReachAccepted { .. } => "reach_accepted",
            Self::Chi { .. } => "chi",
            Self::Pon { .. } => "pon",
            Self::Kakan { .. } => "kakan",
            Self::Ankan { .. } => "ankan",
            Self::Daiminkan { .. } => "daiminkan",
            Self::Nukidora { .. } => "nukidora",
            Self::Hora { .. } => "hora",
            Self::Ryukyoku { .. } => "ryukyoku",
            Self::Dora { .. } => "dora",
            Self::EndKyoku {} => "end_kyoku",
            Self::EndGame { .. } => "end_game",
        }
    }

    pub fn actor(&self) -> Option<Seat> {
        match self {
            Self::Haipai { actor, .. }
            | Self::Tsumo { actor, .. }
            | Self::Dahai { actor, .. }
            | Self::Reach { actor }
            | Self::ReachAccepted { actor, .. }
            | Self::Chi { actor, .. }
            | Self::Pon { actor, .. }
            | Self::Kakan { actor, .. }
            | Self::Ankan { actor, .. }
            | Self::Daiminkan { actor, .. }
            | Self::Nukidora { actor, .. }
            | Self::Hora { actor, .. } => Some(*actor),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => write!(f, "{}", s),
            Err(_) => write!(f, "{}", self.type_name()),
        }
    }
}

// [DrawReason]
// 流局の種類 (牌譜のtype属性)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawReason {
    Kyushukyuhai,  // 九種九牌
    Sufonrenta,    // 四風連打
    Suchareach,    // 四家立直
    Sanchaho,      // 三家和
    Nagashimangan, // 流し満貫
    Sukaikan,      // 四開槓
    Fanpai,        // 荒牌平局 (type属性なし)
}

impl DrawReason {
    pub fn from_tenhou(code: Option<&str>) -> Option<Self> {
        use DrawReason::*;
        Some(match code {
            Some("yao9") => Kyushukyuhai,
            Some("kaze4") => Sufonrenta,
            Some("reach4") => Suchareach,
            Some("ron3") => Sanchaho,
            Some("nm") => Nagashimangan,
            Some("kan4") => Sukaikan,
            None => Fanpai,
            Some(_) => return None,
        })
    }
}
