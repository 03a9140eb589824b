use tracing::{debug, warn};

use super::element::{Element, Tag};
use super::error::{DecodeError, DecodeResult};
use super::meld::{MeldCall, MeldKind};
use super::pid::{pid_to_tile, Pid, PID_COUNT};
use super::tehai::TehaiTracker;
use crate::listener::ActionListener;
use crate::model::*;
use crate::util::misc::decode_uri_component;

// 天鳳牌譜(mjlog)の要素列をmjai形式の行動列に変換

// [DecoderConfig]
#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    pub log_name: String, // TAIKYOKUにlog属性が無い場合の牌譜ID
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    Completed,
    Broken, // プレイヤー名が欠けているため途中で打ち切り
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NoGame,
    GameActive,
    RoundActive,
    GameEnded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Broken,
}

// [TenhouSession]
// 1つの牌譜の変換中のみ有効な状態
#[derive(Debug)]
pub struct TenhouSession {
    config: DecoderConfig,
    names: [String; SEAT],
    phase: Phase,
    dealer: Seat,
    tehai: TehaiTracker,
}

impl TenhouSession {
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            names: Default::default(),
            phase: Phase::NoGame,
            dealer: 0,
            tehai: TehaiTracker::new(),
        }
    }

    pub fn is_round_open(&self) -> bool {
        self.phase == Phase::RoundActive
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameEnded
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn names(&self) -> &[String; SEAT] {
        &self.names
    }

    pub fn tehai(&self) -> &TehaiTracker {
        &self.tehai
    }

    pub fn run(
        &mut self,
        elems: &[Element],
        out: &mut dyn ActionListener,
    ) -> DecodeResult<DecodeStatus> {
        for (i, e) in elems.iter().enumerate() {
            if self.push(e, out)? == Flow::Broken {
                warn!(index = i, tag = %e.name, "broken log: player name missing");
                out.notify_broken();
                return Ok(DecodeStatus::Broken);
            }
        }
        Ok(DecodeStatus::Completed)
    }

    fn push(&mut self, e: &Element, out: &mut dyn ActionListener) -> DecodeResult<Flow> {
        if self.phase == Phase::GameEnded {
            debug!(tag = %e.name, "tag after end of game");
        }
        match Tag::classify(&e.name) {
            Tag::PlayerList => return Ok(self.handle_un(e)),
            Tag::GameStart => self.handle_taikyoku(e, out)?,
            Tag::RoundInit => self.handle_init(e, out)?,
            Tag::Draw(seat, pid) => {
                self.tehai.draw(seat, pid);
                out.notify_action(&Action::Tsumo {
                    actor: seat,
                    pai: pid_to_tile(pid),
                });
            }
            Tag::Discard(seat, pid) => {
                self.tehai.discard(seat, pid)?;
                out.notify_action(&Action::Dahai {
                    actor: seat,
                    pai: pid_to_tile(pid),
                });
            }
            Tag::Reach => self.handle_reach(e, out)?,
            Tag::Win => self.handle_agari(e, out)?,
            Tag::AbortiveDraw => self.handle_ryuukyoku(e, out)?,
            Tag::Call => self.handle_meld(e, out)?,
            Tag::DoraReveal => out.notify_action(&Action::Dora {
                dora_marker: pid_to_tile(e.pid("hai")?),
            }),
            Tag::Ignored => {}
            Tag::Unknown(name) => return Err(DecodeError::UnknownTag(name)),
        }
        Ok(Flow::Continue)
    }

    fn handle_un(&mut self, e: &Element) -> Flow {
        let mut names: [String; SEAT] = Default::default();
        for s in 0..SEAT {
            match e.get(&format!("n{}", s)) {
                Some(n) => names[s] = decode_uri_component(n),
                None => return Flow::Broken,
            }
        }
        self.names = names;
        Flow::Continue
    }

    fn handle_taikyoku(&mut self, e: &Element, out: &mut dyn ActionListener) -> DecodeResult {
        let oya = e.seat("oya")?;
        let log = e.get("log").unwrap_or(self.config.log_name.as_str());
        let uri = format!(
            "http://tenhou.net/0/?log={}&tw={}",
            log,
            (SEAT - oya) % SEAT
        );
        self.phase = Phase::GameActive;
        self.dealer = oya;
        debug!(%uri, "start game");
        out.notify_action(&Action::StartGame {
            uri,
            names: self.names.clone(),
        });
        Ok(())
    }

    fn handle_init(&mut self, e: &Element, out: &mut dyn ActionListener) -> DecodeResult {
        let seed: Vec<usize> = e
            .parse_list("seed")?
            .ok_or_else(|| DecodeError::MissingAttribute {
                tag: e.name.clone(),
                attr: "seed".to_string(),
            })?;
        if seed.len() < 6 || seed[5] >= PID_COUNT {
            return Err(e.invalid("seed", e.get("seed").unwrap_or_default()));
        }
        let oya = e.seat("oya")?;
        let scores = scaled(e, "ten")?;
        let hands = (0..SEAT)
            .map(|s| haipai_pids(e, s))
            .collect::<DecodeResult<Vec<_>>>()?;

        // ダブロンがあるためAGARIでは局の終了を判定できない. 次のINITで閉じる.
        match self.phase {
            Phase::RoundActive => out.notify_action(&Action::EndKyoku {}),
            Phase::NoGame => debug!("round without TAIKYOKU"),
            _ => {}
        }
        self.phase = Phase::RoundActive;
        self.dealer = oya;

        let round = seed[0];
        debug!(round, honba = seed[1], oya, "start kyoku");
        out.notify_action(&Action::StartKyoku {
            bakaze: Tile(TZ, WE + (round / SEAT) % SEAT),
            kyoku: round % SEAT + 1,
            honba: seed[1],
            kyotaku: seed[2],
            oya,
            dora_marker: Pid(seed[5] as u8).to_tile(),
            scores,
        });

        for i in 0..SEAT {
            let s = (oya + i) % SEAT;
            let pids = hands[s].clone();
            let pais = match &pids {
                Some(v) => v.iter().map(|p| p.to_tile()).collect(),
                None => vec![Z8; HAND],
            };
            self.tehai.initial(s, pids);
            out.notify_action(&Action::Haipai { actor: s, pais });
        }
        Ok(())
    }

    fn handle_reach(&mut self, e: &Element, out: &mut dyn ActionListener) -> DecodeResult {
        let actor = e.seat("who")?;
        let action = match e.get("step") {
            Some("1") => Action::Reach { actor },
            Some("2") => Action::ReachAccepted {
                actor,
                scores: scaled(e, "ten")?,
            },
            step => return Err(DecodeError::UnknownReachStep(step.map(String::from))),
        };
        out.notify_action(&action);
        Ok(())
    }

    fn handle_agari(&mut self, e: &Element, out: &mut dyn ActionListener) -> DecodeResult {
        let (deltas, scores) = score_changes(e)?;
        out.notify_action(&Action::Hora {
            actor: e.seat("who")?,
            target: e.seat("fromWho")?,
            pai: pid_to_tile(e.pid("machi")?),
            deltas,
            scores,
        });
        self.handle_owari(e, out)
    }

    fn handle_ryuukyoku(&mut self, e: &Element, out: &mut dyn ActionListener) -> DecodeResult {
        let code = e.get("type");
        let reason = DrawReason::from_tenhou(code)
            .ok_or_else(|| DecodeError::UnknownDrawReason(code.unwrap_or_default().to_string()))?;
        let (deltas, scores) = score_changes(e)?;
        out.notify_action(&Action::Ryukyoku {
            reason,
            deltas,
            scores,
        });
        self.handle_owari(e, out)
    }

    // owari属性がある場合は対局終了
    fn handle_owari(&mut self, e: &Element, out: &mut dyn ActionListener) -> DecodeResult {
        if e.get("owari").is_none() {
            return Ok(());
        }
        let scores = pairs(e, "owari")?.map(|(s, _)| s);
        self.end_game(scores, out);
        Ok(())
    }

    fn end_game(&mut self, scores: Option<[Score; SEAT]>, out: &mut dyn ActionListener) {
        out.notify_action(&Action::EndKyoku {});
        out.notify_action(&Action::EndGame { scores });
        self.phase = Phase::GameEnded;
        debug!("end game");
    }

    fn handle_meld(&mut self, e: &Element, out: &mut dyn ActionListener) -> DecodeResult {
        let actor = e.seat("who")?;
        let meld = MeldCall::decode(e.parse("m")?);

        // 手牌から使用した牌を取り除く (加槓と抜きドラは手牌の1枚のみ)
        match meld.kind {
            MeldKind::Kakan | MeldKind::Nukidora => self.tehai.remove(actor, meld.taken)?,
            _ => {
                for &p in &meld.consumed {
                    self.tehai.remove(actor, Some(p))?;
                }
            }
        }

        out.notify_action(&meld.to_action(actor));
        Ok(())
    }
}

// 配牌. 親(座席0)はhai属性の場合もある. 空の属性は不明として扱う.
fn haipai_pids(e: &Element, seat: Seat) -> DecodeResult<Option<Vec<Pid>>> {
    let key = if seat == 0 && e.get("hai").is_some() {
        "hai".to_string()
    } else {
        format!("hai{}", seat)
    };
    e.parse_list(&key)
}

// 100点単位の点数を1点単位に変換
fn scaled(e: &Element, key: &str) -> DecodeResult<Option<[Score; SEAT]>> {
    let v = match e.parse_list::<Score>(key)? {
        Some(v) if v.len() >= SEAT => v,
        _ => return Ok(None),
    };
    let mut res = [0; SEAT];
    for s in 0..SEAT {
        res[s] = v[s]
            .checked_mul(100)
            .ok_or_else(|| e.invalid(key, e.get(key).unwrap_or_default()))?;
    }
    Ok(Some(res))
}

// 100点単位の小数を1点単位の整数に変換. 範囲外はNone
fn to_points(v: f64) -> Option<Point> {
    let p = (v * 100.0).round();
    if p.is_finite() && p >= Point::MIN as f64 && p <= Point::MAX as f64 {
        Some(p as Point)
    } else {
        None
    }
}

// (点数, 増減)が交互に並ぶリストを分解 (sc, owari)
fn pairs(e: &Element, key: &str) -> DecodeResult<Option<([Score; SEAT], [Point; SEAT])>> {
    let v = match e.parse_list::<f64>(key)? {
        Some(v) if v.len() >= SEAT * 2 => v,
        _ => return Ok(None),
    };
    let invalid = || e.invalid(key, e.get(key).unwrap_or_default());
    let mut first = [0; SEAT];
    let mut second = [0; SEAT];
    for s in 0..SEAT {
        first[s] = to_points(v[s * 2]).ok_or_else(invalid)?;
        second[s] = to_points(v[s * 2 + 1]).ok_or_else(invalid)?;
    }
    Ok(Some((first, second)))
}

// sc属性から (増減, 精算後の点数)
fn score_changes(e: &Element) -> DecodeResult<(Option<[Point; SEAT]>, Option<[Score; SEAT]>)> {
    let (before, deltas) = match pairs(e, "sc")? {
        Some(sc) => sc,
        None => return Ok((None, None)),
    };
    let mut scores = [0; SEAT];
    for s in 0..SEAT {
        scores[s] = before[s]
            .checked_add(deltas[s])
            .ok_or_else(|| e.invalid("sc", e.get("sc").unwrap_or_default()))?;
    }
    Ok((Some(deltas), Some(scores)))
}

pub fn decode_elements(
    elems: &[Element],
    config: DecoderConfig,
    out: &mut dyn ActionListener,
) -> DecodeResult<DecodeStatus> {
    TenhouSession::new(config).run(elems, out)
}
