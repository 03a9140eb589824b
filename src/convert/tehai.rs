use super::error::{DecodeError, DecodeResult};
use super::pid::Pid;
use crate::model::*;

// [TehaiTracker]
// 各プレイヤーの手牌を牌番号で管理 (None: 不明牌)
// 配牌時は13枚, ツモ直後は打牌または副露まで1枚多い
#[derive(Debug, Default, Clone)]
pub struct TehaiTracker {
    hands: [Vec<Option<Pid>>; SEAT],
}

impl TehaiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    // 配牌. 見えない手牌はNoneを指定
    pub fn initial(&mut self, seat: Seat, pids: Option<Vec<Pid>>) {
        self.hands[seat] = match pids {
            Some(pids) => pids.into_iter().map(Some).collect(),
            None => vec![None; HAND],
        };
    }

    pub fn draw(&mut self, seat: Seat, pid: Option<Pid>) {
        self.hands[seat].push(pid);
    }

    pub fn discard(&mut self, seat: Seat, pid: Option<Pid>) -> DecodeResult {
        self.remove(seat, pid)
    }

    // 一致する牌を先頭から1枚取り除く. 一致する牌がなければ不明牌を1枚取り除く
    pub fn remove(&mut self, seat: Seat, pid: Option<Pid>) -> DecodeResult {
        let hand = &mut self.hands[seat];
        let pos = hand
            .iter()
            .position(|&p| p == pid)
            .or_else(|| hand.iter().position(|p| p.is_none()));
        match pos {
            Some(i) => {
                hand.remove(i);
                Ok(())
            }
            None => Err(DecodeError::TileNotInHand { seat, pid }),
        }
    }

    pub fn hand(&self, seat: Seat) -> &[Option<Pid>] {
        &self.hands[seat]
    }

    pub fn contains(&self, seat: Seat, pid: Pid) -> bool {
        self.hands[seat].contains(&Some(pid))
    }
}
