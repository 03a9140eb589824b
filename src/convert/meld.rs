use super::pid::Pid;
use crate::model::*;

// 天鳳の副露コード(m属性)の解析
// 下位ビットから順に 方向(2bit), チー, ポン, 加槓, 抜きドラ のフラグを読み,
// 最初に立っているフラグの形式で残りのビットを解釈する. いずれも立っていなければ槓.

// [BitCursor]
#[derive(Debug, Clone, Copy)]
pub struct BitCursor {
    bits: u32,
    consumed: u32, // 読み出したビット数
}

impl BitCursor {
    pub fn new(bits: u32) -> Self {
        Self { bits, consumed: 0 }
    }

    pub fn read(&mut self, n: u32) -> u32 {
        let v = self.bits & ((1 << n) - 1);
        self.bits = self.bits.checked_shr(n).unwrap_or(0);
        self.consumed += n;
        v
    }

    #[inline]
    pub fn flag(&mut self) -> bool {
        self.read(1) == 1
    }

    #[inline]
    pub fn skip(&mut self, n: u32) {
        self.read(n);
    }

    pub fn consumed(&self) -> u32 {
        self.consumed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeldKind {
    Chi,
    Pon,
    Kakan,
    Ankan,
    Daiminkan,
    Nukidora,
}

impl MeldKind {
    // 他家が関与しない副露 (target無し)
    #[inline]
    pub fn is_self_contained(&self) -> bool {
        matches!(self, MeldKind::Ankan | MeldKind::Kakan | MeldKind::Nukidora)
    }
}

// [MeldCall]
// taken: 他家から取得した牌 (加槓の場合は追加した牌, 抜きドラの場合は抜いた牌)
// consumed: 手牌(または既存のポン)から使用した牌
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeldCall {
    pub kind: MeldKind,
    pub offset: usize, // 鳴いた相手の相対位置 (0: 自分)
    pub taken: Option<Pid>,
    pub consumed: Vec<Pid>,
}

impl MeldCall {
    pub fn decode(m: u32) -> Self {
        let mut c = BitCursor::new(m);
        let offset = c.read(2) as usize;
        if c.flag() {
            return decode_chi(&mut c, offset);
        }
        if c.flag() {
            return decode_pon(&mut c, offset);
        }
        if c.flag() {
            return decode_kakan(&mut c);
        }
        if c.flag() {
            return decode_nukidora(&mut c);
        }
        decode_kan(&mut c, offset)
    }

    pub fn source(&self, actor: Seat) -> Option<Seat> {
        if self.kind.is_self_contained() {
            None
        } else {
            Some((actor + self.offset) % SEAT)
        }
    }

    pub fn tile_count(&self) -> usize {
        self.consumed.len() + self.taken.map_or(0, |_| 1)
    }

    pub fn taken_tile(&self) -> Tile {
        self.taken.map_or(Z8, |p| p.to_tile())
    }

    pub fn consumed_tiles(&self) -> Vec<Tile> {
        self.consumed.iter().map(|p| p.to_tile()).collect()
    }

    pub fn to_action(&self, actor: Seat) -> Action {
        let pai = self.taken_tile();
        let consumed = self.consumed_tiles();
        let target = self.source(actor).unwrap_or(actor);
        match self.kind {
            MeldKind::Chi => Action::Chi {
                actor,
                target,
                pai,
                consumed,
            },
            MeldKind::Pon => Action::Pon {
                actor,
                target,
                pai,
                consumed,
            },
            MeldKind::Daiminkan => Action::Daiminkan {
                actor,
                target,
                pai,
                consumed,
            },
            MeldKind::Kakan => Action::Kakan {
                actor,
                pai,
                consumed,
            },
            MeldKind::Ankan => Action::Ankan { actor, consumed },
            MeldKind::Nukidora => Action::Nukidora { actor, pai },
        }
    }
}

fn decode_chi(c: &mut BitCursor, offset: usize) -> MeldCall {
    let copies = [c.read(2), c.read(2), c.read(2)];
    c.skip(1);
    let pattern = c.read(6) as usize;
    let kind = pattern / 3;
    let taken_pos = pattern % 3;
    let ti = kind / 7;
    let first = kind % 7 + 1;

    let mut taken = None;
    let mut consumed = vec![];
    for (i, &copy) in copies.iter().enumerate() {
        let p = Pid::from_parts(ti, first + i, copy as usize);
        if i == taken_pos {
            taken = Some(p);
        } else {
            consumed.push(p);
        }
    }
    MeldCall {
        kind: MeldKind::Chi,
        offset,
        taken,
        consumed,
    }
}

fn decode_pon(c: &mut BitCursor, offset: usize) -> MeldCall {
    c.skip(1);
    let unused = c.read(2) as usize;
    c.skip(2);
    let pattern = c.read(7) as usize;
    let kind = pattern / 3;
    let taken_pos = pattern % 3;
    let (ti, ni) = (kind / 9, kind % 9 + 1);

    let mut taken = None;
    let mut consumed = vec![];
    for (j, copy) in (0..TILE).filter(|&i| i != unused).enumerate() {
        let p = Pid::from_parts(ti, ni, copy);
        if j == taken_pos {
            taken = Some(p);
        } else {
            consumed.push(p);
        }
    }
    MeldCall {
        kind: MeldKind::Pon,
        offset,
        taken,
        consumed,
    }
}

// 加槓は方向に関係なく自分の副露として扱う
fn decode_kakan(c: &mut BitCursor) -> MeldCall {
    let added = c.read(2) as usize;
    c.skip(2);
    let pattern = c.read(7) as usize;
    let kind = pattern / 3;
    let (ti, ni) = (kind / 9, kind % 9 + 1);

    let mut taken = None;
    let mut consumed = vec![];
    for copy in 0..TILE {
        let p = Pid::from_parts(ti, ni, copy);
        if copy == added {
            taken = Some(p);
        } else {
            consumed.push(p);
        }
    }
    MeldCall {
        kind: MeldKind::Kakan,
        offset: 0,
        taken,
        consumed,
    }
}

fn decode_nukidora(c: &mut BitCursor) -> MeldCall {
    c.skip(2);
    let pid = Pid(c.read(8) as u8);
    MeldCall {
        kind: MeldKind::Nukidora,
        offset: 0,
        taken: Some(pid),
        consumed: vec![],
    }
}

fn decode_kan(c: &mut BitCursor, offset: usize) -> MeldCall {
    c.skip(2);
    let key = Pid(c.read(8) as u8);
    let kind = if offset == 0 {
        MeldKind::Ankan
    } else {
        MeldKind::Daiminkan
    };

    // 不正な牌番号でも4枚分のコピーを生成する
    let k = key.0 as usize;
    let (ti, ni, key_copy) = (k / 36, (k % 36) / TILE + 1, k % TILE);
    let mut taken = None;
    let mut consumed = vec![];
    for copy in 0..TILE {
        let p = Pid::from_parts(ti, ni, copy);
        if copy == key_copy && kind == MeldKind::Daiminkan {
            taken = Some(p);
        } else {
            consumed.push(p);
        }
    }
    MeldCall {
        kind,
        offset,
        taken,
        consumed,
    }
}
