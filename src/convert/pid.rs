use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::*;

// [Pid]
// 天鳳の牌番号 (0~135). 136枚の牌それぞれに一意に割り当てられる.
// type = pid / 36, number = (pid % 36) / 4 + 1, copy = pid % 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pid(pub u8);

pub const PID_COUNT: usize = 136;

impl Pid {
    pub fn from_parts(ti: Type, ni: Tnum, copy: usize) -> Self {
        let pid = ti * 36 + (ni.max(1) - 1) * TILE + copy % TILE;
        Self(u8::try_from(pid).unwrap_or(u8::MAX))
    }

    pub fn is_valid(&self) -> bool {
        (self.0 as usize) < PID_COUNT
    }

    // (type, number, copy). 範囲外の場合はNone
    pub fn decompose(&self) -> Option<(Type, Tnum, usize)> {
        if !self.is_valid() {
            return None;
        }
        let p = self.0 as usize;
        Some((p / 36, (p % 36) / TILE + 1, p % TILE))
    }

    pub fn to_tile(&self) -> Tile {
        match self.decompose() {
            Some((ti, ni, copy)) => tile_from_parts(ti, ni, copy),
            None => Z8,
        }
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid tile id: {0:?}")]
pub struct ParsePidError(pub String);

// 0~135以外は不正な牌番号
impl FromStr for Pid {
    type Err = ParsePidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(p) if (p as usize) < PID_COUNT => Ok(Self(p)),
            _ => Err(ParsePidError(s.to_string())),
        }
    }
}

// 萬子,筒子,索子の5のコピー0番が赤5
pub fn tile_from_parts(ti: Type, ni: Tnum, copy: usize) -> Tile {
    if ti > TZ || ni == 0 || ni > 9 || (ti == TZ && ni > DR) {
        return Z8;
    }
    if ti != TZ && ni == 5 && copy == 0 {
        Tile(ti, 0)
    } else {
        Tile(ti, ni)
    }
}

pub fn pid_to_tile(pid: Option<Pid>) -> Tile {
    pid.map_or(Z8, |p| p.to_tile())
}

// 文字列の牌番号から牌に変換. 数値として解釈できない場合は不明牌
pub fn pid_str_to_tile(pid: Option<&str>) -> Tile {
    pid_to_tile(pid.and_then(|s| s.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_all() {
        for p in 0..PID_COUNT as u8 {
            let pid = Pid(p);
            let (ti, ni, copy) = pid.decompose().unwrap();
            assert!(ti <= TZ);
            if ti == TZ {
                assert!((1..=7).contains(&ni), "pid {}", p);
            } else {
                assert!((1..=9).contains(&ni), "pid {}", p);
            }
            assert!(copy < TILE);
            assert_eq!(Pid::from_parts(ti, ni, copy), pid);
        }
    }

    #[test]
    fn test_red5_count() {
        let reds: Vec<u8> = (0..136u8).filter(|&p| Pid(p).to_tile().is_red()).collect();
        assert_eq!(reds, vec![16, 52, 88]);
    }

    #[test]
    fn test_known_tiles() {
        assert_eq!(Pid(0).to_tile(), Tile(TM, 1));
        assert_eq!(Pid(23).to_tile(), Tile(TM, 6));
        assert_eq!(Pid(17).to_tile(), Tile(TM, 5));
        assert_eq!(Pid(36).to_tile(), Tile(TP, 1));
        assert_eq!(Pid(108).to_tile(), Tile(TZ, WE));
        assert_eq!(Pid(135).to_tile(), Tile(TZ, DR));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(pid_to_tile(None), Z8);
        assert_eq!(Pid(136).to_tile(), Z8);
        assert_eq!(Pid(255).to_tile(), Z8);
        assert_eq!(pid_str_to_tile(None), Z8);
        assert_eq!(pid_str_to_tile(Some("abc")), Z8);
        assert_eq!(pid_str_to_tile(Some("23")), Tile(TM, 6));
        assert_eq!(pid_str_to_tile(Some("136")), Z8);
    }

    #[test]
    fn test_parse() {
        assert_eq!("0".parse(), Ok(Pid(0)));
        assert_eq!(" 135".parse(), Ok(Pid(135)));
        assert_eq!(
            "136".parse::<Pid>(),
            Err(ParsePidError("136".to_string()))
        );
        assert!("255".parse::<Pid>().is_err());
        assert!("-1".parse::<Pid>().is_err());
        assert!("".parse::<Pid>().is_err());
    }
}
