use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{DecodeError, DecodeResult};
use super::pid::Pid;
use crate::model::*;

// [Element]
// 牌譜(mjlog)の1要素. XMLの展開は呼び出し側で行う.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attrs: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.attrs.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(|s| s.as_str())
    }

    pub fn require(&self, key: &str) -> DecodeResult<&str> {
        self.get(key).ok_or_else(|| DecodeError::MissingAttribute {
            tag: self.name.clone(),
            attr: key.to_string(),
        })
    }

    pub fn parse<T: FromStr>(&self, key: &str) -> DecodeResult<T> {
        let v = self.require(key)?;
        v.trim().parse().map_err(|_| self.invalid(key, v))
    }

    pub fn seat(&self, key: &str) -> DecodeResult<Seat> {
        let s: Seat = self.parse(key)?;
        if s >= SEAT {
            return Err(self.invalid(key, &s.to_string()));
        }
        Ok(s)
    }

    // 牌番号. 属性が無い場合は不明牌としてNone
    pub fn pid(&self, key: &str) -> DecodeResult<Option<Pid>> {
        match self.get(key) {
            Some(v) => v.parse().map(Some).map_err(|_| self.invalid(key, v)),
            None => Ok(None),
        }
    }

    // カンマ区切りの数値リスト (seed, ten, sc, owari など)
    pub fn parse_list<T: FromStr>(&self, key: &str) -> DecodeResult<Option<Vec<T>>> {
        let v = match self.get(key) {
            Some(v) if !v.trim().is_empty() => v,
            _ => return Ok(None),
        };
        v.split(',')
            .map(|s| s.trim().parse().map_err(|_| self.invalid(key, v)))
            .collect::<DecodeResult<Vec<T>>>()
            .map(Some)
    }

    pub fn invalid(&self, key: &str, value: &str) -> DecodeError {
        DecodeError::InvalidAttribute {
            tag: self.name.clone(),
            attr: key.to_string(),
            value: value.to_string(),
        }
    }
}

// [Tag]
// 要素名の分類. ツモ(T,U,V,W)と打牌(D,E,F,G)は要素名に座席と牌番号を含む.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    PlayerList, // UN
    GameStart, // TAIKYOKU
    RoundInit, // INIT
    Draw(Seat, Option<Pid>),
    Discard(Seat, Option<Pid>),
    Reach, // REACH
    Win, // AGARI
    AbortiveDraw, // RYUUKYOKU
    Call, // N
    DoraReveal, // DORA
    Ignored, // SHUFFLE, GO, BYE, FURITEN
    Unknown(String),
}

impl Tag {
    pub fn classify(name: &str) -> Self {
        match name {
            "UN" => return Self::PlayerList,
            "TAIKYOKU" => return Self::GameStart,
            "INIT" => return Self::RoundInit,
            "REACH" => return Self::Reach,
            "AGARI" => return Self::Win,
            "RYUUKYOKU" => return Self::AbortiveDraw,
            "N" => return Self::Call,
            "DORA" => return Self::DoraReveal,
            "SHUFFLE" | "GO" | "BYE" | "FURITEN" => return Self::Ignored,
            _ => {}
        }

        let mut chars = name.chars();
        let head = match chars.next() {
            Some(c) => c.to_ascii_uppercase(),
            None => return Self::Unknown(name.to_string()),
        };
        let digits = chars.as_str();
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Self::Unknown(name.to_string());
        }
        let pid = if digits.is_empty() {
            None
        } else {
            match digits.parse() {
                Ok(p) => Some(p),
                Err(_) => return Self::Unknown(name.to_string()),
            }
        };
        match head {
            'T' | 'U' | 'V' | 'W' => Self::Draw(head as usize - 'T' as usize, pid),
            'D' | 'E' | 'F' | 'G' => Self::Discard(head as usize - 'D' as usize, pid),
            _ => Self::Unknown(name.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Tag::classify("UN"), Tag::PlayerList);
        assert_eq!(Tag::classify("DORA"), Tag::DoraReveal);
        assert_eq!(Tag::classify("N"), Tag::Call);
        assert_eq!(Tag::classify("FURITEN"), Tag::Ignored);
        assert_eq!(Tag::classify("T12"), Tag::Draw(0, Some(Pid(12))));
        assert_eq!(Tag::classify("W135"), Tag::Draw(3, Some(Pid(135))));
        assert_eq!(Tag::classify("E23"), Tag::Discard(1, Some(Pid(23))));
        assert_eq!(Tag::classify("g7"), Tag::Discard(3, Some(Pid(7))));
        assert_eq!(Tag::classify("U"), Tag::Draw(1, None));
        assert_eq!(Tag::classify("D"), Tag::Discard(0, None));
        assert_eq!(Tag::classify("X1"), Tag::Unknown("X1".to_string()));
        assert_eq!(Tag::classify("T999"), Tag::Unknown("T999".to_string()));
        assert_eq!(Tag::classify("T200"), Tag::Unknown("T200".to_string()));
        assert_eq!(Tag::classify("D136"), Tag::Unknown("D136".to_string()));
        assert_eq!(Tag::classify("G135"), Tag::Discard(3, Some(Pid(135))));
        assert_eq!(Tag::classify("DORAX"), Tag::Unknown("DORAX".to_string()));
        assert_eq!(Tag::classify(""), Tag::Unknown("".to_string()));
    }

    #[test]
    fn test_attrs() {
        let e = Element::new("INIT")
            .with("oya", "2")
            .with("seed", "0,0,0,3,1,35")
            .with("who", "4");
        assert_eq!(e.seat("oya"), Ok(2));
        assert_eq!(e.parse_list::<u32>("seed"), Ok(Some(vec![0, 0, 0, 3, 1, 35])));
        assert_eq!(e.parse_list::<u32>("ten"), Ok(None));
        assert!(matches!(
            e.seat("who"),
            Err(DecodeError::InvalidAttribute { .. })
        ));
        assert!(matches!(
            e.seat("step"),
            Err(DecodeError::MissingAttribute { .. })
        ));

        let e = Element::new("DORA").with("hai", "250").with("machi", "135");
        assert_eq!(e.pid("hai"), Err(e.invalid("hai", "250")));
        assert_eq!(e.pid("machi"), Ok(Some(Pid(135))));
        assert_eq!(e.pid("who"), Ok(None));
        let e = Element::new("INIT").with("hai1", "1,2,136");
        assert!(matches!(
            e.parse_list::<Pid>("hai1"),
            Err(DecodeError::InvalidAttribute { .. })
        ));
    }

    #[test]
    fn test_deserialize() {
        let e: Element =
            serde_json::from_str(r#"{"name": "T45", "attrs": {}}"#).unwrap();
        assert_eq!(e, Element::new("T45"));
        let e: Element = serde_json::from_str(r#"{"name": "GO"}"#).unwrap();
        assert!(e.attrs.is_empty());
    }
}
