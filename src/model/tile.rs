use serde::ser;

use super::*;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile(pub Type, pub Tnum); // (type index, number index)
pub const Z8: Tile = Tile(TZ, UK); // unknown tile

impl Tile {
    #[inline]
    pub fn is_unknown(&self) -> bool {
        *self == Z8
    }

    // 赤5
    #[inline]
    pub fn is_red(&self) -> bool {
        self.0 != TZ && self.1 == 0
    }

    // 赤5の場合,通常の5を返却. それ以外の場合はコピーをそのまま返却.
    #[inline]
    pub fn to_normal(self) -> Self {
        if self.1 == 0 {
            Self(self.0, 5)
        } else {
            self
        }
    }

    // 赤5を5として扱った数字部分
    #[inline]
    pub fn number(&self) -> Tnum {
        self.to_normal().1
    }

    // 字牌
    #[inline]
    pub fn is_hornor(&self) -> bool {
        self.0 == TZ
    }

    // mjai形式の牌表記 (5mr, E, ? など)
    pub fn to_mjai(&self) -> String {
        if self.is_unknown() {
            return "?".to_string();
        }
        if self.is_hornor() {
            const HORNOR: [&str; 8] = ["", "E", "S", "W", "N", "P", "F", "C"];
            return HORNOR.get(self.1).unwrap_or(&"?").to_string();
        }
        format!(
            "{}{}{}",
            self.number(),
            ['m', 'p', 's'][self.0],
            if self.is_red() { "r" } else { "" }
        )
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_mjai())
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return write!(f, "z8");
        }
        write!(f, "{}{}", ['m', 'p', 's', 'z'][self.0], self.1)
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_mjai())
    }
}
