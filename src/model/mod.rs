// 牌譜変換のデータモデル
mod action;
mod define;
mod tile;

use std::fmt;

use serde::Serialize;

pub use action::*;
pub use define::*;
pub use tile::*;
