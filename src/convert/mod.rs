// 天鳳牌譜(mjlog)の変換
mod element;
mod error;
mod meld;
mod pid;
mod tehai;
mod tenhou;

pub use element::{Element, Tag};
pub use error::{DecodeError, DecodeResult};
pub use meld::{BitCursor, MeldCall, MeldKind};
pub use pid::{pid_str_to_tile, pid_to_tile, tile_from_parts, ParsePidError, Pid, PID_COUNT};
pub use tehai::TehaiTracker;
pub use tenhou::{decode_elements, DecodeStatus, DecoderConfig, TenhouSession};
