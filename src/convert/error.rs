use thiserror::Error;

use super::pid::Pid;
use crate::model::*;

// [DecodeError]
// 牌譜の構造と解釈が食い違った場合のエラー. 発生した時点で変換は続行できない.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unknown tag name: {0}")]
    UnknownTag(String),
    #[error("unknown ryukyoku reason: {0}")]
    UnknownDrawReason(String),
    #[error("unknown reach step: {0:?}")]
    UnknownReachStep(Option<String>),
    #[error("seat {seat} does not have tile {}", .pid.map_or("?".to_string(), |p| p.to_string()))]
    TileNotInHand { seat: Seat, pid: Option<Pid> },
    #[error("<{tag}> is missing attribute '{attr}'")]
    MissingAttribute { tag: String, attr: String },
    #[error("<{tag}> has invalid attribute {attr}=\"{value}\"")]
    InvalidAttribute {
        tag: String,
        attr: String,
        value: String,
    },
}

pub type DecodeResult<T = ()> = Result<T, DecodeError>;
