// mainから直接呼び出すアプリケーションの動作モード(convert, meld)のモジュール

mod convert;
mod meld;

pub use convert::{ConvertApp, ConvertArgs};
pub use meld::{MeldApp, MeldArgs};
