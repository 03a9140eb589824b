mod action_recorder;
mod action_writer;

use std::fmt;

use crate::model::*;

pub use action_recorder::ActionRecorder;
pub use action_writer::ActionWriter;

// 牌譜から復元した行動を受け取る (Observer Pattern)
// notify_brokenが呼ばれた後は行動は通知されない
pub trait ActionListener {
    fn notify_action(&mut self, action: &Action);
    fn notify_broken(&mut self) {}
}

impl fmt::Debug for dyn ActionListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActionListener")
    }
}
