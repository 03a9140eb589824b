use super::ActionListener;
use crate::model::*;

// [ActionRecorder]
// 通知された行動をすべて保持する
#[derive(Debug, Default)]
pub struct ActionRecorder {
    pub actions: Vec<Action>,
    pub broken: bool,
}

impl ActionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_names(&self) -> Vec<&'static str> {
        self.actions.iter().map(|a| a.type_name()).collect()
    }
}

impl ActionListener for ActionRecorder {
    fn notify_action(&mut self, action: &Action) {
        self.actions.push(action.clone());
    }

    fn notify_broken(&mut self) {
        self.broken = true;
    }
}
