use std::io::{self, Write};

use tracing::error;

use super::ActionListener;
use crate::model::*;

// [ActionWriter]
// 行動を1行1JSONで書き出す (mjai形式)
// 書き込みエラーは最初の1つを保持し, 以降の書き込みは行わない
#[derive(Debug)]
pub struct ActionWriter<W: Write> {
    out: W,
    count: usize,
    error: Option<io::Error>,
}

impl<W: Write> ActionWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            count: 0,
            error: None,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_action(&mut self, action: &Action) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, action)?;
        self.out.write_all(b"\n")
    }
}

impl<W: Write> ActionListener for ActionWriter<W> {
    fn notify_action(&mut self, action: &Action) {
        if self.error.is_some() {
            return;
        }
        match self.write_action(action) {
            Ok(()) => self.count += 1,
            Err(e) => {
                error!(count = self.count, "failed to write action: {}", e);
                self.error = Some(e);
            }
        }
    }
}
