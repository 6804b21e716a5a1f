use std::collections::VecDeque;
use std::fmt;
use std::io::Write;

use crate::constants::MESSAGE_LOG_CAPACITY;
use crate::errors::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Level {
    Error,
    Info,
    Verbose,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Level::Error => "ERROR",
            Level::Info => "INFO",
            Level::Verbose => "VERBOSE",
        };

        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub level: Level,
    pub text: String,
}

/// Bounded log of diagnostic messages; once full, the oldest message is
/// dropped for every new one.
#[derive(Debug)]
pub struct MessageLog {
    capacity: usize,
    messages: VecDeque<Message>,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::with_capacity(MESSAGE_LOG_CAPACITY)
    }
}

impl MessageLog {
    pub fn with_capacity(capacity: usize) -> MessageLog {
        MessageLog {
            capacity,
            messages: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, level: Level, text: String) {
        if self.capacity == 0 {
            return;
        }

        while self.messages.len() >= self.capacity {
            self.messages.pop_front();
        }

        self.messages.push_back(Message { level, text });
    }

    /// Records an informational message and echoes it to STDERR.
    pub fn info(&mut self, text: String) {
        eprintln!("{}", text);
        self.push(Level::Info, text);
    }

    /// Records a message without echoing it.
    pub fn verbose(&mut self, text: String) {
        self.push(Level::Verbose, text);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn write(&self, out: &mut dyn Write) -> Result<()> {
        for message in &self.messages {
            writeln!(out, "[{}] {}", message.level, message.text)
                .chain_err(|| "failed to write debug log")?;
        }

        Ok(())
    }
}
