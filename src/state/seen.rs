//! Last-seen log.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use slirc_proto::{CommandKind, Event};

/// The most recent qualifying event from a nick.
#[derive(Clone, Debug)]
pub struct SeenEntry {
    pub event: Event,
    pub at: DateTime<Utc>,
}

impl SeenEntry {
    /// What the nick said, or `""` for joins and parts.
    pub fn text(&self) -> &str {
        self.event.text()
    }

    /// Phrase describing what the nick was doing, for "seen" replies.
    pub fn activity(&self) -> String {
        match self.event.kind {
            CommandKind::Join => format!("joining {}", self.event.channel()),
            CommandKind::Part => format!("leaving {}", self.event.channel()),
            _ => format!("saying \"{}\"", self.event.text()),
        }
    }
}

/// nick -> last PRIVMSG/JOIN/PART. Entries are overwritten, never pruned.
#[derive(Debug, Default)]
pub struct SeenLog {
    entries: HashMap<String, SeenEntry>,
}

impl SeenLog {
    /// Whether an event is the kind that gets recorded.
    pub fn tracks(event: &Event) -> bool {
        matches!(
            event.kind,
            CommandKind::PrivateMessage | CommandKind::Join | CommandKind::Part
        ) && !event.nick.is_empty()
    }

    pub fn record(&mut self, event: &Event, at: DateTime<Utc>) {
        self.entries.insert(
            event.nick.clone(),
            SeenEntry {
                event: event.clone(),
                at,
            },
        );
    }

    pub fn get(&self, nick: &str) -> Option<&SeenEntry> {
        self.entries.get(nick)
    }
}
