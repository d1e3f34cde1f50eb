use std::collections::BTreeSet;

/// Nicks believed to be in the channel.
///
/// Ordered so that anything listing members (score listings) is
/// deterministic. Nicks are compared exactly as they appear on the wire.
#[derive(Debug, Default)]
pub struct Presence {
    nicks: BTreeSet<String>,
}

impl Presence {
    /// Returns `true` if the nick was not already present.
    pub fn insert(&mut self, nick: &str) -> bool {
        if self.nicks.contains(nick) {
            return false;
        }
        self.nicks.insert(nick.to_owned())
    }

    /// Returns `true` if the nick was present.
    pub fn remove(&mut self, nick: &str) -> bool {
        self.nicks.remove(nick)
    }

    pub fn contains(&self, nick: &str) -> bool {
        self.nicks.contains(nick)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.nicks.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.nicks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nicks.is_empty()
    }
}
