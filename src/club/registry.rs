use std::collections::hash_map::Entry;
use std::collections::HashMap;

use club_voting::NominationSet;
use log::{info, warn};

/// The mutable voting state of one group: its nomination set and whether
/// the session is still open for nominations and votes.
#[derive(Debug)]
pub struct GroupSession {
    pub nominations: NominationSet,
    pub voting: bool,
}

impl GroupSession {
    fn new() -> GroupSession {
        GroupSession {
            nominations: NominationSet::new(),
            voting: true,
        }
    }
}

/// Per-group session state, keyed by group name.
///
/// Groups are created on first use. Each group's session is an independent
/// unit; the registry itself holds no cross-group state and expects its
/// caller to serialize access per group.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, GroupSession>,
}

impl SessionRegistry {
    pub fn new() -> SessionRegistry {
        SessionRegistry {
            sessions: HashMap::new(),
        }
    }

    /// Opens a voting session for this group, creating it on first use. A
    /// finished session is reset to a fresh nomination set; a session that
    /// is still open is returned untouched.
    pub fn start(&mut self, group: &str) -> &mut GroupSession {
        match self.sessions.entry(group.to_string()) {
            Entry::Occupied(entry) => {
                let session = entry.into_mut();
                if session.voting {
                    warn!("start: a voting session is already open for {:?}", group);
                } else {
                    info!("start: reopening session for {:?}", group);
                    session.nominations = NominationSet::new();
                    session.voting = true;
                }
                session
            }
            Entry::Vacant(entry) => {
                info!("start: new session for {:?}", group);
                entry.insert(GroupSession::new())
            }
        }
    }

    pub fn get(&self, group: &str) -> Option<&GroupSession> {
        self.sessions.get(group)
    }

    pub fn get_mut(&mut self, group: &str) -> Option<&mut GroupSession> {
        self.sessions.get_mut(group)
    }

    /// Closes the voting session of this group, keeping its state around
    /// for the final tally. `None` if the group never started a session.
    pub fn end(&mut self, group: &str) -> Option<&GroupSession> {
        let session = self.sessions.get_mut(group)?;
        session.voting = false;
        Some(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use club_voting::{Book, BookRecord, Voter};

    fn book(id: &str) -> Book {
        Book::from_record(&BookRecord {
            id: id.to_string(),
            title: id.to_string(),
            authors: vec![],
            cover: None,
            description: None,
            page_count: None,
        })
    }

    #[test]
    fn groups_are_created_on_first_use() {
        let mut registry = SessionRegistry::new();
        assert!(registry.get("alpha").is_none());
        registry.start("alpha");
        assert!(registry.get("alpha").unwrap().voting);
        assert!(registry.get("beta").is_none());
    }

    #[test]
    fn starting_an_open_session_keeps_its_state() {
        let mut registry = SessionRegistry::new();
        registry
            .start("alpha")
            .nominations
            .register(Voter::new(1, "ann"), book("a"));
        let session = registry.start("alpha");
        assert_eq!(session.nominations.count(), 1);
    }

    #[test]
    fn restarting_a_finished_session_resets_it() {
        let mut registry = SessionRegistry::new();
        registry
            .start("alpha")
            .nominations
            .register(Voter::new(1, "ann"), book("a"));
        registry.end("alpha");
        assert!(!registry.get("alpha").unwrap().voting);
        let session = registry.start("alpha");
        assert!(session.voting);
        assert_eq!(session.nominations.count(), 0);
    }

    #[test]
    fn ending_an_unknown_group_is_none() {
        let mut registry = SessionRegistry::new();
        assert!(registry.end("alpha").is_none());
    }

    #[test]
    fn groups_are_independent() {
        let mut registry = SessionRegistry::new();
        registry
            .start("alpha")
            .nominations
            .register(Voter::new(1, "ann"), book("a"));
        registry.start("beta");
        assert_eq!(registry.get("alpha").unwrap().nominations.count(), 1);
        assert_eq!(registry.get("beta").unwrap().nominations.count(), 0);
    }
}
