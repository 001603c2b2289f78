mod config;
pub mod manual;

use log::{debug, info};

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

pub use crate::config::*;

/// A 1-based placement on a ballot.
type Place = usize;

const MEDALS: [&str; 3] = ["\u{1f947}", "\u{1f948}", "\u{1f949}"];

/// One registered (nominator, book) pairing of the current voting session.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Nomination {
    pub nominator: Voter,
    pub book: Book,
}

/// The ballots of one voting session, keyed by voter.
///
/// Each voter holds at most one ballot and re-casting replaces it wholesale.
/// Picks are recorded by book id so that a ballot survives the removal of a
/// nomination: the stale pick stays in its slot and is simply never matched
/// by lookups against the current nomination list.
///
/// Entries are kept in first-cast order, which makes every tally walk
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct BallotBox {
    ballots: Vec<(Voter, Vec<BookId>)>,
}

impl BallotBox {
    pub fn new() -> BallotBox {
        BallotBox {
            ballots: Vec::new(),
        }
    }

    /// Records the ranked picks of one voter, replacing any prior ballot.
    ///
    /// The whole ballot is rejected if it holds more than `max_rank` picks
    /// or if it ranks the same book twice. On rejection the voter's prior
    /// ballot, if any, is left untouched.
    pub fn cast(
        &mut self,
        voter: Voter,
        picks: &[Nomination],
        max_rank: usize,
    ) -> Result<(), EngineError> {
        if picks.len() > max_rank {
            return Err(EngineError::InvalidBallot {
                fault: BallotFault::TooManyPicks {
                    picks: picks.len(),
                    max: max_rank,
                },
            });
        }
        let mut seen: HashSet<&BookId> = HashSet::new();
        for pick in picks {
            if !seen.insert(&pick.book.id) {
                return Err(EngineError::InvalidBallot {
                    fault: BallotFault::DuplicatePick,
                });
            }
        }
        let ranked: Vec<BookId> = picks.iter().map(|p| p.book.id.clone()).collect();
        debug!("cast: voter {:?} ranked {:?}", voter.id, ranked);
        match self.ballots.iter_mut().find(|(v, _)| *v == voter) {
            Some((_, prior)) => *prior = ranked,
            None => self.ballots.push((voter, ranked)),
        }
        Ok(())
    }

    /// The raw picks of a voter, stale entries included. `None` if the
    /// voter has not cast a ballot.
    pub fn ballot_for(&self, voter: &Voter) -> Option<&[BookId]> {
        self.ballots
            .iter()
            .find(|(v, _)| v == voter)
            .map(|(_, picks)| picks.as_slice())
    }

    /// Everyone who has cast a ballot, whatever its content.
    pub fn all_voters(&self) -> HashSet<Voter> {
        self.ballots.iter().map(|(v, _)| v.clone()).collect()
    }

    fn entries(&self) -> &[(Voter, Vec<BookId>)] {
        &self.ballots
    }
}

/// The ordered nominations of one voting session, together with its ballots.
///
/// Registration order is preserved and defines the stable 1-based positions
/// shown to the voters.
#[derive(Debug, Clone, Default)]
pub struct NominationSet {
    nominations: Vec<Nomination>,
    ballots: BallotBox,
}

impl NominationSet {
    pub fn new() -> NominationSet {
        NominationSet {
            nominations: Vec::new(),
            ballots: BallotBox::new(),
        }
    }

    /// Registers a nomination. If some nomination already carries the same
    /// book or the same nominator (first match in registration order), the
    /// set is left unchanged and `(false, existing)` is returned. Otherwise
    /// the new nomination is appended and `(true, new)` is returned.
    pub fn register(&mut self, nominator: Voter, book: Book) -> (bool, &Nomination) {
        if let Some(idx) = self
            .nominations
            .iter()
            .position(|n| n.book == book || n.nominator == nominator)
        {
            return (false, &self.nominations[idx]);
        }
        info!(
            "register: {:?} nominated {:?}",
            nominator.name, book.title
        );
        let idx = self.nominations.len();
        self.nominations.push(Nomination { nominator, book });
        (true, &self.nominations[idx])
    }

    /// Removes the nomination belonging to this nominator, if any. Ballots
    /// that ranked it keep their stale pick; it stops counting because it no
    /// longer matches any registered nomination.
    pub fn clear(&mut self, nominator: &Voter) {
        self.nominations.retain(|n| n.nominator != *nominator);
    }

    /// The nomination made by this voter, if any.
    pub fn nomination_for(&self, nominator: &Voter) -> Option<&Nomination> {
        self.nominations.iter().find(|n| n.nominator == *nominator)
    }

    /// Resolves 1-based positions into nominations, in request order and
    /// with duplicates kept. Callers assembling a ballot must reject
    /// duplicate positions themselves before casting.
    pub fn get_by_positions(&self, positions: &[usize]) -> Result<Vec<Nomination>, EngineError> {
        let count = self.nominations.len();
        let mut picked: Vec<Nomination> = Vec::with_capacity(positions.len());
        for &position in positions {
            if position == 0 || position > count {
                return Err(EngineError::OutOfRange {
                    index: position,
                    count,
                });
            }
            picked.push(self.nominations[position - 1].clone());
        }
        Ok(picked)
    }

    pub fn count(&self) -> usize {
        self.nominations.len()
    }

    pub fn nominations(&self) -> &[Nomination] {
        &self.nominations
    }

    /// The ballot box of this session.
    pub fn ballots(&self) -> &BallotBox {
        &self.ballots
    }

    /// Casts a ballot against the current nomination list. The maximum
    /// number of picks is the current nomination count.
    pub fn cast(&mut self, voter: Voter, picks: &[Nomination]) -> Result<(), EngineError> {
        let max_rank = self.nominations.len();
        self.ballots.cast(voter, picks, max_rank)
    }

    /// The current ranked picks of a voter, with stale picks filtered out.
    /// `None` if the voter has not cast a ballot.
    pub fn ballot_for(&self, voter: &Voter) -> Option<Vec<Nomination>> {
        let picks = self.ballots.ballot_for(voter)?;
        Some(
            picks
                .iter()
                .filter_map(|id| self.nominations.iter().find(|n| n.book.id == *id))
                .cloned()
                .collect(),
        )
    }

    /// The voters who placed this nomination, keyed by place.
    ///
    /// Each ballot is scanned once; the first slot naming this book decides
    /// the place and the rest of the ballot is ignored. The place is the
    /// stored 1-based slot, so a stale pick earlier in a ballot still
    /// occupies its slot. Absent places mean no voter.
    pub fn vote_breakdown(&self, nomination: &Nomination) -> BTreeMap<Place, Vec<Voter>> {
        let mut votes: BTreeMap<Place, Vec<Voter>> = BTreeMap::new();
        for (voter, picks) in self.ballots.entries() {
            for (idx, pick) in picks.iter().enumerate() {
                if *pick == nomination.book.id {
                    votes.entry(idx + 1).or_default().push(voter.clone());
                    break;
                }
            }
        }
        votes
    }

    /// The voters who cast some ballot but never ranked this nomination.
    /// Voters who cast no ballot at all are not in this set.
    pub fn non_voters(&self, nomination: &Nomination) -> HashSet<Voter> {
        self.ballots
            .entries()
            .iter()
            .filter(|(_, picks)| !picks.iter().any(|p| *p == nomination.book.id))
            .map(|(voter, _)| voter.clone())
            .collect()
    }

    /// The average-placement score of a nomination. Lower is better.
    ///
    /// Voters who placed the nomination contribute their place; voters who
    /// cast a ballot without ranking it are counted as if they had placed it
    /// dead last (the nomination count). With no ballots in the session at
    /// all the score defaults to 0.
    pub fn rank(&self, nomination: &Nomination) -> f64 {
        let count = self.nominations.len();
        let mut weighted: usize = 0;
        let mut placed: usize = 0;
        for (place, voters) in self.vote_breakdown(nomination) {
            weighted += place * voters.len();
            placed += voters.len();
        }
        let absent = self.non_voters(nomination).len();
        let total = placed + absent;
        if total == 0 {
            return 0.0;
        }
        (weighted + absent * count) as f64 / total as f64
    }

    /// A compact per-place summary: medal markers with counts for places
    /// 1 to 3, then ` ({p}th) {count}` for the deeper places that got votes.
    pub fn scores_line(&self, nomination: &Nomination) -> String {
        let breakdown = self.vote_breakdown(nomination);
        let count_at = |place: Place| breakdown.get(&place).map_or(0, Vec::len);
        let mut line = format!(
            "{}{} {}{} {}{}",
            MEDALS[0],
            count_at(1),
            MEDALS[1],
            count_at(2),
            MEDALS[2],
            count_at(3)
        );
        for place in 4..=self.nominations.len() {
            let c = count_at(place);
            if c > 0 {
                line.push_str(&format!(" ({}th) {}", place, c));
            }
        }
        line
    }

    /// Snapshots the current standings, sorted ascending by score. The sort
    /// is stable: nominations with the exact same score stay in registration
    /// order, pending the tie-break applied by
    /// [Rankings::winners_after_tiebreaker].
    pub fn tally(&self) -> Rankings<'_> {
        info!(
            "tally: {} nominations, {} ballots",
            self.nominations.len(),
            self.ballots.entries().len()
        );
        let mut entries: Vec<(f64, &Nomination)> = self
            .nominations
            .iter()
            .map(|n| (self.rank(n), n))
            .collect();
        entries.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        for (score, n) in entries.iter() {
            debug!("tally: {:.4} {:?}", score, n.book.title);
        }
        Rankings { set: self, entries }
    }
}

/// An immutable standings snapshot, ordered best score first.
pub struct Rankings<'a> {
    set: &'a NominationSet,
    entries: Vec<(f64, &'a Nomination)>,
}

impl<'a> Rankings<'a> {
    /// All nominations with their scores, best first.
    pub fn entries(&self) -> &[(f64, &'a Nomination)] {
        &self.entries
    }

    /// The leading nominations: the prefix of the standings sharing the
    /// single lowest score (exact equality). Empty iff the session has no
    /// nominations.
    pub fn tied(&self) -> Vec<&'a Nomination> {
        match self.entries.first() {
            None => Vec::new(),
            Some(&(best, _)) => self
                .entries
                .iter()
                .take_while(|(score, _)| *score == best)
                .map(|&(_, n)| n)
                .collect(),
        }
    }

    /// Resolves the tie among the leaders, place by place.
    ///
    /// For each place from 1 up to the nomination count, only the tied
    /// candidates with the highest number of voters at exactly that place
    /// are kept. The first round that narrows the field to one candidate
    /// decides the winner; if every round is exhausted the remaining set is
    /// returned as an unresolved multi-way tie, which is a valid outcome.
    pub fn winners_after_tiebreaker(&self) -> Vec<&'a Nomination> {
        let tied = self.tied();
        if tied.len() <= 1 {
            return tied;
        }
        let breakdowns: Vec<BTreeMap<Place, Vec<Voter>>> = tied
            .iter()
            .map(|n| self.set.vote_breakdown(n))
            .collect();
        let mut still_in: Vec<usize> = (0..tied.len()).collect();
        for place in 1..=self.set.count() {
            let counts: Vec<usize> = still_in
                .iter()
                .map(|&i| breakdowns[i].get(&place).map_or(0, Vec::len))
                .collect();
            let best = counts.iter().copied().max().unwrap_or(0);
            let narrowed: Vec<usize> = still_in
                .iter()
                .zip(counts.iter())
                .filter(|(_, &c)| c == best)
                .map(|(&i, _)| i)
                .collect();
            debug!(
                "winners_after_tiebreaker: place {}: {} -> {} candidates",
                place,
                still_in.len(),
                narrowed.len()
            );
            still_in = narrowed;
            if still_in.len() == 1 {
                break;
            }
        }
        still_in.iter().map(|&i| tied[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voter(id: u64, name: &str) -> Voter {
        Voter::new(id, name)
    }

    fn book(id: &str, title: &str) -> Book {
        Book::from_record(&BookRecord {
            id: id.to_string(),
            title: title.to_string(),
            authors: vec!["Some Author".to_string()],
            cover: None,
            description: None,
            page_count: None,
        })
    }

    /// Three nominations, registered by voters 1..=3. Returns the set and
    /// the nominations [A, B, C].
    fn three_book_session() -> (NominationSet, Vec<Nomination>) {
        let mut set = NominationSet::new();
        set.register(voter(1, "ann"), book("a", "Book A"));
        set.register(voter(2, "ben"), book("b", "Book B"));
        set.register(voter(3, "cal"), book("c", "Book C"));
        let noms = set.nominations().to_vec();
        (set, noms)
    }

    #[test]
    fn register_same_book_twice_returns_existing() {
        let mut set = NominationSet::new();
        set.register(voter(1, "ann"), book("a", "Book A"));
        let (created, existing) = set.register(voter(2, "ben"), book("a", "Book A"));
        assert!(!created);
        assert_eq!(existing.nominator, voter(1, "ann"));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn register_same_nominator_twice_returns_existing() {
        let mut set = NominationSet::new();
        set.register(voter(1, "ann"), book("a", "Book A"));
        let (created, existing) = set.register(voter(1, "ann"), book("b", "Book B"));
        assert!(!created);
        assert_eq!(existing.book.id, BookId("a".to_string()));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn clear_removes_only_that_nominator() {
        let (mut set, _) = three_book_session();
        set.clear(&voter(2, "ben"));
        assert_eq!(set.count(), 2);
        assert!(set.nomination_for(&voter(2, "ben")).is_none());
        assert!(set.nomination_for(&voter(1, "ann")).is_some());
    }

    #[test]
    fn positions_resolve_in_request_order_with_duplicates() {
        let (set, noms) = three_book_session();
        let picked = set.get_by_positions(&[3, 1, 3]).unwrap();
        assert_eq!(picked, vec![noms[2].clone(), noms[0].clone(), noms[2].clone()]);
    }

    #[test]
    fn position_beyond_count_is_out_of_range() {
        let (set, _) = three_book_session();
        let res = set.get_by_positions(&[1, 4]);
        assert_eq!(
            res,
            Err(EngineError::OutOfRange { index: 4, count: 3 })
        );
    }

    #[test]
    fn position_zero_is_out_of_range() {
        let (set, _) = three_book_session();
        let res = set.get_by_positions(&[0]);
        assert_eq!(
            res,
            Err(EngineError::OutOfRange { index: 0, count: 3 })
        );
    }

    #[test]
    fn duplicate_picks_reject_ballot_and_keep_prior() {
        let (mut set, noms) = three_book_session();
        let v = voter(9, "zoe");
        set.cast(v.clone(), &[noms[0].clone()]).unwrap();
        let res = set.cast(v.clone(), &[noms[1].clone(), noms[1].clone()]);
        assert_eq!(
            res,
            Err(EngineError::InvalidBallot {
                fault: BallotFault::DuplicatePick
            })
        );
        assert_eq!(set.ballot_for(&v).unwrap(), vec![noms[0].clone()]);
    }

    #[test]
    fn overlong_ballot_is_rejected() {
        let (mut set, noms) = three_book_session();
        let picks = vec![
            noms[0].clone(),
            noms[1].clone(),
            noms[2].clone(),
            noms[0].clone(),
        ];
        let res = set.ballots.cast(voter(9, "zoe"), &picks, 3);
        assert_eq!(
            res,
            Err(EngineError::InvalidBallot {
                fault: BallotFault::TooManyPicks { picks: 4, max: 3 }
            })
        );
    }

    #[test]
    fn recast_replaces_whole_ballot() {
        let (mut set, noms) = three_book_session();
        let v = voter(9, "zoe");
        set.cast(v.clone(), &[noms[0].clone(), noms[1].clone()])
            .unwrap();
        set.cast(v.clone(), &[noms[2].clone()]).unwrap();
        assert_eq!(set.ballot_for(&v).unwrap(), vec![noms[2].clone()]);
        assert_eq!(set.ballots().all_voters().len(), 1);
    }

    #[test]
    fn stale_picks_are_ignored_at_tally_time() {
        let (mut set, noms) = three_book_session();
        let v = voter(9, "zoe");
        set.cast(v.clone(), &[noms[0].clone(), noms[1].clone()])
            .unwrap();
        set.clear(&voter(1, "ann"));
        // The raw ballot still holds both picks.
        assert_eq!(set.ballots().ballot_for(&v).unwrap().len(), 2);
        // The current view drops the stale one, and B keeps its slot.
        assert_eq!(set.ballot_for(&v).unwrap(), vec![noms[1].clone()]);
        let breakdown = set.vote_breakdown(&noms[1]);
        assert_eq!(breakdown.get(&2).map(Vec::len), Some(1));
    }

    #[test]
    fn breakdown_counts_first_occurrence_only() {
        let (mut set, noms) = three_book_session();
        let v1 = voter(9, "zoe");
        let v2 = voter(10, "yan");
        set.cast(v1.clone(), &[noms[0].clone(), noms[1].clone()])
            .unwrap();
        set.cast(v2.clone(), &[noms[1].clone()]).unwrap();
        let breakdown = set.vote_breakdown(&noms[1]);
        assert_eq!(breakdown.get(&1), Some(&vec![v2]));
        assert_eq!(breakdown.get(&2), Some(&vec![v1]));
        assert!(breakdown.get(&3).is_none());
    }

    #[test]
    fn non_voters_excludes_abstainers() {
        let (mut set, noms) = three_book_session();
        let v1 = voter(9, "zoe");
        let v2 = voter(10, "yan");
        set.cast(v1, &[noms[0].clone()]).unwrap();
        set.cast(v2.clone(), &[noms[1].clone()]).unwrap();
        // Voter 3 never cast a ballot: not a non-voter for anything.
        let nv = set.non_voters(&noms[0]);
        assert_eq!(nv.len(), 1);
        assert!(nv.contains(&v2));
    }

    #[test]
    fn rank_is_zero_with_no_ballots_at_all() {
        let (set, noms) = three_book_session();
        assert_eq!(set.rank(&noms[0]), 0.0);
    }

    #[test]
    fn rank_penalizes_non_voters_as_last_place() {
        let (mut set, noms) = three_book_session();
        set.cast(voter(9, "zoe"), &[noms[0].clone()]).unwrap();
        set.cast(voter(10, "yan"), &[noms[1].clone()]).unwrap();
        // A: one first place, one non-voter counted at place 3.
        assert_eq!(set.rank(&noms[0]), (1.0 + 3.0) / 2.0);
        // C: no voters, two non-voters.
        assert_eq!(set.rank(&noms[2]), 3.0);
    }

    #[test]
    fn spec_scenario_three_voters() {
        let (mut set, noms) = three_book_session();
        let (a, b, c) = (noms[0].clone(), noms[1].clone(), noms[2].clone());
        set.cast(voter(11, "v1"), &[a.clone(), b.clone(), c.clone()])
            .unwrap();
        set.cast(voter(12, "v2"), &[b.clone(), a.clone(), c.clone()])
            .unwrap();
        set.cast(voter(13, "v3"), &[a.clone()]).unwrap();
        assert!(set.rank(&a) < set.rank(&b));
        assert!(set.rank(&b) < set.rank(&c));
        let rankings = set.tally();
        assert_eq!(rankings.winners_after_tiebreaker(), vec![&a]);
    }

    #[test]
    fn symmetric_two_way_tie_stays_unresolved() {
        let mut set = NominationSet::new();
        set.register(voter(1, "ann"), book("a", "Book A"));
        set.register(voter(2, "ben"), book("b", "Book B"));
        let noms = set.nominations().to_vec();
        let (a, b) = (noms[0].clone(), noms[1].clone());
        set.cast(voter(11, "v1"), &[a.clone(), b.clone()]).unwrap();
        set.cast(voter(12, "v2"), &[b.clone(), a.clone()]).unwrap();
        let rankings = set.tally();
        assert_eq!(rankings.tied(), vec![&a, &b]);
        // Place-1 counts tie 1-1, place-2 counts tie 1-1: full set returned.
        assert_eq!(rankings.winners_after_tiebreaker(), vec![&a, &b]);
    }

    #[test]
    fn tiebreak_narrows_on_deeper_places() {
        // A and B tie on score; A has more first places, decided in round 1.
        let mut set = NominationSet::new();
        set.register(voter(1, "ann"), book("a", "Book A"));
        set.register(voter(2, "ben"), book("b", "Book B"));
        set.register(voter(3, "cal"), book("c", "Book C"));
        let noms = set.nominations().to_vec();
        let (a, b, c) = (noms[0].clone(), noms[1].clone(), noms[2].clone());
        // A: places 1, 1, 3 -> 5/3. B: places 2, 2, 1 -> 5/3. C: 3, 3, 2 -> 8/3.
        set.cast(voter(11, "v1"), &[a.clone(), b.clone(), c.clone()])
            .unwrap();
        set.cast(voter(12, "v2"), &[a.clone(), b.clone(), c.clone()])
            .unwrap();
        set.cast(voter(13, "v3"), &[b.clone(), c.clone(), a.clone()])
            .unwrap();
        let rankings = set.tally();
        assert_eq!(rankings.tied(), vec![&a, &b]);
        assert_eq!(rankings.winners_after_tiebreaker(), vec![&a]);
    }

    #[test]
    fn winners_with_ballots_is_never_empty() {
        let (mut set, noms) = three_book_session();
        set.cast(voter(9, "zoe"), &[noms[1].clone()]).unwrap();
        let rankings = set.tally();
        let winners = rankings.winners_after_tiebreaker();
        assert!(!winners.is_empty());
        assert!(winners.iter().all(|&w| set.nominations().contains(w)));
    }

    #[test]
    fn empty_session_has_no_winner() {
        let set = NominationSet::new();
        let rankings = set.tally();
        assert!(rankings.tied().is_empty());
        assert!(rankings.winners_after_tiebreaker().is_empty());
    }

    #[test]
    fn standings_break_exact_ties_by_registration_order() {
        let (set, noms) = three_book_session();
        // No ballots: every score is 0, registration order is kept.
        let rankings = set.tally();
        let order: Vec<&Nomination> = rankings.entries().iter().map(|&(_, n)| n).collect();
        assert_eq!(order, vec![&noms[0], &noms[1], &noms[2]]);
    }

    #[test]
    fn scores_line_hides_empty_deep_places() {
        let mut set = NominationSet::new();
        for (i, letter) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            let id = (i + 1) as u64;
            set.register(voter(id, letter), book(letter, letter));
        }
        let noms = set.nominations().to_vec();
        set.cast(
            voter(11, "v1"),
            &[
                noms[1].clone(),
                noms[2].clone(),
                noms[3].clone(),
                noms[4].clone(),
                noms[0].clone(),
            ],
        )
        .unwrap();
        // A was placed 5th: places 1-3 show zero, 4th hidden, 5th shown.
        assert_eq!(
            set.scores_line(&noms[0]),
            "\u{1f947}0 \u{1f948}0 \u{1f949}0 (5th) 1"
        );
        assert_eq!(
            set.scores_line(&noms[1]),
            "\u{1f947}1 \u{1f948}0 \u{1f949}0"
        );
    }

    #[test]
    fn book_record_fallbacks() {
        let b = Book::from_record(&BookRecord {
            id: "x".to_string(),
            title: "Untitled".to_string(),
            authors: vec![],
            cover: None,
            description: None,
            page_count: None,
        });
        assert_eq!(b.author, NO_AUTHOR);
        assert_eq!(b.cover, DEFAULT_COVER_URL);
        assert_eq!(b.description, NO_DESCRIPTION);
        assert_eq!(b.pages, None);
    }

    #[test]
    fn long_descriptions_are_truncated_with_marker() {
        let long = "x".repeat(500);
        let b = Book::from_record(&BookRecord {
            id: "x".to_string(),
            title: "Untitled".to_string(),
            authors: vec!["First".to_string(), "Second".to_string()],
            cover: None,
            description: Some(long),
            page_count: Some(320),
        });
        assert_eq!(b.author, "First");
        assert_eq!(b.description.chars().count(), DESCRIPTION_LIMIT + 3);
        assert!(b.description.ends_with("..."));
        // Short descriptions pass through untouched.
        let short = Book::from_record(&BookRecord {
            id: "y".to_string(),
            title: "Untitled".to_string(),
            authors: vec![],
            cover: None,
            description: Some("brief".to_string()),
            page_count: None,
        });
        assert_eq!(short.description, "brief");
    }

    #[test]
    fn voter_equality_ignores_display_name() {
        let a = voter(5, "old name");
        let b = voter(5, "new name");
        assert_eq!(a, b);
        let mut set = NominationSet::new();
        set.register(a, book("a", "Book A"));
        let (created, _) = set.register(b, book("b", "Book B"));
        assert!(!created);
    }
}
