// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// The stable identifier of a club member, as assigned by the chat platform.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub struct VoterId(pub u64);

/// The catalog identifier of a book, as assigned by the book search provider.
#[derive(Eq, PartialEq, Debug, Clone, Hash, Ord, PartialOrd)]
pub struct BookId(pub String);

/// A club member who may nominate one book and cast one ballot.
///
/// Two voters are the same voter iff their ids match. The display name is
/// carried along for rendering only and is ignored by equality and hashing.
#[derive(Debug, Clone)]
pub struct Voter {
    pub id: VoterId,
    pub name: String,
}

impl Voter {
    pub fn new(id: u64, name: &str) -> Voter {
        Voter {
            id: VoterId(id),
            name: name.to_string(),
        }
    }
}

impl PartialEq for Voter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Voter {}

impl Hash for Voter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// The author shown when the search result carries no author list.
pub const NO_AUTHOR: &str = "No author";

/// The cover shown when the search result carries no thumbnail.
pub const DEFAULT_COVER_URL: &str =
    "https://raw.githubusercontent.com/amrojjeh/BookClubBot/main/default_cover.jpg";

/// The description shown when the search result carries none.
pub const NO_DESCRIPTION: &str = "Description not found.";

/// Descriptions longer than this many characters are cut and marked with `...`.
pub const DESCRIPTION_LIMIT: usize = 230;

/// A book under vote. Equality is by catalog id only: the same volume
/// fetched twice with diverging metadata still counts as one nominee.
#[derive(Debug, Clone)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub cover: String,
    pub description: String,
    pub pages: Option<u32>,
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}

/// A raw search result, before the fallback defaults are applied.
///
/// This is the shape handed over by the external book lookup. All the
/// metadata fields are optional; [Book::from_record] fills in the documented
/// defaults for whatever is missing.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct BookRecord {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub cover: Option<String>,
    pub description: Option<String>,
    pub page_count: Option<u32>,
}

impl Book {
    /// Shapes a search result into a [Book], applying the fallback defaults:
    /// first listed author or [NO_AUTHOR], [DEFAULT_COVER_URL], and
    /// [NO_DESCRIPTION]. Descriptions longer than [DESCRIPTION_LIMIT]
    /// characters are truncated with a trailing ellipsis marker.
    pub fn from_record(record: &BookRecord) -> Book {
        let author = record
            .authors
            .first()
            .cloned()
            .unwrap_or_else(|| NO_AUTHOR.to_string());
        let cover = record
            .cover
            .clone()
            .unwrap_or_else(|| DEFAULT_COVER_URL.to_string());
        let description = match &record.description {
            None => NO_DESCRIPTION.to_string(),
            Some(d) if d.chars().count() > DESCRIPTION_LIMIT => {
                let cut: String = d.chars().take(DESCRIPTION_LIMIT).collect();
                format!("{}...", cut)
            }
            Some(d) => d.clone(),
        };
        Book {
            id: BookId(record.id.clone()),
            title: record.title.clone(),
            author,
            cover,
            description,
            pages: record.page_count,
        }
    }
}

// ********* Errors **********

/// What made a ballot unacceptable.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum BallotFault {
    /// More picks than there are nominations in the session.
    TooManyPicks { picks: usize, max: usize },
    /// The same book ranked at two different places.
    DuplicatePick,
}

/// Errors surfaced by the engine. Every failure is reported before any
/// state is touched; there are no partially-applied operations.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum EngineError {
    /// A 1-based nomination position outside the current list.
    OutOfRange { index: usize, count: usize },
    /// A ballot rejected as a whole.
    InvalidBallot { fault: BallotFault },
}

impl Display for BallotFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BallotFault::TooManyPicks { picks, max } => {
                write!(f, "{} picks for {} nominations", picks, max)
            }
            BallotFault::DuplicatePick => write!(f, "the same book is ranked more than once"),
        }
    }
}

impl Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::OutOfRange { index, count } => {
                write!(f, "position {} is out of range (1..={})", index, count)
            }
            EngineError::InvalidBallot { fault } => write!(f, "invalid ballot: {}", fault),
        }
    }
}

impl Error for EngineError {}
