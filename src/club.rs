use log::{info, warn};

use club_voting::*;
use snafu::{prelude::*, Snafu};

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use serde_json::Map as JSMap;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::club::catalog::VolumeRecord;
use crate::club::config_reader::*;
use crate::club::registry::SessionRegistry;

pub mod registry;
pub mod render;

#[derive(Debug, Snafu)]
pub enum ClubError {
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display(""))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Member {id} is not in the session roster"))]
    UnknownMember { id: u64 },
    #[snafu(display(""))]
    MissingParentDir {},

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type ClubResult<T> = Result<T, ClubError>;

pub mod config_reader {
    use crate::club::catalog::VolumeRecord;
    use crate::club::{ClubResult, OpeningJsonSnafu, ParsingJsonSnafu};
    use serde::{Deserialize, Serialize};
    use serde_json::Value as JSValue;
    use snafu::prelude::*;
    use std::fs;

    /// One voting round of one group, as recorded offline.
    #[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
    pub struct SessionDoc {
        #[serde(rename = "groupName")]
        pub group_name: String,
        pub members: Vec<MemberRecord>,
        pub nominations: Vec<NominationRecord>,
        pub ballots: Vec<BallotRecord>,
        /// Path of the catalog file, relative to the session file.
        #[serde(rename = "catalogPath")]
        pub catalog_path: Option<String>,
        /// A catalog embedded directly in the session file.
        pub catalog: Option<Vec<VolumeRecord>>,
    }

    #[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
    pub struct MemberRecord {
        pub id: u64,
        pub name: String,
    }

    #[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
    pub struct NominationRecord {
        pub member: u64,
        /// Free-text query resolved against the catalog.
        pub query: String,
    }

    #[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
    pub struct BallotRecord {
        pub member: u64,
        /// 1-based positions in the nomination list, best first.
        pub picks: Vec<usize>,
    }

    pub fn read_session(path: &str) -> ClubResult<SessionDoc> {
        let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
        let doc: SessionDoc = serde_json::from_str(&contents).context(ParsingJsonSnafu {})?;
        Ok(doc)
    }

    pub fn read_catalog(path: &str) -> ClubResult<Vec<VolumeRecord>> {
        let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
        let volumes: Vec<VolumeRecord> =
            serde_json::from_str(&contents).context(ParsingJsonSnafu {})?;
        Ok(volumes)
    }

    pub fn read_summary(path: &str) -> ClubResult<JSValue> {
        let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
        let js: JSValue = serde_json::from_str(&contents).context(ParsingJsonSnafu {})?;
        Ok(js)
    }
}

pub mod catalog {
    use club_voting::{Book, BookRecord};
    use serde::{Deserialize, Serialize};

    /// A volume record in the shape served by the Google Books API.
    #[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
    pub struct VolumeRecord {
        pub id: String,
        #[serde(rename = "volumeInfo")]
        pub volume_info: VolumeInfo,
    }

    #[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
    pub struct VolumeInfo {
        pub title: String,
        pub authors: Option<Vec<String>>,
        pub description: Option<String>,
        #[serde(rename = "pageCount")]
        pub page_count: Option<u32>,
        #[serde(rename = "imageLinks")]
        pub image_links: Option<ImageLinks>,
    }

    #[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
    pub struct ImageLinks {
        pub thumbnail: Option<String>,
    }

    /// The first volume whose title or author contains the query,
    /// case-insensitively. `None` stands for "not found" and is not an
    /// engine error: the nomination is simply skipped.
    pub fn find_volume<'a>(volumes: &'a [VolumeRecord], query: &str) -> Option<&'a VolumeRecord> {
        let q = query.to_lowercase();
        volumes.iter().find(|v| {
            v.volume_info.title.to_lowercase().contains(&q)
                || v.volume_info
                    .authors
                    .iter()
                    .flatten()
                    .any(|a| a.to_lowercase().contains(&q))
        })
    }

    /// Shapes a catalog volume into a [Book], applying the documented
    /// fallbacks for any missing metadata.
    pub fn to_book(volume: &VolumeRecord) -> Book {
        Book::from_record(&BookRecord {
            id: volume.id.clone(),
            title: volume.volume_info.title.clone(),
            authors: volume.volume_info.authors.clone().unwrap_or_default(),
            cover: volume
                .volume_info
                .image_links
                .as_ref()
                .and_then(|links| links.thumbnail.clone()),
            description: volume.volume_info.description.clone(),
            page_count: volume.volume_info.page_count,
        })
    }
}

fn load_catalog(args: &Args, doc: &SessionDoc) -> ClubResult<Vec<VolumeRecord>> {
    if let Some(path) = &args.catalog {
        return config_reader::read_catalog(path);
    }
    if let Some(local) = &doc.catalog_path {
        let root = Path::new(&args.input)
            .parent()
            .context(MissingParentDirSnafu {})?;
        let p: PathBuf = [root, Path::new(local)].iter().collect();
        return config_reader::read_catalog(&p.as_path().display().to_string());
    }
    Ok(doc.catalog.clone().unwrap_or_default())
}

/// Replays one recorded session: registers the nominations, casts the
/// ballots, closes the session and assembles the summary.
///
/// Rejected actions (unmatched queries, duplicate nominations, invalid
/// ballots) are logged and skipped; they do not abort the session.
pub fn run_session_doc(doc: &SessionDoc, volumes: &[VolumeRecord]) -> ClubResult<JSValue> {
    let members: HashMap<u64, Voter> = doc
        .members
        .iter()
        .map(|m| (m.id, Voter::new(m.id, &m.name)))
        .collect();

    let mut registry = SessionRegistry::new();
    {
        let session = registry.start(&doc.group_name);
        for record in &doc.nominations {
            let member = members
                .get(&record.member)
                .context(UnknownMemberSnafu { id: record.member })?;
            match catalog::find_volume(volumes, &record.query) {
                None => {
                    warn!("nominate: no match in the catalog for {:?}", record.query);
                }
                Some(volume) => {
                    let book = catalog::to_book(volume);
                    let title = book.title.clone();
                    let (created, existing) = session.nominations.register(member.clone(), book);
                    if !created {
                        warn!(
                            "nominate: {:?} rejected, {:?} already nominated by {:?}",
                            title, existing.book.title, existing.nominator.name
                        );
                    }
                }
            }
        }

        for record in &doc.ballots {
            let member = members
                .get(&record.member)
                .context(UnknownMemberSnafu { id: record.member })?;
            let picks = match session.nominations.get_by_positions(&record.picks) {
                Ok(picks) => picks,
                Err(e) => {
                    warn!("vote: ballot from {:?} rejected: {}", member.name, e);
                    continue;
                }
            };
            if let Err(e) = session.nominations.cast(member.clone(), &picks) {
                warn!("vote: ballot from {:?} rejected: {}", member.name, e);
            }
        }
    }

    let session = match registry.end(&doc.group_name) {
        Some(session) => session,
        None => whatever!("session {:?} was never started", doc.group_name),
    };
    for line in render::standings_lines(&session.nominations) {
        info!("{}", line);
    }
    Ok(build_summary_js(doc, &session.nominations))
}

fn build_summary_js(doc: &SessionDoc, set: &NominationSet) -> JSValue {
    let rankings = set.tally();
    let mut standings: Vec<JSValue> = Vec::new();
    for (idx, &(score, nomination)) in rankings.entries().iter().enumerate() {
        let mut places: JSMap<String, JSValue> = JSMap::new();
        for (place, voters) in set.vote_breakdown(nomination) {
            let names: Vec<String> = voters.iter().map(|v| v.name.clone()).collect();
            places.insert(place.to_string(), json!(names));
        }
        standings.push(json!({
            "position": idx + 1,
            "title": nomination.book.title,
            "author": nomination.book.author,
            "nominatedBy": nomination.nominator.name,
            "score": format!("{:.4}", score),
            "scores": set.scores_line(nomination),
            "places": places,
            "nonVoters": set.non_voters(nomination).len(),
        }));
    }
    let winners = rankings.winners_after_tiebreaker();
    let winner_titles: Vec<String> = winners.iter().map(|n| n.book.title.clone()).collect();
    json!({
        "config": {
            "group": doc.group_name,
            "members": doc.members.len(),
        },
        "voterCount": set.ballots().all_voters().len(),
        "standings": standings,
        "winners": winner_titles,
        "announcement": render::winner_announcement(&winners),
    })
}

pub fn run_session(args: &Args) -> ClubResult<()> {
    let doc = config_reader::read_session(&args.input)?;
    info!("session: {:?}", doc);

    let volumes = load_catalog(args, &doc)?;
    if volumes.is_empty() {
        whatever!("no catalog provided for session {:?}", doc.group_name);
    }

    let summary = run_session_doc(&doc, &volumes)?;

    let pretty_js_stats = serde_json::to_string_pretty(&summary).context(ParsingJsonSnafu {})?;
    match args.out.as_deref() {
        None | Some("stdout") => println!("{}", pretty_js_stats),
        Some(path) => fs::write(path, &pretty_js_stats).context(OpeningJsonSnafu { path })?,
    }
    if let Some(announcement) = summary["announcement"].as_str() {
        println!("{}", announcement);
    }

    // The reference summary, if provided for comparison
    if let Some(summary_p) = &args.reference {
        let summary_ref = config_reader::read_summary(summary_p)?;
        info!("summary: {:?}", summary_ref);
        let pretty_js_summary_ref =
            serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
        if pretty_js_summary_ref != pretty_js_stats {
            warn!("Found differences with the reference string");
            print_diff(
                pretty_js_summary_ref.as_str(),
                pretty_js_stats.as_ref(),
                "\n",
            );
            whatever!("Difference detected between calculated summary and reference summary")
        }
    }
    Ok(())
}
