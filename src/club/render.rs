use club_voting::{Nomination, NominationSet};

/// One line per nomination, in registration order: the 1-based position
/// voters use to cast ballots, the book, the nominator and the per-place
/// counts.
pub fn standings_lines(set: &NominationSet) -> Vec<String> {
    set.nominations()
        .iter()
        .enumerate()
        .map(|(idx, n)| {
            format!(
                "{}: {} - {} | {}",
                idx + 1,
                n.book.title,
                n.nominator.name,
                set.scores_line(n)
            )
        })
        .collect()
}

/// The closing announcement of a session: a single winner, an unresolved
/// multi-way tie, or no winner at all.
pub fn winner_announcement(winners: &[&Nomination]) -> String {
    match winners {
        [] => "Voting session ended without declaring winner".to_string(),
        [single] => format!(
            "The winner is: **{}**, submitted by {}",
            single.book.title, single.nominator.name
        ),
        several => {
            let titles: Vec<String> = several.iter().map(|n| n.book.title.clone()).collect();
            format!("The winners are: **{}**", titles.join(", "))
        }
    }
}
