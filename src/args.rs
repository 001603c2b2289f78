use clap::Parser;

/// Tabulates the nominations and ranked votes of a book-club session.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The session file with the members, nominations and ballots of one
    /// voting round, in JSON format. See the manual for the expected layout.
    #[clap(short, long, value_parser)]
    pub input: String,

    /// (file path) The book catalog used to resolve nomination queries. If specified,
    /// this overrides the catalog referenced or embedded in the session file.
    #[clap(short, long, value_parser)]
    pub catalog: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the session will be
    /// written in JSON format to the given location.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing the summary of a session in JSON format.
    /// If provided, bookvote will check that the tabulated output matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
