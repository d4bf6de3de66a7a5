use {
    clap::{Parser, Subcommand},
    deckshelf::{color::ColorSet, deck},
    std::path::PathBuf,
};

#[derive(Parser)]
#[command(version = deckshelf::VERSION, about = "Keep track of your deck lists")]
pub struct Args {
    /// Keep the deck file in this directory instead of the user data directory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List decks, optionally only those having all the given tags and colors")]
    List {
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        colors: Option<ColorSet>,
    },
    #[command(about = "List every tag in use")]
    Tags,
    #[command(about = "Show a deck along with its card list")]
    Show { id: deck::Id },
    #[command(about = "Add a deck from the clipboard")]
    Import {
        /// Read the card list from standard input instead
        #[arg(long)]
        stdin: bool,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        colors: Option<ColorSet>,
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    #[command(about = "Change a deck")]
    Edit {
        id: deck::Id,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        colors: Option<ColorSet>,
        #[arg(long)]
        add_tag: Vec<String>,
        #[arg(long)]
        remove_tag: Vec<String>,
        /// Replace the card list with standard input
        #[arg(long)]
        contents_stdin: bool,
    },
    #[command(about = "Delete a deck")]
    Delete {
        id: deck::Id,
        /// Don't ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
    #[command(about = "Copy a deck's card list to the clipboard")]
    Export {
        id: deck::Id,
        /// Print it instead
        #[arg(long)]
        stdout: bool,
    },
    #[command(about = "Share the whole collection file, or one deck's card list")]
    Share { id: Option<deck::Id> },
    #[command(about = "Print where the collection is stored")]
    Path,
}
