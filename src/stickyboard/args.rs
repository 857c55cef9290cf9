use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stickyboard")]
#[command(about = "A sticky-note board with a trash and a 12-column grid", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note to the board
    #[command(alias = "n")]
    New {
        /// Initial text (empty if omitted)
        text: Option<String>,
    },

    /// List notes on the board
    #[command(alias = "ls")]
    List,

    /// List notes in the trash
    #[command(alias = "t")]
    Trash,

    /// Replace the text of a note
    #[command(alias = "e")]
    Edit {
        /// Note id (e.g. n3)
        id: String,

        /// New text
        text: String,
    },

    /// Change the color of a note
    Color {
        /// Note id (e.g. n3)
        id: String,

        /// Color name or hex (e.g. "sky blue", "#ffeb3b")
        color: String,
    },

    /// Move one or more notes to the trash
    #[command(alias = "rm")]
    Delete {
        /// Note ids (e.g. n1 n3)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Bring one or more notes back from the trash
    Restore {
        /// Note ids (e.g. n1 n3)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Permanently remove one or more notes
    Purge {
        /// Note ids (e.g. n1 n3)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Move every note on the board to the trash
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Permanently remove everything in the trash
    EmptyTrash {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Move or resize a note on the grid
    Move {
        /// Note id (e.g. n3)
        id: String,

        #[arg(long)]
        x: Option<u32>,

        #[arg(long)]
        y: Option<u32>,

        #[arg(long)]
        w: Option<u32>,

        #[arg(long)]
        h: Option<u32>,
    },

    /// Show the note colors
    Palette,
}
