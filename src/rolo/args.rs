use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "Interactive address book and note-taking assistant", long_about = None)]
pub struct Cli {
    /// Directory holding the data files and config.json
    /// (defaults to the platform data dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Contacts file name inside the data directory
    #[arg(long)]
    pub contacts_file: Option<String>,

    /// Notes file name inside the data directory
    #[arg(long)]
    pub notes_file: Option<String>,

    /// Records per page in listings
    #[arg(long)]
    pub page_size: Option<usize>,
}
