//! message-merge: Merge keyed JSON5 message files into one sorted output
//!
//! Reads one or more JSON5 files whose top-level objects map numeric-string
//! keys to message values, unions them (last input wins on collisions), and
//! writes a single strict-JSON file sorted by the numeric value of each key.

use anyhow::Result;

mod cli;
mod error;
mod key;
mod load;
mod merge;
mod write;

fn main() -> Result<()> {
    cli::run()
}
