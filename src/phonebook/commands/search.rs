use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;

/// Finds contacts by name (ignoring case) or phone substring.
pub fn run(store: &ContactStore, query: &str) -> Result<CmdResult> {
    let matches: Vec<_> = store.search(query).into_iter().cloned().collect();

    if matches.is_empty() {
        return Ok(
            CmdResult::default().with_message(CmdMessage::info("No matching contacts found."))
        );
    }

    Ok(CmdResult::default()
        .with_listed_records(matches)
        .with_message(CmdMessage::info("Search results:")))
}
