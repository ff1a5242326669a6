use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;

/// Lists every contact, grouped in pages of `page_size`.
pub fn run(store: &ContactStore, page_size: usize) -> Result<CmdResult> {
    if store.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No contacts found.")));
    }

    let pages = store.pages(page_size).map(|page| page.to_vec()).collect();
    Ok(CmdResult::default().with_listed_pages(pages))
}
