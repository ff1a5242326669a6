use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;
use tracing::warn;

/// Overwrites the contact's first phone number. Other numbers are left alone.
///
/// A contact without phones is left as is and the result carries a warning.
pub fn run(store: &mut ContactStore, name: &str, phone: &str) -> Result<CmdResult> {
    let record = store.get_mut(name)?;
    if !record.edit_phone(0, phone)? {
        warn!(name, "contact has no phone number to change");
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "{} has no phone number to change. Use 'add' to give them one.",
            name
        ))));
    }

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Phone number for {} updated to {}.",
        name, phone
    ))))
}
