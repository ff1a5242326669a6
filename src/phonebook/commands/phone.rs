use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::store::ContactStore;

/// Looks up the contact's first phone number.
pub fn run(store: &ContactStore, name: &str) -> Result<CmdResult> {
    let record = store.get(name)?;
    let phone = record
        .first_phone()
        .cloned()
        .ok_or_else(|| PhonebookError::ContactNotFound(format!("{} has no phone number", name)))?;

    let mut result = CmdResult::default().with_message(CmdMessage::info(format!(
        "The phone number for {} is {}.",
        name, phone
    )));
    result.phone = Some(phone);
    Ok(result)
}
