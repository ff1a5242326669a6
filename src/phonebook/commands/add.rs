use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::ContactStore;
use tracing::debug;

/// Creates a record and stores it, replacing any contact with the same name.
/// Nothing is stored if the phone or birthday is invalid.
pub fn run(
    store: &mut ContactStore,
    name: &str,
    phone: &str,
    birthday: Option<&str>,
) -> Result<CmdResult> {
    let mut record = match birthday {
        Some(birthday) => Record::with_birthday(name, birthday)?,
        None => Record::new(name),
    };
    record.add_phone(phone)?;

    if store.contains(name) {
        debug!(name, "overwriting existing contact");
    }
    store.add_record(record);

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Contact {} added with phone number {}.",
        name, phone
    ))))
}
