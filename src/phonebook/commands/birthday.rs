use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ContactStore;
use chrono::NaiveDate;

pub fn run(store: &ContactStore, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let record = store.get(name)?;

    let mut result = CmdResult::default();
    match record.days_to_birthday(today) {
        Some(days) => {
            result.days_to_birthday = Some(days);
            result.add_message(CmdMessage::info(format!(
                "Days until next birthday: {}",
                days
            )));
        }
        None => result.add_message(CmdMessage::info("Birthday not set.")),
    }
    Ok(result)
}
