use colored::Colorize;
use phonebook::api::{CmdMessage, CmdResult, MessageLevel};
use phonebook::error::PhonebookError;
use phonebook::model::Record;
use std::io::{self, Write};

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content)?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_records<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

/// Pages are printed back to back, with a marker line when there is more than one.
pub(super) fn print_pages<W: Write>(out: &mut W, pages: &[Vec<Record>]) -> io::Result<()> {
    let total = pages.len();
    for (i, page) in pages.iter().enumerate() {
        if total > 1 {
            writeln!(out, "{}", format!("-- page {} of {} --", i + 1, total).dimmed())?;
        }
        print_records(out, page)?;
    }
    Ok(())
}

pub(super) fn print_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    print_messages(out, &result.messages)?;
    print_records(out, &result.listed_records)?;
    print_pages(out, &result.listed_pages)
}

/// The one-line message shown for an error the session recovers from.
pub(super) fn error_message(error: &PhonebookError) -> String {
    match error {
        PhonebookError::InvalidInput(_) => "Invalid input.".to_string(),
        PhonebookError::ContactNotFound(_) => "Contact not found.".to_string(),
        PhonebookError::MissingArgument(hint) => hint.clone(),
        PhonebookError::UnknownCommand(_) => "Invalid command. Please try again.".to_string(),
        other => format!("Error: {}", other),
    }
}

pub(super) fn print_error<W: Write>(out: &mut W, error: &PhonebookError) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(error_message(error))])
}
