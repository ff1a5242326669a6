use super::print::{print_error, print_messages, print_result};
use super::setup::{parse_line, LineCommand};
use phonebook::api::{CmdMessage, CmdResult, PhonebookApi};
use phonebook::backend::fs::FsBackend;
use phonebook::backend::StorageBackend;
use phonebook::config::PhonebookConfig;
use phonebook::error::{PhonebookError, Result};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const PROMPT: &str = "Enter a command: ";
const FAREWELL: &str = "Good bye!";

/// Entry point of the binary: loads the contact book from the working directory
/// and runs the interactive loop on stdin/stdout until `exit` or end of input.
pub fn run() -> Result<()> {
    let cwd = std::env::current_dir().map_err(PhonebookError::Io)?;
    let config = PhonebookConfig::load(&cwd)?;
    let contacts_path = config.contacts_path(&cwd);
    info!(path = %contacts_path.display(), "using contacts file");

    let backend = FsBackend::new(contacts_path);
    let mut api = PhonebookApi::load(backend)?.with_page_size(config.page_size());

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl(&mut api, stdin.lock(), &mut stdout.lock())
}

/// Reads commands line by line until `exit` or end of input, then saves.
///
/// Domain errors are printed and the loop continues. Storage errors end the session.
pub(super) fn repl<B, R, W>(api: &mut PhonebookApi<B>, input: R, out: &mut W) -> Result<()>
where
    B: StorageBackend,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            debug!("end of input");
            writeln!(out)?;
            break;
        };
        let line = line?;

        let command = match parse_line(&line) {
            Ok(Some(LineCommand::Exit)) => break,
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                print_error(out, &e)?;
                continue;
            }
        };

        match dispatch(api, command) {
            Ok(result) => print_result(out, &result)?,
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, "command failed");
                print_error(out, &e)?;
            }
            Err(e) => return Err(e),
        }
    }

    api.save()?;
    print_messages(out, &[CmdMessage::info(FAREWELL)])?;
    Ok(())
}

fn dispatch<B: StorageBackend>(api: &mut PhonebookApi<B>, command: LineCommand) -> Result<CmdResult> {
    match command {
        LineCommand::Hello => {
            Ok(CmdResult::default().with_message(CmdMessage::info("How can I help you?")))
        }
        LineCommand::Add {
            name,
            phone,
            birthday,
        } => api.add(&name, &phone, birthday.as_deref()),
        LineCommand::Change { name, phone } => api.change(&name, &phone),
        LineCommand::Phone { name } => api.phone(&name),
        LineCommand::Birthday { name } => api.birthday(&name),
        LineCommand::Show { .. } => api.show_all(),
        LineCommand::Search { query } => api.search(&query),
        LineCommand::Exit => Ok(CmdResult::default()),
    }
}
