use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use phonebook::error::{PhonebookError, Result};

/// Grammar of a single REPL line. The command word is lowercased before parsing;
/// arguments keep their case.
#[derive(Parser, Debug)]
#[command(
    name = "phonebook",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct Line {
    #[command(subcommand)]
    pub command: LineCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum LineCommand {
    /// Say hello
    Hello,

    /// Add a contact, replacing any contact with the same name
    Add {
        #[arg(allow_hyphen_values = true)]
        name: String,
        #[arg(allow_hyphen_values = true)]
        phone: String,
        /// Birthday as YYYY-MM-DD
        #[arg(allow_hyphen_values = true)]
        birthday: Option<String>,
    },

    /// Change a contact's first phone number
    Change {
        #[arg(allow_hyphen_values = true)]
        name: String,
        #[arg(allow_hyphen_values = true)]
        phone: String,
    },

    /// Print a contact's first phone number
    Phone {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },

    /// Days until a contact's next birthday
    Birthday {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },

    /// List contacts
    Show {
        #[arg(value_enum, ignore_case = true)]
        target: ShowTarget,
    },

    /// Find contacts by name or phone
    Search {
        #[arg(allow_hyphen_values = true)]
        query: String,
    },

    /// Save and quit
    #[command(alias = "close")]
    Exit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShowTarget {
    All,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// A word that names no command is `UnknownCommand`. A known command with too few
/// arguments gets its hint as `MissingArgument`; one with extra or malformed
/// arguments is `InvalidInput`.
pub fn parse_line(line: &str) -> Result<Option<LineCommand>> {
    let mut tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    if is_good_bye(&tokens) {
        return Ok(Some(LineCommand::Exit));
    }
    let Some(first) = tokens.first_mut() else {
        return Ok(None);
    };
    *first = first.to_lowercase();
    let word = first.clone();

    let grammar = Line::command();
    let Some(command) = grammar.find_subcommand(&word) else {
        return Err(PhonebookError::UnknownCommand(word));
    };
    let name = command.get_name().to_string();

    match Line::try_parse_from(&tokens) {
        Ok(parsed) => Ok(Some(parsed.command)),
        Err(e) => match (e.kind(), missing_argument_hint(&name)) {
            (
                ErrorKind::MissingRequiredArgument
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand,
                Some(hint),
            ) => Err(PhonebookError::MissingArgument(hint.to_string())),
            (kind, _) => Err(PhonebookError::InvalidInput(format!(
                "{}: {}",
                name,
                kind_summary(kind)
            ))),
        },
    }
}

fn is_good_bye(tokens: &[String]) -> bool {
    matches!(tokens, [good, bye]
        if good.eq_ignore_ascii_case("good") && bye.eq_ignore_ascii_case("bye"))
}

/// Hint for a command that takes required arguments.
fn missing_argument_hint(command: &str) -> Option<&'static str> {
    match command {
        "add" | "change" => Some("Give me name and phone please."),
        "phone" | "birthday" => Some("Enter user name."),
        "search" => Some("Enter a search query."),
        "show" => Some("Show what? Try 'show all'."),
        _ => None,
    }
}

fn kind_summary(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::UnknownArgument | ErrorKind::TooManyValues => "unexpected argument",
        ErrorKind::InvalidValue => "invalid value",
        _ => "malformed arguments",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> LineCommand {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   \t ").unwrap(), None);
    }

    #[test]
    fn command_word_ignores_case_but_args_keep_it() {
        assert_eq!(
            parse("ADD Alice 1234567"),
            LineCommand::Add {
                name: "Alice".into(),
                phone: "1234567".into(),
                birthday: None,
            }
        );
        assert_eq!(parse("Hello"), LineCommand::Hello);
    }

    #[test]
    fn add_with_birthday() {
        assert_eq!(
            parse("add Alice 1234567 1990-06-15"),
            LineCommand::Add {
                name: "Alice".into(),
                phone: "1234567".into(),
                birthday: Some("1990-06-15".into()),
            }
        );
    }

    #[test]
    fn extra_whitespace_is_ignored() {
        assert_eq!(
            parse("  change   Alice    7654321 "),
            LineCommand::Change {
                name: "Alice".into(),
                phone: "7654321".into(),
            }
        );
    }

    #[test]
    fn show_all_and_exit_aliases() {
        assert_eq!(
            parse("show all"),
            LineCommand::Show {
                target: ShowTarget::All
            }
        );
        assert_eq!(
            parse("show ALL"),
            LineCommand::Show {
                target: ShowTarget::All
            }
        );
        assert_eq!(parse("exit"), LineCommand::Exit);
        assert_eq!(parse("close"), LineCommand::Exit);
        assert_eq!(parse("Good Bye"), LineCommand::Exit);
    }

    #[test]
    fn missing_arguments_give_hints() {
        for (line, hint) in [
            ("add", "Give me name and phone please."),
            ("add Alice", "Give me name and phone please."),
            ("change Alice", "Give me name and phone please."),
            ("phone", "Enter user name."),
            ("birthday", "Enter user name."),
            ("search", "Enter a search query."),
        ] {
            match parse_line(line) {
                Err(PhonebookError::MissingArgument(msg)) => assert_eq!(msg, hint, "{}", line),
                other => panic!("expected missing argument for '{}', got {:?}", line, other),
            }
        }
    }

    #[test]
    fn good_bye_tolerates_inner_whitespace() {
        assert_eq!(parse("good  bye"), LineCommand::Exit);
        assert_eq!(parse("  GOOD \t Bye "), LineCommand::Exit);
        assert!(matches!(
            parse_line("good bye now"),
            Err(PhonebookError::UnknownCommand(_))
        ));
    }

    #[test]
    fn hyphenated_phone_reaches_validation() {
        assert_eq!(
            parse("add Alice -1234567"),
            LineCommand::Add {
                name: "Alice".into(),
                phone: "-1234567".into(),
                birthday: None,
            }
        );
        assert_eq!(
            parse("change Alice -7654321"),
            LineCommand::Change {
                name: "Alice".into(),
                phone: "-7654321".into(),
            }
        );
    }

    #[test]
    fn bad_arguments_to_known_commands_are_invalid_input() {
        for line in [
            "add Alice 1234567 1990-01-01 extra",
            "phone Alice Smith",
            "birthday Alice Smith",
            "exit now",
            "close now",
            "hello there",
            "show everything",
        ] {
            assert!(
                matches!(parse_line(line), Err(PhonebookError::InvalidInput(_))),
                "{} -> {:?}",
                line,
                parse_line(line)
            );
        }
    }

    #[test]
    fn unknown_commands() {
        for line in ["frobnicate", "help", "FROBNICATE now", "good"] {
            assert!(
                matches!(parse_line(line), Err(PhonebookError::UnknownCommand(_))),
                "{}",
                line
            );
        }
    }
}
