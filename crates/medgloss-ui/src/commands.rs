use medgloss_core::session::{Field, SessionError};

/// One line of user input, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up a term. `None` re-submits the current query.
    Search(Option<String>),
    Edit { field: Field, value: String },
    Copy,
    Export,
    Clear,
    Show,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: :{0} (try :help)")]
    Unknown(String),

    #[error("Usage: :edit <term|pronunciation|meaning|definition> <value>")]
    EditUsage,

    #[error(transparent)]
    Field(#[from] SessionError),
}

pub const HELP: &str = "\
Type a medical term and press Enter to look it up.
  :search [term]          look up a term (or the current query)
  :edit <field> <value>   change term, pronunciation, meaning or definition
  :copy                   copy the export text to the clipboard
  :export                 print the export text
  :show                   show the current result
  :clear                  clear the result and the query
  :help                   show this help
  :quit                   exit";

/// Parse one input line.
///
/// Lines not starting with `:` are search queries, including empty ones;
/// those are rejected later without changing anything.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let Some(rest) = line.trim_start().strip_prefix(':') else {
        return Ok(Command::Search(Some(line.to_string())));
    };

    let (name, args) = match rest.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (rest.trim_end(), ""),
    };

    match name {
        "search" | "s" => Ok(Command::Search(
            (!args.is_empty()).then(|| args.to_string()),
        )),
        "edit" | "e" => {
            let (field, value) = args
                .split_once(char::is_whitespace)
                .map(|(field, value)| (field, value.trim()))
                .unwrap_or((args, ""));
            if field.is_empty() {
                return Err(CommandError::EditUsage);
            }
            Ok(Command::Edit {
                field: field.parse()?,
                value: value.to_string(),
            })
        }
        "copy" | "c" => Ok(Command::Copy),
        "export" => Ok(Command::Export),
        "clear" => Ok(Command::Clear),
        "show" => Ok(Command::Show),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
