use crate::application::session::Command;
use crate::domain::cursor::Direction;
use crate::error::{CrosswordError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum CommandKind {
    Select,
    Type,
    Backspace,
    Move,
    Check,
    Reset,
}

/// One row of a command script: `command,row,col,key`.
#[derive(Debug, Deserialize)]
struct CommandRecord {
    command: CommandKind,
    row: Option<isize>,
    col: Option<isize>,
    key: Option<String>,
}

impl TryFrom<CommandRecord> for Command {
    type Error = CrosswordError;

    fn try_from(record: CommandRecord) -> Result<Self> {
        match record.command {
            CommandKind::Select => match (record.row, record.col) {
                (Some(row), Some(col)) => Ok(Command::Select { row, col }),
                _ => Err(CrosswordError::InvalidCommand(
                    "select requires row and col".to_string(),
                )),
            },
            CommandKind::Type => {
                let key = record.key.unwrap_or_default();
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Ok(Command::Type(ch)),
                    _ => Err(CrosswordError::InvalidCommand(format!(
                        "type requires a single character key, got {key:?}"
                    ))),
                }
            }
            CommandKind::Move => {
                let key = record.key.unwrap_or_default();
                Direction::parse(&key).map(Command::Move).ok_or_else(|| {
                    CrosswordError::InvalidCommand(format!("unknown direction {key:?}"))
                })
            }
            CommandKind::Backspace => Ok(Command::Backspace),
            CommandKind::Check => Ok(Command::Check),
            CommandKind::Reset => Ok(Command::Reset),
        }
    }
}

/// Reads play commands from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<Command>`.
/// It trims whitespace and accepts rows that leave trailing columns out.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Creates a new `CommandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and parses commands.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map_err(CrosswordError::from)
                .and_then(|record: CommandRecord| Command::try_from(record))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = "command, row, col, key\n\
                    select, 0, 2,\n\
                    type, , , c\n\
                    move, , , ArrowDown\n\
                    backspace, , ,\n\
                    check\n\
                    reset, , ,";
        let reader = CommandReader::new(data.as_bytes());
        let results: Vec<Command> = reader.commands().map(|r| r.unwrap()).collect();

        assert_eq!(
            results,
            vec![
                Command::Select { row: 0, col: 2 },
                Command::Type('c'),
                Command::Move(Direction::Down),
                Command::Backspace,
                Command::Check,
                Command::Reset,
            ]
        );
    }

    #[test]
    fn test_reader_negative_coordinates_are_passed_through() {
        let data = "command,row,col,key\nselect,-1,3,";
        let reader = CommandReader::new(data.as_bytes());
        let results: Vec<Result<Command>> = reader.commands().collect();

        assert_eq!(
            results[0].as_ref().unwrap(),
            &Command::Select { row: -1, col: 3 }
        );
    }

    #[test]
    fn test_reader_malformed_lines() {
        let data = "command,row,col,key\n\
                    jump,0,0,\n\
                    select,0,,\n\
                    type,,,AB\n\
                    move,,,sideways\n\
                    select,x,0,\n\
                    check,,,";
        let reader = CommandReader::new(data.as_bytes());
        let results: Vec<Result<Command>> = reader.commands().collect();

        assert_eq!(results.len(), 6);
        assert!(matches!(results[0], Err(CrosswordError::CsvError(_))));
        assert!(matches!(results[1], Err(CrosswordError::InvalidCommand(_))));
        assert!(matches!(results[2], Err(CrosswordError::InvalidCommand(_))));
        assert!(matches!(results[3], Err(CrosswordError::InvalidCommand(_))));
        assert!(matches!(results[4], Err(CrosswordError::CsvError(_))));
        assert!(matches!(results[5], Ok(Command::Check)));
    }
}
