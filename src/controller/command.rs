use crate::pipeline::filter::UnknownFilter;
use crate::pipeline::sort::UnknownColumn;
use crate::pipeline::{Filter, SortColumn};
use std::str::FromStr;
use thiserror::Error;

/// A user action read from the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Filter button
    Select(Filter),
    /// Column header click
    Sort(SortColumn),
    Refresh,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("usage: sort <column>")]
    MissingColumn,

    #[error(transparent)]
    Filter(#[from] UnknownFilter),

    #[error(transparent)]
    Column(#[from] UnknownColumn),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Err(CommandError::Empty);
        };

        match first.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Ok(Command::Quit),
            "r" | "refresh" => Ok(Command::Refresh),
            "sort" => {
                let column = words.next().ok_or(CommandError::MissingColumn)?;
                Ok(Command::Sort(column.parse()?))
            }
            _ => Ok(Command::Select(first.parse()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!("quit".parse(), Ok(Command::Quit));
        assert_eq!("  refresh ".parse(), Ok(Command::Refresh));
        assert_eq!("sort price".parse(), Ok(Command::Sort(SortColumn::Price)));
        assert_eq!("de".parse(), Ok(Command::Select(Filter::Country("DE".into()))));
        assert_eq!("5-6cyl".parse(), Ok(Command::Select(Filter::FiveSixCyl)));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("sort".parse::<Command>(), Err(CommandError::MissingColumn));
        assert!(matches!("sort link".parse::<Command>(), Err(CommandError::Column(_))));
        assert!(matches!("sweden".parse::<Command>(), Err(CommandError::Filter(_))));
    }
}
