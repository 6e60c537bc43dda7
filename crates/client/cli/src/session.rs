//! Line-oriented command shell over one grid.

use std::str::FromStr;

use grid_core::{
    AddOutcome, CellPos, ExecuteError, GridEngine, GridError, GridState, ItemCatalog, ItemId,
    PickupOutcome,
};

use crate::presentation;
use crate::repository::{FileSaveRepository, RepositoryError};

/// Command verbs understood by the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString, strum::AsRefStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CommandKind {
    Add,
    Auto,
    Pickup,
    Move,
    Remove,
    Consume,
    Show,
    Save,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("{command}: missing <{name}>")]
    MissingArgument {
        command: CommandKind,
        name: &'static str,
    },

    #[error("{command}: invalid <{name}> '{value}'")]
    InvalidArgument {
        command: CommandKind,
        name: &'static str,
        value: String,
    },

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// A parsed shell command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add {
        item_id: ItemId,
        amount: u32,
        position: CellPos,
        rotated: bool,
    },
    Auto {
        item_id: ItemId,
        amount: u32,
        allow_rotate: bool,
    },
    Pickup {
        item_id: ItemId,
        amount: u32,
    },
    Move {
        index: usize,
        position: CellPos,
        rotated: bool,
    },
    Remove {
        index: usize,
    },
    Consume {
        index: usize,
        amount: u32,
    },
    Show,
    Save,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  add <item> <amount> <x> <y> [r]   place at an anchor, 'r' to rotate
  auto <item> <amount> [fixed]      stack and auto-place, 'fixed' disables rotation
  pickup <item> [amount]            auto-place with rotation
  move <index> <x> <y> [r]          relocate an entry
  remove <index>                    drop an entry
  consume <index> [amount]          use up units of an entry
  show | save | help | quit";

/// Tokens of one command line after the verb.
struct Args<'a> {
    command: CommandKind,
    tokens: std::str::SplitWhitespace<'a>,
}

impl Args<'_> {
    fn required<T: FromStr>(&mut self, name: &'static str) -> Result<T, CommandError> {
        let raw = self.tokens.next().ok_or(CommandError::MissingArgument {
            command: self.command,
            name,
        })?;
        self.parse(name, raw)
    }

    fn optional<T: FromStr>(&mut self, name: &'static str, default: T) -> Result<T, CommandError> {
        match self.tokens.next() {
            Some(raw) => self.parse(name, raw),
            None => Ok(default),
        }
    }

    fn flag(&mut self, word: &str) -> bool {
        self.tokens
            .next()
            .is_some_and(|token| token.eq_ignore_ascii_case(word))
    }

    fn position(&mut self) -> Result<CellPos, CommandError> {
        Ok(CellPos::new(self.required("x")?, self.required("y")?))
    }

    fn parse<T: FromStr>(&self, name: &'static str, raw: &str) -> Result<T, CommandError> {
        raw.parse().map_err(|_| CommandError::InvalidArgument {
            command: self.command,
            name,
            value: raw.to_owned(),
        })
    }
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Ok(None);
        };
        let command = CommandKind::from_str(verb)
            .map_err(|_| CommandError::UnknownCommand(verb.to_owned()))?;
        let mut args = Args { command, tokens };

        let parsed = match command {
            CommandKind::Add => Self::Add {
                item_id: args.required::<String>("item")?.into(),
                amount: args.required("amount")?,
                position: args.position()?,
                rotated: args.flag("r"),
            },
            CommandKind::Auto => Self::Auto {
                item_id: args.required::<String>("item")?.into(),
                amount: args.required("amount")?,
                allow_rotate: !args.flag("fixed"),
            },
            CommandKind::Pickup => Self::Pickup {
                item_id: args.required::<String>("item")?.into(),
                amount: args.optional("amount", 1)?,
            },
            CommandKind::Move => Self::Move {
                index: args.required("index")?,
                position: args.position()?,
                rotated: args.flag("r"),
            },
            CommandKind::Remove => Self::Remove {
                index: args.required("index")?,
            },
            CommandKind::Consume => Self::Consume {
                index: args.required("index")?,
                amount: args.optional("amount", 1)?,
            },
            CommandKind::Show => Self::Show,
            CommandKind::Save => Self::Save,
            CommandKind::Help => Self::Help,
            CommandKind::Quit => Self::Quit,
        };
        Ok(Some(parsed))
    }
}

/// What the shell should do after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Print(String),
    Exit,
}

/// Owns the grid, its catalog and where it is saved.
pub struct Session {
    state: GridState,
    items: ItemCatalog,
    repository: FileSaveRepository,
}

impl Session {
    pub fn new(state: GridState, items: ItemCatalog, repository: FileSaveRepository) -> Self {
        Self {
            state,
            items,
            repository,
        }
    }

    pub fn state(&self) -> &GridState {
        &self.state
    }

    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    fn engine(&mut self) -> GridEngine<'_> {
        GridEngine::new(&mut self.state, &self.items)
    }

    /// Auto-adds one unit of each id, logging whatever does not fit.
    pub fn bootstrap(&mut self, ids: &[ItemId]) {
        for item_id in ids.iter().filter(|id| !id.is_blank()) {
            match self.engine().add_auto(item_id.clone(), 1, true) {
                Ok(placement) if placement.is_complete() => {
                    tracing::info!(item = %item_id, "bootstrap item added");
                }
                Ok(placement) => {
                    tracing::warn!(
                        item = %item_id,
                        leftover = placement.leftover,
                        "bootstrap item did not fit"
                    );
                }
                Err(error) => {
                    tracing::warn!(item = %item_id, code = error.error_code(), %error, "bootstrap item rejected");
                }
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply, CommandError> {
        let message = match command {
            Command::Add {
                item_id,
                amount,
                position,
                rotated,
            } => match self.engine().try_add(item_id, amount, position, rotated)? {
                AddOutcome::Stacked { touched } => {
                    format!("stacked into {} entr(ies)", touched.len())
                }
                AddOutcome::Placed {
                    index,
                    quantity,
                    dropped: 0,
                } => format!("placed {quantity} as entry {index}"),
                AddOutcome::Placed {
                    index,
                    quantity,
                    dropped,
                } => format!("placed {quantity} as entry {index}, {dropped} did not fit one stack"),
            },
            Command::Auto {
                item_id,
                amount,
                allow_rotate,
            } => {
                let placement = self.engine().add_auto(item_id, amount, allow_rotate)?;
                match placement.stop {
                    None => format!(
                        "added {} ({} stacked, {} new entries)",
                        placement.requested,
                        placement.stacked,
                        placement.created.len()
                    ),
                    Some(reason) => format!("{} left over: {reason}", placement.leftover),
                }
            }
            Command::Pickup { item_id, amount } => match self.engine().pickup(item_id, amount)? {
                PickupOutcome::Collected { amount } => format!("picked up {amount}"),
                PickupOutcome::Partial {
                    collected,
                    leftover,
                } => format!("No space or overweight: picked up {collected}, {leftover} left"),
            },
            Command::Move {
                index,
                position,
                rotated,
            } => {
                self.engine().try_move(index, position, rotated)?;
                format!("moved entry {index} to {position}")
            }
            Command::Remove { index } => {
                let entry = self.engine().remove(index)?;
                format!("removed {} x{}", entry.item_id, entry.quantity)
            }
            Command::Consume { index, amount } => match self.engine().consume(index, amount)? {
                0 => format!("entry {index} used up"),
                left => format!("entry {index} has {left} left"),
            },
            Command::Show => presentation::render(&self.state, &self.items),
            Command::Save => {
                self.repository.save(&self.state)?;
                format!("saved to {}", self.repository.path().display())
            }
            Command::Help => HELP.to_owned(),
            Command::Quit => return Ok(Reply::Exit),
        };
        Ok(Reply::Print(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_core::ItemDefinition;

    fn session(dir: &tempfile::TempDir) -> Session {
        let items = ItemCatalog::from_definitions([
            ItemDefinition::new("pistol").with_footprint(2, 1),
            ItemDefinition::new("ammo9mm").with_max_stack(30).with_weight(0.02),
        ]);
        Session::new(
            GridState::new(4, 3, 0.0).unwrap(),
            items,
            FileSaveRepository::new(dir.path().join("inventory.json")),
        )
    }

    fn run(session: &mut Session, line: &str) -> Result<Reply, CommandError> {
        let command = Command::parse(line)?.expect("non-blank line");
        session.execute(command)
    }

    #[test]
    fn parses_verbs_case_insensitively() {
        assert_eq!(
            Command::parse("MOVE 2 1 0 r").unwrap(),
            Some(Command::Move {
                index: 2,
                position: CellPos::new(1, 0),
                rotated: true
            })
        );
        assert_eq!(
            Command::parse("pickup ammo9mm").unwrap(),
            Some(Command::Pickup {
                item_id: ItemId::from("ammo9mm"),
                amount: 1
            })
        );
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn reports_bad_input() {
        assert!(matches!(
            Command::parse("jump"),
            Err(CommandError::UnknownCommand(verb)) if verb == "jump"
        ));
        assert!(matches!(
            Command::parse("add pistol 1 0"),
            Err(CommandError::MissingArgument { name: "y", .. })
        ));
        assert!(matches!(
            Command::parse("remove first"),
            Err(CommandError::InvalidArgument { name: "index", .. })
        ));
    }

    #[test]
    fn commands_drive_the_grid() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);

        run(&mut session, "add pistol 1 0 0").unwrap();
        run(&mut session, "auto ammo9mm 45").unwrap();
        assert_eq!(session.state().len(), 3);

        run(&mut session, "consume 1 30").unwrap();
        assert_eq!(session.state().len(), 2);

        let error = run(&mut session, "move 0 3 0").unwrap_err();
        assert!(matches!(error, CommandError::Execute(_)));

        assert_eq!(run(&mut session, "quit").unwrap(), Reply::Exit);
    }

    #[test]
    fn save_writes_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);
        run(&mut session, "pickup ammo9mm 3").unwrap();

        run(&mut session, "save").unwrap();

        let loaded = FileSaveRepository::new(dir.path().join("inventory.json"))
            .load(session.items())
            .unwrap()
            .unwrap();
        assert_eq!(&loaded, session.state());
    }

    #[test]
    fn bootstrap_skips_unknown_and_blank_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);

        session.bootstrap(&[ItemId::from("pistol"), ItemId::from(" "), ItemId::from("ghost")]);

        assert_eq!(session.state().len(), 1);
    }
}
