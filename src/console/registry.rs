//! Command registry and dispatch.
//!
//! Maps a typed command name to a handler. The registry owns argument
//! count validation and log suppression, so handlers only ever see an
//! argument list they accept.

use core::fmt::Write;

use log::{debug, error, warn};

use super::parser::{Argv, split_argv};
use crate::app::context::CommandContext;
use crate::error::{Error, Result};

/// Numeric status handed back to the console (0 = success).
pub type CommandStatus = i32;

/// Command handler: parsed arguments and context in, outcome out.
pub type Handler = fn(&Argv, &mut CommandContext<'_>) -> Result<()>;

/// What a registered command does when invoked.
#[derive(Clone, Copy)]
pub enum Action {
    Run(Handler),
    /// List every registered command with its hint and help text.
    Help,
}

/// Command descriptor
#[derive(Clone, Copy)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub help: &'static str,
    /// Argument synopsis shown by `help` and in usage errors.
    pub hint: Option<&'static str>,
    /// Positional arguments accepted after the name.
    pub max_args: usize,
    /// Silence log output while the handler runs.
    pub quiet: bool,
    pub action: Action,
}

impl CommandDescriptor {
    pub const fn new(name: &'static str, help: &'static str, handler: Handler) -> Self {
        Self {
            name,
            help,
            hint: None,
            max_args: 0,
            quiet: false,
            action: Action::Run(handler),
        }
    }

    pub const fn with_args(mut self, max_args: usize, hint: &'static str) -> Self {
        self.max_args = max_args;
        self.hint = Some(hint);
        self
    }

    pub const fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }
}

impl core::fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("max_args", &self.max_args)
            .field("quiet", &self.quiet)
            .finish_non_exhaustive()
    }
}

/// Registered commands, kept sorted by name.
#[derive(Debug, Default)]
pub struct Registry {
    commands: Vec<CommandDescriptor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, cmd: CommandDescriptor) -> Result<()> {
        match self.commands.binary_search_by(|c| c.name.cmp(cmd.name)) {
            Ok(_) => Err(Error::DuplicateCommand(cmd.name)),
            Err(pos) => {
                self.commands.insert(pos, cmd);
                Ok(())
            }
        }
    }

    /// Register the framework `help` command.
    pub fn register_help(&mut self) -> Result<()> {
        self.register(CommandDescriptor {
            name: "help",
            help: "Print the list of registered commands",
            hint: None,
            max_args: 0,
            quiet: false,
            action: Action::Help,
        })
    }

    pub fn find(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands
            .binary_search_by(|c| c.name.cmp(name))
            .ok()
            .map(|i| &self.commands[i])
    }

    pub fn commands(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Tokenize `line` and run the matching command.
    ///
    /// `Err` means no handler ran (blank line or unknown name). A handler
    /// that ran, or was rejected for its arguments, yields `Ok(status)`.
    pub fn run(&self, line: &str, ctx: &mut CommandContext<'_>) -> Result<CommandStatus> {
        let argv = split_argv(line);
        if argv.is_empty() {
            return Err(Error::EmptyCommand);
        }
        let cmd = self.find(argv.command()).ok_or(Error::UnknownCommand)?;

        debug!("{}: argc={}", cmd.name, argv.argc());
        for (i, arg) in argv.iter().enumerate() {
            debug!("{}: argv[{}]={}", cmd.name, i, arg);
        }

        Ok(self.invoke(cmd, &argv, ctx))
    }

    /// Validate `argv` against `cmd` and run it.
    pub fn invoke(
        &self,
        cmd: &CommandDescriptor,
        argv: &Argv,
        ctx: &mut CommandContext<'_>,
    ) -> CommandStatus {
        let given = argv.args().len();
        if given > cmd.max_args {
            let _ = writeln!(
                ctx.err,
                "{}: unexpected argument \"{}\"",
                cmd.name,
                argv.args()[cmd.max_args]
            );
            let _ = writeln!(ctx.err, "Usage: {} {}", cmd.name, cmd.hint.unwrap_or(""));
            let e = Error::TooManyArguments {
                command: cmd.name,
                given,
                max: cmd.max_args,
            };
            warn!("{e}");
            return e.status();
        }

        let snapshot = cmd.quiet.then(|| ctx.logs.suppress());
        let result = match cmd.action {
            Action::Run(handler) => handler(argv, ctx),
            Action::Help => {
                self.write_help(ctx.out);
                Ok(())
            }
        };
        if let Some(snapshot) = snapshot {
            ctx.logs.restore(snapshot);
        }

        match result {
            Ok(()) => 0,
            Err(e) => {
                error!("{}: {}", cmd.name, e);
                e.status()
            }
        }
    }

    fn write_help(&self, out: &mut dyn Write) {
        for cmd in &self.commands {
            match cmd.hint {
                Some(hint) => {
                    let _ = write!(out, "{} {}\r\n", cmd.name, hint);
                }
                None => {
                    let _ = write!(out, "{}\r\n", cmd.name);
                }
            }
            let _ = write!(out, "  {}\r\n\r\n", cmd.help);
        }
    }
}
