//! Serial console: tokenizer, command registry, system commands and REPL.
//!
//! ```text
//!  UART line ──▶ split_argv ──▶ Registry::run ──▶ handler(argv, ctx) ──▶ status
//! ```

pub mod commands;
pub mod io;
pub mod parser;
pub mod registry;
pub mod repl;

pub use commands::{print_task_list, system_registry};
pub use io::FmtIo;
pub use parser::{Argv, split_argv};
pub use registry::{Action, CommandDescriptor, CommandStatus, Handler, Registry};
pub use repl::Repl;
