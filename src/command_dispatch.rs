//! Purpose: Hold top-level CLI command dispatch for `hostjson`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Each command reads at most one document and converts it exactly once.
//! Invariants: All stdout writes go through `output`, so a closed pipe never panics.

use std::io::{self, IsTerminal};

use clap::CommandFactory;
use hostjson::api::{Error, shape};
use tracing::debug;

use crate::input::{convert_document, read_input};
use crate::output::{self, ValueLayout};
use crate::shape_json::shape_json;
use crate::{Cli, ColorMode, Command};

pub(crate) fn dispatch_command(command: Command, color_mode: ColorMode) -> Result<(), Error> {
    match command {
        Command::Completion { shell } => {
            let mut script = Vec::new();
            clap_complete::aot::generate(shell, &mut Cli::command(), "hostjson", &mut script);
            output::write_output(&mut io::stdout().lock(), &script)
        }
        Command::Version => output::emit_version(),
        Command::Convert {
            input,
            pretty,
            tree,
        } => {
            let doc = read_input(input)?;
            let value = convert_document(&doc)?;
            debug!(
                source = %doc.source.label(),
                kind = value.kind().label(),
                "emitting converted value"
            );
            let layout = if tree {
                ValueLayout::Tree
            } else if pretty {
                ValueLayout::Pretty
            } else {
                ValueLayout::Auto
            };
            output::emit_value(&value, layout, color_mode)
        }
        Command::Inspect { input, json } => {
            let doc = read_input(input)?;
            let value = convert_document(&doc)?;
            let summary = shape(&value);
            if json || !io::stdout().is_terminal() {
                output::emit_json(&shape_json(&summary, doc.source.path()))
            } else {
                output::emit_shape_human(&summary, doc.source.path())
            }
        }
    }
}
