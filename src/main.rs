//! Purpose: `hostjson` CLI entry point.
//! Role: Binary crate root; parses args, installs tracing, maps failures to exit codes.
//! Invariants: Commands emit stable stdout formats (human on a TTY, JSON otherwise).
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
//! Invariants: All conversion goes through `hostjson::api`; this crate only does I/O.
use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum, error::ErrorKind as ClapErrorKind};
use clap_complete::aot::Shell;
use hostjson::api::{Error, ErrorKind, to_exit_code};
use tracing_subscriber::EnvFilter;

mod command_dispatch;
mod diagnostics;
mod input;
mod output;
mod shape_json;
mod tree_view;

use input::InputArgs;

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(code) => ExitCode::from(code),
        Err((err, color_mode)) => {
            diagnostics::emit_error(&err, color_mode);
            ExitCode::from(to_exit_code(err.kind()))
        }
    }
}

fn run() -> Result<u8, (Error, ColorMode)> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return help_or_usage_error(err),
    };
    let color_mode = cli.color;
    command_dispatch::dispatch_command(cli.command, color_mode)
        .map(|()| 0)
        .map_err(|err| (err, color_mode))
}

fn help_or_usage_error(err: clap::Error) -> Result<u8, (Error, ColorMode)> {
    let code = match err.kind() {
        ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => 0,
        ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => to_exit_code(ErrorKind::Usage),
        _ => return Err((diagnostics::usage_error_from_clap(&err), ColorMode::Auto)),
    };
    err.print().map_err(|io_err| {
        (
            Error::new(ErrorKind::Io)
                .with_message("failed to write help")
                .with_source(io_err),
            ColorMode::Auto,
        )
    })?;
    Ok(code)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

#[derive(Parser)]
#[command(
    name = "hostjson",
    version,
    about = "Convert JSON documents into native value graphs",
    help_template = r#"{about-with-newline}
{before-help}USAGE
  {usage}

COMMANDS
{subcommands}

OPTIONS
{options}

{after-help}
"#,
    long_about = None,
    before_help = r#"Reads one JSON document (inline, from a file, or from stdin).

Mental model:
  - `convert` re-emits the converted graph as JSON (or as an outline with --tree)
  - `inspect` summarizes its structure (kinds, keys, depth)
"#,
    after_help = r#"EXAMPLES
  $ hostjson convert '{"x": [true, null, "s"]}'
  $ hostjson convert --tree --file payload.json
  $ hostjson inspect --file payload.json
  $ cat payload.json | hostjson convert --pretty

LEARN MORE
  $ hostjson <command> --help
  Set RUST_LOG=debug for parse/convert tracing on stderr."#,
    arg_required_else_help = true
)]
struct Cli {
    #[arg(
        long,
        default_value = "auto",
        value_enum,
        global = true,
        help = "Colorize stderr diagnostics and --tree output: auto|always|never"
    )]
    color: ColorMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    #[command(
        about = "Convert a JSON document and print the converted graph",
        long_about = r#"Parse one JSON document, convert it into a native value graph, and print
the graph back as JSON, or as an outline of maps, sequences, and scalars.

Objects become maps (keys in sorted order), arrays become fixed-length
sequences, and scalars pass through unchanged."#,
        after_help = r#"EXAMPLES
  $ hostjson convert '{"b": 1, "a": [2, 3]}'
  $ hostjson convert --file payload.json --pretty
  $ hostjson convert --tree '{"a": [1, {"b": 2}]}'
  $ echo '[1, 2]' | hostjson convert"#
    )]
    Convert {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, help = "Pretty-print even when stdout is not a terminal")]
        pretty: bool,
        #[arg(long, conflicts_with = "pretty", help = "Print an outline instead of JSON")]
        tree: bool,
    },
    #[command(
        about = "Summarize the structure of a JSON document",
        long_about = r#"Convert one JSON document and report its shape: root kind, how many maps,
arrays, and scalars it holds, the total number of keys, and the maximum
container nesting depth."#,
        after_help = r#"EXAMPLES
  $ hostjson inspect '{"a": [1, {"b": 2}]}'
  $ hostjson inspect --file payload.json --json"#
    )]
    Inspect {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, help = "Emit JSON even when stdout is a terminal")]
        json: bool,
    },
    #[command(about = "Print version info")]
    Version,
    #[command(
        arg_required_else_help = true,
        about = "Generate shell completions",
        after_help = r#"EXAMPLES
  $ hostjson completion bash > ~/.local/share/bash-completion/completions/hostjson
  $ hostjson completion zsh > ~/.zfunc/_hostjson"#
    )]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, ColorMode};
    use clap::CommandFactory;

    #[test]
    fn color_mode_resolution() {
        assert!(ColorMode::Auto.use_color(true));
        assert!(!ColorMode::Auto.use_color(false));
        assert!(ColorMode::Always.use_color(false));
        assert!(!ColorMode::Never.use_color(true));
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
