//! Purpose: Resolve where the JSON document comes from and convert it.
//! Exports: `InputArgs`, `InputSource`, `InputDoc`, `read_input`, `convert_document`.
//! Role: Inline DATA, `--file PATH`, `--file -`, or piped stdin, in that order.
//! Invariants: Exactly one document is read per command.
//! Invariants: Parse failures keep the parser error as their source.
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{Args, ValueHint};
use hostjson::api::{
    Error, ErrorKind, HostValue, categorize_error, hint_for_error, parse_json_slice,
};
use tracing::debug;

#[derive(Args, Debug, Clone)]
pub(crate) struct InputArgs {
    #[arg(help = "Inline JSON document", conflicts_with = "file")]
    pub(crate) data: Option<String>,
    #[arg(
        long,
        short = 'f',
        help = "Read the JSON document from a file (`-` for stdin)",
        value_hint = ValueHint::FilePath
    )]
    pub(crate) file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputSource {
    Inline,
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub(crate) fn label(&self) -> String {
        match self {
            InputSource::Inline => "inline data".to_string(),
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "stdin".to_string(),
        }
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        match self {
            InputSource::File(path) => Some(path),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct InputDoc {
    pub(crate) bytes: Vec<u8>,
    pub(crate) source: InputSource,
}

pub(crate) fn read_input(args: InputArgs) -> Result<InputDoc, Error> {
    if let Some(data) = args.data {
        return Ok(InputDoc {
            bytes: data.into_bytes(),
            source: InputSource::Inline,
        });
    }
    match args.file {
        Some(path) if path.as_os_str() == "-" => read_stdin(),
        Some(path) => read_file(path),
        None if io::stdin().is_terminal() => Err(missing_data_error()),
        None => read_stdin(),
    }
}

fn read_file(path: PathBuf) -> Result<InputDoc, Error> {
    debug!(path = %path.display(), "reading json file");
    match std::fs::read(&path) {
        Ok(bytes) => Ok(InputDoc {
            bytes,
            source: InputSource::File(path),
        }),
        Err(err) => Err(Error::new(ErrorKind::Io)
            .with_message("failed to read data file")
            .with_hint("Check that the path exists and is readable.")
            .with_path(path)
            .with_source(err)),
    }
}

fn read_stdin() -> Result<InputDoc, Error> {
    debug!("reading json from stdin");
    let mut bytes = Vec::new();
    io::stdin().lock().read_to_end(&mut bytes).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read stdin")
            .with_source(err)
    })?;
    stdin_document(bytes)
}

fn stdin_document(bytes: Vec<u8>) -> Result<InputDoc, Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(missing_data_error());
    }
    Ok(InputDoc {
        bytes,
        source: InputSource::Stdin,
    })
}

fn missing_data_error() -> Error {
    Error::new(ErrorKind::Usage)
        .with_message("missing data input")
        .with_hint("Provide JSON via DATA, --file, or pipe JSON to stdin.")
}

pub(crate) fn convert_document(doc: &InputDoc) -> Result<HostValue, Error> {
    parse_json_slice(&doc.bytes).map_err(|err| parse_failure(err, &doc.source))
}

fn parse_failure(err: serde_json::Error, source: &InputSource) -> Error {
    let category = categorize_error(&err);
    let mut out = Error::new(ErrorKind::Parse)
        .with_message(format!("invalid json ({})", category.label()))
        .with_hint(hint_for_error(&err, &source.label()));
    if err.line() > 0 {
        out = out.with_position(err.line(), err.column());
    }
    if let Some(path) = source.path() {
        out = out.with_path(path);
    }
    out.with_source(err)
}
