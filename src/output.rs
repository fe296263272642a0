//! Purpose: Write command results to stdout.
//! Exports: `write_output`, `emit_value`, `emit_json`, `emit_shape_human`, `emit_version`.
//! Role: Single place that decides compact vs pretty vs outline rendering.
//! Invariants: A closed stdout (broken pipe) ends output quietly; other write errors are Io.
//! Invariants: Compact JSON is used whenever stdout is not a terminal and nothing else was asked.
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use hostjson::api::{Error, ErrorKind, HostValue, Shape};
use serde_json::{Value, json};
use tracing::debug;

use crate::ColorMode;
use crate::tree_view::render_tree;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ValueLayout {
    Auto,
    Pretty,
    Tree,
}

pub(crate) fn write_output<W: Write>(out: &mut W, bytes: &[u8]) -> Result<(), Error> {
    match out.write_all(bytes).and_then(|()| out.flush()) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed before output finished");
            Ok(())
        }
        Err(err) => Err(Error::new(ErrorKind::Io)
            .with_message("failed to write output")
            .with_source(err)),
    }
}

fn print_line(text: &str) -> Result<(), Error> {
    let mut bytes = Vec::with_capacity(text.len() + 1);
    bytes.extend_from_slice(text.as_bytes());
    bytes.push(b'\n');
    write_output(&mut io::stdout().lock(), &bytes)
}

fn to_text(value: &impl serde::Serialize, pretty: bool) -> Result<String, Error> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to encode output")
            .with_source(err)
    })
}

pub(crate) fn emit_value(
    value: &HostValue,
    layout: ValueLayout,
    color_mode: ColorMode,
) -> Result<(), Error> {
    let is_tty = io::stdout().is_terminal();
    let text = match layout {
        ValueLayout::Tree => render_tree(value, color_mode.use_color(is_tty)),
        ValueLayout::Pretty => to_text(value, true)?,
        ValueLayout::Auto => to_text(value, is_tty)?,
    };
    print_line(&text)
}

pub(crate) fn emit_json(value: &Value) -> Result<(), Error> {
    print_line(&to_text(value, io::stdout().is_terminal())?)
}

pub(crate) fn emit_shape_human(shape: &Shape, source: Option<&Path>) -> Result<(), Error> {
    let mut lines = Vec::new();
    if let Some(path) = source {
        lines.push(format!("source:    {}", path.display()));
    }
    lines.push(format!("kind:      {}", shape.kind.label()));
    lines.push(format!(
        "nodes:     {} ({} maps, {} arrays, {} scalars)",
        shape.nodes(),
        shape.maps,
        shape.arrays,
        shape.scalars
    ));
    lines.push(format!("keys:      {}", shape.keys));
    lines.push(format!("max depth: {}", shape.max_depth));
    print_line(&lines.join("\n"))
}

pub(crate) fn emit_version() -> Result<(), Error> {
    if io::stdout().is_terminal() {
        return print_line(&format!("hostjson {}", env!("CARGO_PKG_VERSION")));
    }
    emit_json(&json!({
        "name": "hostjson",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::write_output;
    use hostjson::api::ErrorKind;
    use std::io::{self, Write};

    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(self.0, "write failed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn broken_pipe_is_not_an_error() {
        let mut out = FailingWriter(io::ErrorKind::BrokenPipe);
        assert!(write_output(&mut out, b"complete -F _hostjson hostjson\n").is_ok());
    }

    #[test]
    fn other_write_failures_surface_as_io() {
        let mut out = FailingWriter(io::ErrorKind::PermissionDenied);
        let err = write_output(&mut out, b"[]\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.message(), Some("failed to write output"));
    }

    #[test]
    fn bytes_reach_the_writer_unchanged() {
        let mut out = Vec::new();
        write_output(&mut out, b"{\"a\":1}\n").expect("write");
        assert_eq!(out, b"{\"a\":1}\n");
    }
}
