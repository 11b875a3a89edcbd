//! Command-line argument parsing.
//!
//! Usage:
//!   spiral run <file.spiral>
//!   spiral compile <file.emoji> [-o <file>]
//!   spiral create <name> [-o <dir>]
//!   spiral repl
//!   spiral demo

use std::path::PathBuf;

/// One-screen usage summary printed on argument errors and `--help`.
pub const USAGE: &str = "\
Usage: spiral <command> [options]

Commands:
  run <file.spiral>             run a SpiralLogic program
  compile <file.emoji> [-o F]   compile an emoji program to ritual text
  create <name> [-o DIR]        write a built-in example program
  repl                          interactive emoji programming session
  demo                          translate a few sample emoji lines

Options:
  -o, --output <path>   output file (compile) or directory (create)
  -V, --version         print version
  -h, --help            show this help";

// ── Public types ──────────────────────────────────────────────────────────────

/// A parsed invocation.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `spiral run <file>`
    Run { file: PathBuf },
    /// `spiral compile <file> [-o <file>]`
    Compile { file: PathBuf, output: Option<PathBuf> },
    /// `spiral create <name> [-o <dir>]`
    Create { name: String, output_dir: PathBuf },
    Repl,
    Demo,
    Version,
    Help,
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse `std::env::args()` into a [`Command`] or an error message.
pub fn parse_args() -> Result<Command, String> {
    let raw: Vec<String> = std::env::args().collect();
    parse_argv(&raw[1..])
}

/// Parse a slice of argument strings (exposed for testing).
pub fn parse_argv(argv: &[String]) -> Result<Command, String> {
    let mut it = argv.iter().map(String::as_str);
    let command = match it.next() {
        None => return Err("missing command".to_owned()),
        Some("--version") | Some("-V") => return expect_end(it, Command::Version),
        Some("--help") | Some("-h") => return expect_end(it, Command::Help),
        Some(cmd) => cmd,
    };

    match command {
        "run" => {
            let file = it.next().ok_or("run: missing <file> argument")?;
            expect_end(it, Command::Run { file: PathBuf::from(file) })
        }

        "compile" => {
            let mut file: Option<PathBuf> = None;
            let mut output: Option<PathBuf> = None;
            while let Some(arg) = it.next() {
                match arg {
                    "-o" | "--output" => {
                        let path = it.next().ok_or("compile: -o requires a path")?;
                        output = Some(PathBuf::from(path));
                    }
                    _ if arg.starts_with('-') => {
                        return Err(format!("compile: unknown option: {arg}"));
                    }
                    _ if file.is_none() => file = Some(PathBuf::from(arg)),
                    _ => return Err(format!("compile: unexpected argument: {arg}")),
                }
            }
            let file = file.ok_or("compile: missing <file> argument")?;
            Ok(Command::Compile { file, output })
        }

        "create" => {
            let mut name: Option<String> = None;
            let mut output_dir = PathBuf::from(".");
            while let Some(arg) = it.next() {
                match arg {
                    "-o" | "--output" => {
                        let dir = it.next().ok_or("create: -o requires a directory")?;
                        output_dir = PathBuf::from(dir);
                    }
                    _ if arg.starts_with('-') => {
                        return Err(format!("create: unknown option: {arg}"));
                    }
                    _ if name.is_none() => name = Some(arg.to_owned()),
                    _ => return Err(format!("create: unexpected argument: {arg}")),
                }
            }
            let name = name.ok_or("create: missing <name> argument")?;
            Ok(Command::Create { name, output_dir })
        }

        "repl" => expect_end(it, Command::Repl),
        "demo" => expect_end(it, Command::Demo),

        other => Err(format!("unknown command: {other}")),
    }
}

/// Fail when arguments remain after a fully parsed command.
fn expect_end<'a>(
    mut it: impl Iterator<Item = &'a str>,
    cmd: Command,
) -> Result<Command, String> {
    match it.next() {
        None => Ok(cmd),
        Some(extra) => Err(format!("unexpected argument: {extra}")),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
