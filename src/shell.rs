use anyhow::Context;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::report::render_state;
use crate::sampler::RandomIndex;
use crate::selector::Selector;

const HELP: &str = "commands:
  load <FILE>   draw names from a CSV or TSV file
  show          print the current selection
  clear         discard the current selection
  help          print this message
  quit          leave the shell";

#[derive(Debug, PartialEq, Eq)]
enum ShellCommand<'a> {
    Load(&'a str),
    Show,
    Clear,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Option<ShellCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.find(char::is_whitespace) {
        Some(i) => (&line[..i], line[i..].trim()),
        None => (line, ""),
    };

    let cmd = match word {
        "load" if !rest.is_empty() => ShellCommand::Load(rest),
        "show" => ShellCommand::Show,
        "clear" => ShellCommand::Clear,
        "help" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        _ => ShellCommand::Unknown(line),
    };
    Some(cmd)
}

/// Read commands from `input` until it ends or the user quits, printing the state after each.
pub fn run_shell<I, W, R>(
    input: I,
    output: &mut W,
    selector: &mut Selector,
    rng: &mut R,
) -> anyhow::Result<()>
where
    I: BufRead,
    W: Write,
    R: RandomIndex + ?Sized,
{
    writeln!(output, "{}", render_state(selector.state())).context("writing to stdout")?;

    for line in input.lines() {
        let line = line.context("reading from stdin")?;

        let text = match parse_command(&line) {
            None => continue,
            Some(ShellCommand::Quit) => break,
            Some(ShellCommand::Help) => HELP.to_string(),
            Some(ShellCommand::Unknown(l)) => format!("unknown command: {} (try `help`)", l),
            Some(ShellCommand::Show) => render_state(selector.state()),
            Some(ShellCommand::Clear) => render_state(selector.clear()),
            Some(ShellCommand::Load(path)) => render_state(selector.upload(Path::new(path), rng)),
        };

        writeln!(output, "{}", text).context("writing to stdout")?;
    }

    Ok(())
}
