use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use bookmarker_client::ServiceSettings;
use bookmarker_core::{update, CategoryOptions, Msg, PopupState, PopupViewModel, DEFAULT_FAVICON};
use popup_logging::popup_info;

use super::effects::EffectRunner;
use super::host::{CliHost, HostEnvironment};
use super::logging::{self, LogDestination};
use super::ui::constants::*;
use super::ui::render;

pub fn run_app() -> anyhow::Result<()> {
    let launch = parse_args(std::env::args().skip(1))?;
    logging::initialize(launch.log);
    popup_info!("bookmarker popup starting");

    let host = CliHost::new(launch.page_url);
    let settings = match launch.backend {
        Some(base_url) => ServiceSettings::with_base_url(base_url),
        None => ServiceSettings::default(),
    };

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(settings, msg_tx);

    let mut state = PopupState::with_config(
        CategoryOptions::new(CATEGORY_OPTIONS),
        DEFAULT_FAVICON,
    );
    if let Some(url) = host.active_page_url() {
        dispatch(&mut state, Msg::PageUrlResolved(url), &runner, &host);
    }

    let input_rx = spawn_input_reader();

    print_lines(&help_lines())?;
    paint(&state.view())?;
    state.consume_dirty();

    loop {
        let mut idle = true;

        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(&mut state, msg, &runner, &host);
            idle = false;
        }

        while let Ok(input) = input_rx.try_recv() {
            match input {
                Input::Core(msg) => dispatch(&mut state, msg, &runner, &host),
                Input::Show => paint(&state.view())?,
                Input::Help => print_lines(&help_lines())?,
                Input::Unknown(word) => {
                    print_lines(&[format!("Unknown command {word:?}; try \"help\".")])?;
                }
                Input::Quit => {
                    popup_info!("bookmarker popup closing");
                    return Ok(());
                }
            }
            idle = false;
        }

        if state.consume_dirty() {
            paint(&state.view())?;
        } else if idle {
            thread::sleep(Duration::from_millis(20));
        }
    }
}

fn dispatch(state: &mut PopupState, msg: Msg, runner: &EffectRunner, host: &dyn HostEnvironment) {
    let current = std::mem::take(state);
    let (next, effects) = update(current, msg);
    *state = next;
    runner.run(effects, host);
}

fn spawn_input_reader() -> mpsc::Receiver<Input> {
    let (input_tx, input_rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            if let Some(input) = parse_command(&line) {
                if input_tx.send(input).is_err() {
                    return;
                }
            }
        }
        // End of input closes the popup.
        let _ = input_tx.send(Input::Quit);
    });
    input_rx
}

fn paint(view: &PopupViewModel) -> io::Result<()> {
    print_lines(&render::render(view))
}

fn print_lines(lines: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out)?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    write!(out, "> ")?;
    out.flush()
}

fn help_lines() -> Vec<String> {
    [
        "Commands:",
        "  analyze           classify the page in the URL field",
        "  save              save the analyzed page",
        "  tag add <tag>     append a tag",
        "  tag rm <tag>      remove every occurrence of a tag",
        "  category <name>   pick one of the configured categories",
        "  url <address>     replace the URL field",
        "  explore           open the saved-links page in the browser",
        "  show              repaint the popup",
        "  help              this text",
        "  quit              close the popup",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

struct LaunchOptions {
    page_url: Option<String>,
    backend: Option<String>,
    log: LogDestination,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<LaunchOptions> {
    let mut launch = LaunchOptions {
        page_url: None,
        backend: None,
        log: LogDestination::File,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--backend" => {
                launch.backend = Some(args.next().context("--backend expects a base URL")?);
            }
            "--log" => {
                let value = args.next().context("--log expects terminal, file or both")?;
                launch.log = match value.as_str() {
                    "terminal" => LogDestination::Terminal,
                    "file" => LogDestination::File,
                    "both" => LogDestination::Both,
                    other => anyhow::bail!("unknown log destination {other:?}"),
                };
            }
            _ if launch.page_url.is_none() && !arg.starts_with("--") => {
                launch.page_url = Some(arg);
            }
            other => anyhow::bail!("unexpected argument {other:?}"),
        }
    }

    Ok(launch)
}

#[derive(Debug, PartialEq)]
enum Input {
    Core(Msg),
    Show,
    Help,
    Quit,
    Unknown(String),
}

/// Parses one terminal line. Empty lines are no input at all.
fn parse_command(line: &str) -> Option<Input> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    let input = match word {
        CMD_ANALYZE => Input::Core(Msg::AnalyzeClicked),
        CMD_SAVE => Input::Core(Msg::SaveClicked),
        CMD_EXPLORE => Input::Core(Msg::ExploreClicked),
        CMD_URL if !rest.is_empty() => Input::Core(Msg::PageUrlResolved(rest.to_string())),
        CMD_CATEGORY if !rest.is_empty() => {
            Input::Core(Msg::CategorySelected(rest.to_string()))
        }
        CMD_TAG => match rest.split_once(char::is_whitespace) {
            Some((action, tag)) if action == CMD_TAG_ADD => {
                Input::Core(Msg::TagAdded(tag.trim().to_string()))
            }
            Some((action, tag)) if action == CMD_TAG_REMOVE => {
                Input::Core(Msg::TagRemoved(tag.trim().to_string()))
            }
            _ => Input::Unknown(trimmed.to_string()),
        },
        CMD_SHOW => Input::Show,
        CMD_HELP => Input::Help,
        CMD_QUIT => Input::Quit,
        _ => Input::Unknown(word.to_string()),
    };
    Some(input)
}
