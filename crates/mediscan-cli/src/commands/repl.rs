use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use colored::Colorize;
use mediscan_application::{InteractionSession, Tab};
use mediscan_core::config::FontSize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use super::SessionOptions;
use crate::render;

const COMMANDS: &[&str] = &[
    "/tab", "/camera", "/capture", "/voice", "/contrast", "/font", "/a11y", "/back", "/state",
    "/help", "/quit",
];

/// A parsed REPL line.
#[derive(Debug, Clone, PartialEq)]
enum ReplCommand {
    Search(String),
    Tab(Tab),
    Camera,
    Capture,
    Voice,
    Contrast,
    Font(FontSize),
    Accessibility,
    Back,
    State,
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(command) = line.strip_prefix('/') else {
            return ReplCommand::Search(line.to_string());
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();

        match (name, arg) {
            ("tab", Some("search")) => ReplCommand::Tab(Tab::Search),
            ("tab", Some("camera")) => ReplCommand::Tab(Tab::Camera),
            ("camera", None) => ReplCommand::Camera,
            ("capture", None) => ReplCommand::Capture,
            ("voice", None) => ReplCommand::Voice,
            ("contrast", None) => ReplCommand::Contrast,
            ("font", Some(size)) => match FontSize::from_str(size) {
                Ok(size) => ReplCommand::Font(size),
                Err(_) => ReplCommand::Unknown(line.to_string()),
            },
            ("a11y", None) => ReplCommand::Accessibility,
            ("back", None) => ReplCommand::Back,
            ("state", None) => ReplCommand::State,
            ("help", None) => ReplCommand::Help,
            ("quit" | "exit", None) => ReplCommand::Quit,
            _ => ReplCommand::Unknown(line.to_string()),
        }
    }
}

/// Completion, highlighting and hints for slash commands.
#[derive(Clone)]
struct ReplHelper;

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            let candidates = COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.to_string(),
                    replacement: cmd.to_string(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            COMMANDS
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for ReplHelper {}

fn print_help() {
    let lines = [
        ("<name>", "search for a medication by name"),
        ("/tab search|camera", "switch input mode"),
        ("/camera", "turn the camera on or off"),
        ("/capture", "capture a photo and identify it"),
        ("/voice", "fill the search from voice input"),
        ("/contrast", "toggle high contrast"),
        ("/font normal|large|extra-large", "set the font size"),
        ("/a11y", "open accessibility controls"),
        ("/back", "return to the scan page"),
        ("/state", "show the session state"),
        ("/quit", "exit"),
    ];
    for (usage, what) in lines {
        println!("  {:<32} {}", usage.bright_cyan(), what.bright_black());
    }
}

/// Submits the current query and shows the outcome.
async fn search(session: &mut InteractionSession) {
    let outcome = session.submit_search().await;
    render::print_notice(session);
    if let Some(outcome) = outcome {
        render::print_outcome(&outcome);
    }
}

/// Applies one command. Returns `false` when the session should end.
async fn dispatch(session: &mut InteractionSession, command: ReplCommand) -> bool {
    match command {
        ReplCommand::Search(query) => {
            session.set_query(query);
            search(session).await;
            return true;
        }
        ReplCommand::Tab(tab) => session.select_tab(tab),
        ReplCommand::Camera => {
            session.toggle_camera().await;
        }
        ReplCommand::Capture => {
            if !session.is_camera_active() {
                println!("{}", "Camera is off. Use /camera first.".yellow());
                return true;
            }
            if let Some(outcome) = session.capture_image().await {
                render::print_notice(session);
                render::print_outcome(&outcome);
                return true;
            }
        }
        ReplCommand::Voice => {
            if session.listen_for_query().await.is_some() {
                render::print_notice(session);
                search(session).await;
                return true;
            }
        }
        ReplCommand::Contrast => session.toggle_high_contrast(),
        ReplCommand::Font(size) => session.set_font_size(size),
        ReplCommand::Accessibility => session.open_accessibility_controls(),
        ReplCommand::Back => session.back_to_scan(),
        ReplCommand::State => {
            render::print_state(session);
            return true;
        }
        ReplCommand::Help => {
            print_help();
            return true;
        }
        ReplCommand::Quit => return false,
        ReplCommand::Unknown(line) => {
            println!("{}", format!("Unknown command: {line}").bright_black());
            return true;
        }
    }

    render::print_notice(session);
    true
}

pub async fn run(options: &SessionOptions, camera_image: Option<PathBuf>) -> Result<()> {
    let mut session = options.factory(camera_image, true)?.create_session();

    let mut rl = Editor::new()?;
    rl.set_helper(Some(ReplHelper));

    println!("{}", "=== MediScan ===".bright_magenta().bold());
    println!(
        "{}",
        "Type a medication name to search, '/help' for commands, or '/quit' to exit."
            .bright_black()
    );
    println!();

    session.open_landing();
    render::print_notice(&session);
    session.start_scan();
    render::print_notice(&session);

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                if !dispatch(&mut session, ReplCommand::parse(&line)).await {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                tracing::error!(error = %err, "Readline failed");
                break;
            }
        }
    }

    session.teardown();
    Ok(())
}
