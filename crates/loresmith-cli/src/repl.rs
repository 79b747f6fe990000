//! Interactive chat mode.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use loresmith_domain::traits::GenerationService;
use loresmith_domain::CharacterId;
use loresmith_extractor::{ChatSession, SessionError, TurnOutcome};
use loresmith_llm::HttpGenerator;
use loresmith_store::StrategyChain;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::info;

/// One line of chat input.
#[derive(Debug, PartialEq, Eq)]
enum ReplInput {
    Exit,
    Help,
    New,
    Show,
    Save,
    Load(String),
    Message(String),
}

/// Run the chat REPL against the active profile's endpoint.
pub async fn run_chat(config: &Config, repo: &StrategyChain, formatter: &Formatter) -> Result<()> {
    let profile = config.get_active_profile()?;
    let generator = build_generator(config)?;
    let session = ChatSession::new(generator, config.session.clone())?;

    info!("Chatting with {} (model {})", profile.endpoint, profile.model);
    println!(
        "{}",
        formatter.info("Loresmith chat - describe a character, '/help' for commands")
    );
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(|e| CliError::Config(format!("Invalid history size: {}", e)))?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(|e| {
        CliError::Io(std::io::Error::other(format!(
            "Failed to initialize editor: {}",
            e
        )))
    })?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_line(line) {
                    Ok(ReplInput::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(input) => {
                        if let Err(e) = handle_input(input, &session, repo, formatter).await {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use '/exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// HTTP generator for the active profile.
///
/// The client gives up at the session's generation timeout, so a turn that
/// times out does not leave a blocking request running past it.
fn build_generator(config: &Config) -> Result<HttpGenerator> {
    let profile = config.get_active_profile()?;
    Ok(HttpGenerator::with_timeout(
        &profile.endpoint,
        &profile.model,
        config.session.generation_timeout(),
    )?)
}

/// Act on one parsed line.
async fn handle_input<G>(
    input: ReplInput,
    session: &ChatSession<G>,
    repo: &StrategyChain,
    formatter: &Formatter,
) -> Result<()>
where
    G: GenerationService + Send + Sync + 'static,
    G::Error: std::fmt::Display,
{
    match input {
        ReplInput::Exit => {}
        ReplInput::Help => print_help(formatter),
        ReplInput::New => {
            let id = session.new_chat();
            println!("{}", formatter.success(&format!("New character {}", id)));
        }
        ReplInput::Show => {
            println!("{}", formatter.format_record(&session.record())?);
        }
        ReplInput::Save => {
            let record = session.record();
            let accepted = repo.save(&record)?;
            println!(
                "{}",
                formatter.success(&format!("Saved {} ({})", record.id, accepted.join(", ")))
            );
        }
        ReplInput::Load(id) => {
            let id = CharacterId::from_string(&id).map_err(CliError::InvalidInput)?;
            let record = repo
                .load(&id)?
                .value
                .ok_or_else(|| CliError::NotFound(id.to_string()))?;
            let name = record.display_name().to_string();
            session.resume(record);
            println!("{}", formatter.success(&format!("Resumed {} ({})", name, id)));
        }
        ReplInput::Message(message) => match session.submit(&message).await {
            Ok(TurnOutcome::Plain { reply }) => {
                println!("{}", formatter.reply(&reply));
            }
            Ok(TurnOutcome::Character { reply, changes, .. }) => {
                println!("{}", formatter.reply(&reply));
                println!();
                println!("{}", formatter.format_changes(&changes)?);
            }
            Ok(TurnOutcome::Superseded) => {
                println!("{}", formatter.warning("Reply arrived after a reset; discarded"));
            }
            Err(SessionError::Timeout) => {
                println!("{}", formatter.warning("The generation service did not answer in time"));
            }
            Err(e) => return Err(e.into()),
        },
    }

    Ok(())
}

/// Parse a chat line: `/command` or a message.
fn parse_repl_line(line: &str) -> Result<ReplInput> {
    let Some(command) = line.strip_prefix('/') else {
        return Ok(ReplInput::Message(line.to_string()));
    };

    let parts: Vec<&str> = command.split_whitespace().collect();
    match parts.first().copied() {
        Some("exit" | "quit" | "q") => Ok(ReplInput::Exit),
        Some("help" | "?") => Ok(ReplInput::Help),
        Some("new") => Ok(ReplInput::New),
        Some("show") => Ok(ReplInput::Show),
        Some("save") => Ok(ReplInput::Save),
        Some("load") => match parts.get(1) {
            Some(id) => Ok(ReplInput::Load(id.to_string())),
            None => Err(CliError::InvalidInput("Usage: /load <id>".to_string())),
        },
        Some(other) => Err(CliError::InvalidInput(format!(
            "Unknown command: /{}. Type '/help' for available commands.",
            other
        ))),
        None => Err(CliError::InvalidInput("Empty command".to_string())),
    }
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::data_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <message>        - Send a message to the generation service");
    println!("  /new             - Start a new character");
    println!("  /show            - Show the current character");
    println!("  /save            - Save the current character");
    println!("  /load <id>       - Continue a saved character");
    println!("  /help, /?        - Show this help");
    println!("  /exit, /quit, /q - Exit chat");
    println!();
}
