//! REPL (Read-Eval-Print Loop) for interactive analysis
//!
//! Each REPL owns one [`ConversationMemory`], so follow-up questions see the
//! earlier exchanges until `/reset` clears them.

use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::QuerySpinner;
use analyst_application::Orchestrator;
use analyst_domain::{ConversationMemory, Query};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// A parsed REPL input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    Reset,
    History,
    Unknown(String),
    Query(String),
    Empty,
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ReplCommand::Empty;
        }

        match line.to_lowercase().as_str() {
            "exit" | "quit" | "q" | "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/reset" | "/clear" => ReplCommand::Reset,
            "/history" => ReplCommand::History,
            _ if line.starts_with('/') => ReplCommand::Unknown(line.to_string()),
            _ => ReplCommand::Query(line.to_string()),
        }
    }
}

/// Interactive analyst REPL
pub struct AnalystRepl {
    orchestrator: Orchestrator,
    formatter: ConsoleFormatter,
    memory: ConversationMemory,
    highlights: Vec<String>,
    show_progress: bool,
}

impl AnalystRepl {
    pub fn new(orchestrator: Orchestrator, formatter: ConsoleFormatter) -> Self {
        Self {
            orchestrator,
            formatter,
            memory: ConversationMemory::new(),
            highlights: Vec::new(),
            show_progress: true,
        }
    }

    /// Terms highlighted in every response
    pub fn with_highlights(mut self, terms: Vec<String>) -> Self {
        self.highlights = terms;
        self
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path =
            dirs::data_dir().map(|p| p.join("marketing-analyst").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline("analyst> ");

            match readline {
                Ok(line) => match ReplCommand::parse(&line) {
                    ReplCommand::Empty => continue,
                    ReplCommand::Query(query) => {
                        let _ = rl.add_history_entry(query.as_str());
                        self.process_query(&query).await;
                    }
                    command => {
                        if self.handle_command(command) {
                            break;
                        }
                    }
                },
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Exiting...");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│     Marketing Analyst - Interactive Mode    │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Mode: {}   Model: {}",
            self.orchestrator.mode().to_string().cyan(),
            self.orchestrator.settings().model.cyan()
        );
        println!("Enter your queries and get marketing insights.");
        println!("Type 'exit', 'quit', or 'q' to exit, '/help' for commands.");
        println!();
    }

    /// Handle a non-query command. Returns true if the REPL should exit.
    fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Exiting...");
                true
            }
            ReplCommand::Help => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?        - Show this help");
                println!("  /reset               - Forget the conversation so far");
                println!("  /history             - Show the conversation so far");
                println!("  exit, quit, q, /quit - Exit");
                println!();
                false
            }
            ReplCommand::Reset => {
                self.memory.clear();
                println!("Conversation memory cleared.");
                false
            }
            ReplCommand::History => {
                if self.memory.is_empty() {
                    println!("No conversation yet.");
                }
                for turn in self.memory.turns() {
                    println!(
                        "{} {}",
                        format!("[{}]", turn.role()).dimmed(),
                        analyst_domain::preview(turn.content(), 120)
                    );
                }
                false
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
            ReplCommand::Query(_) | ReplCommand::Empty => false,
        }
    }

    async fn process_query(&mut self, text: &str) {
        let query = Query::new(text).with_highlights(self.highlights.clone());

        let spinner = QuerySpinner::start("Processing query...", self.show_progress);
        let envelope = self.orchestrator.handle(&query, &mut self.memory).await;
        spinner.finish();

        println!();
        println!("{}", "Response:".bold());
        println!("{}", self.formatter.render(&envelope, query.highlight_terms()));
        println!();
    }
}
