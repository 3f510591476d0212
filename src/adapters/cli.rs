//! CLI adapter — interactive and single-message command line interface.

use std::io::{self, BufRead, Write};

use crate::agent::{CompletionClient, Session, TurnController};
use crate::Result;

/// CLI channel for interactive conversations.
pub struct CliChannel<C: CompletionClient> {
    controller: TurnController<C>,
    session: Session,
}

impl<C: CompletionClient> CliChannel<C> {
    /// Create a new CLI channel with a fresh session.
    pub fn new(controller: TurnController<C>) -> Self {
        Self {
            controller,
            session: Session::new(),
        }
    }

    /// Run a single message and return the reply.
    pub async fn run_once(&mut self, message: &str) -> Result<String> {
        self.controller.process_turn(&mut self.session, message).await
    }

    /// Run interactive REPL loop.
    pub async fn run_interactive(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            print!("\n> ");
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                // EOF
                break;
            }

            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            if matches!(input.to_lowercase().as_str(), "exit" | "quit" | "q") {
                println!("Goodbye! 👋");
                break;
            }

            match self.run_once(input).await {
                Ok(reply) => {
                    println!("\n{}", reply);
                }
                Err(e) => {
                    eprintln!("\nError: {e}");
                }
            }
        }

        Ok(())
    }

    /// Number of transcript entries so far.
    pub fn transcript_len(&self) -> usize {
        self.session.transcript.len()
    }
}
