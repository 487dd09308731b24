use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use crate::game::{constants, validate_name, validate_rounds};

#[derive(Debug, Error)]
pub enum PromptError {
    /// The user typed `quit`/`exit` or closed the input stream.
    #[error("Player chose to quit")]
    Quit,

    #[error("Input error: {0}")]
    Io(#[from] io::Error),
}

/// Blocking source of user answers. Each call shows `message` and waits for one line.
pub trait Prompter {
    fn read_line(&mut self, message: &str) -> Result<String, PromptError>;

    /// Shows a line of feedback that needs no answer.
    fn notify(&mut self, message: &str) -> Result<(), PromptError>;
}

pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn read_line(&mut self, message: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Quit);
        }

        let answer = line.trim().to_string();
        if is_quit_command(&answer) {
            debug!("Quit requested at prompt");
            return Err(PromptError::Quit);
        }
        Ok(answer)
    }

    fn notify(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

pub fn is_quit_command(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "quit" | "exit")
}

/// Asks until the answer is an integer within `min..=max`.
pub fn ask_number<P: Prompter + ?Sized>(
    prompter: &mut P,
    message: &str,
    min: i32,
    max: i32,
) -> Result<i32, PromptError> {
    loop {
        let answer = prompter.read_line(message)?;
        match answer.parse::<i32>() {
            Ok(n) if (min..=max).contains(&n) => return Ok(n),
            Ok(_) => {
                prompter.notify(&format!("Please enter a number between {min} and {max}."))?
            }
            Err(_) => prompter.notify("Please enter a valid number.")?,
        }
    }
}

pub fn ask_rounds<P: Prompter + ?Sized>(prompter: &mut P) -> Result<u32, PromptError> {
    let min = constants::MIN_ROUNDS as i32;
    let max = constants::MAX_ROUNDS as i32;
    loop {
        let rounds = ask_number(
            prompter,
            &format!("How many rounds would you like to play? ({min}-{max}): "),
            min,
            max,
        )?;
        if let Ok(rounds) = validate_rounds(rounds as u32) {
            return Ok(rounds);
        }
    }
}

pub fn ask_name<P: Prompter + ?Sized>(prompter: &mut P) -> Result<String, PromptError> {
    loop {
        let answer = prompter.read_line("Enter your name: ")?;
        match validate_name(&answer) {
            Ok(name) => return Ok(name),
            Err(e) => prompter.notify(&e.to_string())?,
        }
    }
}

pub fn ask_bet<P: Prompter + ?Sized>(
    prompter: &mut P,
    chips: i32,
    max_bet: i32,
) -> Result<i32, PromptError> {
    ask_number(
        prompter,
        &format!(
            "You have {chips} chips. Place your bet ({}-{max_bet}): ",
            constants::MINIMUM_BET
        ),
        constants::MINIMUM_BET,
        max_bet,
    )
}

pub fn ask_yes_no<P: Prompter + ?Sized>(
    prompter: &mut P,
    question: &str,
) -> Result<bool, PromptError> {
    loop {
        let answer = prompter.read_line(&format!("{question} (y/n): "))?;
        match answer.to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => prompter.notify("Please answer 'y' or 'n'.")?,
        }
    }
}

pub fn wait_for_continue<P: Prompter + ?Sized>(prompter: &mut P) -> Result<(), PromptError> {
    prompter.read_line("Press Enter to continue...")?;
    Ok(())
}
