#![allow(dead_code)]

use std::collections::VecDeque;

use war_cards::cli::prompt::is_quit_command;
use war_cards::{PromptError, Prompter};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Answers prompts from a fixed script and records everything shown.
/// Running out of answers behaves like closed input.
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, message: &str) -> Result<String, PromptError> {
        self.transcript.push(message.to_string());
        let answer = self.answers.pop_front().ok_or(PromptError::Quit)?;
        if is_quit_command(&answer) {
            return Err(PromptError::Quit);
        }
        Ok(answer.trim().to_string())
    }

    fn notify(&mut self, message: &str) -> Result<(), PromptError> {
        self.transcript.push(message.to_string());
        Ok(())
    }
}

/// Answers by matching the prompt text, so whole games can be driven without
/// knowing how many rounds or wars they take. Each rule repeats its last answer.
pub struct KeyedPrompter {
    rules: Vec<(String, VecDeque<String>)>,
    transcript: Vec<String>,
}

impl KeyedPrompter {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            transcript: Vec::new(),
        }
    }

    pub fn on<I, S>(mut self, prompt_fragment: &str, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.push((
            prompt_fragment.to_string(),
            answers.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn output(&self) -> String {
        self.transcript.join("\n")
    }

    pub fn count(&self, fragment: &str) -> usize {
        self.transcript.iter().filter(|l| l.contains(fragment)).count()
    }
}

impl Prompter for KeyedPrompter {
    fn read_line(&mut self, message: &str) -> Result<String, PromptError> {
        self.transcript.push(message.to_string());
        let answers = self
            .rules
            .iter_mut()
            .find(|(fragment, _)| message.contains(fragment.as_str()))
            .map(|(_, answers)| answers)
            .ok_or(PromptError::Quit)?;

        let answer = if answers.len() > 1 {
            answers.pop_front()
        } else {
            answers.front().cloned()
        }
        .ok_or(PromptError::Quit)?;

        if is_quit_command(&answer) {
            return Err(PromptError::Quit);
        }
        Ok(answer)
    }

    fn notify(&mut self, message: &str) -> Result<(), PromptError> {
        self.transcript.push(message.to_string());
        Ok(())
    }
}
