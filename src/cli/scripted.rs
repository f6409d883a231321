//! Prompter that replays canned answers, for driving the flow without a terminal.

use super::{PromptError, Prompter, Validate};
use std::collections::VecDeque;
use std::io;

/// One canned answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Index picked from a select menu.
    Choice(usize),
    /// Raw text typed at an input prompt.
    Text(String),
    /// The user backs out of the prompt.
    Cancel,
}

impl Answer {
    pub fn text(s: &str) -> Self {
        Answer::Text(s.to_string())
    }
}

/// Replays [`Answer`]s in order and records what was asked.
///
/// Text answers rejected by the validator are recorded and the next answer is
/// used, the way a terminal re-asks after an invalid entry.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    prompts: Vec<String>,
    rejections: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            prompts: Vec::new(),
            rejections: Vec::new(),
        }
    }

    /// Every prompt shown, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Validation messages shown for rejected answers.
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }

    /// Answers that were never consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, prompt: &str) -> Result<Answer, PromptError> {
        self.answers.pop_front().ok_or_else(|| {
            PromptError(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no scripted answer for '{}'", prompt),
            ))
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        _default: usize,
    ) -> Result<Option<usize>, PromptError> {
        self.prompts.push(prompt.to_string());
        match self.next_answer(prompt)? {
            Answer::Choice(i) if i < items.len() => Ok(Some(i)),
            Answer::Cancel => Ok(None),
            other => Err(PromptError(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid menu answer {:?} for '{}'", other, prompt),
            ))),
        }
    }

    fn input(
        &mut self,
        prompt: &str,
        validate: Validate<'_>,
    ) -> Result<Option<String>, PromptError> {
        self.prompts.push(prompt.to_string());
        loop {
            match self.next_answer(prompt)? {
                Answer::Text(raw) => match validate(&raw) {
                    Ok(()) => return Ok(Some(raw)),
                    Err(message) => self.rejections.push(message),
                },
                Answer::Cancel => return Ok(None),
                Answer::Choice(i) => {
                    return Err(PromptError(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("menu answer {} given for text prompt '{}'", i, prompt),
                    )))
                }
            }
        }
    }
}
