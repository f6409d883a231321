use super::{PromptError, Prompter, Validate};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::io;

/// Prompter backed by `dialoguer` on the controlling terminal.
///
/// Esc on a menu, an empty text answer, or Ctrl+C all count as cancelling.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn cancelled_or_error<T>(err: dialoguer::Error) -> Result<Option<T>, PromptError> {
    let dialoguer::Error::IO(io_err) = err;
    if io_err.kind() == io::ErrorKind::Interrupted {
        Ok(None)
    } else {
        Err(PromptError(io_err))
    }
}

impl Prompter for TerminalPrompter {
    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, PromptError> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()
            .or_else(cancelled_or_error)
    }

    fn input(
        &mut self,
        prompt: &str,
        validate: Validate<'_>,
    ) -> Result<Option<String>, PromptError> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|raw: &String| -> Result<(), String> {
                if raw.trim().is_empty() {
                    Ok(())
                } else {
                    validate(raw.as_str())
                }
            })
            .interact_text();

        match answer {
            Ok(raw) if raw.trim().is_empty() => Ok(None),
            Ok(raw) => Ok(Some(raw)),
            Err(err) => cancelled_or_error(err),
        }
    }
}
