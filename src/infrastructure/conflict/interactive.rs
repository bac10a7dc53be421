//! Interactive Overwrite Confirmer
//!
//! Asks on the terminal before an existing manifest is replaced.

use std::path::Path;

use crossterm::style::Stylize;
use dialoguer::Confirm;
use is_terminal::IsTerminal;

use crate::domain::ports::OverwriteConfirmer;

/// Prompts via dialoguer. Without a terminal on stdin, or if the prompt
/// fails, the answer is "no".
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractiveConfirmer {
    color: bool,
}

impl InteractiveConfirmer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn prompt_text(&self, path: &Path) -> String {
        let text = format!("Output file ({}) exists. Overwrite?", path.display());
        if self.color {
            text.red().bold().to_string()
        } else {
            text
        }
    }
}

impl OverwriteConfirmer for InteractiveConfirmer {
    fn confirm_overwrite(&self, path: &Path) -> bool {
        if !std::io::stdin().is_terminal() {
            tracing::warn!(
                path = %path.display(),
                "stdin is not a terminal; not overwriting (pass --yes to overwrite)"
            );
            return false;
        }

        match Confirm::new()
            .with_prompt(self.prompt_text(path))
            .default(true)
            .interact()
        {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(error = %err, "overwrite prompt failed");
                false
            }
        }
    }
}
