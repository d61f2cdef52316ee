use crate::domain::ports::UserPrompt;
use crate::utils::error::Result;
use std::io::{self, BufRead, Write};

/// Case-insensitive "y"/"yes"; anything else, including empty input, declines.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    )
}

#[derive(Debug, Default)]
pub struct StdinPrompt;

impl UserPrompt for StdinPrompt {
    fn confirm(&self, question: &str) -> Result<bool> {
        print!("{} [y/N] ", question);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}
