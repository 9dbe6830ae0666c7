use dialoguer::Confirm;
use tracing::warn;

/// Yes/no decision supplied by the operator.
pub trait Confirmation {
    fn confirm(&self, question: &str) -> bool;
}

/// Asks on the terminal; anything but an explicit yes means no.
pub struct TerminalConfirmation;

impl Confirmation for TerminalConfirmation {
    fn confirm(&self, question: &str) -> bool {
        match Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Could not prompt for confirmation ({}), assuming no", e);
                false
            }
        }
    }
}

/// Answers every question the same way (`--yes`, `--keep-root`, tests).
pub struct FixedAnswer(pub bool);

impl Confirmation for FixedAnswer {
    fn confirm(&self, _question: &str) -> bool {
        self.0
    }
}
