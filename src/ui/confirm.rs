//! User confirmation prompts for destructive operations

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::error::{ArmError, Result};

/// Whether a destructive action may proceed without prompting
///
/// - `--yes` always proceeds
/// - batch mode without `--yes` is refused, since nobody can answer a prompt
/// - otherwise the user is asked
pub fn confirm_action(prompt: &str, assume_yes: bool, batch: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    if batch {
        return Err(ArmError::InvalidArgument(
            "refusing to delete in batch mode without --yes".to_string(),
        ));
    }

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| ArmError::Config(format!("Confirmation prompt failed: {}", e)))
}
