use thiserror::Error;

use crate::charset::EncodeError;

/// Faults raised inside the per-keystroke decision procedure.
///
/// None of these are fatal: `on_key_pressed` logs the fault, restores the
/// display state and abandons the keystroke.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}
