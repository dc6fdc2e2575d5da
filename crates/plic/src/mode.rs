//! Run-mode selection.

use crate::error::{PlicError, PlicResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Predict,
}

/// Resolve the `--train`/`--predict` flag pair into a run mode.
///
/// Training is explicitly unsupported and fails loudly; exactly one of the
/// two flags must be set.
pub fn select_mode(train: bool, predict: bool) -> PlicResult<Mode> {
    match (train, predict) {
        (true, true) => Err(PlicError::Usage(
            "--train and --predict are mutually exclusive".into(),
        )),
        (true, false) => Err(PlicError::Unsupported(
            "no need to train a model for this task".into(),
        )),
        (false, true) => Ok(Mode::Predict),
        (false, false) => Err(PlicError::Usage(
            "please specify --train or --predict".into(),
        )),
    }
}
