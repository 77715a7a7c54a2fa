use std::str::FromStr;

use crate::errors::ExportError;

/// Boolean cell. Unset flags arrive as the empty string (the archive's
/// `NULL`) or `0`; anything else counts as set.
#[derive(Debug)]
pub(crate) struct FlagModel(pub bool);
impl FromStr for FlagModel {
    type Err = ExportError;
    // Infallible; `FromStr` keeps call sites uniform with the other models.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FlagModel(!matches!(s.trim(), "" | "0")))
    }
}

impl Into<bool> for FlagModel {
    fn into(self) -> bool {
        self.0
    }
}
