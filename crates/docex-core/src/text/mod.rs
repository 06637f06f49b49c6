//! Text acquisition and normalization.

mod acquire;
mod normalize;

pub use acquire::{AcquiredText, TextAcquirer, TextSource};
pub use normalize::{non_whitespace_len, normalize};

use crate::Result;

/// A way of turning document bytes into flat text.
pub trait TextRenderer {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    /// Render the document to text.
    fn render(&self, document: &[u8]) -> Result<String>;
}
