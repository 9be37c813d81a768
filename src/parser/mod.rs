//! Manifest parsers that turn a dependency file into [`Requirement`]s.
//!
//! Only the plain `requirements.txt` style is understood today
//! ([`requirements::SimpleRequirementParser`]); other manifest formats plug in
//! as further [`RequirementParser`] implementations.

use anyhow::Result;

use crate::models::Requirement;

pub mod requirements;

/// Lazy, in-order stream of requirements. The first `Err` is fatal.
pub type Requirements<'a> = Box<dyn Iterator<Item = Result<Requirement>> + 'a>;

pub trait RequirementParser {
    /// Open the manifest and return its requirements in file order.
    ///
    /// Every call re-reads the manifest from the start.
    fn requirements(&self) -> Result<Requirements<'_>>;
}
