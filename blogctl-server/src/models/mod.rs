//! Domain models with validation at construction
//!
//! Form input is validated when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod flash;
pub mod post;
pub mod validation;

pub use flash::{Flash, FlashCategory, FlashParams};
pub use post::{Post, PostContent, PostDraft, PostForm, PostTitle};
pub use validation::ValidationError;
