//! Console front end.
//!
//! - `input`: line sources, choice parsing, and the re-prompt loop
//! - `render`: display strings for hands, values, and outcomes
//! - `session`: the interactive loop tying both to a `TwentyOneGame`

pub mod input;
pub mod render;
pub mod session;

pub use input::{normalize, parse_yes_no, prompt, LineSource};
pub use session::Session;
