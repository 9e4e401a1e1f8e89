//! Card rendering for retie
//!
//! Converts one [`retie_post::Post`] into a self-contained, style-scoped
//! node tree ([`card::render_card`]) and defines the ordered container it is
//! inserted into ([`surface::DisplaySurface`]). There is exactly one card
//! variant, so rendering is a plain function — no dynamic dispatch.
//!
//! Text is carried verbatim in the tree; escaping happens only when a tree
//! is serialized to HTML with [`node::to_html`].

pub mod card;
pub mod node;
pub mod surface;

pub use card::render_card;
pub use node::{to_html, Element, Node};
pub use surface::{DisplaySurface, MemorySurface};
