//! Post card renderer
//!
//! One card variant: a scoped style block, the title, the body, and the
//! creation date. The body paragraph preserves embedded line breaks via
//! `white-space: pre-wrap`; title and date display exactly as stored.

use crate::node::{Element, Node};
use retie_post::Post;

/// Style block scoped to one card
///
/// `.content` keeps `pre-wrap` so author line breaks survive display.
const CARD_STYLE: &str = "\
.card { padding: 30px; border-bottom: 1px solid var(--border-color); color: var(--font-color); }\n\
.card h3 { margin: 0 0 10px 0; font-size: 1.8rem; color: inherit; }\n\
.card .content { margin: 0 0 15px 0; font-size: 1.1rem; white-space: pre-wrap; }\n\
.card .date { font-size: 0.9rem; color: #7f8c8d; }\n";

/// Build the display node for one post
///
/// The result is self-contained: style travels with the card, so the host
/// surface needs no knowledge of how cards look.
#[must_use]
pub fn render_card(post: &Post) -> Node {
    Element::new("article")
        .attr("class", "card")
        .child(Element::new("style").child(Node::text(CARD_STYLE)))
        .child(Element::new("h3").child(Node::text(post.title.clone())))
        .child(
            Element::new("p")
                .attr("class", "content")
                .child(Node::text(post.content.clone())),
        )
        .child(
            Element::new("div")
                .attr("class", "date")
                .child(Node::text(post.date.clone())),
        )
        .into()
}
