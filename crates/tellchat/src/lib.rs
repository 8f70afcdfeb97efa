//! Fluent construction of the raw JSON chat messages understood by the
//! `tellraw` command.
//!
//! A message is an ordered list of [`Segment`]s, each a run of text with a
//! [`Color`], a set of [`Style`]s and optional click/hover actions.
//! [`MessageBuilder`] grows a message one segment at a time and serializes it
//! to the fixed wire schema; [`MessageBuilder::from_template`] derives the
//! same segments from `&`-coded text with `%s` placeholders. Delivery to a
//! live server lives in the companion `tellchat-send` crate, keeping this one
//! pure.

mod builder;
mod code;
mod item;
mod segment;
mod symbols;
mod template;
mod wire;

pub use builder::{BuildError, MessageBuilder};
pub use code::{Color, ESCAPE_CHAR, FormatCode, MARKER_CHAR, Style, translate_codes};
pub use item::ItemTooltip;
pub use segment::{ClickAction, ClickKind, HoverAction, HoverKind, Segment};
pub use symbols::Symbol;
pub use template::TemplateError;
pub use wire::SerializeError;
