use crate::code::{Color, Style};
use crate::item::ItemTooltip;
use crate::segment::{ClickAction, ClickKind, HoverAction, HoverKind, Segment};
use crate::template::{self, TemplateError};
use crate::wire::{self, SerializeError};

/// Error for a builder call made out of sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The current segment's text was already assigned.
    #[error("text for the current segment is already set")]
    TextAlreadySet,
    /// A new segment was started while the current one had no text yet.
    #[error("the current segment has no text")]
    MissingText,
}

/// Fluent, segment-at-a-time construction of a chat message.
///
/// A builder always holds at least one segment; formatting and action calls
/// apply to the last one until [`MessageBuilder::then`] starts the next. The
/// serialized form is cached between calls and invalidated by every
/// mutation.
///
/// ```
/// use tellchat::{Color, MessageBuilder, Style};
///
/// let mut message = MessageBuilder::with_text("[");
/// message.color(Color::Red).style(Style::Bold);
/// message
///     .then("ADMIN")?
///     .color(Color::Blue)
///     .command("/say hello");
/// assert!(message.to_json()?.contains("clickEvent"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    segments: Vec<Segment>,
    cache: Option<String>,
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBuilder {
    /// A builder holding a single empty segment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segments: vec![Segment::new()],
            cache: None,
        }
    }

    /// A builder whose first segment is seeded with `text`. The seeded text
    /// counts as assigned.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::with_text(text)],
            cache: None,
        }
    }

    /// Expands `%s` placeholders in `template`, splits the result on `&`
    /// color and style markers, and seeds one complete segment per run.
    pub fn from_template<S: AsRef<str>>(
        template: &str,
        values: &[S],
    ) -> Result<Self, TemplateError> {
        let segments = template::segments_from_template(template, values)?;
        Ok(Self {
            segments,
            cache: None,
        })
    }

    /// Assigns the current segment's text. Each segment's text can be
    /// assigned exactly once.
    pub fn text(&mut self, text: impl Into<String>) -> Result<&mut Self, BuildError> {
        if self.current().has_text() {
            return Err(BuildError::TextAlreadySet);
        }
        self.current_mut().set_text(text.into());
        Ok(self)
    }

    /// Sets the current segment's color, replacing the previous one.
    pub fn color(&mut self, color: Color) -> &mut Self {
        self.current_mut().set_color(color);
        self
    }

    /// Adds one style to the current segment.
    pub fn style(&mut self, style: Style) -> &mut Self {
        self.current_mut().add_style(style);
        self
    }

    /// Adds every style in `styles` to the current segment.
    pub fn styles<I: IntoIterator<Item = Style>>(&mut self, styles: I) -> &mut Self {
        for style in styles {
            self.current_mut().add_style(style);
        }
        self
    }

    /// Attaches a click action, replacing any already present.
    pub fn click(&mut self, kind: ClickKind, value: impl Into<String>) -> &mut Self {
        self.current_mut().set_click(ClickAction::new(kind, value));
        self
    }

    /// Attaches a hover action, replacing any already present.
    pub fn hover(&mut self, kind: HoverKind, value: impl Into<String>) -> &mut Self {
        self.current_mut().set_hover(HoverAction::new(kind, value));
        self
    }

    /// Click action that opens the file at `path`.
    pub fn file(&mut self, path: impl Into<String>) -> &mut Self {
        self.click(ClickKind::OpenFile, path)
    }

    /// Click action that opens `url`.
    pub fn link(&mut self, url: impl Into<String>) -> &mut Self {
        self.click(ClickKind::OpenUrl, url)
    }

    /// Click action that puts `command` into the reader's chat input.
    pub fn suggest(&mut self, command: impl Into<String>) -> &mut Self {
        self.click(ClickKind::SuggestCommand, command)
    }

    /// Click action that runs `command` as the reader.
    pub fn command(&mut self, command: impl Into<String>) -> &mut Self {
        self.click(ClickKind::RunCommand, command)
    }

    /// Hover tooltip showing the achievement called `name`.
    pub fn achievement_tooltip(&mut self, name: &str) -> &mut Self {
        self.hover(HoverKind::ShowAchievement, format!("achievement.{name}"))
    }

    /// Hover tooltip showing an item, from an already-rendered item tag.
    pub fn item_tooltip_raw(&mut self, item_tag: impl Into<String>) -> &mut Self {
        self.hover(HoverKind::ShowItem, item_tag)
    }

    /// Hover tooltip showing an item with `title` and `lore` lines.
    pub fn item_tooltip<I, S>(&mut self, title: &str, lore: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.item_tooltip_raw(ItemTooltip::new(title, lore).render())
    }

    /// Hover tooltip from free text. A single line shows as plain hover
    /// text; text with interior newlines becomes an item tooltip whose first
    /// line is the title. Trailing newlines do not count toward the line
    /// total and add no blank lore rows; an empty input still reads as one
    /// empty line.
    pub fn tooltip(&mut self, text: &str) -> &mut Self {
        let mut lines: Vec<&str> = text.split('\n').collect();
        while lines.len() > 1 && lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        self.tooltip_lines(&lines)
    }

    /// Hover tooltip from explicit lines; see [`MessageBuilder::tooltip`].
    /// An empty slice leaves the segment untouched.
    pub fn tooltip_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> &mut Self {
        match lines {
            [] => self,
            [line] => self.hover(HoverKind::ShowText, line.as_ref()),
            [first, rest @ ..] => {
                self.item_tooltip_raw(ItemTooltip::from_lines(first.as_ref(), rest).render())
            }
        }
    }

    /// Starts the next segment, seeded with `text`. The current segment must
    /// be complete.
    pub fn then(&mut self, text: impl Into<String>) -> Result<&mut Self, BuildError> {
        self.push_segment(Segment::with_text(text))
    }

    /// Starts the next, empty segment. The current segment must be complete.
    pub fn then_empty(&mut self) -> Result<&mut Self, BuildError> {
        self.push_segment(Segment::new())
    }

    /// Drops everything built so far, leaving a single empty segment.
    pub fn reset(&mut self) -> &mut Self {
        self.segments.clear();
        self.segments.push(Segment::new());
        self.cache = None;
        self
    }

    /// The canonical wire JSON for the current segments.
    ///
    /// The result is memoized: repeated calls without an intervening
    /// mutation return byte-identical output without re-serializing. Fails
    /// if any segment is still missing its text.
    pub fn to_json(&mut self) -> Result<&str, SerializeError> {
        if self.cache.is_none() {
            self.cache = Some(wire::message_json(&self.segments)?);
        }
        match &self.cache {
            Some(json) => Ok(json),
            None => unreachable!("serialization just filled the cache"),
        }
    }

    /// The lossy legacy rendering: each segment's `§` color escape followed
    /// by its text. Styles and actions are dropped.
    #[must_use]
    pub fn to_legacy_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            segment.push_legacy_text(&mut out);
        }
        out
    }

    /// The segments built so far, in message order. Never empty.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn current(&self) -> &Segment {
        self.segments
            .last()
            .expect("a builder always holds at least one segment")
    }

    fn current_mut(&mut self) -> &mut Segment {
        self.cache = None;
        self.segments
            .last_mut()
            .expect("a builder always holds at least one segment")
    }

    fn push_segment(&mut self, segment: Segment) -> Result<&mut Self, BuildError> {
        if !self.current().has_text() {
            return Err(BuildError::MissingText);
        }
        self.cache = None;
        self.segments.push(segment);
        Ok(self)
    }
}
