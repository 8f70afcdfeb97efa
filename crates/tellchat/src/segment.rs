use std::collections::BTreeSet;

use crate::code::{Color, ESCAPE_CHAR, Style};

/// What a click on a segment asks the runtime to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickKind {
    OpenFile,
    OpenUrl,
    SuggestCommand,
    RunCommand,
}

impl ClickKind {
    /// The `action` value of a `clickEvent` on the wire.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::OpenFile => "open_file",
            Self::OpenUrl => "open_url",
            Self::SuggestCommand => "suggest_command",
            Self::RunCommand => "run_command",
        }
    }
}

/// What hovering over a segment shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverKind {
    ShowText,
    ShowItem,
    ShowAchievement,
}

impl HoverKind {
    /// The `action` value of a `hoverEvent` on the wire.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::ShowText => "show_text",
            Self::ShowItem => "show_item",
            Self::ShowAchievement => "show_achievement",
        }
    }
}

/// A click action attached to a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickAction {
    kind: ClickKind,
    value: String,
}

impl ClickAction {
    #[must_use]
    pub fn new(kind: ClickKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ClickKind {
        self.kind
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A hover action attached to a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverAction {
    kind: HoverKind,
    value: String,
}

impl HoverAction {
    #[must_use]
    pub fn new(kind: HoverKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> HoverKind {
        self.kind
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// One formatting-homogeneous part of a message: a run of text plus the
/// color, styles, and at most one click and one hover action applying to it.
///
/// A segment is complete once its text has been assigned; the text can be
/// assigned only once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    text: Option<String>,
    color: Color,
    styles: BTreeSet<Style>,
    click: Option<ClickAction>,
    hover: Option<HoverAction>,
}

impl Segment {
    /// An empty segment with no text assigned yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A segment whose text is already assigned.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub(crate) fn from_run(text: String, color: Option<Color>, styles: BTreeSet<Style>) -> Self {
        Self {
            text: Some(text),
            color: color.unwrap_or_default(),
            styles,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Active styles, in their canonical wire order.
    pub fn styles(&self) -> impl Iterator<Item = Style> + '_ {
        self.styles.iter().copied()
    }

    #[must_use]
    pub fn has_style(&self, style: Style) -> bool {
        self.styles.contains(&style)
    }

    #[must_use]
    pub fn click(&self) -> Option<&ClickAction> {
        self.click.as_ref()
    }

    #[must_use]
    pub fn hover(&self) -> Option<&HoverAction> {
        self.hover.as_ref()
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = Some(text);
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub(crate) fn add_style(&mut self, style: Style) {
        self.styles.insert(style);
    }

    pub(crate) fn set_click(&mut self, action: ClickAction) {
        self.click = Some(action);
    }

    pub(crate) fn set_hover(&mut self, action: HoverAction) {
        self.hover = Some(action);
    }

    /// The lossy legacy projection: the `§`-prefixed color code followed by
    /// the text. Styles and actions are dropped.
    pub(crate) fn push_legacy_text(&self, out: &mut String) {
        out.push(ESCAPE_CHAR);
        out.push(self.color.code());
        if let Some(text) = &self.text {
            out.push_str(text);
        }
    }
}
