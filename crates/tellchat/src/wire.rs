//! The raw JSON wire encoding consumed by the `tellraw` chat command.
//!
//! Field names, value casing and field order are a fixed contract with the
//! runtime; serialization has to reproduce them byte for byte, which is why
//! the segment encoding is written out by hand instead of derived.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::segment::Segment;

/// Error while producing the wire form of a message.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// A segment was never given text, so the message is not complete.
    #[error("segment {index} has no text")]
    Incomplete { index: usize },
    /// The underlying JSON writer failed. For an in-memory string this
    /// signals a bug, not an expected runtime condition.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Renders a message as its wire JSON. A single segment is emitted as a bare
/// object; several are wrapped in `{"text":"","extra":[...]}`.
pub(crate) fn message_json(segments: &[Segment]) -> Result<String, SerializeError> {
    if let Some(index) = segments.iter().position(|segment| !segment.has_text()) {
        return Err(SerializeError::Incomplete { index });
    }
    let json = match segments {
        [segment] => serde_json::to_string(&WireSegment(segment))?,
        segments => serde_json::to_string(&WireMessage(segments))?,
    };
    Ok(json)
}

struct WireMessage<'a>(&'a [Segment]);

impl Serialize for WireMessage<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("text", "")?;
        map.serialize_entry("extra", &WireExtra(self.0))?;
        map.end()
    }
}

struct WireExtra<'a>(&'a [Segment]);

impl Serialize for WireExtra<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(WireSegment))
    }
}

struct WireSegment<'a>(&'a Segment);

impl Serialize for WireSegment<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let segment = self.0;
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("text", segment.text().unwrap_or(""))?;
        map.serialize_entry("color", segment.color().name())?;
        // Active styles become individual boolean fields; inactive styles
        // are omitted entirely, never written as false.
        for style in segment.styles() {
            map.serialize_entry(style.wire_name(), &true)?;
        }
        if let Some(click) = segment.click() {
            map.serialize_entry(
                "clickEvent",
                &WireEvent {
                    action: click.kind().wire_name(),
                    value: click.value(),
                },
            )?;
        }
        if let Some(hover) = segment.hover() {
            map.serialize_entry(
                "hoverEvent",
                &WireEvent {
                    action: hover.kind().wire_name(),
                    value: hover.value(),
                },
            )?;
        }
        map.end()
    }
}

#[derive(serde::Serialize)]
struct WireEvent<'a> {
    action: &'a str,
    value: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Style;
    use crate::segment::{ClickAction, ClickKind, HoverAction, HoverKind};

    fn segment(text: &str) -> Segment {
        Segment::with_text(text)
    }

    #[test]
    fn bare_segment_is_text_then_color() {
        let json = message_json(&[segment("hi")]).unwrap();
        assert_eq!(json, r#"{"text":"hi","color":"white"}"#);
    }

    #[test]
    fn style_fields_use_wire_names_in_canonical_order() {
        let mut seg = segment("x");
        seg.add_style(Style::Underline);
        seg.add_style(Style::Magic);
        seg.add_style(Style::Bold);
        let json = message_json(&[seg]).unwrap();
        assert_eq!(
            json,
            r#"{"text":"x","color":"white","obfuscated":true,"bold":true,"underlined":true}"#
        );
    }

    #[test]
    fn events_serialize_action_then_value() {
        let mut seg = segment("x");
        seg.set_click(ClickAction::new(ClickKind::SuggestCommand, "/msg "));
        seg.set_hover(HoverAction::new(HoverKind::ShowText, "hi"));
        let json = message_json(&[seg]).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"text":"x","color":"white","clickEvent":{"action":"suggest_command","value":"/msg "},"#,
                r#""hoverEvent":{"action":"show_text","value":"hi"}}"#
            )
        );
    }

    #[test]
    fn wrapper_preserves_segment_order() {
        let segments = [segment("one"), segment("two"), segment("three")];
        let json = message_json(&segments).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"text":"","extra":[{"text":"one","color":"white"},"#,
                r#"{"text":"two","color":"white"},{"text":"three","color":"white"}]}"#
            )
        );
    }

    #[test]
    fn incomplete_segments_are_rejected_with_their_index() {
        let err = message_json(&[segment("ok"), Segment::new()]).unwrap_err();
        assert!(matches!(err, SerializeError::Incomplete { index: 1 }));
    }

    #[test]
    fn text_escaping_is_left_to_the_json_writer() {
        let json = message_json(&[segment("say \"hi\"\n")]).unwrap();
        assert_eq!(json, r#"{"text":"say \"hi\"\n","color":"white"}"#);
    }
}
