use std::collections::BTreeSet;

use itertools::Itertools;

use crate::code::{Color, FormatCode, MARKER_CHAR, Style};
use crate::segment::Segment;

/// The substitution marker recognized in templates.
const PLACEHOLDER: &str = "%s";

/// Error for a template whose `%s` placeholders do not line up with the
/// values supplied for them. Nothing is substituted when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("template has {expected} placeholders but {supplied} values were supplied")]
pub struct TemplateError {
    expected: usize,
    supplied: usize,
}

impl TemplateError {
    /// How many placeholders the template contains.
    #[must_use]
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// How many values the caller supplied.
    #[must_use]
    pub fn supplied(&self) -> usize {
        self.supplied
    }
}

/// Replaces each `%s` in `template` with the value at the same position.
///
/// The check is all-or-nothing: the counts must match exactly, and on a
/// mismatch the template text is not used at all. Substituted values are
/// spliced in verbatim, so a value containing `%s` is not itself expanded.
pub(crate) fn expand_placeholders<S: AsRef<str>>(
    template: &str,
    values: &[S],
) -> Result<String, TemplateError> {
    let pieces: Vec<&str> = template.split(PLACEHOLDER).collect();
    let expected = pieces.len() - 1;
    if expected != values.len() {
        return Err(TemplateError {
            expected,
            supplied: values.len(),
        });
    }
    Ok(pieces
        .into_iter()
        .interleave(values.iter().map(AsRef::as_ref))
        .collect())
}

/// One literal run produced by the scanner, together with the formatting its
/// leading marker group selected. A run with no markers before it keeps the
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ScannedRun {
    pub(crate) text: String,
    pub(crate) color: Option<Color>,
    pub(crate) styles: BTreeSet<Style>,
}

impl ScannedRun {
    fn apply(&mut self, marker: Marker) {
        match marker {
            Marker::Color(color) => self.color = Some(color),
            Marker::Style(style) => {
                self.styles.insert(style);
            }
        }
    }

    fn into_segment(self) -> Segment {
        Segment::from_run(self.text, self.color, self.styles)
    }
}

/// A recognized marker: the character after `&` named either a color or a
/// style. Reset is deliberately not a marker, so `&r` stays literal text.
#[derive(Debug, Clone, Copy)]
enum Marker {
    Color(Color),
    Style(Style),
}

fn marker_for(code: char) -> Option<Marker> {
    match FormatCode::from_code(code)? {
        FormatCode::Color(color) => Some(Marker::Color(color)),
        FormatCode::Style(style) => Some(Marker::Style(style)),
        FormatCode::Reset => None,
    }
}

/// Cursor states for the scanner.
///
/// `SawPairFirst` is the position just after a completed marker, where an
/// immediately adjacent marker folds onto the same run instead of opening a
/// new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    InLiteral,
    SawPrefix { pairing: bool },
    SawPairFirst,
}

/// Splits marker-annotated text into literal runs.
///
/// Markers partition the input. Each run carries exactly the formatting of
/// the marker group immediately before it; nothing carries over from earlier
/// runs. Within an adjacent marker group, styles union and a later color
/// replaces an earlier one. Text before the first marker becomes a
/// default-formatted leading run, and every input produces at least one run:
/// a trailing marker keeps its empty tail, and a `&` that starts no valid
/// marker stays in the text as-is.
pub(crate) fn scan_codes(input: &str) -> Vec<ScannedRun> {
    let mut runs = Vec::new();
    let mut run = ScannedRun::default();
    let mut opened = false;
    let mut state = ScanState::InLiteral;

    for ch in input.chars() {
        state = match state {
            ScanState::InLiteral | ScanState::SawPairFirst if ch == MARKER_CHAR => {
                ScanState::SawPrefix {
                    pairing: state == ScanState::SawPairFirst,
                }
            }
            ScanState::InLiteral | ScanState::SawPairFirst => {
                run.text.push(ch);
                ScanState::InLiteral
            }
            ScanState::SawPrefix { pairing } => match marker_for(ch) {
                Some(marker) => {
                    if !pairing {
                        if opened || !run.text.is_empty() {
                            runs.push(std::mem::take(&mut run));
                        }
                        opened = true;
                    }
                    run.apply(marker);
                    ScanState::SawPairFirst
                }
                None => {
                    run.text.push(MARKER_CHAR);
                    if ch == MARKER_CHAR {
                        ScanState::SawPrefix { pairing: false }
                    } else {
                        run.text.push(ch);
                        ScanState::InLiteral
                    }
                }
            },
        };
    }
    if let ScanState::SawPrefix { .. } = state {
        run.text.push(MARKER_CHAR);
    }
    runs.push(run);
    runs
}

/// Expands `template` with `values`, scans the result for markers, and turns
/// every run into a complete segment. The returned list is never empty.
pub(crate) fn segments_from_template<S: AsRef<str>>(
    template: &str,
    values: &[S],
) -> Result<Vec<Segment>, TemplateError> {
    let expanded = expand_placeholders(template, values)?;
    Ok(scan_codes(&expanded)
        .into_iter()
        .map(ScannedRun::into_segment)
        .collect())
}
