use crate::code::{Color, MARKER_CHAR, translate_codes};

/// A hover payload describing an item: a display title plus lore lines.
///
/// The runtime does not take JSON for item hovers; it expects the stringified
/// item tag format, which [`ItemTooltip::render`] reproduces byte for byte:
///
/// ```text
/// {id:1s,Count:1b,tag:{display:{Lore:[0:"first",1:" ",],Name:"title",},},Damage:0s,}
/// ```
///
/// Every lore entry is index-prefixed, quoted and comma-terminated, and an
/// empty line renders as a single space so the client keeps the blank row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTooltip {
    title: String,
    lore: Vec<String>,
}

impl ItemTooltip {
    #[must_use]
    pub fn new<T, I, S>(title: T, lore: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            title: title.into(),
            lore: lore
                .into_iter()
                .map(|line| line.as_ref().to_owned())
                .collect(),
        }
    }

    /// Builds a tooltip from raw lines: the first line becomes the title,
    /// forced to plain white, and the rest become lore.
    pub(crate) fn from_lines<S: AsRef<str>>(first: &str, rest: &[S]) -> Self {
        Self::new(
            format!("{}{first}", Color::White),
            rest.iter().map(AsRef::as_ref),
        )
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn lore(&self) -> &[String] {
        &self.lore
    }

    /// Renders the stringified item tag. `&`-style legacy codes in the title
    /// and lore are translated to native `§` escapes on the way out.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("{id:1s,Count:1b,tag:{display:{Lore:[");
        for (index, line) in self.lore.iter().enumerate() {
            out.push_str(&index.to_string());
            out.push_str(":\"");
            if line.is_empty() {
                out.push(' ');
            } else {
                push_escaped(&mut out, &translate_codes(MARKER_CHAR, line));
            }
            out.push_str("\",");
        }
        out.push_str("],Name:\"");
        push_escaped(&mut out, &translate_codes(MARKER_CHAR, &self.title));
        out.push_str("\",},},Damage:0s,}");
        out
    }
}

/// Appends `text` with quotes and backslashes escaped, so the result can sit
/// inside a quoted tag string.
fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_exact_item_tag_shape() {
        let tooltip = ItemTooltip::new("Title", ["a", "", "b"]);
        assert_eq!(
            tooltip.render(),
            "{id:1s,Count:1b,tag:{display:{Lore:[0:\"a\",1:\" \",2:\"b\",],Name:\"Title\",},},Damage:0s,}"
        );
    }

    #[test]
    fn translates_legacy_codes_in_title_and_lore() {
        let tooltip = ItemTooltip::new("&6The Display Name", ["&aFirst lore line"]);
        let rendered = tooltip.render();
        assert!(rendered.contains("Name:\"§6The Display Name\""));
        assert!(rendered.contains("0:\"§aFirst lore line\""));
    }

    #[test]
    fn escapes_quotes_and_backslashes() {
        let tooltip = ItemTooltip::new("say \"hi\"", ["back\\slash"]);
        let rendered = tooltip.render();
        assert!(rendered.contains("Name:\"say \\\"hi\\\"\""));
        assert!(rendered.contains("0:\"back\\\\slash\""));
    }

    #[test]
    fn empty_lore_produces_an_empty_list() {
        let tooltip = ItemTooltip::new("Bare", std::iter::empty::<&str>());
        assert_eq!(
            tooltip.render(),
            "{id:1s,Count:1b,tag:{display:{Lore:[],Name:\"Bare\",},},Damage:0s,}"
        );
    }

    #[test]
    fn line_built_titles_are_forced_white() {
        let tooltip = ItemTooltip::from_lines("Top", &["middle", "bottom"]);
        assert_eq!(tooltip.title(), "§fTop");
        assert_eq!(tooltip.lore(), ["middle", "bottom"]);
    }
}
