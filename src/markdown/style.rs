//! Inline style decoration for Markdown fragments.

use crate::slack::types::TextStyle;

/// Wraps a text fragment in Markdown style delimiters.
///
/// Delimiters are applied in a fixed composition order, each wrap enclosing
/// the previous result: code first (innermost), then strikethrough, then
/// italic, then bold (outermost). With every flag set the result is
/// `` **_~~`text`~~_** ``. A `None` style is a no-op.
///
/// # Example
///
/// ```rust
/// use slackdown::markdown::decorate;
/// use slackdown::slack::types::TextStyle;
///
/// let style = TextStyle {
///     bold: true,
///     code: true,
///     ..TextStyle::default()
/// };
/// assert_eq!(decorate("x", Some(&style)), "**`x`**");
/// assert_eq!(decorate("x", None), "x");
/// ```
pub fn decorate(text: &str, style: Option<&TextStyle>) -> String {
    let mut deco = text.to_owned();
    if let Some(style) = style {
        if style.code {
            deco = format!("`{deco}`");
        }
        if style.strike {
            deco = format!("~~{deco}~~");
        }
        if style.italic {
            deco = format!("_{deco}_");
        }
        if style.bold {
            deco = format!("**{deco}**");
        }
    }
    deco
}
