//! `{name}` variable substitution for HTML pages.

use core::fmt::{self, Write};

/// Render `template` into `out`, replacing every `{name}` with the value of
/// the matching variable.
///
/// Names are made of ASCII letters, digits and `_`. Placeholders naming an
/// unknown variable, and braces that do not form a placeholder, are written
/// as they are.
pub fn render<W: Write>(
    template: &str,
    vars: &[(&str, &str)],
    out: &mut W,
) -> fmt::Result {
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.write_str(&rest[..open])?;
        let after = &rest[open + 1..];

        let name_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let name = &after[..name_len];

        let value = after[name_len..]
            .starts_with('}')
            .then(|| lookup(vars, name))
            .flatten();
        match value {
            Some(value) => {
                out.write_str(value)?;
                rest = &after[name_len + 1..];
            }
            None => {
                out.write_char('{')?;
                rest = after;
            }
        }
    }

    out.write_str(rest)
}

fn lookup<'a>(vars: &[(&str, &'a str)], name: &str) -> Option<&'a str> {
    vars.iter()
        .find_map(|(key, value)| (*key == name).then_some(*value))
}
