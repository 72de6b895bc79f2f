//! Reference expansion for `.env` values.
//!
//! Supported forms:
//! - `${NAME}`: any characters up to the closing brace.
//! - `$NAME`: a run of ASCII letters, digits and `_`.
//! - `$X` / `${X}` where `X` is one of `*#$@!?-` or a digit: a
//!   one-character name.
//!
//! Unset references expand to the empty string. `${}` and an unterminated
//! `${` are dropped. A `$` at the end of the value or before any other
//! character is kept literally.

/// Shell special parameters, always one character long.
fn is_special(b: u8) -> bool {
    matches!(b, b'*' | b'#' | b'$' | b'@' | b'!' | b'?' | b'-' | b'0'..=b'9')
}

fn is_name_byte(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// Name following a `$` and the number of bytes it occupies in `s`.
///
/// An empty name with a non-zero width is invalid syntax to be dropped.
/// `s` must not be empty.
fn shell_name(s: &str) -> (&str, usize) {
    let bytes = s.as_bytes();

    if bytes[0] == b'{' {
        if bytes.len() > 2 && is_special(bytes[1]) && bytes[2] == b'}' {
            return (&s[1..2], 3);
        }
        return match s[1..].find('}') {
            Some(0) => ("", 2),
            Some(end) => (&s[1..end + 1], end + 2),
            None => ("", 1),
        };
    }

    if is_special(bytes[0]) {
        return (&s[..1], 1);
    }

    let len = bytes.iter().take_while(|b| is_name_byte(**b)).count();
    (&s[..len], len)
}

/// Replace `$NAME` and `${NAME}` references in `value` using `lookup`.
pub fn expand<F>(value: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if after.is_empty() {
            out.push('$');
            rest = after;
            break;
        }

        let (name, width) = shell_name(after);
        if !name.is_empty() {
            out.push_str(&lookup(name).unwrap_or_default());
        } else if width == 0 {
            out.push('$');
        }
        rest = &after[width..];
    }

    out.push_str(rest);
    out
}
