//! Plain-text rendering of instruction markup.

/// Block-level tags that introduce a trailing note after the instruction.
const BLOCK_TAGS: &[&str] = &["div", "p"];

/// Strip instruction markup down to display text.
///
/// A block-level element following visible text is treated as a trailing
/// note and dropped along with everything after it. Remaining tags are
/// removed, common entities decoded and whitespace collapsed.
pub fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        let after = &rest[open..];
        let Some(close) = after.find('>') else {
            // No closing bracket: not a tag
            text.push_str(after);
            rest = "";
            break;
        };

        let name = tag_name(&after[1..close]);
        let is_opening = !after[1..].starts_with('/');
        if is_opening
            && BLOCK_TAGS.contains(&name.as_str())
            && !text.trim().is_empty()
        {
            rest = "";
            break;
        }
        if name == "br" {
            text.push(' ');
        }
        rest = &after[close + 1..];
    }
    text.push_str(rest);

    collapse_whitespace(&decode_entities(&text))
}

fn tag_name(inner: &str) -> String {
    inner
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp..];
        let decoded = after
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| resolve_entity(&after[1..semi]).map(|ch| (ch, semi)));
        match decoded {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &after[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &after[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn resolve_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
