//! Documentation comment construction.
//!
//! Builds the block comments that precede emitted members: wrapped
//! description prose, `@param` annotations, and the `@static` /
//! `@provisional` markers.

use super::model::Parameter;

/// Column at which description prose is wrapped.
pub const DOC_WRAP_COLUMN: usize = 100;

/// Wrap `text` into lines no longer than `max_len`, breaking only at
/// existing word boundaries. Explicit newlines in the input start a new
/// paragraph. A word longer than `max_len` occupies a line of its own.
pub fn wrap_lines(text: &str, max_len: usize) -> Vec<String> {
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split(' ') {
            if line.len() + word.len() > max_len {
                out.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        if !line.is_empty() {
            out.push(line);
        }
    }
    out
}

/// Wrap the given annotation lines in a block comment:
/// `/**` / ` * line` / ` */`.
pub fn block_comment(lines: &[String]) -> String {
    let mut out = vec!["/**".to_string()];
    out.extend(lines.iter().map(|line| format!(" * {line}")));
    out.push(" */".to_string());
    out.join("\n")
}

/// Build the doc block for one member. Returns `None` when the member has
/// neither a description nor a documentation flag; parameters alone do not
/// produce a comment.
pub fn doc_block(
    description: Option<&str>,
    parameters: &[Parameter],
    is_static: bool,
    is_provisional: bool,
) -> Option<String> {
    if description.is_none() && !is_static && !is_provisional {
        return None;
    }
    let mut lines = Vec::new();
    if let Some(text) = description {
        lines.extend(wrap_lines(text, DOC_WRAP_COLUMN));
    }
    lines.extend(param_annotations(parameters));
    if is_static {
        lines.push("@static".to_string());
    }
    if is_provisional {
        lines.push("@provisional".to_string());
    }
    Some(block_comment(&lines))
}

/// One `@param` line per parameter, carrying its description when present.
pub fn param_annotations(parameters: &[Parameter]) -> Vec<String> {
    parameters
        .iter()
        .map(|param| match &param.description {
            Some(text) => format!("@param {} {}", param.name, text),
            None => format!("@param {}", param.name),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(wrap_lines("hello world", 100), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_at_word_boundaries() {
        assert_eq!(
            wrap_lines("aaa bbb ccc", 7),
            vec!["aaa bbb", "ccc"]
        );
    }

    #[test]
    fn test_wrap_never_splits_words() {
        let lines = wrap_lines("short butthiswordislong tail", 10);
        assert_eq!(lines, vec!["short", "butthiswordislong", "tail"]);
    }

    #[test]
    fn test_wrap_preserves_explicit_newlines() {
        assert_eq!(wrap_lines("first\nsecond", 100), vec!["first", "second"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap_lines("", 100).is_empty());
    }

    #[test]
    fn test_block_comment_shape() {
        let comment = block_comment(&["line".to_string()]);
        assert_eq!(comment, "/**\n * line\n */");
    }

    #[test]
    fn test_doc_block_none_without_description_or_flags() {
        let params = vec![Parameter {
            name: "value".into(),
            ty: "any".into(),
            description: None,
        }];
        assert!(doc_block(None, &params, false, false).is_none());
    }

    #[test]
    fn test_doc_block_with_params_and_flags() {
        let params = vec![Parameter {
            name: "value".into(),
            ty: "number".into(),
            description: Some("the new value".into()),
        }];
        let doc = doc_block(Some("Sets things."), &params, true, true).unwrap();
        assert_eq!(
            doc,
            "/**\n * Sets things.\n * @param value the new value\n * @static\n * @provisional\n */"
        );
    }
}
