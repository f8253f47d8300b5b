//! Splitting input text into messages

/// One unit of text handed to the chain finder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Where the text came from (file path, `<stdin>` or `<text>`)
    pub source: String,
    /// One-based line number in per-line mode
    pub line: Option<usize>,
    /// The message text
    pub text: String,
}

/// Split the content of one source into messages
///
/// In per-line mode every line is a message. Otherwise the whole content is
/// one message with a single trailing line ending removed.
pub fn split_messages(source: &str, content: &str, per_line: bool) -> Vec<Message> {
    if per_line {
        return content
            .lines()
            .enumerate()
            .map(|(i, line)| Message {
                source: source.to_string(),
                line: Some(i + 1),
                text: line.to_string(),
            })
            .collect();
    }

    let text = content
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(content);

    vec![Message {
        source: source.to_string(),
        line: None,
        text: text.to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_content_strips_one_newline() {
        let messages = split_messages("a.txt", "ab bc\n", false);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "ab bc");
        assert_eq!(messages[0].line, None);

        let messages = split_messages("a.txt", "ab bc\r\n", false);
        assert_eq!(messages[0].text, "ab bc");

        let messages = split_messages("a.txt", "ab bc\n\n", false);
        assert_eq!(messages[0].text, "ab bc\n");
    }

    #[test]
    fn test_whole_content_keeps_spaces() {
        let messages = split_messages("<text>", " a  b ", false);
        assert_eq!(messages[0].text, " a  b ");
    }

    #[test]
    fn test_per_line() {
        let messages = split_messages("a.txt", "cat dog\r\nab bc\n\nx", true);
        let texts: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["cat dog", "ab bc", "", "x"]);

        let lines: Vec<Option<usize>> = messages.iter().map(|m| m.line).collect();
        assert_eq!(lines, vec![Some(1), Some(2), Some(3), Some(4)]);
        assert!(messages.iter().all(|m| m.source == "a.txt"));
    }

    #[test]
    fn test_per_line_empty_content() {
        assert!(split_messages("a.txt", "", true).is_empty());
    }
}
