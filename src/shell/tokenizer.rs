/// Characters that separate arguments outside of quotes.
const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Splits one line into an argument vector.
///
/// A token that starts with `"` or `'` runs verbatim up to the next matching
/// quote, which is dropped. There is no escape processing. An unterminated
/// quote consumes the rest of the line as a single token. A blank line yields
/// an empty vector.
///
/// The returned strings are owned and do not borrow from `line`.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        while chars.next_if(|&c| is_delimiter(c)).is_some() {}

        let Some(&first) = chars.peek() else {
            break;
        };

        let mut token = String::new();
        if is_quote(first) {
            chars.next();
            for c in chars.by_ref() {
                if c == first {
                    break;
                }
                token.push(c);
            }
        } else {
            while let Some(c) = chars.next_if(|&c| !is_delimiter(c)) {
                token.push(c);
            }
        }
        args.push(token);
    }

    args
}
