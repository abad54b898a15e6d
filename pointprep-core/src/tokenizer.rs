//! Single-line CSV tokenizer and the matching field quoting rule.
//!
//! Fields may be wrapped in double quotes, with `""` standing for a literal
//! quote. Quoted fields cannot span lines; an unterminated quote runs to the
//! end of the line.

const QUOTE: char = '"';

/// Split one CSV line into its fields.
///
/// Carriage returns and newlines outside quotes are dropped. A field is
/// always emitted at the end of the line, so a trailing separator yields a
/// trailing empty field and the empty line yields a single empty field.
///
/// # Examples
/// ```
/// use pointprep_core::split_line;
///
/// let fields = split_line("way,42,\"Cafe \"\"Blue\"\", Ltd\",\r", ',');
/// assert_eq!(fields, vec!["way", "42", r#"Cafe "Blue", Ltd"#, ""]);
/// ```
#[must_use]
pub fn split_line(line: &str, separator: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::with_capacity(line.len());
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == QUOTE {
                if chars.next_if_eq(&QUOTE).is_some() {
                    current.push(QUOTE);
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == QUOTE {
            in_quotes = true;
        } else if ch == separator {
            fields.push(std::mem::take(&mut current));
        } else if ch != '\r' && ch != '\n' {
            current.push(ch);
        }
    }
    fields.push(current);
    fields
}

/// Render a value as a single CSV field.
///
/// The value is returned bare unless it contains a comma or a quote, in
/// which case it is wrapped in quotes with inner quotes doubled.
///
/// # Examples
/// ```
/// use pointprep_core::quote_field;
///
/// assert_eq!(quote_field("Cafe"), "Cafe");
/// assert_eq!(quote_field("Fish, Chips"), "\"Fish, Chips\"");
/// assert_eq!(quote_field("The \"Oak\""), "\"The \"\"Oak\"\"\"");
/// ```
#[must_use]
pub fn quote_field(value: &str) -> String {
    if !value.contains([',', QUOTE]) {
        return value.to_owned();
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(QUOTE);
    for ch in value.chars() {
        if ch == QUOTE {
            quoted.push(QUOTE);
        }
        quoted.push(ch);
    }
    quoted.push(QUOTE);
    quoted
}
