//! Comma-separated values tokenizer
//!
//! Splits text into rows of raw fields in a single forward pass. Quoted fields may contain commas,
//! line breaks and doubled quotes. `\n`, `\r` and `\r\n` all terminate a row. Headers are not
//! treated specially.

pub type Row = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    Quoted,
}

#[must_use]
pub fn tokenize(text: &str) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut row = Row::new();
    let mut field = String::new();
    let mut field_start = true;
    let mut state = State::Unquoted;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Quoted => {
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        state = State::Unquoted;
                    }
                } else {
                    field.push(c);
                }
            }
            State::Unquoted => match c {
                '"' if field_start => {
                    state = State::Quoted;
                    field_start = false;
                }
                ',' => {
                    row.push(std::mem::take(&mut field));
                    field_start = true;
                }
                '\n' | '\r' => {
                    if c == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                    field_start = true;
                }
                _ => {
                    field.push(c);
                    field_start = false;
                }
            },
        }
    }

    // An unterminated quoted field is closed implicitly.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
