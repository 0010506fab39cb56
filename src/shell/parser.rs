use crate::shell::reader::reserve_in_steps;
use anyhow::Result;

/// Initial capacity of the token buffer, and the step it grows by.
pub const TOKEN_BUFSIZE: usize = 64;

/// Bytes that separate tokens: space, tab, CR, LF and BEL.
pub const TOKEN_DELIMITERS: [u8; 5] = [b' ', b'\t', b'\r', b'\n', 0x07];

/// Splits `line` into delimiter-separated tokens, borrowing from it.
///
/// Runs of delimiters collapse, so no token is ever empty. The end of the
/// returned slice marks the end of the arguments; a blank line yields none.
/// There is no quoting, escaping or expansion, and bytes are never decoded.
pub fn split_line(line: &[u8]) -> Result<Vec<&[u8]>> {
    let mut tokens: Vec<&[u8]> = Vec::new();
    reserve_in_steps(&mut tokens, 1, TOKEN_BUFSIZE)?;

    for token in line
        .split(|b| TOKEN_DELIMITERS.contains(b))
        .filter(|t| !t.is_empty())
    {
        reserve_in_steps(&mut tokens, 1, TOKEN_BUFSIZE)?;
        tokens.push(token);
    }

    Ok(tokens)
}
