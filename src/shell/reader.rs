use anyhow::{Context, Result};
use std::io::{BufRead, ErrorKind};

/// Initial capacity of the line buffer, and the step it grows by.
pub const LINE_BUFSIZE: usize = 1024;

/// Grows `buf` so that `extra` more items fit, in whole multiples of `step`.
///
/// Allocation failure is returned as an error rather than aborting, so the
/// caller can print a diagnostic before terminating.
pub fn reserve_in_steps<T>(buf: &mut Vec<T>, extra: usize, step: usize) -> Result<()> {
    let needed = buf.len() + extra;
    if needed <= buf.capacity() {
        return Ok(());
    }
    let steps = (needed - buf.capacity()).div_ceil(step);
    let target = buf.capacity() + steps * step;
    buf.try_reserve_exact(target - buf.len())
        .context("allocation error")
}

/// Reads one line from `input`, without its newline.
///
/// The bytes come back exactly as typed, without decoding. Returns
/// `Ok(None)` when the stream ends before a single byte is read. A final
/// line without a trailing newline is still returned; the next call then
/// reports end-of-stream.
pub fn read_line<R: BufRead + ?Sized>(input: &mut R) -> Result<Option<Vec<u8>>> {
    let mut buf: Vec<u8> = Vec::new();
    reserve_in_steps(&mut buf, 1, LINE_BUFSIZE)?;
    let mut read_any = false;

    loop {
        let (done, used) = {
            let available = match input.fill_buf() {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e).context("failed to read input"),
            };

            if available.is_empty() {
                if !read_any {
                    return Ok(None);
                }
                (true, 0)
            } else {
                match available.iter().position(|&b| b == b'\n') {
                    Some(i) => {
                        reserve_in_steps(&mut buf, i, LINE_BUFSIZE)?;
                        buf.extend_from_slice(&available[..i]);
                        (true, i + 1)
                    }
                    None => {
                        reserve_in_steps(&mut buf, available.len(), LINE_BUFSIZE)?;
                        buf.extend_from_slice(available);
                        (false, available.len())
                    }
                }
            }
        };

        if used > 0 {
            read_any = true;
            input.consume(used);
        }
        if done {
            break;
        }
    }

    Ok(Some(buf))
}
