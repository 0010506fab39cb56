use std::borrow::Cow;
use std::ffi::OsStr;

pub const ROOT_PROMPT: &str = "wsh # ";
pub const USER_PROMPT: &str = "wsh $ ";

/// Picks the prompt from the effective user, queried fresh on every call.
pub fn select_prompt() -> &'static str {
    if is_privileged() { ROOT_PROMPT } else { USER_PROMPT }
}

#[cfg(unix)]
fn is_privileged() -> bool {
    nix::unistd::Uid::effective().is_root()
}

#[cfg(not(unix))]
fn is_privileged() -> bool {
    false
}

/// Views token bytes as an OS string. On Unix the bytes are passed through
/// untouched; elsewhere they have to be valid Unicode and are decoded lossily.
#[cfg(unix)]
pub fn os_str(bytes: &[u8]) -> Cow<'_, OsStr> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
pub fn os_str(bytes: &[u8]) -> Cow<'_, OsStr> {
    Cow::Owned(String::from_utf8_lossy(bytes).into_owned().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_one_of_known() {
        let p = select_prompt();
        assert!(p == ROOT_PROMPT || p == USER_PROMPT);
    }

    #[cfg(unix)]
    #[test]
    fn test_prompt_matches_uid() {
        let expected = if nix::unistd::geteuid().is_root() { ROOT_PROMPT } else { USER_PROMPT };
        assert_eq!(select_prompt(), expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_os_str_keeps_bytes() {
        use std::os::unix::ffi::OsStrExt;
        assert_eq!(os_str(b"caf\xe9").as_bytes(), b"caf\xe9");
    }
}
