use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;

use crate::input::RawLine;

/// Largest number of fields kept from a single line.
pub const MAX_NUM_ARGUMENTS: usize = 32;

fn is_delimiter(b: &u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n')
}

/// Whitespace-separated words of one command line, in order, with no empty
/// entries. Words keep their exact bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<OsString>,
}

impl TokenList {
    /// Splits `line` into at most [`MAX_NUM_ARGUMENTS`] fields and compacts
    /// them. Consecutive delimiters produce empty fields, and those count
    /// toward the cap before being dropped. Fields past the cap are discarded.
    pub fn parse(line: &[u8]) -> Self {
        let fields: Vec<Option<&[u8]>> = line
            .split(is_delimiter)
            .take(MAX_NUM_ARGUMENTS)
            .map(|field| (!field.is_empty()).then_some(field))
            .collect();

        Self {
            tokens: compact(fields),
        }
    }

    pub fn from_raw(line: &RawLine) -> Self {
        Self::parse(line.as_bytes())
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn get(&self, index: usize) -> Option<&OsStr> {
        self.tokens.get(index).map(OsString::as_os_str)
    }

    /// `token[0]`: the built-in or program name.
    pub fn command(&self) -> Option<&OsStr> {
        self.get(0)
    }

    pub fn args(&self) -> &[OsString] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    pub fn as_slice(&self) -> &[OsString] {
        &self.tokens
    }
}

/// Stable compaction: present fields move to the front in their original
/// order, absent ones are dropped.
fn compact(fields: Vec<Option<&[u8]>>) -> Vec<OsString> {
    fields
        .into_iter()
        .flatten()
        .map(|field| OsStr::from_bytes(field).to_os_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(tokens: &TokenList) -> Vec<String> {
        tokens
            .as_slice()
            .iter()
            .map(|t| t.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_simple_split() {
        let tokens = TokenList::parse(b"ls -l /tmp\n");
        assert_eq!(words(&tokens), vec!["ls", "-l", "/tmp"]);
        assert_eq!(tokens.command(), Some(OsStr::new("ls")));
        assert_eq!(tokens.args(), &[OsString::from("-l"), OsString::from("/tmp")]);
    }

    #[test]
    fn test_mixed_delimiters_compact() {
        let tokens = TokenList::parse(b"  echo\t\thello   world \n");
        assert_eq!(words(&tokens), vec!["echo", "hello", "world"]);
    }

    #[test]
    fn test_leading_whitespace_moves_command_to_front() {
        let tokens = TokenList::parse(b"\t  cd /tmp");
        assert_eq!(tokens.command(), Some(OsStr::new("cd")));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_blank_lines_are_empty() {
        for line in ["", "\n", "   \n", "\t \t\n"] {
            let tokens = TokenList::parse(line.as_bytes());
            assert!(tokens.is_empty(), "{:?}", line);
            assert_eq!(tokens.command(), None);
            assert!(tokens.args().is_empty());
        }
    }

    #[test]
    fn test_excess_tokens_discarded() {
        let line: Vec<String> = (1..=40).map(|i| format!("a{}", i)).collect();
        let tokens = TokenList::parse(format!("{}\n", line.join(" ")).as_bytes());
        assert_eq!(tokens.len(), MAX_NUM_ARGUMENTS);
        assert_eq!(tokens.get(0), Some(OsStr::new("a1")));
        assert_eq!(tokens.get(31), Some(OsStr::new("a32")));
        assert_eq!(tokens.get(32), None);
    }

    #[test]
    fn test_exactly_capacity() {
        let line: Vec<String> = (1..=32).map(|i| i.to_string()).collect();
        let tokens = TokenList::parse(line.join(" ").as_bytes());
        assert_eq!(tokens.len(), 32);
        assert_eq!(tokens.get(31), Some(OsStr::new("32")));
    }

    #[test]
    fn test_capacity_counts_empty_fields() {
        let line = format!("a{}b", " ".repeat(40));
        let tokens = TokenList::parse(line.as_bytes());
        assert_eq!(words(&tokens), vec!["a"]);
    }

    #[test]
    fn test_carriage_return_is_not_a_delimiter() {
        let tokens = TokenList::parse(b"ls\r\n");
        assert_eq!(words(&tokens), vec!["ls\r"]);
    }

    #[test]
    fn test_non_utf8_bytes_kept_exactly() {
        let tokens = TokenList::parse(b"ls > \xff\xfe.txt\n");
        assert_eq!(tokens.get(2).map(OsStr::as_bytes), Some(&b"\xff\xfe.txt"[..]));
    }

    #[test]
    fn test_compact_preserves_order() {
        let (a, b, c): (&[u8], &[u8], &[u8]) = (b"a", b"b", b"c");
        let fields = vec![None, Some(a), None, None, Some(b), Some(c), None];
        assert_eq!(
            compact(fields),
            vec![OsString::from("a"), OsString::from("b"), OsString::from("c")]
        );
    }

    #[test]
    fn test_from_raw_line() {
        let raw = RawLine::new(b"exit now\n".to_vec());
        let tokens = TokenList::from_raw(&raw);
        assert_eq!(words(&tokens), vec!["exit", "now"]);
    }
}
