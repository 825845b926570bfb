//! Wire-format boundary for [`Headers`].
//!
//! A transport reads a header block line by line and feeds each occurrence
//! into the container; serialization walks the container in its natural
//! (comparator) order and emits one wire line per value. Network I/O itself
//! is the transport's business, not this module's.

use log::trace;

use super::Headers;

impl Headers {
    /// Parses a wire-format header block into a new case-insensitive
    /// container, the conventional mode for wire protocols.
    pub fn parse_block(text: &str) -> Headers {
        let mut headers = Headers::case_insensitive();
        headers.extend_from_block(text);
        headers
    }

    /// Parses a wire-format header block into this container.
    ///
    /// Lines are split on `\n` with an optional trailing `\r`; empty lines
    /// are skipped. A `name: value` line adds the trimmed name and value; a
    /// line without a colon adds the trimmed name with a null value, the
    /// same shape [`stringify`](Self::stringify) emits for one. Parsing
    /// never fails: every line maps to an `add` call.
    pub fn extend_from_block(&mut self, text: &str) {
        let mut lines = 0usize;
        for line in text.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                continue;
            }
            match line.split_once(':') {
                Some((name, value)) => self.add(name.trim(), value.trim()),
                None => self.add(line.trim(), None),
            }
            lines += 1;
        }
        trace!("parsed {} header lines", lines);
    }

    /// Serializes the container to wire lines in comparator order.
    ///
    /// Each value of a name yields one `name: value\r\n` line; a null value
    /// yields a line containing only the name; a null name is never emitted.
    pub fn stringify(&self) -> String {
        let mut result = String::new();
        for (name, values) in self.iter() {
            let Some(name) = name else {
                continue;
            };
            for value in values {
                match value {
                    Some(value) => result.push_str(&format!("{}: {}\r\n", name, value)),
                    None => result.push_str(&format!("{}\r\n", name)),
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_block_adds_per_occurrence() {
        let headers = Headers::parse_block(
            "Set-Cookie: a=1\r\nset-cookie: b=2\r\nContent-Length: 10\r\n",
        );

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get_first("SET-COOKIE"), Some("a=1"));
        assert_eq!(
            headers.get("set-cookie").unwrap(),
            &[Some("a=1".to_string()), Some("b=2".to_string())]
        );
        assert_eq!(headers.get_first("content-length"), Some("10"));
    }

    #[test]
    fn test_parse_block_bare_name_is_null_value() {
        let headers = Headers::parse_block("X-Flag\r\nHost: example.com\r\n");
        assert!(headers.contains_name("x-flag"));
        assert_eq!(headers.get("x-flag").unwrap(), &[None]);
    }

    #[test]
    fn test_stringify_emits_comparator_order() {
        let mut headers = Headers::case_insensitive();
        headers.add("set-cookie", "a=1");
        headers.add("Set-Cookie", "b=2");
        headers.add("Content-Length", "10");

        assert_eq!(
            headers.stringify(),
            "Content-Length: 10\r\nset-cookie: a=1\r\nset-cookie: b=2\r\n"
        );
    }

    #[test]
    fn test_stringify_skips_null_name_and_bares_null_value() {
        let mut headers = Headers::case_insensitive();
        headers.add(None, "never emitted");
        headers.add("X-Flag", None);
        headers.add("Host", "example.com");

        assert_eq!(headers.stringify(), "Host: example.com\r\nX-Flag\r\n");
    }

    #[test]
    fn test_block_round_trip() {
        let block = "Accept: */*\r\nHost: example.com\r\nX-Flag\r\n";
        let headers = Headers::parse_block(block);
        assert_eq!(headers.stringify(), block);
    }
}
