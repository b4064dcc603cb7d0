use std::collections::HashMap;
use std::io::{self, BufRead, Read};

/// Line-oriented `key=value` settings with an optional fallback layer.
///
/// Lookups that miss at this layer fall through to `defaults`, which is how
/// the settings file is stacked over the process environment.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
    defaults: Option<Box<Properties>>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty layer that falls back to `defaults`
    pub fn with_defaults(defaults: Properties) -> Self {
        Self {
            defaults: Some(Box::new(defaults)),
            ..Self::default()
        }
    }

    /// Snapshot the process environment as a properties layer
    ///
    /// Entries whose name or value is not valid UTF-8 are skipped.
    pub fn from_env() -> Self {
        let mut props = Self::new();
        for (key, value) in std::env::vars_os() {
            if let (Ok(key), Ok(value)) = (key.into_string(), value.into_string()) {
                props.set(key, value);
            }
        }
        props
    }

    /// Parse properties text without a fallback layer
    pub fn parse(text: &str) -> Self {
        let mut props = Self::new();
        props.merge_text(text);
        props
    }

    /// Read entries from `reader` into this layer
    ///
    /// Existing keys are overwritten by later lines. Invalid UTF-8 surfaces as
    /// an `InvalidData` error.
    pub fn load<R: BufRead>(&mut self, mut reader: R) -> io::Result<()> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.merge_text(&text);
        Ok(())
    }

    fn merge_text(&mut self, text: &str) {
        for line in text.lines() {
            if let Some((key, value)) = parse_line(line) {
                self.set(key, value);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&i| self.entries[i].1.as_str())
            .or_else(|| self.defaults.as_ref().and_then(|d| d.get(key)))
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Keys defined at this layer, in the order they were first seen
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries at this layer (the fallback is not counted)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn defaults(&self) -> Option<&Properties> {
        self.defaults.as_deref()
    }
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start();
    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
        return None;
    }

    match line.split_once('=') {
        Some((key, value)) => Some((key.trim_end(), value)),
        None => Some((line.trim_end(), "")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let props = Properties::parse("# comment\n\n! also a comment\n  a=1\nb=2\n");
        assert_eq!(props.len(), 2);
        assert_eq!(props.get("a"), Some("1"));
        assert_eq!(props.get("b"), Some("2"));
    }

    #[test]
    fn test_value_is_not_trimmed() {
        let props = Properties::parse("key = padded \n");
        assert_eq!(props.get("key"), Some(" padded "));
    }

    #[test]
    fn test_value_may_contain_equals() {
        let props = Properties::parse("url=jdbc:x://h/db?a=b\n");
        assert_eq!(props.get("url"), Some("jdbc:x://h/db?a=b"));
    }

    #[test]
    fn test_line_without_separator_is_empty_value() {
        let props = Properties::parse("flag\n");
        assert_eq!(props.get("flag"), Some(""));
    }

    #[test]
    fn test_later_duplicate_wins() {
        let props = Properties::parse("k=first\nk=second\n");
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("k"), Some("second"));
    }

    #[test]
    fn test_fallback_layer() {
        let mut ambient = Properties::new();
        ambient.set("shared", "ambient");
        ambient.set("only.ambient", "yes");

        let mut file = Properties::with_defaults(ambient);
        file.load("shared=file\n".as_bytes()).unwrap();

        assert_eq!(file.get("shared"), Some("file"));
        assert_eq!(file.get("only.ambient"), Some("yes"));
        assert_eq!(file.get("missing"), None);
        assert_eq!(file.get_or("missing", "dflt"), "dflt");
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let mut props = Properties::new();
        let err = props.load(&[0x61, 0x3d, 0xff, 0xfe][..]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_set_keeps_first_seen_order() {
        let mut props = Properties::new();
        for i in 0..1000 {
            props.set(format!("k{}", i), "a");
        }
        props.set("k0", "b");
        props.set("k999", "c");

        assert_eq!(props.len(), 1000);
        assert_eq!(props.get("k0"), Some("b"));
        assert_eq!(props.get("k999"), Some("c"));
        assert_eq!(props.keys().next(), Some("k0"));
        assert_eq!(props.keys().last(), Some("k999"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let props = Properties::parse("a=1\r\nb=2\r\n");
        assert_eq!(props.get("a"), Some("1"));
        assert_eq!(props.get("b"), Some("2"));
    }
}
