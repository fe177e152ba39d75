//! `$NAME` / `${NAME}` expansion for path values read from the config file.

use std::collections::HashMap;

/// Variable table used during expansion.
///
/// Values inserted here shadow the process environment, so derived values
/// (like the Windows home directory under WSL) never need to be exported.
#[derive(Debug, Clone, Default)]
pub struct Variables {
    values: HashMap<String, String>,
    use_env: bool,
}

impl Variables {
    /// Table backed by the process environment
    pub fn from_env() -> Self {
        Self {
            values: HashMap::new(),
            use_env: true,
        }
    }

    /// Table that only knows explicitly inserted values
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.values.insert(name.into(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }
        if self.use_env {
            return std::env::var(name).ok();
        }
        None
    }

    pub fn expand(&self, input: &str) -> String {
        expand_with(input, |name| self.get(name))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replace `$NAME` and `${NAME}` placeholders using `lookup`.
///
/// Unresolvable variables are left as written.
pub fn expand_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some('{') => {
                chars.next();
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                match (closed, lookup(&name)) {
                    (true, Some(value)) if !name.is_empty() => result.push_str(&value),
                    (true, _) => {
                        result.push_str("${");
                        result.push_str(&name);
                        result.push('}');
                    }
                    (false, _) => {
                        result.push_str("${");
                        result.push_str(&name);
                    }
                }
            }
            Some(&c) if is_name_char(c) => {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if !is_name_char(c) {
                        break;
                    }
                    name.push(c);
                    chars.next();
                }
                match lookup(&name) {
                    Some(value) => result.push_str(&value),
                    None => {
                        result.push('$');
                        result.push_str(&name);
                    }
                }
            }
            _ => result.push('$'),
        }
    }

    result
}
