//! Stanza tokenization for `Packages` index files

/// One package's block of `Field: value` lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stanza<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Stanza<'a> {
    pub fn new(lines: Vec<&'a str>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Value of the first line starting with `name:`, trimmed
    ///
    /// Field names are matched case-sensitively at the start of the line.
    pub fn field(&self, name: &str) -> Option<&'a str> {
        self.lines
            .iter()
            .find_map(|line| field_value(line, name))
            .map(str::trim)
    }

    /// Value of a field together with its continuation lines, joined by single spaces
    pub fn multiline_field(&self, name: &str) -> Option<String> {
        let start = self
            .lines
            .iter()
            .position(|line| field_value(line, name).is_some())?;

        let mut value = field_value(self.lines[start], name)
            .unwrap_or_default()
            .trim()
            .to_string();

        for line in self.lines[start + 1..]
            .iter()
            .take_while(|line| is_continuation(line))
        {
            let part = line.trim();
            if part.is_empty() {
                continue;
            }
            if !value.is_empty() {
                value.push(' ');
            }
            value.push_str(part);
        }

        Some(value)
    }
}

fn field_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    line.strip_prefix(name)?.strip_prefix(':')
}

fn is_continuation(line: &str) -> bool {
    line.starts_with(' ') || line.starts_with('\t')
}

/// Split index text into stanzas separated by blank lines
///
/// Lines holding only whitespace count as separators. Carriage returns
/// before line feeds are dropped.
pub fn split_stanzas(text: &str) -> Vec<Stanza<'_>> {
    let mut stanzas = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                stanzas.push(Stanza::new(std::mem::take(&mut current)));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        stanzas.push(Stanza::new(current));
    }

    stanzas
}

#[cfg(test)]
mod tests {
    include!("stanza.test.rs");
}
