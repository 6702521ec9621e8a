//! Single line of the list file, classified by comment state.

/// One line of the list, without its terminating newline.
///
/// Every variant keeps the raw text so an untouched line renders back
/// exactly as it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Uncommented, non-blank line: a source the service will fetch.
    Active(String),
    /// Line whose first byte is `#`.
    Disabled(String),
    /// Blank or whitespace-only line.
    Other(String),
}

impl Line {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Line::Other(raw.to_string())
        } else if raw.starts_with('#') {
            Line::Disabled(raw.to_string())
        } else {
            Line::Active(raw.to_string())
        }
    }

    pub fn raw(&self) -> &str {
        match self {
            Line::Active(raw) | Line::Disabled(raw) | Line::Other(raw) => raw,
        }
    }

    /// The entry text with any comment marker stripped, or `None` for blank lines.
    pub fn entry(&self) -> Option<&str> {
        match self {
            Line::Active(raw) => Some(raw),
            Line::Disabled(raw) => Some(strip_marker(raw)),
            Line::Other(_) => None,
        }
    }

    pub fn is_active_for(&self, url: &str) -> bool {
        matches!(self, Line::Active(raw) if starts_with_ignore_case(raw, url))
    }

    pub fn is_disabled_for(&self, url: &str) -> bool {
        matches!(self, Line::Disabled(raw) if starts_with_ignore_case(strip_marker(raw), url))
    }

    /// Drop the `#` and the whitespace after it. No-op unless disabled.
    pub fn enable(&mut self) {
        if let Line::Disabled(raw) = self {
            *self = Line::Active(strip_marker(raw).to_string());
        }
    }

    /// Prefix with `# `. No-op unless active.
    pub fn disable(&mut self) {
        if let Line::Active(raw) = self {
            *self = Line::Disabled(format!("# {raw}"));
        }
    }
}

fn strip_marker(raw: &str) -> &str {
    raw.strip_prefix('#').unwrap_or(raw).trim_start()
}

/// Literal prefix test under Unicode lowercase folding.
pub(crate) fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text = text.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|p| text.next() == Some(p))
}
