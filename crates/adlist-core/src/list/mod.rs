//! In-memory blocklist source list and the add/remove edits.
//!
//! Entries are toggled by commenting rather than deleted, so `add` and
//! `remove` are inverses: `remove` prefixes matching lines with `# ` and
//! `add` strips that marker again. Lines unrelated to the URL being edited
//! are never touched, and an unedited list renders back byte-for-byte.

mod line;

pub use line::Line;

use std::fmt;

/// What an edit did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Already in the requested state.
    Unchanged,
    /// A commented-out line was uncommented in place.
    Enabled,
    /// The URL was not present and was appended as a new line.
    Appended,
    /// This many active lines were commented out.
    Disabled(usize),
}

impl Change {
    pub fn is_unchanged(self) -> bool {
        self == Change::Unchanged
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Unchanged => write!(f, "unchanged"),
            Change::Enabled => write!(f, "enabled"),
            Change::Appended => write!(f, "added"),
            Change::Disabled(1) => write!(f, "disabled"),
            Change::Disabled(n) => write!(f, "disabled ({n} lines)"),
        }
    }
}

/// A list entry as shown by `adlist --list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub url: &'a str,
    pub enabled: bool,
}

/// Parsed list file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdList {
    lines: Vec<Line>,
    trailing_newline: bool,
}

impl AdList {
    pub fn parse(contents: &str) -> Self {
        if contents.is_empty() {
            return Self::default();
        }
        let body = contents.strip_suffix('\n').unwrap_or(contents);
        Self {
            lines: body.split('\n').map(Line::parse).collect(),
            trailing_newline: contents.ends_with('\n'),
        }
    }

    /// Active and disabled entries in file order; blank lines are skipped.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.lines.iter().filter_map(|line| {
            let url = line.entry().filter(|e| !e.is_empty())?;
            Some(Entry {
                url,
                enabled: matches!(line, Line::Active(_)),
            })
        })
    }

    /// Make `url` active: keep an active match, else uncomment the first
    /// disabled match, else append it.
    ///
    /// An appended line always ends in `\n`, even in a CRLF file.
    pub fn add(&mut self, url: &str) -> Change {
        if url.is_empty() {
            return Change::Unchanged;
        }
        if self.lines.iter().any(|l| l.is_active_for(url)) {
            return Change::Unchanged;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.is_disabled_for(url)) {
            line.enable();
            return Change::Enabled;
        }
        self.lines.push(Line::Active(url.to_string()));
        self.trailing_newline = true;
        Change::Appended
    }

    /// Comment out every active line for `url`.
    pub fn remove(&mut self, url: &str) -> Change {
        if url.is_empty() {
            return Change::Unchanged;
        }
        let mut count = 0;
        for line in self.lines.iter_mut().filter(|l| l.is_active_for(url)) {
            line.disable();
            count += 1;
        }
        if count == 0 {
            Change::Unchanged
        } else {
            Change::Disabled(count)
        }
    }
}

impl fmt::Display for AdList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line.raw())?;
        }
        if self.trailing_newline {
            f.write_str("\n")?;
        }
        Ok(())
    }
}
