use super::DomainName;

pub const LOOPBACK: &str = "127.0.0.1";

/// Line-oriented view of a hosts file.
///
/// Lines are kept verbatim; only lines this type adds or removes change.
/// Matching is on whole hostname fields, so `app.test` never matches
/// `myapp.test` or `app.test.local`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostsFile {
    lines: Vec<String>,
}

impl HostsFile {
    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    /// Hostname fields of a line: everything after the address, up to a `#`.
    fn hostnames(line: &str) -> impl Iterator<Item = &str> {
        let entry = match line.find('#') {
            Some(idx) => &line[..idx],
            None => line,
        };
        entry.split_whitespace().skip(1)
    }

    fn mentions(line: &str, domain: &DomainName) -> bool {
        Self::hostnames(line).any(|name| name == domain.as_str())
    }

    pub fn contains(&self, domain: &DomainName) -> bool {
        self.lines.iter().any(|line| Self::mentions(line, domain))
    }

    /// Append `127.0.0.1 <domain>` unless the domain is already mapped.
    /// Returns whether a line was added.
    pub fn add_loopback(&mut self, domain: &DomainName) -> bool {
        if self.contains(domain) {
            return false;
        }
        self.lines.push(format!("{} {}", LOOPBACK, domain));
        true
    }

    /// Drop every line mapping `domain`. Returns how many lines were removed.
    pub fn remove(&mut self, domain: &DomainName) -> usize {
        let before = self.lines.len();
        self.lines.retain(|line| !Self::mentions(line, domain));
        before - self.lines.len()
    }

    pub fn render(&self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }
}
