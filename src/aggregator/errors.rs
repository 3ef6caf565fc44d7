/// Append-only list of human-readable source failures.
#[derive(Debug, Clone, Default)]
pub struct ErrorCollector {
    entries: Vec<String>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, url: &str, reason: &str) {
        self.entries.push(format!("{url} - {reason}"));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

}
