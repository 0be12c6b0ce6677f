//! Console channel
//!
//! Developer-facing diagnostic lines, buffered for inspection and
//! mirrored to `tracing`.

/// Buffered diagnostic console.
#[derive(Debug, Default)]
pub struct Console {
    lines: Vec<String>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a line to the console.
    pub fn log(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::info!(target: "veranda::console", "[console] {line}");
        self.lines.push(line);
    }

    /// Every line written so far, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any line contains the given fragment.
    pub fn contains(&self, fragment: &str) -> bool {
        self.lines.iter().any(|l| l.contains(fragment))
    }
}
