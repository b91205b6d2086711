use crate::domain::ports::RenderSink;

/// Writes results to stdout, one line per item, headers separated by a
/// blank line.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        ConsoleSink
    }
}

impl RenderSink for ConsoleSink {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn header(&mut self, title: &str) {
        println!();
        println!("== {} ==", title);
    }
}

/// Captures rendered output in memory. Used by tests to assert on drill
/// output without touching stdout.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        BufferSink::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl RenderSink for BufferSink {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn header(&mut self, title: &str) {
        self.lines.push(format!("== {} ==", title));
    }
}
