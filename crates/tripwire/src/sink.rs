use std::io::Write;
use std::sync::Mutex;

/// Destination for interception diagnostics. Each event arrives pre-rendered
/// as one block so parallel fuzzing workers cannot interleave the lines of a
/// single event.
pub trait DiagnosticSink: Send + Sync {
    fn write_block(&self, block: &str);
}

/// Default sink: process stdout, which the external harness scrapes as crash
/// evidence.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn write_block(&self, block: &str) {
        let mut out = std::io::stdout().lock();
        let _ = out.write_all(block.as_bytes());
        let _ = out.flush();
    }
}

/// Capturing sink for harness and test assertions.
#[derive(Debug, Default)]
pub struct MemorySink {
    blocks: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All blocks written so far, one per interception event.
    pub fn blocks(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// All written lines in order, block boundaries dropped.
    pub fn lines(&self) -> Vec<String> {
        self.lock()
            .iter()
            .flat_map(|block| block.lines().map(str::to_owned).collect::<Vec<_>>())
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // Harnesses routinely catch the forced panic; recover from poisoning
        // instead of compounding the failure.
        self.blocks.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DiagnosticSink for MemorySink {
    fn write_block(&self, block: &str) {
        self.lock().push(block.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_keeps_blocks_in_write_order() {
        let sink = MemorySink::new();
        sink.write_block("a\nb\n");
        sink.write_block("c\n");

        assert_eq!(sink.blocks(), vec!["a\nb\n".to_owned(), "c\n".to_owned()]);
        assert_eq!(sink.lines(), vec!["a", "b", "c"]);
    }
}
