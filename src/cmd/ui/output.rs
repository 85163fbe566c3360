//! Structured output abstraction for primer.
//!
//! Provides a unified interface for outputting messages in different modes:
//! - Human: Colored prefixed output for terminal display
//! - Json: Structured JSON events for programmatic consumption
//! - Quiet: Only results and errors are emitted
//!
//! Results (a character sheet, a planet description, a validation message)
//! are written in every mode; banners, prompts and status lines are not.
//! The Output struct auto-detects TTY for color support and can be injected
//! with a custom writer for test capture.

use colored::Colorize;
use serde_json::json;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use primer::config::OutputFormat;

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable colored output
    Human,
    /// JSON-formatted structured output
    Json,
    /// Results and errors only
    Quiet,
}

impl From<OutputFormat> for OutputMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Quiet => OutputMode::Quiet,
        }
    }
}

/// Output abstraction with mode-aware formatting
#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    is_tty: bool,
}

impl Output {
    /// Create a new Output writing to stdout
    pub fn new(mode: OutputMode, color: bool) -> Self {
        let is_tty = color && atty::is(atty::Stream::Stdout);
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            is_tty,
        }
    }

    /// Create an Output with a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            is_tty: false, // Assume non-TTY for custom writers
        }
    }

    /// Output an error message: "✗ {msg}" in red
    pub fn error(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.is_tty {
                    "✗".red().to_string()
                } else {
                    "✗".to_string()
                };
                self.write_line(&format!("{} {}", prefix, msg));
            }
            OutputMode::Json => {
                self.write_json("error", msg);
            }
            OutputMode::Quiet => {
                // Errors always output, even in quiet mode
                self.write_line(&format!("✗ {}", msg));
            }
        }
    }

    /// Output plain info text (no prefix)
    pub fn info(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                self.write_line(msg);
            }
            OutputMode::Json => {
                self.write_json("info", msg);
            }
            OutputMode::Quiet => {}
        }
    }

    /// Output a command result. Text modes print `text` verbatim, Json mode
    /// prints `value` as a single line.
    pub fn result(&self, text: &str, value: &serde_json::Value) {
        match self.mode {
            OutputMode::Human | OutputMode::Quiet => self.write_line(text),
            OutputMode::Json => self.json(value),
        }
    }

    /// Output a validation rejection. Text modes print the message verbatim.
    pub fn rejection(&self, msg: &str) {
        match self.mode {
            OutputMode::Human | OutputMode::Quiet => self.write_line(msg),
            OutputMode::Json => self.write_json("rejected", msg),
        }
    }

    /// Writer for inline prompts. Prompts only appear in Human mode.
    pub fn prompt_writer(&self) -> PromptWriter<'_> {
        PromptWriter { output: self }
    }

    /// Output a structured JSON event
    pub fn json(&self, value: &serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", value);
        }
    }

    /// Write a line to the output
    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    /// Write a JSON-formatted log line
    fn write_json(&self, level: &str, msg: &str) {
        self.json(&json!({
            "level": level,
            "msg": msg,
        }));
    }

    /// Get the current output mode
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Check if running in TTY
    #[allow(dead_code)]
    pub fn is_tty(&self) -> bool {
        self.is_tty
    }
}

/// `Write` adapter that forwards prompt text to an [`Output`] in Human mode
/// and discards it otherwise.
pub struct PromptWriter<'a> {
    output: &'a Output,
}

impl Write for PromptWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.output.mode == OutputMode::Human {
            if let Ok(mut writer) = self.output.writer.lock() {
                writer.write_all(buf)?;
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Ok(mut writer) = self.output.writer.lock() {
            writer.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    // Test-specific writer that wraps Arc<Mutex<Vec<u8>>>
    pub(crate) struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        pub(crate) fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.buffer.lock().unwrap().flush()
        }
    }

    /// Build an Output that records everything it writes.
    pub(crate) fn capture(mode: OutputMode) -> (Output, Arc<Mutex<Vec<u8>>>) {
        let (writer, buffer) = TestWriter::new();
        (Output::with_writer(mode, Box::new(writer)), buffer)
    }

    pub(crate) fn captured(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_human_mode_output() {
        let (output, buffer) = capture(OutputMode::Human);

        output.error("Error");
        output.info("Info");
        output.rejection("The character should have a name");

        let result = captured(&buffer);
        assert!(result.contains("✗ Error"));
        assert!(result.contains("Info"));
        assert!(result.contains("\nThe character should have a name\n"));
    }

    #[test]
    fn test_json_mode_output() {
        let (output, buffer) = capture(OutputMode::Json);

        output.info("Starting");
        output.error("Bad input");
        output.rejection("All stats should be integers");

        let result = captured(&buffer);
        assert!(result.contains(r#""level":"info""#));
        assert!(result.contains(r#""msg":"Starting""#));
        assert!(result.contains(r#""level":"error""#));
        assert!(result.contains(r#""level":"rejected""#));
        assert!(result.contains(r#""msg":"All stats should be integers""#));
    }

    #[test]
    fn test_quiet_mode_only_results_and_errors() {
        let (output, buffer) = capture(OutputMode::Quiet);

        output.info("Info");
        output.error("Error");
        output.result("Hero", &json!({"name": "Hero"}));

        let result = captured(&buffer);
        assert_eq!(result, "✗ Error\nHero\n");
    }

    #[test]
    fn test_result_json_uses_value() {
        let (output, buffer) = capture(OutputMode::Json);

        output.result("ignored text", &json!({"name": "Hero"}));

        assert_eq!(captured(&buffer), "{\"name\":\"Hero\"}\n");
    }

    #[test]
    fn test_prompt_writer_human_only() {
        let (human, human_buffer) = capture(OutputMode::Human);
        write!(human.prompt_writer(), "Enter the strength: ").unwrap();
        assert_eq!(captured(&human_buffer), "Enter the strength: ");

        let (json_output, json_buffer) = capture(OutputMode::Json);
        write!(json_output.prompt_writer(), "Enter the strength: ").unwrap();
        assert_eq!(captured(&json_buffer), "");
    }

    #[test]
    fn test_mode_from_format() {
        assert_eq!(OutputMode::from(OutputFormat::Human), OutputMode::Human);
        assert_eq!(OutputMode::from(OutputFormat::Json), OutputMode::Json);
        assert_eq!(OutputMode::from(OutputFormat::Quiet), OutputMode::Quiet);
    }

    #[test]
    fn test_mode_getter() {
        let output = Output::new(OutputMode::Json, false);
        assert_eq!(output.mode(), OutputMode::Json);
        assert!(!output.is_tty());
    }
}
