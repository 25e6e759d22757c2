//! Output trait for rendering reports.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render it.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a line of plain text.
    fn preformatted(&mut self, text: &str);

    /// Render a warning diagnostic.
    fn diagnostic(&mut self, report: &miette::Report);

    /// Render an error message.
    fn error(&mut self, msg: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn diagnostic(&mut self, report: &miette::Report) {
        eprintln!("{:?}", report);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Records rendered lines for assertions.
///
/// `transcript` holds both streams in the order they were written.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingOutput {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
    pub transcript: Vec<String>,
}

#[cfg(test)]
impl RecordingOutput {
    fn out(&mut self, line: String) {
        self.transcript.push(line.clone());
        self.stdout.push(line);
    }

    fn err(&mut self, line: String) {
        self.transcript.push(line.clone());
        self.stderr.push(line);
    }
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn section(&mut self, name: &str) {
        self.out(format!("{}:", name));
    }

    fn list_item(&mut self, text: &str) {
        self.out(format!("  - {}", text));
    }

    fn divider(&mut self, label: &str) {
        self.out(format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.out(text.to_string());
    }

    fn diagnostic(&mut self, report: &miette::Report) {
        self.err(report.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.err(format!("error: {}", msg));
    }

    fn newline(&mut self) {
        self.out(String::new());
    }
}
