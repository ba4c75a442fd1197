#![forbid(unsafe_code)]

//! Human-readable output formatter with colorization support

use crate::copy::CopyReport;
use crate::layout::PlaygroundLayout;
use std::io::{self, Write};
use std::path::PathBuf;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Greeting printed by `hello`
pub const GREETING: &str = "Hello from C playground!";

/// Human-readable output formatter
///
/// Labels are highlighted when colors are enabled; the text itself is the
/// same either way.
pub struct HumanFormatter {
    color_choice: ColorChoice,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice
    pub fn new(color_choice: ColorChoice) -> Self {
        HumanFormatter { color_choice }
    }

    /// Confirmation line for a finished copy
    #[cfg(test)]
    fn format_copy(&self, report: &CopyReport) -> String {
        format!(
            "copied: {} -> {}\n",
            report.from.display(),
            report.to.display()
        )
    }

    /// One `name: path` line per layout directory
    #[cfg(test)]
    fn format_paths(&self, layout: &PlaygroundLayout) -> String {
        let mut output = String::new();
        for (label, path) in path_rows(layout) {
            output.push_str(&format!("{}: {}\n", label, path.display()));
        }
        output
    }

    /// Write the copy confirmation, highlighting the label
    pub fn write_copy<W: WriteColor>(&self, out: &mut W, report: &CopyReport) -> io::Result<()> {
        write_label(out, "copied", Color::Green)?;
        writeln!(out, " {} -> {}", report.from.display(), report.to.display())
    }

    /// Write the layout listing, highlighting each label
    pub fn write_paths<W: WriteColor>(
        &self,
        out: &mut W,
        layout: &PlaygroundLayout,
    ) -> io::Result<()> {
        for (label, path) in path_rows(layout) {
            write_label(out, label, Color::Cyan)?;
            writeln!(out, " {}", path.display())?;
        }
        Ok(())
    }

    /// Write the greeting to stdout
    pub fn greet_to_stdout(&self) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        writeln!(stdout, "{}", GREETING)
    }

    /// Write the copy confirmation to stdout
    pub fn copy_to_stdout(&self, report: &CopyReport) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        self.write_copy(&mut stdout, report)
    }

    /// Write the layout listing to stdout
    pub fn paths_to_stdout(&self, layout: &PlaygroundLayout) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        self.write_paths(&mut stdout, layout)
    }
}

fn path_rows(layout: &PlaygroundLayout) -> [(&'static str, PathBuf); 3] {
    [
        ("root", layout.root().to_path_buf()),
        ("vectors", layout.vectors_dir()),
        ("results", layout.results_dir()),
    ]
}

/// Write `label:` in bold color, then reset
fn write_label<W: WriteColor>(out: &mut W, label: &str, color: Color) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}:", label)?;
    out.reset()
}
