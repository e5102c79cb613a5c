use crate::types::ComparisonResult;
use colored::Colorize;
use std::io::{self, Write};

/// Renders a manifest comparison for a human reader
pub struct ReportRenderer {
    show_colors: bool,
}

impl ReportRenderer {
    pub fn new(show_colors: bool) -> Self {
        Self { show_colors }
    }

    /// Print the report to stdout
    pub fn render(&self, result: &ComparisonResult) -> io::Result<()> {
        self.render_to(result, &mut io::stdout().lock())
    }

    /// Write the report to any writer
    pub fn render_to<W: Write>(&self, result: &ComparisonResult, out: &mut W) -> io::Result<()> {
        writeln!(out, "\nRequirements Comparison Results:")?;
        writeln!(out, "Total packages analyzed: {}", result.total_packages)?;
        writeln!(out, "Valid transformation: {}\n", self.format_verdict(result.is_valid))?;

        // Every section after the first is preceded by a blank line
        self.render_section(out, "Packages missing in new requirements:", &result.missing_in_new, true)?;
        self.render_section(
            out,
            "\nNew packages not in original requirements:",
            &result.missing_in_original,
            true,
        )?;

        if !result.version_mismatches.is_empty() {
            writeln!(out, "\n{}", self.format_title("Version mismatches:", true))?;

            for mismatch in &result.version_mismatches {
                writeln!(
                    out,
                    "  - {}: {} → {}",
                    mismatch.name,
                    mismatch.original_version.as_deref().unwrap_or("(none)"),
                    mismatch.new_version.as_deref().unwrap_or("(none)"),
                )?;
            }
        }

        self.render_section(
            out,
            "\nPackages still containing file specifications:",
            &result.remaining_file_specs,
            true,
        )?;
        self.render_section(
            out,
            "\nPackages with file specifications correctly removed:",
            &result.removed_file_specs,
            false,
        )?;

        Ok(())
    }

    fn render_section<W: Write>(
        &self,
        out: &mut W,
        title: &str,
        names: &[String],
        is_problem: bool,
    ) -> io::Result<()> {
        if names.is_empty() {
            return Ok(());
        }

        writeln!(out, "{}", self.format_title(title, is_problem))?;
        for name in names {
            writeln!(out, "  - {name}")?;
        }

        Ok(())
    }

    fn format_title(&self, title: &str, is_problem: bool) -> String {
        if !(self.show_colors && is_problem) {
            return title.to_string();
        }

        // Keep leading newlines outside the color codes
        let text = title.trim_start_matches('\n');
        let newlines = &title[..title.len() - text.len()];
        format!("{newlines}{}", text.yellow())
    }

    /// Format the overall verdict with optional colors
    pub fn format_verdict(&self, is_valid: bool) -> String {
        match (is_valid, self.show_colors) {
            (true, true) => "Yes".green().to_string(),
            (false, true) => "No".red().to_string(),
            (true, false) => "Yes".to_string(),
            (false, false) => "No".to_string(),
        }
    }
}
