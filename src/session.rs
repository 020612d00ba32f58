//! Interactive conversion session
//!
//! Reads `<amount> <from> <to>` lines until `quit` or end of input. Bad input
//! and failed conversions are reported and the loop keeps going.

use crate::error::Result;
use crate::fx::{Conversion, ConversionRequest, RateResolver, RateSource};
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Enter amount, from currency, to currency (e.g., 100 USD EUR): ";
pub const USAGE: &str = "Please enter: amount from_currency to_currency";

/// Outcome of one input line
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Converted(Conversion),
    /// Wrong number of fields
    Usage,
    Failed(String),
    Skip,
    Quit,
}

/// Counts for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub converted: usize,
    pub failed: usize,
}

pub struct Session<'a, S> {
    resolver: &'a RateResolver<S>,
    precision: usize,
}

impl<'a, S: RateSource> Session<'a, S> {
    pub fn new(resolver: &'a RateResolver<S>) -> Self {
        Self {
            resolver,
            precision: 2,
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Interpret a single input line
    pub fn step(&self, line: &str) -> Step {
        let line = line.trim();
        if line.is_empty() {
            return Step::Skip;
        }
        if line.eq_ignore_ascii_case("quit") {
            return Step::Quit;
        }
        if line.split_whitespace().count() != 3 {
            return Step::Usage;
        }

        let request = match line.parse::<ConversionRequest>() {
            Ok(request) => request,
            Err(e) => return Step::Failed(e.to_string()),
        };

        match self.resolver.resolve(&request) {
            Ok(conversion) => Step::Converted(conversion),
            Err(e) => {
                log::debug!("Conversion failed for '{}': {:?}", line, e);
                Step::Failed(e.to_string())
            }
        }
    }

    /// Run the prompt loop until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut line = String::new();

        loop {
            write!(output, "\n{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output, "\nGoodbye!")?;
                break;
            }

            match self.step(&line) {
                Step::Converted(conversion) => {
                    summary.converted += 1;
                    writeln!(output, "{}", conversion.format_with_precision(self.precision))?;
                }
                Step::Usage => writeln!(output, "{}", USAGE)?,
                Step::Failed(message) => {
                    summary.failed += 1;
                    writeln!(output, "Error: {}", message)?;
                }
                Step::Skip => {}
                Step::Quit => break,
            }
        }

        log::info!(
            "Session finished: {} converted, {} failed",
            summary.converted,
            summary.failed
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::{ExplodingRateSource, RateTable};

    fn run_transcript(input: &str) -> (SessionSummary, String) {
        let resolver = RateResolver::new(RateTable::reference());
        let mut output = Vec::new();
        let summary = Session::new(&resolver)
            .run(input.as_bytes(), &mut output)
            .unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_converts_and_quits() {
        let (summary, output) = run_transcript("100 usd eur\nquit\n100 USD GBP\n");

        assert_eq!(summary.converted, 1);
        assert!(output.contains("100 USD = 85.00 EUR"));
        assert!(!output.contains("GBP"));
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        let (summary, _) = run_transcript("QUIT\n");
        assert_eq!(summary, SessionSummary::default());
    }

    #[test]
    fn test_usage_hint_on_wrong_field_count() {
        let (summary, output) = run_transcript("100 USD\n");
        assert!(output.contains(USAGE));
        assert_eq!(summary.failed, 0);
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let (summary, output) = run_transcript("abc USD EUR\n100 XXX USD\n50 EUR GBP\nquit\n");

        assert_eq!(summary.failed, 2);
        assert_eq!(summary.converted, 1);
        assert!(output.contains("Error: Parse error: Invalid amount 'abc'"));
        assert!(output.contains("Error: Unknown currency: XXX"));
        assert!(output.contains("50 EUR = 43.00 GBP"));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (summary, output) = run_transcript("\n   \nquit\n");
        assert_eq!(summary, SessionSummary::default());
        assert!(!output.contains(USAGE));
    }

    #[test]
    fn test_precision() {
        let resolver = RateResolver::new(RateTable::reference());
        let session = Session::new(&resolver).with_precision(4);
        let mut output = Vec::new();
        session.run("1 USD JPY\n".as_bytes(), &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("1 USD = 110.0000 JPY"));
    }

    #[test]
    fn test_step_identity_skips_rates() {
        let resolver = RateResolver::new(ExplodingRateSource::new());
        let session = Session::new(&resolver);
        match session.step("12.5 chf CHF") {
            Step::Converted(conversion) => assert_eq!(conversion.converted, 12.5),
            other => panic!("unexpected step: {:?}", other),
        }
    }
}
