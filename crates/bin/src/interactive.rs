//! Guided mode, used when no ticker source is given on the command line.
//!
//! Three steps: what to screen, optional threshold changes, output options.
//! Prompts go through [`Prompter`] so the flow can be driven by a script in
//! tests.

use crate::app::ScreenPlan;
use crate::config::CriteriaOverrides;
use crate::error::Result;
use bluechip::output::ReportStyle;
use bluechip::screen::ScreeningCriteria;
use bluechip::{DividendUniverse, Universe, UniverseKind, Watchlist, list_watchlists};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Export file used when the export prompt is left blank.
pub(crate) const DEFAULT_EXPORT_FILE: &str = "screener_results.csv";
/// Watchlist file used when the save prompt is left blank.
pub(crate) const DEFAULT_WATCHLIST_FILE: &str = "watchlist.txt";

/// Source of answers.
pub(crate) trait Prompter {
    /// Pick one of `items`, returning its index.
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize>;
    /// Free text, trimmed; may be empty.
    fn text(&mut self, prompt: &str) -> Result<String>;
    /// A number, `default` when left blank.
    fn number(&mut self, prompt: &str, default: f64) -> Result<f64>;
    /// Yes or no.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompts on stderr.
#[derive(Default)]
pub(crate) struct TermPrompter {
    theme: ColorfulTheme,
}

impl std::fmt::Debug for TermPrompter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermPrompter").finish_non_exhaustive()
    }
}

impl Prompter for TermPrompter {
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?)
    }

    fn text(&mut self, prompt: &str) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer.trim().to_string())
    }

    fn number(&mut self, prompt: &str, default: f64) -> Result<f64> {
        Ok(Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_text()?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}

const CHOICES: [&str; 5] = [
    "Enter custom stock tickers",
    "Screen Dividend Aristocrats (25+ years of dividend growth)",
    "Screen Dividend Kings (50+ years of dividend growth)",
    "Load from a watchlist file",
    "Exit",
];

fn heading(out: &mut dyn Write, title: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(60))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(60))?;
    Ok(())
}

/// Run the three steps. `None` means the user chose to exit or entered
/// nothing to screen.
///
/// `criteria` are the already-layered thresholds; answers in step 2 go on
/// top. Watchlist files are listed from `watchlist_dir`.
pub(crate) fn run_wizard(
    prompter: &mut dyn Prompter,
    criteria: ScreeningCriteria,
    watchlist_dir: &Path,
    out: &mut dyn Write,
) -> Result<Option<ScreenPlan>> {
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out, "Welcome to the Blue-Chip Dividend Stock Screener!")?;
    writeln!(out, "{}", "=".repeat(60))?;

    heading(out, "STEP 1: Choose what to screen")?;
    let Some(tickers) = choose_tickers(prompter, watchlist_dir, out)? else {
        return Ok(None);
    };

    heading(out, "STEP 2: Screening criteria (optional)")?;
    let criteria = customize_criteria(prompter, criteria)?;

    heading(out, "STEP 3: Output options")?;
    let style = if prompter.confirm("Show detailed analysis?", true)? {
        ReportStyle::Detailed
    } else {
        ReportStyle::Brief
    };
    let export = optional_file(
        prompter,
        "Export results to CSV?",
        "Enter filename (e.g., results.csv)",
        DEFAULT_EXPORT_FILE,
    )?;
    let save_watchlist = optional_file(
        prompter,
        "Save these tickers to a watchlist?",
        "Enter watchlist filename (e.g., my_stocks.txt)",
        DEFAULT_WATCHLIST_FILE,
    )?;

    Ok(Some(ScreenPlan {
        tickers,
        criteria,
        style,
        export,
        save_watchlist,
    }))
}

fn choose_tickers(
    prompter: &mut dyn Prompter,
    watchlist_dir: &Path,
    out: &mut dyn Write,
) -> Result<Option<Vec<String>>> {
    let items: Vec<String> = CHOICES.iter().map(ToString::to_string).collect();
    let tickers = match prompter.select("What would you like to screen?", &items, 0)? {
        0 => {
            let answer = prompter.text("Tickers separated by spaces (e.g., JNJ PG KO MSFT)")?;
            let symbols = answer.split(|c: char| c.is_whitespace() || c == ',');
            Watchlist::new("custom", symbols).symbols
        }
        1 => universe(UniverseKind::Aristocrats, out)?,
        2 => universe(UniverseKind::Kings, out)?,
        3 => match choose_watchlist_file(prompter, watchlist_dir)? {
            Some(path) => Watchlist::read(&path)?.symbols,
            None => Vec::new(),
        },
        _ => {
            writeln!(out, "Goodbye!")?;
            return Ok(None);
        }
    };

    if tickers.is_empty() {
        writeln!(out, "No tickers entered. Exiting.")?;
        return Ok(None);
    }
    Ok(Some(tickers))
}

fn universe(kind: UniverseKind, out: &mut dyn Write) -> Result<Vec<String>> {
    let universe = DividendUniverse::new(kind);
    writeln!(out, "\nScreening {} {}", universe.size(), kind.name())?;
    Ok(universe.symbols())
}

fn choose_watchlist_file(prompter: &mut dyn Prompter, dir: &Path) -> Result<Option<PathBuf>> {
    // An unreadable directory just means there is nothing to offer
    let files = list_watchlists(dir).unwrap_or_default();

    if !files.is_empty() {
        let mut items: Vec<String> = files
            .iter()
            .map(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
            .collect();
        items.push("Enter custom filename".to_string());

        let choice = prompter.select("Choose a watchlist file", &items, 0)?;
        if let Some(path) = files.get(choice) {
            return Ok(Some(path.clone()));
        }
    }

    let name = prompter.text("Enter watchlist filename")?;
    Ok((!name.is_empty()).then(|| PathBuf::from(name)))
}

fn customize_criteria(
    prompter: &mut dyn Prompter,
    mut criteria: ScreeningCriteria,
) -> Result<ScreeningCriteria> {
    if !prompter.confirm("Customize the screening criteria?", false)? {
        return Ok(criteria);
    }

    let overrides = CriteriaOverrides {
        min_yield: Some(prompter.number("Minimum dividend yield %", criteria.min_dividend_yield)?),
        max_pe: Some(prompter.number("Maximum P/E ratio", criteria.max_pe_ratio)?),
        min_roic: Some(prompter.number("Minimum ROIC %", criteria.min_roic)?),
    };
    overrides.apply(&mut criteria);
    criteria.validate().map_err(bluechip::ScreenError::from)?;
    Ok(criteria)
}

fn optional_file(
    prompter: &mut dyn Prompter,
    question: &str,
    filename_prompt: &str,
    fallback: &str,
) -> Result<Option<PathBuf>> {
    if !prompter.confirm(question, false)? {
        return Ok(None);
    }
    let name = prompter.text(filename_prompt)?;
    let name = if name.is_empty() { fallback.to_string() } else { name };
    Ok(Some(PathBuf::from(name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::collections::VecDeque;

    /// Canned answers, consumed in order.
    #[derive(Debug)]
    pub(crate) enum Answer {
        Select(usize),
        Text(&'static str),
        Number(f64),
        Confirm(bool),
    }

    #[derive(Debug, Default)]
    pub(crate) struct ScriptedPrompter {
        answers: VecDeque<Answer>,
        pub(crate) prompts: Vec<String>,
    }

    impl ScriptedPrompter {
        pub(crate) fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
            Self {
                answers: answers.into_iter().collect(),
                prompts: Vec::new(),
            }
        }

        fn next(&mut self, prompt: &str) -> Answer {
            self.prompts.push(prompt.to_string());
            self.answers
                .pop_front()
                .unwrap_or_else(|| panic!("no scripted answer for '{prompt}'"))
        }
    }

    impl Prompter for ScriptedPrompter {
        fn select(&mut self, prompt: &str, items: &[String], _default: usize) -> Result<usize> {
            match self.next(prompt) {
                Answer::Select(i) => {
                    assert!(i < items.len(), "choice {i} out of range for '{prompt}'");
                    Ok(i)
                }
                other => panic!("expected a selection for '{prompt}', got {other:?}"),
            }
        }

        fn text(&mut self, prompt: &str) -> Result<String> {
            match self.next(prompt) {
                Answer::Text(s) => Ok(s.trim().to_string()),
                other => panic!("expected text for '{prompt}', got {other:?}"),
            }
        }

        fn number(&mut self, prompt: &str, _default: f64) -> Result<f64> {
            match self.next(prompt) {
                Answer::Number(n) => Ok(n),
                other => panic!("expected a number for '{prompt}', got {other:?}"),
            }
        }

        fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool> {
            match self.next(prompt) {
                Answer::Confirm(b) => Ok(b),
                other => panic!("expected yes/no for '{prompt}', got {other:?}"),
            }
        }
    }

    fn wizard(answers: Vec<Answer>, dir: &Path) -> (Option<ScreenPlan>, String) {
        let mut prompter = ScriptedPrompter::new(answers);
        let mut out: Vec<u8> = Vec::new();
        let plan = run_wizard(&mut prompter, ScreeningCriteria::default(), dir, &mut out).unwrap();
        (plan, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_custom_tickers_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (plan, text) = wizard(
            vec![
                Answer::Select(0),
                Answer::Text("jnj pg, ko  JNJ"),
                Answer::Confirm(false),
                Answer::Confirm(true),
                Answer::Confirm(false),
                Answer::Confirm(false),
            ],
            dir.path(),
        );
        let plan = plan.unwrap();
        assert_eq!(plan.tickers, ["JNJ", "PG", "KO"]);
        assert_eq!(plan.criteria, ScreeningCriteria::default());
        assert_eq!(plan.style, ReportStyle::Detailed);
        assert!(plan.export.is_none());
        assert!(plan.save_watchlist.is_none());
        assert!(text.contains("STEP 1"));
        assert!(text.contains("STEP 3"));
    }

    #[test]
    fn test_kings_with_custom_criteria_and_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let (plan, text) = wizard(
            vec![
                Answer::Select(2),
                Answer::Confirm(true),
                Answer::Number(2.5),
                Answer::Number(20.0),
                Answer::Number(10.0),
                Answer::Confirm(false),
                Answer::Confirm(true),
                Answer::Text(""),
                Answer::Confirm(true),
                Answer::Text("mine.txt"),
            ],
            dir.path(),
        );
        let plan = plan.unwrap();
        assert_eq!(plan.tickers.len(), 10);
        assert_eq!(plan.tickers[0], "PG");
        assert!(text.contains("Screening 10 Dividend Kings"));
        assert_eq!(plan.criteria.min_dividend_yield, 2.5);
        assert_eq!(plan.criteria.max_pe_ratio, 20.0);
        assert_eq!(plan.criteria.min_roic, 10.0);
        assert_eq!(plan.style, ReportStyle::Brief);
        assert_eq!(plan.export, Some(PathBuf::from(DEFAULT_EXPORT_FILE)));
        assert_eq!(plan.save_watchlist, Some(PathBuf::from("mine.txt")));
    }

    #[test]
    fn test_watchlist_picked_from_listing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("income.txt"), "O\nJNJ\n").unwrap();
        std::fs::write(dir.path().join("tech.txt"), "MSFT\n").unwrap();

        let mut prompter = ScriptedPrompter::new([
            Answer::Select(3),
            Answer::Select(0),
            Answer::Confirm(false),
            Answer::Confirm(true),
            Answer::Confirm(false),
            Answer::Confirm(false),
        ]);
        let mut out: Vec<u8> = Vec::new();
        let plan = run_wizard(
            &mut prompter,
            ScreeningCriteria::default(),
            dir.path(),
            &mut out,
        )
        .unwrap()
        .unwrap();
        assert_eq!(plan.tickers, ["O", "JNJ"]);
        assert_eq!(prompter.prompts[1], "Choose a watchlist file");
    }

    #[test]
    fn test_missing_watchlist_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut prompter =
            ScriptedPrompter::new([Answer::Select(3), Answer::Text("does-not-exist.txt")]);
        let err = run_wizard(
            &mut prompter,
            ScreeningCriteria::default(),
            dir.path(),
            &mut Vec::<u8>::new(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_exit_and_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let (plan, text) = wizard(vec![Answer::Select(4)], dir.path());
        assert!(plan.is_none());
        assert!(text.contains("Goodbye!"));

        let (plan, text) = wizard(vec![Answer::Select(0), Answer::Text("   ")], dir.path());
        assert!(plan.is_none());
        assert!(text.contains("No tickers entered"));
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut prompter = ScriptedPrompter::new([
            Answer::Select(1),
            Answer::Confirm(true),
            Answer::Number(9.0),
            Answer::Number(25.0),
            Answer::Number(12.0),
        ]);
        let result = run_wizard(
            &mut prompter,
            ScreeningCriteria::default(),
            dir.path(),
            &mut Vec::<u8>::new(),
        );
        assert!(matches!(
            result,
            Err(CliError::Screen(bluechip::ScreenError::Configuration(_)))
        ));
    }
}
