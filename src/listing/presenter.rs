//! Presentation orchestrator
//!
//! Sequences one invocation: load, transform, branch selection, the
//! too-many-items confirmation gate, then sorted rendering. The gate is an
//! injected [`ConfirmationProvider`] and the sink any [`WriteColor`], so
//! the whole sequence runs under test without a terminal.

use std::io;

use log::debug;
use termcolor::WriteColor;

use crate::confirm::ConfirmationProvider;
use crate::output::{Theme, render};

use super::config::ListingConfig;
use super::loader::{self, Listing};
use super::pipeline::{Annotate, Annotated, SearchFilter, Stage, StageContext};

/// Prompt shown when a branch exceeds the configured item limit.
pub const CONFIRM_PROMPT: &str = "too many items. show these? [y-n] : ";

/// Drives one listing from raw filesystem entries to printed lines.
pub struct Presenter {
    config: ListingConfig,
    theme: Theme,
    stages: Vec<Box<dyn Stage>>,
}

impl Presenter {
    pub fn new(config: ListingConfig, theme: Theme) -> Self {
        Self {
            config,
            theme,
            stages: vec![Box::new(Annotate), Box::new(SearchFilter)],
        }
    }

    /// Append a content transform after the built-in stages.
    pub fn with_stage(mut self, stage: Box<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Run the full sequence. Returns `Err` only for the fatal
    /// not-a-directory precondition or a failing sink; a declined gate is
    /// success with no output.
    pub fn run<W: WriteColor>(
        &self,
        confirmer: &mut dyn ConfirmationProvider,
        out: &mut W,
    ) -> io::Result<()> {
        let listing = loader::load_items(&self.config)?;
        let (dirs, files) = self.transform(listing);
        let (mut dirs, mut files) = self.select_branches(dirs, files);

        let count = dirs.len() + files.len();
        if count > self.config.item_limit && !confirmer.confirm(CONFIRM_PROMPT, count) {
            debug!("listing of {} items suppressed at the gate", count);
            return Ok(());
        }

        dirs.sort_by(|a, b| a.item.name.cmp(&b.item.name));
        files.sort_by(|a, b| a.item.name.cmp(&b.item.name));
        for annotated in dirs.iter().chain(files.iter()) {
            render::write_item(out, annotated, &self.theme)?;
        }
        Ok(())
    }

    /// Push both branches through the stage chain.
    fn transform(&self, listing: Listing) -> (Vec<Annotated>, Vec<Annotated>) {
        let ctx = StageContext {
            search_word: self.config.search_word.clone(),
        };
        let dirs = self.run_stages(
            listing.dirs.into_iter().map(Annotated::from_item).collect(),
            ctx.clone(),
        );
        let files = self.run_stages(
            listing.files.into_iter().map(Annotated::from_item).collect(),
            ctx,
        );
        (dirs, files)
    }

    fn run_stages(&self, mut items: Vec<Annotated>, mut ctx: StageContext) -> Vec<Annotated> {
        for stage in &self.stages {
            (items, ctx) = stage.apply(items, ctx);
        }
        items
    }

    /// Apply the kind filters. Rule: when both `only_directories` and
    /// `only_files` are set, directories win and the files branch is
    /// dropped.
    fn select_branches(
        &self,
        dirs: Vec<Annotated>,
        files: Vec<Annotated>,
    ) -> (Vec<Annotated>, Vec<Annotated>) {
        if self.config.only_directories {
            (dirs, Vec::new())
        } else if self.config.only_files {
            (Vec::new(), files)
        } else {
            (dirs, files)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;
    use termcolor::Buffer;

    use crate::description::SIDECAR_NAME;

    use super::*;

    /// Gate double that answers from a script and records how often it was
    /// asked.
    struct ScriptedConfirmer {
        answer: bool,
        asked: usize,
    }

    impl ScriptedConfirmer {
        fn answering(answer: bool) -> Self {
            Self { answer, asked: 0 }
        }

        fn times_asked(&self) -> usize {
            self.asked
        }
    }

    impl ConfirmationProvider for ScriptedConfirmer {
        fn confirm(&mut self, _prompt: &str, _count: usize) -> bool {
            self.asked += 1;
            self.answer
        }
    }

    fn sample_tree() -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("a")).expect("Failed to create a/");
        fs::write(dir.path().join("a").join(SIDECAR_NAME), "first module")
            .expect("Failed to write sidecar");
        fs::create_dir(dir.path().join("b")).expect("Failed to create b/");
        fs::write(dir.path().join("c.txt"), "x").expect("Failed to write c.txt");
        dir
    }

    fn run_in(dir: &Path, config: ListingConfig, confirmer: &mut dyn ConfirmationProvider) -> String {
        let config = ListingConfig {
            dir: dir.to_path_buf(),
            ..config
        };
        let presenter = Presenter::new(config, Theme::plain());
        let mut out = Buffer::no_color();
        presenter.run(confirmer, &mut out).expect("run should succeed");
        String::from_utf8(out.into_inner()).expect("output should be utf-8")
    }

    #[test]
    fn test_default_listing_renders_dirs_then_files_sorted() {
        let dir = sample_tree();
        let mut confirmer = ScriptedConfirmer::answering(false);
        let output = run_in(dir.path(), ListingConfig::default(), &mut confirmer);

        assert_eq!(
            output,
            " ── a / first module\n ── b / Dir\n ── c.txt / File\n"
        );
        assert_eq!(confirmer.times_asked(), 0, "no gate under the limit");
    }

    #[test]
    fn test_only_directories_hides_files() {
        let dir = sample_tree();
        let config = ListingConfig {
            only_directories: true,
            ..Default::default()
        };
        let output = run_in(dir.path(), config, &mut ScriptedConfirmer::answering(true));

        assert!(output.contains(" ── a /"));
        assert!(!output.contains("c.txt"));
    }

    #[test]
    fn test_only_files_hides_directories() {
        let dir = sample_tree();
        let config = ListingConfig {
            only_files: true,
            ..Default::default()
        };
        let output = run_in(dir.path(), config, &mut ScriptedConfirmer::answering(true));

        assert_eq!(output, " ── c.txt / File\n");
    }

    #[test]
    fn test_both_kind_flags_directories_win() {
        let dir = sample_tree();
        let config = ListingConfig {
            only_directories: true,
            only_files: true,
            ..Default::default()
        };
        let output = run_in(dir.path(), config, &mut ScriptedConfirmer::answering(true));

        assert!(output.contains(" ── a /"));
        assert!(output.contains(" ── b /"));
        assert!(!output.contains("c.txt"));
    }

    #[test]
    fn test_search_filters_both_branches() {
        let dir = sample_tree();
        let config = ListingConfig {
            search_word: Some("first".to_string()),
            ..Default::default()
        };
        let output = run_in(dir.path(), config, &mut ScriptedConfirmer::answering(true));

        assert_eq!(output, " ── a / first module\n");
    }

    #[test]
    fn test_gate_not_asked_at_exact_limit() {
        let dir = sample_tree();
        let config = ListingConfig {
            item_limit: 3,
            ..Default::default()
        };
        let mut confirmer = ScriptedConfirmer::answering(false);
        let output = run_in(dir.path(), config, &mut confirmer);

        assert_eq!(confirmer.times_asked(), 0, "count == limit must not prompt");
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_gate_declined_suppresses_output() {
        let dir = sample_tree();
        let config = ListingConfig {
            item_limit: 2,
            ..Default::default()
        };
        let mut confirmer = ScriptedConfirmer::answering(false);
        let output = run_in(dir.path(), config, &mut confirmer);

        assert_eq!(confirmer.times_asked(), 1);
        assert!(output.is_empty(), "declined gate renders nothing: {output:?}");
    }

    #[test]
    fn test_gate_accepted_renders_everything_sorted() {
        let dir = sample_tree();
        let config = ListingConfig {
            item_limit: 2,
            ..Default::default()
        };
        let mut confirmer = ScriptedConfirmer::answering(true);
        let output = run_in(dir.path(), config, &mut confirmer);

        assert_eq!(confirmer.times_asked(), 1);
        assert_eq!(
            output,
            " ── a / first module\n ── b / Dir\n ── c.txt / File\n"
        );
    }

    #[test]
    fn test_gate_counts_the_filtered_set() {
        let dir = sample_tree();
        let config = ListingConfig {
            search_word: Some("first".to_string()),
            item_limit: 2,
            ..Default::default()
        };
        let mut confirmer = ScriptedConfirmer::answering(false);
        let output = run_in(dir.path(), config, &mut confirmer);

        // Three children, but only one survives the search filter
        assert_eq!(confirmer.times_asked(), 0);
        assert_eq!(output, " ── a / first module\n");
    }

    #[test]
    fn test_gate_counts_selected_branch_only() {
        let dir = sample_tree();
        let config = ListingConfig {
            only_files: true,
            item_limit: 1,
            ..Default::default()
        };
        let mut confirmer = ScriptedConfirmer::answering(false);
        let output = run_in(dir.path(), config, &mut confirmer);

        // Two directories exist, but only the single file counts against
        // the limit
        assert_eq!(confirmer.times_asked(), 0);
        assert_eq!(output, " ── c.txt / File\n");
    }

    #[test]
    fn test_empty_directory_renders_nothing() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let output = run_in(
            dir.path(),
            ListingConfig::default(),
            &mut ScriptedConfirmer::answering(false),
        );
        assert!(output.is_empty());
    }

    #[test]
    fn test_extra_stage_composes_without_presenter_changes() {
        struct DropEverything;
        impl Stage for DropEverything {
            fn apply(
                &self,
                _items: Vec<Annotated>,
                ctx: StageContext,
            ) -> (Vec<Annotated>, StageContext) {
                (Vec::new(), ctx)
            }
        }

        let dir = sample_tree();
        let config = ListingConfig {
            dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let presenter =
            Presenter::new(config, Theme::plain()).with_stage(Box::new(DropEverything));
        let mut out = Buffer::no_color();
        presenter
            .run(&mut ScriptedConfirmer::answering(true), &mut out)
            .expect("run should succeed");

        assert!(out.into_inner().is_empty());
    }

    #[test]
    fn test_fatal_error_propagates() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = ListingConfig {
            dir: dir.path().join("missing"),
            ..Default::default()
        };
        let presenter = Presenter::new(config, Theme::plain());
        let mut out = Buffer::no_color();
        let result = presenter.run(&mut ScriptedConfirmer::answering(true), &mut out);
        assert!(result.is_err());
    }
}
