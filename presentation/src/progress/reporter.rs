//! Progress reporting for fan-out execution

use colored::Colorize;
use fanout_application::ProgressNotifier;
use fanout_domain::Phase;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::{Mutex, PoisonError};

/// Bar for the phase currently running, plus the labels it has finished
struct PhaseState {
    bar: ProgressBar,
    done: Vec<String>,
    failed: bool,
}

/// Shows one progress bar per fan-out phase.
///
/// The strategies phase lists the strategies that have answered so far; a
/// failed task leaves the bar abandoned with the failing label in red.
pub struct ProgressReporter {
    multi: MultiProgress,
    current: Mutex<Option<PhaseState>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        Self {
            multi: MultiProgress::with_draw_target(target),
            current: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn prefix(phase: &Phase) -> String {
        let step = match phase {
            Phase::Strategies => 1,
            Phase::Comparison => 2,
        };
        format!("[{}/2] {}", step, phase.display_name())
    }

    /// Labels completed in the running phase, in completion order
    pub fn completed(&self) -> Vec<String> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|state| state.done.clone())
            .unwrap_or_default()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        let bar = self.multi.add(ProgressBar::new(total_tasks as u64));
        bar.set_style(Self::style());
        bar.set_prefix(Self::prefix(phase));
        bar.set_message("waiting for upstream...");

        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Some(PhaseState {
            bar,
            done: Vec::new(),
            failed: false,
        });
    }

    fn on_task_complete(&self, _phase: &Phase, label: &str, success: bool) {
        let mut guard = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(state) = guard.as_mut() else {
            return;
        };

        if success {
            state.done.push(label.to_string());
            state.bar.set_message(state.done.join(", "));
            state.bar.inc(1);
        } else {
            state.failed = true;
            state
                .bar
                .abandon_with_message(format!("{} {}", "failed:".red().bold(), label));
        }
    }

    fn on_phase_complete(&self, phase: &Phase) {
        if let Some(state) = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            && !state.failed
        {
            state
                .bar
                .finish_with_message(format!("{} done", phase.as_str().green()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden() -> ProgressReporter {
        ProgressReporter::with_draw_target(ProgressDrawTarget::hidden())
    }

    #[test]
    fn test_prefix_names_the_phase() {
        assert_eq!(
            ProgressReporter::prefix(&Phase::Strategies),
            "[1/2] Strategy Prompts"
        );
        assert_eq!(
            ProgressReporter::prefix(&Phase::Comparison),
            "[2/2] Comparative Analysis"
        );
    }

    #[test]
    fn test_tracks_completed_strategies() {
        let reporter = hidden();
        reporter.on_phase_start(&Phase::Strategies, 6);
        reporter.on_task_complete(&Phase::Strategies, "react", true);
        reporter.on_task_complete(&Phase::Strategies, "zero_shot", true);

        assert_eq!(reporter.completed(), vec!["react", "zero_shot"]);

        reporter.on_phase_complete(&Phase::Strategies);
        assert!(reporter.completed().is_empty());
    }

    #[test]
    fn test_failed_task_is_not_counted() {
        let reporter = hidden();
        reporter.on_phase_start(&Phase::Strategies, 6);
        reporter.on_task_complete(&Phase::Strategies, "few_shot", false);

        assert!(reporter.completed().is_empty());
    }

    #[test]
    fn test_events_without_phase_are_ignored() {
        let reporter = hidden();
        reporter.on_task_complete(&Phase::Comparison, "openai/gpt-4o-mini", true);
        reporter.on_phase_complete(&Phase::Comparison);

        assert!(reporter.completed().is_empty());
    }
}
