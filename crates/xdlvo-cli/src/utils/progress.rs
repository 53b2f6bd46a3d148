use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;
use xdlvo::engine::progress::{Progress, ProgressCallback};

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const STAGE_TEMPLATE: &str = "{spinner:.green} Assessment [{bar:25.cyan/blue}] {pos}/{len} {msg}";

/// Renders the stages of an assessment as a single bar on stderr.
#[derive(Clone)]
pub struct CliProgressHandler {
    bar: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Handler that tracks stages without drawing anything, for `--quiet` runs.
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let style = ProgressStyle::with_template(STAGE_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        let bar = ProgressBar::with_draw_target(Some(0), target).with_style(style);
        Self { bar }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let bar = self.bar.clone();
        Box::new(move |event: &Progress| match event {
            Progress::Started { stages } => {
                bar.reset();
                bar.set_length(*stages);
                bar.set_message("resolving surface energies");
                bar.enable_steady_tick(TICK_INTERVAL);
            }
            Progress::Completed(stage) => {
                bar.inc(1);
                bar.set_message(format!("{} ✓", stage));
            }
            Progress::InconsistentFit {
                surface,
                sqrt_plus,
                sqrt_minus,
            } => bar.println(format!(
                "  ⚠ {} contact angles are inconsistent with the probe liquids \
                 (√γ+ = {:.4}, √γ- = {:.4}); squared components kept",
                surface, sqrt_plus, sqrt_minus
            )),
            Progress::Finished => {
                bar.disable_steady_tick();
                bar.finish_with_message("✓ Done");
            }
        })
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use xdlvo::engine::progress::Stage;

    #[test]
    fn bar_advances_once_per_completed_stage() {
        let handler = CliProgressHandler::hidden();
        let callback = handler.get_callback();

        callback(&Progress::Started {
            stages: Stage::PER_ASSESSMENT,
        });
        assert_eq!(handler.bar.length(), Some(Stage::PER_ASSESSMENT));
        assert_eq!(handler.bar.position(), 0);

        callback(&Progress::Completed(Stage::Surface {
            surface: "membrane",
        }));
        callback(&Progress::Completed(Stage::Surface { surface: "foulant" }));
        assert_eq!(handler.bar.position(), 2);
        assert_eq!(handler.bar.message(), "foulant surface energy ✓");
        assert!(!handler.bar.is_finished());

        callback(&Progress::Finished);
        assert!(handler.bar.is_finished());
        assert_eq!(handler.bar.message(), "✓ Done");
    }

    #[test]
    fn inconsistent_fit_does_not_advance_the_bar() {
        let handler = CliProgressHandler::hidden();
        let callback = handler.get_callback();

        callback(&Progress::Started { stages: 5 });
        callback(&Progress::InconsistentFit {
            surface: "membrane",
            sqrt_plus: -0.4,
            sqrt_minus: 5.1,
        });
        assert_eq!(handler.bar.position(), 0);
        assert_eq!(handler.bar.message(), "resolving surface energies");
    }

    #[test]
    fn callback_can_run_on_another_thread() {
        let handler = CliProgressHandler::hidden();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(&Progress::Started { stages: 1 });
            callback(&Progress::Completed(Stage::Analysis));
            callback(&Progress::Finished);
        })
        .join()
        .unwrap();

        assert!(handler.bar.is_finished());
        assert_eq!(handler.bar.position(), 1);
    }
}
