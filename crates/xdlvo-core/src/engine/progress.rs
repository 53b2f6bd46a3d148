use std::fmt;

/// A step of an assessment, in the order the workflow completes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Surface energy of `surface` resolved, either fitted from contact angles or taken as given.
    Surface { surface: &'static str },
    FreeEnergy,
    Profile,
    Analysis,
}

impl Stage {
    /// Stages in one assessment: membrane, foulant, ΔG, profile, analysis.
    pub const PER_ASSESSMENT: u64 = 5;
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Surface { surface } => write!(f, "{} surface energy", surface),
            Stage::FreeEnergy => f.write_str("free energy at contact"),
            Stage::Profile => f.write_str("interaction-energy profile"),
            Stage::Analysis => f.write_str("profile analysis"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    Started { stages: u64 },
    Completed(Stage),
    /// A contact-angle fit solved to a negative square root; the squared components are kept.
    InconsistentFit {
        surface: &'static str,
        sqrt_plus: f64,
        sqrt_minus: f64,
    },
    Finished,
}

pub type ProgressCallback<'a> = Box<dyn Fn(&Progress) + Send + Sync + 'a>;

/// Hands assessment events to an optional observer.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    observer: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    /// A reporter that drops every event.
    pub fn new() -> Self {
        Self { observer: None }
    }

    pub fn with_callback(observer: ProgressCallback<'a>) -> Self {
        Self {
            observer: Some(observer),
        }
    }

    pub fn report(&self, event: Progress) {
        if let Some(observer) = self.observer.as_ref() {
            observer(&event);
        }
    }

    pub fn completed(&self, stage: Stage) {
        self.report(Progress::Completed(stage));
    }
}
