pub const REFERENCE_TIME_ENV: &str = "RANKING_NOW";

pub struct ScoringSettings {
    pub like_weight: f64,
    pub comment_weight: f64,
    pub daily_decay: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            like_weight: 2.0,
            comment_weight: 1.2,
            daily_decay: 0.8,
        }
    }
}

pub struct OutputSettings {
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { pretty: true }
    }
}

pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub output: OutputSettings,
    /// Fixed "now" for scoring; `None` means the wall clock.
    pub reference_time: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scoring: ScoringSettings::default(),
            output: OutputSettings::default(),
            reference_time: std::env::var(REFERENCE_TIME_ENV)
                .ok()
                .filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn with_reference_time(mut self, reference_time: Option<String>) -> Self {
        if reference_time.is_some() {
            self.reference_time = reference_time;
        }
        self
    }

    pub fn with_pretty_output(mut self, pretty: bool) -> Self {
        self.output.pretty = pretty;
        self
    }
}
