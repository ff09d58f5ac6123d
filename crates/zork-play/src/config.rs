//! Configuration for play and editor sessions.

/// Configuration shared by play and editor sessions.
#[derive(Debug, Clone)]
pub struct PlayConfig {
    /// Write the tree back to its file when the editor quits.
    pub save_on_quit: bool,
    /// Decimal places shown for the win probability.
    pub probability_precision: usize,
    /// Show child positions next to their options in the editor.
    pub show_positions: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            save_on_quit: true,
            probability_precision: 2,
            show_positions: true,
        }
    }
}

impl PlayConfig {
    /// Enable or disable saving when the editor quits.
    pub fn with_save_on_quit(mut self, save: bool) -> Self {
        self.save_on_quit = save;
        self
    }

    /// Set the number of decimal places for probabilities (at most 6).
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.probability_precision = precision.min(6);
        self
    }

    /// Show or hide child positions in editor listings.
    pub fn with_positions(mut self, show: bool) -> Self {
        self.show_positions = show;
        self
    }

    pub(crate) fn format_probability(&self, percent: f64) -> String {
        format!("{percent:.*}%", self.probability_precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = PlayConfig::default();
        assert!(cfg.save_on_quit);
        assert_eq!(cfg.probability_precision, 2);
        assert!(cfg.show_positions);
    }

    #[test]
    fn builder_methods() {
        let cfg = PlayConfig::default()
            .with_save_on_quit(false)
            .with_precision(1)
            .with_positions(false);
        assert!(!cfg.save_on_quit);
        assert_eq!(cfg.probability_precision, 1);
        assert!(!cfg.show_positions);
    }

    #[test]
    fn precision_clamped() {
        let cfg = PlayConfig::default().with_precision(40);
        assert_eq!(cfg.probability_precision, 6);
    }

    #[test]
    fn formats_probability() {
        let cfg = PlayConfig::default();
        assert_eq!(cfg.format_probability(25.0), "25.00%");
        let cfg = cfg.with_precision(0);
        assert_eq!(cfg.format_probability(100.0 / 3.0), "33%");
    }
}
