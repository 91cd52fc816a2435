//! Widget options.
//!
//! Every option is optional; hosts usually start from `CarouselConfig::default()`
//! and chain the builder methods, or load the same table from JSON:
//!
//! ```rust
//! use glide_carousel::CarouselConfig;
//!
//! let cfg = CarouselConfig::from_json(r#"{ "infinite": true, "slidesPerView": 2 }"#).unwrap();
//! assert!(cfg.infinite);
//! assert_eq!(cfg.speed, 400);
//! ```

use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::ConfigError;

pub const DEFAULT_SPEED_MS: u32 = 400;
pub const DEFAULT_AUTOPLAY_MS: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Clone-based seamless looping.
    #[serde(alias = "infinitive")]
    pub infinite: bool,
    /// Indicator dots wired to `go_to_index`.
    #[serde(alias = "dot")]
    pub show_dots: bool,
    /// Prev/next controls wired to `go_previous` / `go_next`.
    #[serde(alias = "nav")]
    pub show_nav: bool,
    pub autoplay: bool,
    /// Animation duration in ms for navigation and gesture release.
    pub speed: u32,
    /// Interval in ms between automatic advances.
    pub autoplay_duration: u32,
    /// Items visible at once; also the number of clones on each side.
    pub slides_per_view: usize,
    /// Gutter in px between adjacent items.
    pub space_between: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            infinite: false,
            show_dots: false,
            show_nav: false,
            autoplay: false,
            speed: DEFAULT_SPEED_MS,
            autoplay_duration: DEFAULT_AUTOPLAY_MS,
            slides_per_view: 1,
            space_between: 0.0,
        }
    }
}

impl CarouselConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slides_per_view == 0 {
            return Err(ConfigError::ZeroSlidesPerView);
        }
        if self.autoplay && self.autoplay_duration == 0 {
            return Err(ConfigError::ZeroAutoplayDuration);
        }
        if !self.space_between.is_finite() || self.space_between < 0.0 {
            return Err(ConfigError::InvalidSpacing(self.space_between));
        }
        Ok(())
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_duration as u64)
    }

    pub fn infinite(mut self, on: bool) -> Self {
        self.infinite = on;
        self
    }
    pub fn show_dots(mut self, on: bool) -> Self {
        self.show_dots = on;
        self
    }
    pub fn show_nav(mut self, on: bool) -> Self {
        self.show_nav = on;
        self
    }
    pub fn autoplay(mut self, on: bool) -> Self {
        self.autoplay = on;
        self
    }
    pub fn speed(mut self, ms: u32) -> Self {
        self.speed = ms;
        self
    }
    pub fn autoplay_duration(mut self, ms: u32) -> Self {
        self.autoplay_duration = ms;
        self
    }
    pub fn slides_per_view(mut self, n: usize) -> Self {
        self.slides_per_view = n;
        self
    }
    pub fn space_between(mut self, px: f32) -> Self {
        self.space_between = px;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_option_table() {
        let cfg = CarouselConfig::default();
        assert!(!cfg.infinite);
        assert!(!cfg.show_dots);
        assert!(!cfg.show_nav);
        assert!(!cfg.autoplay);
        assert_eq!(cfg.speed, 400);
        assert_eq!(cfg.autoplay_duration, 1000);
        assert_eq!(cfg.slides_per_view, 1);
        assert_eq!(cfg.space_between, 0.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_json_camel_case_and_partial() {
        let cfg = CarouselConfig::from_json(
            r#"{ "showDots": true, "autoplayDuration": 2500, "spaceBetween": 12 }"#,
        )
        .unwrap();
        assert!(cfg.show_dots);
        assert_eq!(cfg.autoplay_duration, 2500);
        assert_eq!(cfg.space_between, 12.0);
        assert_eq!(cfg.speed, DEFAULT_SPEED_MS);
    }

    #[test]
    fn test_json_accepts_legacy_prop_names() {
        let cfg = CarouselConfig::from_json(r#"{ "infinitive": true, "dot": true, "nav": true }"#)
            .unwrap();
        assert!(cfg.infinite && cfg.show_dots && cfg.show_nav);
    }

    #[test]
    fn test_json_round_trips_through_serde() {
        let cfg = CarouselConfig::default().infinite(true).slides_per_view(3);
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"slidesPerView\":3"));
        assert_eq!(CarouselConfig::from_json(&json).unwrap(), cfg);
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            CarouselConfig::default().slides_per_view(0).validate(),
            Err(ConfigError::ZeroSlidesPerView)
        ));
        assert!(matches!(
            CarouselConfig::default()
                .autoplay(true)
                .autoplay_duration(0)
                .validate(),
            Err(ConfigError::ZeroAutoplayDuration)
        ));
        // disabled autoplay does not care about its interval
        assert!(
            CarouselConfig::default()
                .autoplay_duration(0)
                .validate()
                .is_ok()
        );
        assert!(matches!(
            CarouselConfig::default().space_between(-1.0).validate(),
            Err(ConfigError::InvalidSpacing(_))
        ));
        assert!(matches!(
            CarouselConfig::from_json("{ \"speed\": \"fast\" }"),
            Err(ConfigError::Json(_))
        ));
    }
}
