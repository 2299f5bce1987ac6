//! Declarative animation descriptions rendered to CSS.
//!
//! A [`Tween`] names a property sequence, a duration and a repeat policy.
//! Components inject [`Tween::keyframes_css`] once and reference the
//! animation through [`Tween::animation_css`]; the browser does the frame work.

use std::fmt::Write as _;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub scale: Option<f32>,
    pub opacity: Option<f32>,
    pub translate_y_px: Option<f32>,
}

impl Frame {
    pub const fn new() -> Self {
        Self {
            scale: None,
            opacity: None,
            translate_y_px: None,
        }
    }

    pub const fn scale(mut self, value: f32) -> Self {
        self.scale = Some(value);
        self
    }

    pub const fn opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    pub const fn translate_y(mut self, px: f32) -> Self {
        self.translate_y_px = Some(px);
        self
    }

    fn declarations(&self) -> String {
        let mut out = String::new();
        let mut transforms = Vec::new();
        if let Some(px) = self.translate_y_px {
            transforms.push(format!("translateY({px}px)"));
        }
        if let Some(scale) = self.scale {
            transforms.push(format!("scale({scale})"));
        }
        if !transforms.is_empty() {
            let _ = write!(out, "transform: {};", transforms.join(" "));
        }
        if let Some(opacity) = self.opacity {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "opacity: {opacity};");
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Normal,
    /// Every other iteration plays backwards.
    Alternate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub name: &'static str,
    pub frames: Vec<Frame>,
    pub duration: Duration,
    pub easing: Easing,
    pub repeat: Repeat,
    pub direction: Direction,
}

impl Tween {
    /// `@keyframes` block with the frames spread evenly from 0% to 100%.
    pub fn keyframes_css(&self) -> String {
        let mut css = format!("@keyframes {} {{", self.name);
        let last = self.frames.len().saturating_sub(1).max(1);
        for (index, frame) in self.frames.iter().enumerate() {
            let offset = index * 100 / last;
            let _ = write!(css, " {offset}% {{ {} }}", frame.declarations());
        }
        css.push_str(" }");
        css
    }

    /// Value for the `animation` shorthand property.
    pub fn animation_css(&self) -> String {
        let mut value = format!(
            "{} {} {}",
            self.name,
            format_seconds(self.duration),
            self.easing.css()
        );
        match self.repeat {
            Repeat::Once => value.push_str(" 1 both"),
            Repeat::Forever => value.push_str(" infinite"),
        }
        if self.direction == Direction::Alternate {
            value.push_str(" alternate");
        }
        value
    }
}

/// CSS seconds literal without trailing zeros (`8s`, `0.6s`).
pub fn format_seconds(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis % 1000 == 0 {
        format!("{}s", millis / 1000)
    } else {
        let text = format!("{:.3}", duration.as_secs_f64());
        format!("{}s", text.trim_end_matches('0'))
    }
}

/// Slow breathing pulse for the animated backdrop blob.
pub fn ambient_glow() -> Tween {
    Tween {
        name: "ambient-glow",
        frames: vec![
            Frame::new().scale(1.0).opacity(0.3),
            Frame::new().scale(1.05).opacity(0.4),
            Frame::new().scale(1.0).opacity(0.3),
        ],
        duration: Duration::from_secs(8),
        easing: Easing::EaseInOut,
        repeat: Repeat::Forever,
        direction: Direction::Alternate,
    }
}

/// One-shot fade-and-rise used when a block first appears.
pub fn reveal(name: &'static str, duration: Duration, rise_px: f32) -> Tween {
    Tween {
        name,
        frames: vec![
            Frame::new().opacity(0.0).translate_y(rise_px),
            Frame::new().opacity(1.0).translate_y(0.0),
        ],
        duration,
        easing: Easing::EaseOut,
        repeat: Repeat::Once,
        direction: Direction::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_pulse_contract() {
        let glow = ambient_glow();
        assert_eq!(glow.duration, Duration::from_secs(8));
        assert_eq!(glow.animation_css(), "ambient-glow 8s ease-in-out infinite alternate");

        let scales: Vec<_> = glow.frames.iter().filter_map(|f| f.scale).collect();
        let opacities: Vec<_> = glow.frames.iter().filter_map(|f| f.opacity).collect();
        assert_eq!(scales, vec![1.0, 1.05, 1.0]);
        assert_eq!(opacities, vec![0.3, 0.4, 0.3]);
    }

    #[test]
    fn keyframes_spread_evenly() {
        let css = ambient_glow().keyframes_css();
        assert!(css.starts_with("@keyframes ambient-glow {"));
        assert!(css.contains("0% { transform: scale(1); opacity: 0.3; }"));
        assert!(css.contains("50% { transform: scale(1.05); opacity: 0.4; }"));
        assert!(css.contains("100% { transform: scale(1); opacity: 0.3; }"));
    }

    #[test]
    fn reveal_plays_once_and_holds() {
        let fade = reveal("reveal-heading", Duration::from_millis(600), 20.0);
        assert_eq!(fade.animation_css(), "reveal-heading 0.6s ease-out 1 both");
        assert!(fade
            .keyframes_css()
            .contains("0% { transform: translateY(20px); opacity: 0; }"));
    }

    #[test]
    fn seconds_format() {
        assert_eq!(format_seconds(Duration::from_secs(12)), "12s");
        assert_eq!(format_seconds(Duration::from_millis(800)), "0.8s");
        assert_eq!(format_seconds(Duration::from_millis(1250)), "1.25s");
    }
}
