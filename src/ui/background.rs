// SPDX-License-Identifier: MPL-2.0
//! Decorative animated background.
//!
//! Cycles through a fixed set of gradients at a steady pace, purely for
//! looks. The cycle is driven by its own subscription tick and carries no
//! data dependency: it must never block or be blocked by the fetch
//! lifecycle.

use crate::ui::design_tokens::gradients;
use iced::widget::container;
use iced::{Background, Color, Radians, Theme};
use std::time::{Duration, Instant};

/// Tick interval for the background subscription.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Time spent blending from one gradient to the next.
const PHASE_DURATION: Duration = Duration::from_secs(3);

/// Timer-driven state of the gradient cycle.
#[derive(Debug, Clone, Default)]
pub struct Cycle {
    /// Index into the gradient palette.
    phase: usize,
    /// Blend position towards the next gradient, in `0.0..1.0`.
    progress: f32,
    last_tick: Option<Instant>,
}

impl Cycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the cycle to `now`. Wall-clock based so a starved event loop
    /// skips ahead instead of slowing the animation down.
    pub fn tick(&mut self, now: Instant) {
        let elapsed = match self.last_tick {
            Some(previous) => now.saturating_duration_since(previous),
            None => Duration::ZERO,
        };
        self.last_tick = Some(now);

        self.progress += elapsed.as_secs_f32() / PHASE_DURATION.as_secs_f32();
        while self.progress >= 1.0 {
            self.progress -= 1.0;
            self.phase = (self.phase + 1) % gradients::CYCLE.len();
        }
    }

    /// Current interpolated gradient stops.
    #[must_use]
    pub fn current_stops(&self) -> (Color, Color) {
        let (from_start, from_end) = gradients::CYCLE[self.phase];
        let (to_start, to_end) = gradients::CYCLE[(self.phase + 1) % gradients::CYCLE.len()];
        (
            lerp(from_start, to_start, self.progress),
            lerp(from_end, to_end, self.progress),
        )
    }

    /// Container style painting the current gradient, left to right.
    #[must_use]
    pub fn style(&self) -> impl Fn(&Theme) -> container::Style {
        let (start, end) = self.current_stops();
        move |_theme: &Theme| {
            let gradient = iced::gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_2))
                .add_stop(0.0, start)
                .add_stop(1.0, end);
            container::Style {
                background: Some(Background::Gradient(gradient.into())),
                ..container::Style::default()
            }
        }
    }

    #[cfg(test)]
    fn phase(&self) -> usize {
        self.phase
    }

    #[cfg(test)]
    fn progress(&self) -> f32 {
        self.progress
    }
}

/// Channel-wise linear interpolation between two colors.
fn lerp(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
        a: a.a + (b.a - a.a) * t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_does_not_advance() {
        let mut cycle = Cycle::new();
        cycle.tick(Instant::now());
        assert_eq!(cycle.phase(), 0);
        assert_eq!(cycle.progress(), 0.0);
    }

    #[test]
    fn phase_advances_after_phase_duration() {
        let mut cycle = Cycle::new();
        let start = Instant::now();
        cycle.tick(start);
        cycle.tick(start + PHASE_DURATION);
        assert_eq!(cycle.phase(), 1);
    }

    #[test]
    fn phase_wraps_around_the_palette() {
        let mut cycle = Cycle::new();
        let start = Instant::now();
        cycle.tick(start);
        cycle.tick(start + PHASE_DURATION * gradients::CYCLE.len() as u32);
        assert_eq!(cycle.phase(), 0);
    }

    #[test]
    fn long_stall_skips_ahead_without_overflow() {
        let mut cycle = Cycle::new();
        let start = Instant::now();
        cycle.tick(start);
        cycle.tick(start + PHASE_DURATION * 7 + PHASE_DURATION / 2);
        assert_eq!(cycle.phase(), 7 % gradients::CYCLE.len());
        assert!((cycle.progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn stops_at_progress_zero_match_palette() {
        let cycle = Cycle::new();
        let (start, end) = cycle.current_stops();
        assert_eq!(start, gradients::CYCLE[0].0);
        assert_eq!(end, gradients::CYCLE[0].1);
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = Color::from_rgb(0.0, 0.5, 1.0);
        let b = Color::from_rgb(1.0, 0.0, 0.25);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint_averages_channels() {
        let a = Color::from_rgb(0.0, 0.0, 0.0);
        let b = Color::from_rgb(1.0, 1.0, 1.0);
        let mid = lerp(a, b, 0.5);
        assert!((mid.r - 0.5).abs() < f32::EPSILON);
        assert!((mid.g - 0.5).abs() < f32::EPSILON);
    }
}
