use std::collections::HashSet;

use eframe::egui::{Context, Id, Pos2, Rect};

use crate::config::DF;

/// A section counts as seen once 10% of it sits inside the observation
/// window, which is the viewport with its bottom 50px shaved off so sections
/// reveal slightly after they scroll in.
pub const VISIBLE_FRACTION: f32 = 0.1;
pub const BOTTOM_MARGIN: f32 = 50.0;

const FADE_SECS: f32 = 0.5;

/// Tracks which page sections have scrolled into view. Reveals are one-way:
/// scrolling back out does not hide a section again.
#[derive(Default)]
pub struct RevealTracker {
    seen: HashSet<Id>,
}

impl RevealTracker {
    /// Current fade-in opacity for a section. Observation lags painting by
    /// one frame, which is invisible at interactive frame rates.
    pub fn opacity(&self, ctx: &Context, id_salt: &str) -> f32 {
        let id = Id::new(id_salt);
        ctx.animate_bool_with_time(id.with("reveal"), self.seen.contains(&id), FADE_SECS)
    }

    /// Feed back the rect a section occupied this frame.
    pub fn observe(&mut self, id_salt: &str, section: Rect, viewport: Rect) {
        let id = Id::new(id_salt);
        if self.seen.contains(&id) {
            return;
        }
        if visible_fraction(section, viewport, BOTTOM_MARGIN) >= VISIBLE_FRACTION {
            if DF.log_reveal {
                log::info!("section {id_salt} revealed");
            }
            self.seen.insert(id);
        }
    }
}

/// Fraction of `section` lying inside `viewport` after shaving
/// `bottom_margin` off the viewport's bottom edge.
pub fn visible_fraction(section: Rect, viewport: Rect, bottom_margin: f32) -> f32 {
    let window = Rect::from_min_max(
        viewport.min,
        Pos2::new(viewport.max.x, viewport.max.y - bottom_margin),
    );
    if !window.is_positive() || section.area() <= 0.0 {
        return 0.0;
    }
    let overlap = section.intersect(window);
    if !overlap.is_positive() {
        return 0.0;
    }
    overlap.area() / section.area()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f32, bottom: f32) -> Rect {
        Rect::from_min_max(Pos2::new(0.0, top), Pos2::new(100.0, bottom))
    }

    const VIEWPORT: Rect = Rect {
        min: Pos2::new(0.0, 0.0),
        max: Pos2::new(100.0, 600.0),
    };

    #[test]
    fn test_fully_visible_section() {
        assert_eq!(visible_fraction(rect(100.0, 200.0), VIEWPORT, 0.0), 1.0);
    }

    #[test]
    fn test_section_below_fold_is_invisible() {
        assert_eq!(visible_fraction(rect(700.0, 800.0), VIEWPORT, 0.0), 0.0);
    }

    #[test]
    fn test_half_visible_section() {
        // 100px tall, straddling the bottom edge by 50px.
        let frac = visible_fraction(rect(550.0, 650.0), VIEWPORT, 0.0);
        assert!((frac - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_bottom_margin_shrinks_the_window() {
        // Entirely inside the raw viewport, entirely inside the shaved-off
        // 50px strip: margin must suppress it.
        let section = rect(560.0, 600.0);
        assert_eq!(visible_fraction(section, VIEWPORT, 0.0), 1.0);
        assert_eq!(visible_fraction(section, VIEWPORT, BOTTOM_MARGIN), 0.0);
    }

    #[test]
    fn test_threshold_fraction_counts_as_seen() {
        // 10% of a 100px section peeking above the margin line.
        let frac = visible_fraction(rect(540.0, 640.0), VIEWPORT, BOTTOM_MARGIN);
        assert!((frac - VISIBLE_FRACTION).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_section_is_invisible() {
        assert_eq!(visible_fraction(rect(100.0, 100.0), VIEWPORT, 0.0), 0.0);
    }
}
