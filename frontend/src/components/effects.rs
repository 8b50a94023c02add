//! Motion presets shared by the page sections.

use log::warn;
use yew::NodeRef;

use crate::config;
use crate::motion::trigger::TriggerParseError;
use crate::motion::{
    Anchor, Easing, HoverEffect, Query, RangeEnd, Rgba, ScrollAnimation, Shadow, TogglePolicy, TriggerRange,
    TweenRequest, TweenSpec, VisualState,
};

/// Lag, in seconds, of the smoothed scroll reveals.
pub const SCRUB_LAG: f64 = 1.5;

pub fn primary() -> Rgba {
    Rgba::rgb(193, 18, 31)
}

pub fn primary_dark() -> Rgba {
    Rgba::rgb(160, 14, 24)
}

fn parse_range(start: &str, end: &str) -> Result<TriggerRange, TriggerParseError> {
    Ok(TriggerRange::new(start.parse::<Anchor>()?, end.parse::<RangeEnd>()?))
}

/// Builds a range from anchor notation, e.g. `range("top 70%", "top 30%")`.
pub fn range(start: &str, end: &str) -> TriggerRange {
    parse_range(start, end).unwrap_or_else(|err| {
        warn!("bad scroll range `{}` -> `{}`: {}", start, end, err);
        TriggerRange::default()
    })
}

/// Smoothed, reversible reveal driven by the scroll position over `trigger`.
pub fn scrub(trigger: &NodeRef, from: VisualState, to: VisualState, start: &str, end: &str) -> ScrollAnimation<Query> {
    ScrollAnimation::new(Query::Node(trigger.clone()), from, to)
        .range(range(start, end))
        .scrub(Some(SCRUB_LAG))
}

/// Plays once when `trigger` crosses `start` and rewinds when scrolled back above it.
pub fn reveal(trigger: &NodeRef, from: VisualState, to: VisualState, start: &str, spec: TweenSpec) -> ScrollAnimation<Query> {
    ScrollAnimation::new(Query::Node(trigger.clone()), from, to)
        .range(range(start, "bottom top"))
        .play_once(spec, TogglePolicy::REVERSE)
}

/// Scale up with a ring that spreads out and fades.
pub fn ring_hover(scale: f64, ring: f64, color: Rgba) -> HoverEffect {
    HoverEffect::new(VisualState::new().scale(scale), VisualState::new().scale(1.0))
        .duration(0.2)
        .glow(Shadow::ring(0.0, color), Shadow::ring(ring, color.with_alpha(0.0)), 0.6)
}

/// Like [`ring_hover`], but the leave state also settles the box shadow.
pub fn card_hover(enter: VisualState, rest_shadow: Shadow, ring: f64) -> HoverEffect {
    let red = primary().with_alpha(0.2);
    HoverEffect::new(enter, VisualState::new().scale(1.0).y(0.0).x(0.0).box_shadow(rest_shadow))
        .duration(config::HOVER_DURATION)
        .easing(Easing::power_out(2))
        .glow(Shadow::new(0.0, 4.0, 15.0, 0.0, red), Shadow::ring(ring, red.with_alpha(0.0)), 0.6)
}

/// One full turn with a small overshoot, played on hover.
pub fn spin() -> TweenRequest {
    TweenRequest::from_to(VisualState::new().rotation(0.0), VisualState::new().rotation(360.0))
        .spec(TweenSpec::new(0.6).easing(Easing::back_out()))
}

/// Fully visible, untransformed: where every entry animation ends.
pub fn at_rest() -> VisualState {
    VisualState::new().opacity(1.0).x(0.0).y(0.0).scale(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_ranges() {
        let parsed = range("top center+=150", "top center-50");
        assert_eq!(parsed.start, "top center+=150".parse::<Anchor>().unwrap());
        assert_eq!(range("top top", "+=120").end, RangeEnd::After(120.0));
    }

    #[test]
    fn malformed_range_falls_back_to_default() {
        assert_eq!(range("middle 50%", "top 30%"), TriggerRange::default());
    }
}
