//! Scroll ranges expressed relative to a trigger element.
//!
//! An [`Anchor`] pairs a point on the trigger (`top`, `center`, `bottom`,
//! a percentage or a pixel offset) with a line across the viewport. The
//! anchor is reached at the scroll offset where the two coincide, so
//! `"top 70%"` is reached when the trigger's top edge crosses the line 70%
//! of the way down the viewport.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TriggerParseError {
    #[error("expected `<element> <viewport>`, got {0} part(s)")]
    Arity(usize),
    #[error("unknown position `{0}`")]
    Position(String),
    #[error("invalid offset `{0}`")]
    Offset(String),
    #[error("expected four toggle actions, got {0}")]
    ToggleArity(usize),
    #[error("unknown toggle action `{0}`")]
    ToggleAction(String),
}

/// A point along a length: a fraction of it plus a pixel offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub fraction: f64,
    pub offset: f64,
}

impl Position {
    pub const TOP: Position = Position::fraction(0.0);
    pub const CENTER: Position = Position::fraction(0.5);
    pub const BOTTOM: Position = Position::fraction(1.0);

    pub const fn fraction(fraction: f64) -> Self {
        Position { fraction, offset: 0.0 }
    }

    pub fn percent(pct: f64) -> Self {
        Position { fraction: pct / 100.0, offset: 0.0 }
    }

    pub fn shifted(self, px: f64) -> Self {
        Position { offset: self.offset + px, ..self }
    }

    pub fn resolve(&self, length: f64) -> f64 {
        self.fraction * length + self.offset
    }
}

impl FromStr for Position {
    type Err = TriggerParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let keywords = [("top", Position::TOP), ("center", Position::CENTER), ("bottom", Position::BOTTOM)];
        if let Some((kw, base)) = keywords.iter().find(|(kw, _)| token.starts_with(kw)) {
            return Ok(base.shifted(parse_offset(&token[kw.len()..])?));
        }

        let numeric_len = token
            .char_indices()
            .take_while(|(i, c)| c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+')))
            .count();
        let (number, rest) = token.split_at(numeric_len);
        let value: f64 = number.parse().map_err(|_| TriggerParseError::Position(token.to_string()))?;

        match rest.strip_prefix('%') {
            Some(rest) => Ok(Position::percent(value).shifted(parse_offset(rest)?)),
            None => {
                let rest = rest.strip_prefix("px").unwrap_or(rest);
                Ok(Position::TOP.shifted(value + parse_offset(rest)?))
            }
        }
    }
}

/// Parses a trailing `+=N`, `-=N`, `+N` or `-N` (optionally `px`).
fn parse_offset(text: &str) -> Result<f64, TriggerParseError> {
    if text.is_empty() {
        return Ok(0.0);
    }
    let invalid = || TriggerParseError::Offset(text.to_string());
    let (sign, body) = if let Some(body) = text.strip_prefix("+=").or_else(|| text.strip_prefix('+')) {
        (1.0, body)
    } else if let Some(body) = text.strip_prefix("-=").or_else(|| text.strip_prefix('-')) {
        (-1.0, body)
    } else {
        return Err(invalid());
    };
    let body = body.strip_suffix("px").unwrap_or(body);
    body.parse::<f64>().map(|v| sign * v).map_err(|_| invalid())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub element: Position,
    pub viewport: Position,
}

impl Anchor {
    pub const fn new(element: Position, viewport: Position) -> Self {
        Anchor { element, viewport }
    }

    /// `"top N%"`: the trigger's top edge at `pct` percent of the viewport.
    pub fn top_at(pct: f64) -> Self {
        Anchor::new(Position::TOP, Position::percent(pct))
    }

    /// Scroll offset at which this anchor is reached.
    pub fn scroll_offset(&self, trigger: Bounds, viewport: Viewport) -> f64 {
        let document_top = trigger.top + viewport.scroll_y;
        document_top + self.element.resolve(trigger.height) - self.viewport.resolve(viewport.height)
    }
}

impl FromStr for Anchor {
    type Err = TriggerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [element, viewport] => Ok(Anchor::new(element.parse()?, viewport.parse()?)),
            _ => Err(TriggerParseError::Arity(parts.len())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RangeEnd {
    Anchor(Anchor),
    /// Pixels of scrolling after the start anchor.
    After(f64),
}

impl FromStr for RangeEnd {
    type Err = TriggerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(body) = s.strip_prefix("+=") {
            let body = body.strip_suffix("px").unwrap_or(body);
            return body
                .parse::<f64>()
                .map(RangeEnd::After)
                .map_err(|_| TriggerParseError::Offset(s.to_string()));
        }
        s.parse().map(RangeEnd::Anchor)
    }
}

/// Viewport-relative box of the trigger element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub height: f64,
    pub scroll_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Before,
    Inside,
    After,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerRange {
    pub start: Anchor,
    pub end: RangeEnd,
}

impl Default for TriggerRange {
    fn default() -> Self {
        TriggerRange {
            start: Anchor::new(Position::TOP, Position::BOTTOM),
            end: RangeEnd::Anchor(Anchor::new(Position::BOTTOM, Position::TOP)),
        }
    }
}

impl TriggerRange {
    pub const fn new(start: Anchor, end: RangeEnd) -> Self {
        TriggerRange { start, end }
    }

    /// Scroll offsets at which the range starts and ends.
    pub fn span(&self, trigger: Bounds, viewport: Viewport) -> (f64, f64) {
        let start = self.start.scroll_offset(trigger, viewport);
        let end = match self.end {
            RangeEnd::Anchor(anchor) => anchor.scroll_offset(trigger, viewport),
            RangeEnd::After(px) => start + px,
        };
        (start, end)
    }

    /// Progress through the range, clamped to `[0, 1]`. A degenerate range
    /// jumps straight from 0 to 1 at its start.
    pub fn progress(&self, trigger: Bounds, viewport: Viewport) -> f64 {
        let (start, end) = self.span(trigger, viewport);
        let scroll = viewport.scroll_y;
        if end - start <= f64::EPSILON {
            return if scroll >= start { 1.0 } else { 0.0 };
        }
        ((scroll - start) / (end - start)).clamp(0.0, 1.0)
    }

    pub fn zone(&self, trigger: Bounds, viewport: Viewport) -> Zone {
        let (start, end) = self.span(trigger, viewport);
        let scroll = viewport.scroll_y;
        if scroll < start {
            Zone::Before
        } else if scroll > end.max(start) {
            Zone::After
        } else {
            Zone::Inside
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    None,
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
}

impl FromStr for ToggleAction {
    type Err = TriggerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ToggleAction::None),
            "play" => Ok(ToggleAction::Play),
            "pause" => Ok(ToggleAction::Pause),
            "resume" => Ok(ToggleAction::Resume),
            "reverse" => Ok(ToggleAction::Reverse),
            "restart" => Ok(ToggleAction::Restart),
            other => Err(TriggerParseError::ToggleAction(other.to_string())),
        }
    }
}

/// What a play-once animation does at each range crossing, written in the
/// order enter, leave, enter-back, leave-back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TogglePolicy {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl Default for TogglePolicy {
    fn default() -> Self {
        TogglePolicy::PLAY_ONCE
    }
}

impl TogglePolicy {
    /// `play none none none`
    pub const PLAY_ONCE: TogglePolicy = TogglePolicy {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::None,
    };

    /// `play none none reverse`
    pub const REVERSE: TogglePolicy = TogglePolicy {
        on_leave_back: ToggleAction::Reverse,
        ..TogglePolicy::PLAY_ONCE
    };

    /// `play pause resume pause`
    pub const PAUSE_RESUME: TogglePolicy = TogglePolicy {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::Pause,
        on_enter_back: ToggleAction::Resume,
        on_leave_back: ToggleAction::Pause,
    };

    /// Actions fired when the scroll position moves from `prev` to `next`.
    /// `prev` is `None` on the first evaluation after binding; a range that
    /// is already passed by then counts as entered and left.
    pub fn crossings(&self, prev: Option<Zone>, next: Zone) -> Vec<ToggleAction> {
        let fired = match (prev.unwrap_or(Zone::Before), next) {
            (Zone::Before, Zone::Inside) => vec![self.on_enter],
            (Zone::Before, Zone::After) => vec![self.on_enter, self.on_leave],
            (Zone::Inside, Zone::After) => vec![self.on_leave],
            (Zone::After, Zone::Inside) => vec![self.on_enter_back],
            (Zone::After, Zone::Before) => vec![self.on_enter_back, self.on_leave_back],
            (Zone::Inside, Zone::Before) => vec![self.on_leave_back],
            _ => Vec::new(),
        };
        fired.into_iter().filter(|a| *a != ToggleAction::None).collect()
    }
}

impl FromStr for TogglePolicy {
    type Err = TriggerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [enter, leave, enter_back, leave_back] => Ok(TogglePolicy {
                on_enter: enter.parse()?,
                on_leave: leave.parse()?,
                on_enter_back: enter_back.parse()?,
                on_leave_back: leave_back.parse()?,
            }),
            _ => Err(TriggerParseError::ToggleArity(parts.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT_HEIGHT: f64 = 1000.0;

    /// Geometry with the trigger's top edge at `top_fraction` of the viewport.
    fn geometry(top_fraction: f64) -> (Bounds, Viewport) {
        let viewport = Viewport { height: VIEWPORT_HEIGHT, scroll_y: 2000.0 };
        let trigger = Bounds { top: top_fraction * VIEWPORT_HEIGHT, height: 600.0 };
        (trigger, viewport)
    }

    fn range(start: &str, end: &str) -> TriggerRange {
        TriggerRange::new(start.parse().unwrap(), end.parse().unwrap())
    }

    #[test]
    fn parses_keywords_percentages_and_offsets() {
        let anchor: Anchor = "top center+=100".parse().unwrap();
        assert_eq!(anchor.element, Position::TOP);
        assert_eq!(anchor.viewport, Position::CENTER.shifted(100.0));

        let anchor: Anchor = "bottom 80%".parse().unwrap();
        assert_eq!(anchor.element, Position::BOTTOM);
        assert!((anchor.viewport.fraction - 0.8).abs() < 1e-12);

        let anchor: Anchor = "top center-50".parse().unwrap();
        assert_eq!(anchor.viewport, Position::CENTER.shifted(-50.0));

        let anchor: Anchor = "20px 100".parse().unwrap();
        assert_eq!(anchor.element, Position::TOP.shifted(20.0));
        assert_eq!(anchor.viewport, Position::TOP.shifted(100.0));
    }

    #[test]
    fn parses_relative_range_end() {
        assert_eq!("+=120".parse::<RangeEnd>().unwrap(), RangeEnd::After(120.0));
        assert!(matches!("top 30%".parse::<RangeEnd>().unwrap(), RangeEnd::Anchor(_)));
    }

    #[test]
    fn rejects_malformed_anchors() {
        assert_eq!("top".parse::<Anchor>(), Err(TriggerParseError::Arity(1)));
        assert!(matches!("middle 50%".parse::<Anchor>(), Err(TriggerParseError::Position(_))));
        assert!(matches!("top center*2".parse::<Anchor>(), Err(TriggerParseError::Offset(_))));
    }

    #[test]
    fn midpoint_of_range_is_half_progress() {
        let range = range("top 70%", "top 30%");
        let (trigger, viewport) = geometry(0.5);
        assert!((range.progress(trigger, viewport) - 0.5).abs() < 1e-9);
        assert_eq!(range.zone(trigger, viewport), Zone::Inside);
    }

    #[test]
    fn progress_clamps_outside_the_range() {
        let range = range("top 70%", "top 30%");
        let (trigger, viewport) = geometry(0.9);
        assert_eq!(range.progress(trigger, viewport), 0.0);
        assert_eq!(range.zone(trigger, viewport), Zone::Before);

        let (trigger, viewport) = geometry(0.1);
        assert_eq!(range.progress(trigger, viewport), 1.0);
        assert_eq!(range.zone(trigger, viewport), Zone::After);
    }

    #[test]
    fn relative_end_counts_pixels_from_start() {
        let range = TriggerRange::new("top top".parse().unwrap(), RangeEnd::After(120.0));
        let viewport = Viewport { height: 800.0, scroll_y: 60.0 };
        let document = Bounds { top: -60.0, height: 5000.0 };
        assert!((range.progress(document, viewport) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn degenerate_range_steps_at_start() {
        let range = range("top 50%", "top 50%");
        assert_eq!(range.progress(geometry(0.6).0, geometry(0.6).1), 0.0);
        assert_eq!(range.progress(geometry(0.4).0, geometry(0.4).1), 1.0);
    }

    #[test]
    fn toggle_policies_parse_from_four_words() {
        assert_eq!("play pause resume pause".parse::<TogglePolicy>().unwrap(), TogglePolicy::PAUSE_RESUME);
        assert_eq!("play none none reverse".parse::<TogglePolicy>().unwrap(), TogglePolicy::REVERSE);
        assert_eq!("play none".parse::<TogglePolicy>(), Err(TriggerParseError::ToggleArity(2)));
        assert!(matches!(
            "play none none rewind".parse::<TogglePolicy>(),
            Err(TriggerParseError::ToggleAction(_))
        ));
    }

    #[test]
    fn crossings_fire_in_scroll_order() {
        let policy = TogglePolicy::PAUSE_RESUME;
        assert!(policy.crossings(None, Zone::Before).is_empty());
        assert_eq!(policy.crossings(None, Zone::After), vec![ToggleAction::Play, ToggleAction::Pause]);
        assert_eq!(policy.crossings(Some(Zone::After), Zone::Inside), vec![ToggleAction::Resume]);
        assert_eq!(
            TogglePolicy::REVERSE.crossings(Some(Zone::After), Zone::Before),
            vec![ToggleAction::Reverse]
        );
        assert!(policy.crossings(Some(Zone::Inside), Zone::Inside).is_empty());
    }
}
