use std::collections::BTreeMap;

pub trait Interpolate {
    fn interpolate(&self, other: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        // Land exactly on the end value; `a + (b - a)` can drift by an ulp.
        if t == 1.0 {
            return *other;
        }
        self + (other - self) * t
    }
}

/// Straight (non-premultiplied) color; channels in `0..=255`, alpha in `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba { r: f64::from(r), g: f64::from(g), b: f64::from(b), a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Rgba { r: f64::from(r), g: f64::from(g), b: f64::from(b), a }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Rgba { a, ..self }
    }

    fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r.clamp(0.0, 255.0).round(),
            self.g.clamp(0.0, 255.0).round(),
            self.b.clamp(0.0, 255.0).round(),
            css_number(self.a.clamp(0.0, 1.0)),
        )
    }
}

impl Interpolate for Rgba {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Rgba {
            r: self.r.interpolate(&other.r, t),
            g: self.g.interpolate(&other.g, t),
            b: self.b.interpolate(&other.b, t),
            a: self.a.interpolate(&other.a, t),
        }
    }
}

/// A single outer shadow layer. Text shadows ignore `spread`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: Rgba,
}

impl Shadow {
    pub const NONE: Shadow = Shadow { x: 0.0, y: 0.0, blur: 0.0, spread: 0.0, color: Rgba::TRANSPARENT };

    pub const fn new(x: f64, y: f64, blur: f64, spread: f64, color: Rgba) -> Self {
        Shadow { x, y, blur, spread, color }
    }

    /// A ring of `spread` pixels hugging the element, the building block of
    /// the glow ripple.
    pub const fn ring(spread: f64, color: Rgba) -> Self {
        Shadow { x: 0.0, y: 0.0, blur: 0.0, spread, color }
    }

    fn css(&self, with_spread: bool) -> String {
        if with_spread {
            format!(
                "{}px {}px {}px {}px {}",
                css_number(self.x),
                css_number(self.y),
                css_number(self.blur.max(0.0)),
                css_number(self.spread),
                self.color.css(),
            )
        } else {
            format!(
                "{}px {}px {}px {}",
                css_number(self.x),
                css_number(self.y),
                css_number(self.blur.max(0.0)),
                self.color.css(),
            )
        }
    }
}

impl Interpolate for Shadow {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        Shadow {
            x: self.x.interpolate(&other.x, t),
            y: self.y.interpolate(&other.y, t),
            blur: self.blur.interpolate(&other.blur, t),
            spread: self.spread.interpolate(&other.spread, t),
            color: self.color.interpolate(&other.color, t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prop {
    Opacity,
    X,
    Y,
    Rotation,
    RotationX,
    RotationY,
    Scale,
    ScaleX,
    Height,
    BackgroundColor,
    BorderColor,
    Color,
    BoxShadow,
    TextShadow,
}

impl Prop {
    /// Value assumed for a property that has never been written.
    pub fn rest(self) -> PropValue {
        match self {
            Prop::Opacity | Prop::Scale | Prop::ScaleX => PropValue::Number(1.0),
            Prop::X | Prop::Y | Prop::Rotation | Prop::RotationX | Prop::RotationY | Prop::Height => {
                PropValue::Number(0.0)
            }
            Prop::BackgroundColor | Prop::BorderColor | Prop::Color => PropValue::Color(Rgba::TRANSPARENT),
            Prop::BoxShadow | Prop::TextShadow => PropValue::Shadow(Shadow::NONE),
        }
    }

    fn is_transform(self) -> bool {
        matches!(
            self,
            Prop::X | Prop::Y | Prop::Rotation | Prop::RotationX | Prop::RotationY | Prop::Scale | Prop::ScaleX
        )
    }

    /// CSS property the value is written to.
    pub fn css_name(self) -> &'static str {
        match self {
            Prop::Opacity => "opacity",
            Prop::Height => "height",
            Prop::BackgroundColor => "background-color",
            Prop::BorderColor => "border-color",
            Prop::Color => "color",
            Prop::BoxShadow => "box-shadow",
            Prop::TextShadow => "text-shadow",
            _ => "transform",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropValue {
    Number(f64),
    Color(Rgba),
    Shadow(Shadow),
}

impl PropValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<Rgba> for PropValue {
    fn from(c: Rgba) -> Self {
        PropValue::Color(c)
    }
}

impl From<Shadow> for PropValue {
    fn from(s: Shadow) -> Self {
        PropValue::Shadow(s)
    }
}

impl Interpolate for PropValue {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        match (self, other) {
            (PropValue::Number(a), PropValue::Number(b)) => PropValue::Number(a.interpolate(b, t)),
            (PropValue::Color(a), PropValue::Color(b)) => PropValue::Color(a.interpolate(b, t)),
            (PropValue::Shadow(a), PropValue::Shadow(b)) => PropValue::Shadow(a.interpolate(b, t)),
            // Mismatched kinds cannot blend; hold the start value until the end.
            _ if t >= 1.0 => *other,
            _ => *self,
        }
    }
}

/// A keyframe: the set of properties an element should show.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisualState {
    props: BTreeMap<Prop, PropValue>,
}

impl VisualState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, prop: Prop, value: impl Into<PropValue>) -> Self {
        self.props.insert(prop, value.into());
        self
    }

    pub fn opacity(self, v: f64) -> Self {
        self.with(Prop::Opacity, v)
    }

    pub fn x(self, px: f64) -> Self {
        self.with(Prop::X, px)
    }

    pub fn y(self, px: f64) -> Self {
        self.with(Prop::Y, px)
    }

    pub fn scale(self, v: f64) -> Self {
        self.with(Prop::Scale, v)
    }

    pub fn scale_x(self, v: f64) -> Self {
        self.with(Prop::ScaleX, v)
    }

    pub fn rotation(self, deg: f64) -> Self {
        self.with(Prop::Rotation, deg)
    }

    pub fn rotation_x(self, deg: f64) -> Self {
        self.with(Prop::RotationX, deg)
    }

    pub fn rotation_y(self, deg: f64) -> Self {
        self.with(Prop::RotationY, deg)
    }

    pub fn height(self, px: f64) -> Self {
        self.with(Prop::Height, px)
    }

    pub fn background(self, c: Rgba) -> Self {
        self.with(Prop::BackgroundColor, c)
    }

    pub fn border_color(self, c: Rgba) -> Self {
        self.with(Prop::BorderColor, c)
    }

    pub fn color(self, c: Rgba) -> Self {
        self.with(Prop::Color, c)
    }

    pub fn box_shadow(self, s: Shadow) -> Self {
        self.with(Prop::BoxShadow, s)
    }

    pub fn text_shadow(self, s: Shadow) -> Self {
        self.with(Prop::TextShadow, s)
    }

    pub fn get(&self, prop: Prop) -> Option<PropValue> {
        self.props.get(&prop).copied()
    }

    pub fn set(&mut self, prop: Prop, value: PropValue) {
        self.props.insert(prop, value);
    }

    pub fn props(&self) -> impl Iterator<Item = Prop> + '_ {
        self.props.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn contains(&self, prop: Prop) -> bool {
        self.props.contains_key(&prop)
    }

    pub fn overlaps(&self, other: &VisualState) -> bool {
        other.props().any(|p| self.contains(p))
    }

    /// Overlays `other` on top of `self`.
    pub fn merge(&mut self, other: &VisualState) {
        for (prop, value) in &other.props {
            self.props.insert(*prop, *value);
        }
    }

    /// Drops every property that `other` also carries.
    pub fn strip(&mut self, other: &VisualState) {
        self.props.retain(|prop, _| !other.contains(*prop));
    }

    /// Blends toward `to`. Only the properties of `to` are produced; any the
    /// start state lacks begin from their rest value.
    pub fn interpolate(from: &VisualState, to: &VisualState, t: f64) -> VisualState {
        let props = to
            .props
            .iter()
            .map(|(prop, end)| {
                let start = from.get(*prop).unwrap_or_else(|| prop.rest());
                (*prop, start.interpolate(end, t))
            })
            .collect();
        VisualState { props }
    }

    /// Start values for animating toward `to`: `explicit` wins, then whatever
    /// is currently shown, then the rest value.
    pub fn starting_point(to: &VisualState, explicit: Option<&VisualState>, current: Option<&VisualState>) -> VisualState {
        let props = to
            .props()
            .map(|prop| {
                let value = explicit
                    .and_then(|s| s.get(prop))
                    .or_else(|| current.and_then(|s| s.get(prop)))
                    .unwrap_or_else(|| prop.rest());
                (prop, value)
            })
            .collect();
        VisualState { props }
    }

    /// CSS declarations, with every transform component folded into one
    /// `transform` value in a fixed order.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        let mut transform = Vec::new();
        for (prop, value) in &self.props {
            match (prop, value) {
                (Prop::X, _) | (Prop::Y, _) => {}
                (p, PropValue::Number(n)) if p.is_transform() => transform.push(match p {
                    Prop::Rotation => format!("rotate({}deg)", css_number(*n)),
                    Prop::RotationX => format!("rotateX({}deg)", css_number(*n)),
                    Prop::RotationY => format!("rotateY({}deg)", css_number(*n)),
                    Prop::Scale => format!("scale({})", css_number(*n)),
                    _ => format!("scaleX({})", css_number(*n)),
                }),
                (Prop::Opacity, PropValue::Number(n)) => out.push(("opacity", css_number(n.clamp(0.0, 1.0)))),
                (Prop::Height, PropValue::Number(n)) => out.push(("height", format!("{}px", css_number(*n)))),
                (p, PropValue::Color(c)) => out.push((p.css_name(), c.css())),
                (Prop::BoxShadow, PropValue::Shadow(s)) => out.push(("box-shadow", s.css(true))),
                (Prop::TextShadow, PropValue::Shadow(s)) => out.push(("text-shadow", s.css(false))),
                _ => {}
            }
        }
        let x = self.get(Prop::X).and_then(|v| v.as_number());
        let y = self.get(Prop::Y).and_then(|v| v.as_number());
        if x.is_some() || y.is_some() {
            transform.insert(
                0,
                format!(
                    "translate3d({}px, {}px, 0px)",
                    css_number(x.unwrap_or(0.0)),
                    css_number(y.unwrap_or(0.0)),
                ),
            );
        }
        if !transform.is_empty() {
            out.push(("transform", transform.join(" ")));
        }
        out
    }

    /// Distinct CSS property names this state writes.
    pub fn css_properties(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.props().map(Prop::css_name).collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

fn css_number(n: f64) -> String {
    let rounded = (n * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{:.3}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_blend_linearly() {
        let from = VisualState::new().opacity(0.0).y(50.0);
        let to = VisualState::new().opacity(1.0).y(0.0);
        let mid = VisualState::interpolate(&from, &to, 0.25);
        assert_eq!(mid.get(Prop::Opacity), Some(PropValue::Number(0.25)));
        assert_eq!(mid.get(Prop::Y), Some(PropValue::Number(37.5)));
    }

    #[test]
    fn missing_start_values_begin_at_rest() {
        let to = VisualState::new().scale(2.0).x(100.0);
        let mid = VisualState::interpolate(&VisualState::new(), &to, 0.5);
        assert_eq!(mid.get(Prop::Scale), Some(PropValue::Number(1.5)));
        assert_eq!(mid.get(Prop::X), Some(PropValue::Number(50.0)));
    }

    #[test]
    fn colors_and_shadows_blend_per_channel() {
        let red = Rgba::rgba(193, 18, 31, 0.6);
        let from = VisualState::new().box_shadow(Shadow::ring(0.0, red));
        let to = VisualState::new().box_shadow(Shadow::ring(20.0, red.with_alpha(0.0)));
        match VisualState::interpolate(&from, &to, 0.5).get(Prop::BoxShadow) {
            Some(PropValue::Shadow(s)) => {
                assert_eq!(s.spread, 10.0);
                assert!((s.color.a - 0.3).abs() < 1e-9);
                assert_eq!(s.color.r, 193.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn transforms_fold_into_one_declaration() {
        let state = VisualState::new().scale(1.05).y(-10.0).opacity(0.5).rotation(90.0);
        let decls = state.declarations();
        assert!(decls.contains(&("opacity", "0.5".to_string())));
        assert!(decls.contains(&(
            "transform",
            "translate3d(0px, -10px, 0px) rotate(90deg) scale(1.05)".to_string()
        )));
    }

    #[test]
    fn shadows_render_as_css() {
        let state = VisualState::new()
            .box_shadow(Shadow::new(0.0, 4.0, 20.0, 0.0, Rgba::rgba(0, 0, 0, 0.1)))
            .text_shadow(Shadow::new(0.0, 0.0, 20.0, 0.0, Rgba::rgba(193, 18, 31, 0.5)));
        let decls = state.declarations();
        assert!(decls.contains(&("box-shadow", "0px 4px 20px 0px rgba(0, 0, 0, 0.1)".to_string())));
        assert!(decls.contains(&("text-shadow", "0px 0px 20px rgba(193, 18, 31, 0.5)".to_string())));
    }

    #[test]
    fn strip_removes_overlapping_props() {
        let mut running = VisualState::new().scale(1.1).box_shadow(Shadow::NONE);
        running.strip(&VisualState::new().scale(1.0));
        assert!(!running.contains(Prop::Scale));
        assert!(running.contains(Prop::BoxShadow));
    }

    #[test]
    fn starting_point_prefers_explicit_then_current() {
        let to = VisualState::new().opacity(1.0).x(0.0).scale(1.0);
        let explicit = VisualState::new().opacity(0.0);
        let current = VisualState::new().opacity(0.7).x(40.0);
        let start = VisualState::starting_point(&to, Some(&explicit), Some(&current));
        assert_eq!(start.get(Prop::Opacity), Some(PropValue::Number(0.0)));
        assert_eq!(start.get(Prop::X), Some(PropValue::Number(40.0)));
        assert_eq!(start.get(Prop::Scale), Some(PropValue::Number(1.0)));
    }

    #[test]
    fn css_properties_are_deduplicated() {
        let state = VisualState::new().x(1.0).scale(1.0).opacity(1.0);
        assert_eq!(state.css_properties(), vec!["opacity", "transform"]);
    }
}
