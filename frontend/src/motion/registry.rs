//! The orchestrator proper: an explicit registry of everything that is
//! animating, keyed by the section that asked for it.
//!
//! Every registration belongs to a [`SectionHandle`]. Releasing the handle
//! cancels the section's scroll bindings, hover bindings and in-flight
//! tweens in one go and clears the inline styles it wrote, so nothing a
//! section started can fire against an element after the section is gone.
//!
//! The registry never touches the host directly. It reads geometry from and
//! writes styles to a [`Stage`], and it is driven from outside through
//! [`MotionRegistry::on_scroll`] and [`MotionRegistry::on_frame`], both of
//! which report whether another animation frame is needed.

use log::debug;
use slotmap::{new_key_type, SlotMap};

use super::easing::Easing;
use super::trigger::{Anchor, Bounds, RangeEnd, ToggleAction, TogglePolicy, TriggerRange, Viewport, Zone};
use super::tween::{Tween, TweenSpec};
use super::value::{Shadow, VisualState};

new_key_type! {
    pub struct SectionHandle;
    pub struct ScrollKey;
    pub struct HoverKey;
}

/// Progress difference below which a smoothed scrub counts as caught up.
const SETTLE_EPSILON: f64 = 1e-3;

/// The host the registry animates: element lookup, geometry and style writes.
pub trait Stage {
    type Target: Clone + PartialEq;
    type Query: Clone;

    /// Every rendered element matching `query`, in document order.
    fn resolve(&self, query: &Self::Query) -> Vec<Self::Target>;
    fn viewport(&self) -> Viewport;
    /// Viewport-relative box, `None` once the element is gone.
    fn bounds(&self, target: &Self::Target) -> Option<Bounds>;
    /// Writes the element's complete animated state.
    fn apply(&mut self, target: &Self::Target, state: &VisualState);
    /// Clears every style `state` wrote.
    fn reset(&mut self, target: &Self::Target, state: &VisualState);
    /// Descendants of `target` matching a selector.
    fn find_within(&self, target: &Self::Target, selector: &'static str) -> Vec<Self::Target>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrubMode {
    /// Progress follows scroll position. With `smoothing` (seconds) the shown
    /// progress chases the scroll progress instead of jumping to it.
    Scrubbed { smoothing: Option<f64> },
    /// A timed tween started by entering the range.
    PlayOnce { spec: TweenSpec, toggle: TogglePolicy },
}

#[derive(Clone, Debug)]
pub struct ScrollAnimation<Q> {
    pub trigger: Q,
    pub from: VisualState,
    pub to: VisualState,
    pub range: TriggerRange,
    pub mode: ScrubMode,
    /// Curve applied to scrubbed progress; play-once uses the tween's own.
    pub easing: Easing,
    /// Per-target offset as a fraction of one target's share of the range
    /// (scrubbed) or in seconds (play-once).
    pub stagger: f64,
}

impl<Q> ScrollAnimation<Q> {
    pub fn new(trigger: Q, from: VisualState, to: VisualState) -> Self {
        ScrollAnimation {
            trigger,
            from,
            to,
            range: TriggerRange::default(),
            mode: ScrubMode::Scrubbed { smoothing: None },
            easing: Easing::Linear,
            stagger: 0.0,
        }
    }

    pub fn between(mut self, start: Anchor, end: Anchor) -> Self {
        self.range = TriggerRange::new(start, RangeEnd::Anchor(end));
        self
    }

    pub fn range(mut self, range: TriggerRange) -> Self {
        self.range = range;
        self
    }

    pub fn scrub(mut self, smoothing: Option<f64>) -> Self {
        self.mode = ScrubMode::Scrubbed { smoothing };
        self
    }

    pub fn play_once(mut self, spec: TweenSpec, toggle: TogglePolicy) -> Self {
        self.mode = ScrubMode::PlayOnce { spec, toggle };
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }
}

/// Box-shadow ripple played alongside the enter animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub from: Shadow,
    pub to: Shadow,
    pub duration: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HoverEffect {
    pub enter: VisualState,
    pub leave: VisualState,
    pub duration: f64,
    pub easing: Easing,
    pub glow: Option<Glow>,
    /// Tweens started on descendants of the hovered element on enter.
    pub children: Vec<(&'static str, TweenRequest)>,
}

impl HoverEffect {
    pub fn new(enter: VisualState, leave: VisualState) -> Self {
        HoverEffect { enter, leave, duration: 0.3, easing: Easing::default(), glow: None, children: Vec::new() }
    }

    /// Plays `request` on every descendant matching `selector` when the
    /// pointer enters.
    pub fn child(mut self, selector: &'static str, request: TweenRequest) -> Self {
        self.children.push((selector, request));
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn glow(mut self, from: Shadow, to: Shadow, duration: f64) -> Self {
        self.glow = Some(Glow { from, to, duration });
        self
    }
}

/// A one-shot (or looping) timed interpolation.
#[derive(Clone, Debug, PartialEq)]
pub struct TweenRequest {
    pub from: Option<VisualState>,
    pub to: VisualState,
    pub spec: TweenSpec,
    /// Seconds added to the delay of each successive target.
    pub stagger: f64,
}

impl TweenRequest {
    pub fn to(to: VisualState) -> Self {
        TweenRequest { from: None, to, spec: TweenSpec::default(), stagger: 0.0 }
    }

    pub fn from_to(from: VisualState, to: VisualState) -> Self {
        TweenRequest { from: Some(from), ..TweenRequest::to(to) }
    }

    pub fn spec(mut self, spec: TweenSpec) -> Self {
        self.spec = spec;
        self
    }

    pub fn stagger(mut self, seconds: f64) -> Self {
        self.stagger = seconds;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pointer {
    Enter,
    Leave,
}

struct Section {
    name: &'static str,
}

struct ScrollBinding<T> {
    owner: SectionHandle,
    targets: Vec<T>,
    trigger: T,
    from: VisualState,
    to: VisualState,
    range: TriggerRange,
    mode: ScrubMode,
    easing: Easing,
    stagger: f64,
    /// Scrubbed: progress the scroll position asks for.
    goal: f64,
    /// Scrubbed: progress currently on screen.
    shown: Option<f64>,
    /// Play-once: zone seen at the last evaluation.
    zone: Option<Zone>,
    /// Play-once: one tween per target, created on first play.
    playback: Vec<Tween>,
}

impl<T: Clone> ScrollBinding<T> {
    fn on_scroll(&mut self, bounds: Bounds, viewport: Viewport, writes: &mut Vec<(T, VisualState)>) {
        match self.mode {
            ScrubMode::Scrubbed { smoothing } => {
                self.goal = self.range.progress(bounds, viewport);
                let smoothed = matches!(smoothing, Some(lag) if lag > 0.0);
                if !smoothed || self.shown.is_none() {
                    self.shown = Some(self.goal);
                    self.render_progress(self.goal, writes);
                }
            }
            ScrubMode::PlayOnce { spec, toggle } => {
                let zone = self.range.zone(bounds, viewport);
                let first = self.zone.is_none();
                let actions = toggle.crossings(self.zone, zone);
                self.zone = Some(zone);
                for action in &actions {
                    self.toggle(*action, spec);
                }
                if first || !actions.is_empty() {
                    self.render_playback(writes);
                }
            }
        }
    }

    fn on_frame(&mut self, dt: f64, writes: &mut Vec<(T, VisualState)>) {
        match self.mode {
            ScrubMode::Scrubbed { smoothing: Some(lag) } if lag > 0.0 => {
                let Some(shown) = self.shown else { return };
                if (self.goal - shown).abs() <= SETTLE_EPSILON {
                    return;
                }
                // Exponential chase that closes ~98% of the gap in `lag` seconds.
                let mut next = shown + (self.goal - shown) * (1.0 - (-4.0 * dt / lag).exp());
                if (self.goal - next).abs() <= SETTLE_EPSILON {
                    next = self.goal;
                }
                self.shown = Some(next);
                self.render_progress(next, writes);
            }
            ScrubMode::PlayOnce { .. } => {
                if self.playback.iter().any(Tween::is_running) {
                    for tween in &mut self.playback {
                        tween.advance(dt);
                    }
                    self.render_playback(writes);
                }
            }
            ScrubMode::Scrubbed { .. } => {}
        }
    }

    fn is_moving(&self) -> bool {
        match self.mode {
            ScrubMode::Scrubbed { smoothing: Some(lag) } if lag > 0.0 => {
                self.shown.map_or(false, |shown| (self.goal - shown).abs() > SETTLE_EPSILON)
            }
            ScrubMode::PlayOnce { .. } => self.playback.iter().any(Tween::is_running),
            ScrubMode::Scrubbed { .. } => false,
        }
    }

    fn toggle(&mut self, action: ToggleAction, spec: TweenSpec) {
        match action {
            ToggleAction::None => {}
            ToggleAction::Play if self.playback.is_empty() => self.start_playback(spec),
            ToggleAction::Play => self.playback.iter_mut().for_each(Tween::play),
            ToggleAction::Pause => self.playback.iter_mut().for_each(Tween::pause),
            ToggleAction::Resume => self.playback.iter_mut().for_each(Tween::resume),
            ToggleAction::Reverse => self.playback.iter_mut().for_each(Tween::reverse),
            ToggleAction::Restart if self.playback.is_empty() => self.start_playback(spec),
            ToggleAction::Restart => self.playback.iter_mut().for_each(Tween::restart),
        }
    }

    fn start_playback(&mut self, spec: TweenSpec) {
        self.playback = (0..self.targets.len())
            .map(|i| Tween::new(spec.delay(spec.delay + i as f64 * self.stagger)))
            .collect();
    }

    fn progress_state(&self, progress: f64, index: usize) -> VisualState {
        let local = staggered(progress, index, self.targets.len(), self.stagger);
        VisualState::interpolate(&self.from, &self.to, self.easing.apply(local))
    }

    fn playback_state(&self, index: usize) -> VisualState {
        match self.playback.get(index) {
            Some(tween) => VisualState::interpolate(&self.from, &self.to, tween.progress()),
            None => self.from.clone(),
        }
    }

    /// What the binding currently shows on target `index`, if it has shown
    /// anything yet.
    fn state_of(&self, index: usize) -> Option<VisualState> {
        match self.mode {
            ScrubMode::Scrubbed { .. } => self.shown.map(|shown| self.progress_state(shown, index)),
            ScrubMode::PlayOnce { .. } => self.zone.as_ref().map(|_| self.playback_state(index)),
        }
    }

    fn render_progress(&self, progress: f64, writes: &mut Vec<(T, VisualState)>) {
        for (i, target) in self.targets.iter().enumerate() {
            writes.push((target.clone(), self.progress_state(progress, i)));
        }
    }

    fn render_playback(&self, writes: &mut Vec<(T, VisualState)>) {
        for (i, target) in self.targets.iter().enumerate() {
            writes.push((target.clone(), self.playback_state(i)));
        }
    }
}

/// Progress of target `index` when `count` targets share one range, each
/// starting `stagger` target-lengths after the previous one.
fn staggered(progress: f64, index: usize, count: usize, stagger: f64) -> f64 {
    if count <= 1 || stagger <= 0.0 {
        return progress;
    }
    let total = 1.0 + stagger * (count - 1) as f64;
    (progress * total - index as f64 * stagger).clamp(0.0, 1.0)
}

struct HoverBinding<T> {
    owner: SectionHandle,
    targets: Vec<T>,
    /// Descendants the effect's child tweens have run on.
    companions: Vec<T>,
    effect: HoverEffect,
}

impl<T: PartialEq> HoverBinding<T> {
    fn touches(&self, target: &T) -> bool {
        self.targets.contains(target) || self.companions.contains(target)
    }
}

/// A timed interpolation. While it exists it owns the properties of `to` on
/// its target: scroll bindings skip them until it is gone.
struct ActiveTween<T> {
    owner: SectionHandle,
    target: T,
    from: VisualState,
    to: VisualState,
    tween: Tween,
    /// Keep owning `to` after finishing, until another tween overwrites it.
    /// Hover enter states hold so scrolling cannot undo them mid-hover.
    hold: bool,
}

impl<T> ActiveTween<T> {
    fn current(&self) -> VisualState {
        VisualState::interpolate(&self.from, &self.to, self.tween.progress())
    }
}

pub struct MotionRegistry<S: Stage> {
    stage: S,
    sections: SlotMap<SectionHandle, Section>,
    scrolls: SlotMap<ScrollKey, ScrollBinding<S::Target>>,
    hovers: SlotMap<HoverKey, HoverBinding<S::Target>>,
    tweens: Vec<ActiveTween<S::Target>>,
    /// Last state written to each element, merged across bindings.
    rendered: Vec<(S::Target, VisualState)>,
}

impl<S: Stage> MotionRegistry<S> {
    pub fn new(stage: S) -> Self {
        MotionRegistry {
            stage,
            sections: SlotMap::with_key(),
            scrolls: SlotMap::with_key(),
            hovers: SlotMap::with_key(),
            tweens: Vec::new(),
            rendered: Vec::new(),
        }
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    pub fn open_section(&mut self, name: &'static str) -> SectionHandle {
        debug!("opening motion section {}", name);
        self.sections.insert(Section { name })
    }

    pub fn is_open(&self, section: SectionHandle) -> bool {
        self.sections.contains_key(section)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn section_name(&self, section: SectionHandle) -> Option<&'static str> {
        let name = self.sections.get(section).map(|s| s.name);
        if name.is_none() {
            debug!("ignoring registration on a released section");
        }
        name
    }

    pub fn bind_scroll(
        &mut self,
        section: SectionHandle,
        target: &S::Query,
        animation: ScrollAnimation<S::Query>,
    ) -> Option<ScrollKey> {
        let name = self.section_name(section)?;
        let targets = self.stage.resolve(target);
        if targets.is_empty() {
            debug!("{}: scroll target not rendered, skipping", name);
            return None;
        }
        let Some(trigger) = self.stage.resolve(&animation.trigger).into_iter().next() else {
            debug!("{}: scroll trigger not rendered, skipping", name);
            return None;
        };

        let key = self.scrolls.insert(ScrollBinding {
            owner: section,
            targets,
            trigger,
            from: animation.from,
            to: animation.to,
            range: animation.range,
            mode: animation.mode,
            easing: animation.easing,
            stagger: animation.stagger,
            goal: 0.0,
            shown: None,
            zone: None,
            playback: Vec::new(),
        });
        self.evaluate_scroll(key);
        Some(key)
    }

    fn evaluate_scroll(&mut self, key: ScrollKey) {
        let viewport = self.stage.viewport();
        let mut writes = Vec::new();
        if let Some(binding) = self.scrolls.get_mut(key) {
            if let Some(bounds) = self.stage.bounds(&binding.trigger) {
                binding.on_scroll(bounds, viewport, &mut writes);
            }
        }
        self.flush(writes);
    }

    pub fn bind_hover(&mut self, section: SectionHandle, target: &S::Query, effect: HoverEffect) -> Option<HoverKey> {
        let name = self.section_name(section)?;
        let targets = self.stage.resolve(target);
        if targets.is_empty() {
            debug!("{}: hover target not rendered, skipping", name);
            return None;
        }
        Some(self.hovers.insert(HoverBinding { owner: section, targets, companions: Vec::new(), effect }))
    }

    /// Elements a hover binding listens on; empty once released.
    pub fn hover_targets(&self, key: HoverKey) -> &[S::Target] {
        self.hovers.get(key).map(|b| b.targets.as_slice()).unwrap_or(&[])
    }

    /// Starts a timed tween on every element matching `target`. Returns how
    /// many elements it started on.
    pub fn play(&mut self, section: SectionHandle, target: &S::Query, request: TweenRequest) -> usize {
        let Some(name) = self.section_name(section) else { return 0 };
        let targets = self.stage.resolve(target);
        if targets.is_empty() {
            debug!("{}: tween target not rendered, skipping", name);
        }
        let count = targets.len();
        for (i, element) in targets.into_iter().enumerate() {
            let spec = request.spec.delay(request.spec.delay + i as f64 * request.stagger);
            self.start_tween(section, element, request.from.as_ref(), request.to.clone(), spec, false);
        }
        count
    }

    /// Routes a pointer event from element `index` of a hover binding.
    /// Returns `false` when the binding no longer exists.
    pub fn pointer(&mut self, key: HoverKey, index: usize, phase: Pointer) -> bool {
        let Some(binding) = self.hovers.get(key) else { return false };
        let Some(element) = binding.targets.get(index).cloned() else { return false };
        let owner = binding.owner;
        let effect = binding.effect.clone();
        let spec = TweenSpec::new(effect.duration).easing(effect.easing);

        match phase {
            Pointer::Enter => {
                self.start_tween(owner, element.clone(), None, effect.enter, spec, true);
                if let Some(glow) = effect.glow {
                    let from = VisualState::new().box_shadow(glow.from);
                    let to = VisualState::new().box_shadow(glow.to);
                    let spec = TweenSpec::new(glow.duration).easing(Easing::power_out(2));
                    self.start_tween(owner, element.clone(), Some(&from), to, spec, false);
                }
                for (selector, request) in &effect.children {
                    let found = self.stage.find_within(&element, *selector);
                    for (i, child) in found.into_iter().enumerate() {
                        if let Some(binding) = self.hovers.get_mut(key) {
                            if !binding.companions.contains(&child) {
                                binding.companions.push(child.clone());
                            }
                        }
                        let spec = request.spec.delay(request.spec.delay + i as f64 * request.stagger);
                        self.start_tween(owner, child, request.from.as_ref(), request.to.clone(), spec, false);
                    }
                }
            }
            Pointer::Leave => self.start_tween(owner, element, None, effect.leave, spec, false),
        }
        true
    }

    fn start_tween(
        &mut self,
        owner: SectionHandle,
        target: S::Target,
        from: Option<&VisualState>,
        to: VisualState,
        spec: TweenSpec,
        hold: bool,
    ) {
        let current = self.rendered_state(&target).cloned();
        let start = VisualState::starting_point(&to, from, current.as_ref());
        self.overwrite(&target, &to);

        let active = ActiveTween { owner, target, from: start, to, tween: Tween::new(spec), hold };
        let state = active.current();
        self.render(&active.target, &state);
        if hold || !active.tween.is_finished() {
            self.tweens.push(active);
        } else {
            self.hand_back(&active.target);
        }
    }

    /// The newest request for a property wins: strip the properties of `to`
    /// from every tween already on the element. Scroll bindings lose those
    /// properties for as long as the new tween exists (see [`Self::claimed`]).
    fn overwrite(&mut self, target: &S::Target, to: &VisualState) {
        self.tweens.retain_mut(|active| {
            if active.target == *target && active.to.overlaps(to) {
                active.from.strip(to);
                active.to.strip(to);
            }
            !active.to.is_empty()
        });
    }

    /// Properties of `target` currently owned by timed tweens.
    fn claimed(&self, target: &S::Target) -> VisualState {
        let mut claimed = VisualState::new();
        for active in self.tweens.iter().filter(|a| a.target == *target) {
            claimed.merge(&active.to);
        }
        claimed
    }

    /// Re-renders what the scroll bindings show on `target` once a tween
    /// stops owning some of its properties.
    fn hand_back(&mut self, target: &S::Target) {
        let mut writes = Vec::new();
        for binding in self.scrolls.values() {
            let Some(index) = binding.targets.iter().position(|t| t == target) else { continue };
            if let Some(state) = binding.state_of(index) {
                writes.push((target.clone(), state));
            }
        }
        self.flush(writes);
    }

    /// Re-evaluates every scroll binding. Returns whether frames are needed.
    pub fn on_scroll(&mut self) -> bool {
        let viewport = self.stage.viewport();
        let mut writes = Vec::new();
        for binding in self.scrolls.values_mut() {
            if let Some(bounds) = self.stage.bounds(&binding.trigger) {
                binding.on_scroll(bounds, viewport, &mut writes);
            }
        }
        self.flush(writes);
        self.is_animating()
    }

    /// Advances every timed interpolation by `dt` seconds. Returns whether
    /// more frames are needed.
    pub fn on_frame(&mut self, dt: f64) -> bool {
        let mut writes = Vec::new();
        for binding in self.scrolls.values_mut() {
            binding.on_frame(dt, &mut writes);
        }
        self.flush(writes);

        let mut tween_writes = Vec::new();
        for active in &mut self.tweens {
            if active.tween.is_running() {
                active.tween.advance(dt);
                tween_writes.push((active.target.clone(), active.current()));
            }
        }
        for (target, state) in tween_writes {
            self.render(&target, &state);
        }

        let mut ended = Vec::new();
        self.tweens.retain(|active| {
            let keep = active.hold || !active.tween.is_finished();
            if !keep && !ended.contains(&active.target) {
                ended.push(active.target.clone());
            }
            keep
        });
        for target in ended {
            self.hand_back(&target);
        }
        self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.scrolls.values().any(ScrollBinding::is_moving) || self.tweens.iter().any(|a| a.tween.is_running())
    }

    /// Cancels everything registered under `section` and clears the styles
    /// it left on elements nothing else animates. Returns `false` if the
    /// handle was already released.
    pub fn release_section(&mut self, section: SectionHandle) -> bool {
        let Some(released) = self.sections.remove(section) else {
            return false;
        };

        let mut touched: Vec<S::Target> = Vec::new();
        let scroll_targets = self.scrolls.values().filter(|b| b.owner == section).flat_map(|b| b.targets.iter());
        let hover_targets = self
            .hovers
            .values()
            .filter(|b| b.owner == section)
            .flat_map(|b| b.targets.iter().chain(&b.companions));
        let tween_targets = self.tweens.iter().filter(|a| a.owner == section).map(|a| &a.target);
        for target in scroll_targets.chain(hover_targets).chain(tween_targets) {
            if !touched.contains(target) {
                touched.push(target.clone());
            }
        }
        let dropped: Vec<(S::Target, VisualState)> = touched
            .into_iter()
            .map(|target| {
                let props = self.written_to(&target, |owner| owner == section);
                (target, props)
            })
            .collect();

        self.scrolls.retain(|_, binding| binding.owner != section);
        self.hovers.retain(|_, binding| binding.owner != section);
        self.tweens.retain(|active| active.owner != section);

        for (target, mut props) in dropped {
            if !self.is_bound(&target) {
                self.forget(&target);
                continue;
            }
            // Still animated by another section: drop only what nobody
            // else writes.
            props.strip(&self.written_to(&target, |_| true));
            if !props.is_empty() {
                self.clear_props(&target, &props);
            }
        }
        debug!("released motion section {}", released.name);
        true
    }

    /// Global teardown: every section, binding and tween is dropped and every
    /// animated element is reset.
    pub fn release_all(&mut self) {
        self.sections.clear();
        self.scrolls.clear();
        self.hovers.clear();
        self.tweens.clear();
        for (target, state) in self.rendered.drain(..) {
            self.stage.reset(&target, &state);
        }
        debug!("released all motion sections");
    }

    fn is_bound(&self, target: &S::Target) -> bool {
        self.scrolls.values().any(|b| b.targets.contains(target))
            || self.hovers.values().any(|b| b.touches(target))
            || self.tweens.iter().any(|a| a.target == *target)
    }

    /// Every property the bindings of matching owners may write to `target`.
    fn written_to(&self, target: &S::Target, owned: impl Fn(SectionHandle) -> bool) -> VisualState {
        let mut props = VisualState::new();
        for binding in self.scrolls.values().filter(|b| owned(b.owner) && b.targets.contains(target)) {
            props.merge(&binding.from);
            props.merge(&binding.to);
        }
        for binding in self.hovers.values().filter(|b| owned(b.owner)) {
            if binding.targets.contains(target) {
                props.merge(&binding.effect.enter);
                props.merge(&binding.effect.leave);
                if let Some(glow) = binding.effect.glow {
                    props.merge(&VisualState::new().box_shadow(glow.to));
                }
            }
            if binding.companions.contains(target) {
                for (_, request) in &binding.effect.children {
                    props.merge(&request.to);
                }
            }
        }
        for active in self.tweens.iter().filter(|a| owned(a.owner) && a.target == *target) {
            props.merge(&active.to);
        }
        props
    }

    /// Removes `props` from the element's merged state and its inline style.
    fn clear_props(&mut self, target: &S::Target, props: &VisualState) {
        let Some(idx) = self.rendered.iter().position(|(t, _)| t == target) else { return };
        self.rendered[idx].1.strip(props);
        self.stage.reset(target, props);
        if !self.rendered[idx].1.is_empty() {
            self.stage.apply(target, &self.rendered[idx].1);
        }
    }

    fn forget(&mut self, target: &S::Target) {
        if let Some(idx) = self.rendered.iter().position(|(t, _)| t == target) {
            let (target, state) = self.rendered.swap_remove(idx);
            self.stage.reset(&target, &state);
        }
    }

    fn rendered_state(&self, target: &S::Target) -> Option<&VisualState> {
        self.rendered.iter().find(|(t, _)| t == target).map(|(_, s)| s)
    }

    /// Renders scroll-binding output, minus whatever tweens currently own.
    fn flush(&mut self, writes: Vec<(S::Target, VisualState)>) {
        for (target, mut state) in writes {
            state.strip(&self.claimed(&target));
            if !state.is_empty() {
                self.render(&target, &state);
            }
        }
    }

    fn render(&mut self, target: &S::Target, state: &VisualState) {
        let idx = match self.rendered.iter().position(|(t, _)| t == target) {
            Some(idx) => idx,
            None => {
                self.rendered.push((target.clone(), VisualState::new()));
                self.rendered.len() - 1
            }
        };
        self.rendered[idx].1.merge(state);
        self.stage.apply(target, &self.rendered[idx].1);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::motion::value::{Prop, PropValue};

    const VIEWPORT_HEIGHT: f64 = 1000.0;
    const FRAME: f64 = 1.0 / 60.0;

    /// In-memory stage. Elements sit at fixed document offsets; queries
    /// ending in `*` match every element with that prefix. A descendant is
    /// named `"<selector>@<parent>"`.
    struct FakeStage {
        elements: BTreeMap<&'static str, f64>,
        scroll_y: f64,
        applied: Vec<(&'static str, VisualState)>,
        resets: Vec<&'static str>,
    }

    impl FakeStage {
        fn new(elements: &[(&'static str, f64)]) -> Self {
            FakeStage {
                elements: elements.iter().copied().collect(),
                scroll_y: 0.0,
                applied: Vec::new(),
                resets: Vec::new(),
            }
        }

        fn last(&self, name: &str) -> Option<&VisualState> {
            self.applied.iter().rev().find(|(n, _)| *n == name).map(|(_, s)| s)
        }

        fn number(&self, name: &str, prop: Prop) -> f64 {
            self.last(name)
                .and_then(|s| s.get(prop))
                .and_then(|v| v.as_number())
                .unwrap_or_else(|| panic!("{} has no {:?}", name, prop))
        }
    }

    impl Stage for FakeStage {
        type Target = &'static str;
        type Query = &'static str;

        fn resolve(&self, query: &&'static str) -> Vec<&'static str> {
            match query.strip_suffix('*') {
                Some(prefix) => self.elements.keys().copied().filter(|k| k.starts_with(prefix)).collect(),
                None => self.elements.keys().copied().filter(|k| k == query).collect(),
            }
        }

        fn viewport(&self) -> Viewport {
            Viewport { height: VIEWPORT_HEIGHT, scroll_y: self.scroll_y }
        }

        fn bounds(&self, target: &&'static str) -> Option<Bounds> {
            self.elements.get(target).map(|top| Bounds { top: top - self.scroll_y, height: 800.0 })
        }

        fn apply(&mut self, target: &&'static str, state: &VisualState) {
            self.applied.push((*target, state.clone()));
        }

        fn reset(&mut self, target: &&'static str, _state: &VisualState) {
            self.resets.push(*target);
        }

        fn find_within(&self, target: &&'static str, selector: &'static str) -> Vec<&'static str> {
            let name = format!("{}@{}", selector, target);
            self.elements.keys().copied().filter(|k| **k == name).collect()
        }
    }

    /// A section at document offset 3000 with a heading, a form, three cards
    /// (the middle one with an icon) and a button.
    fn registry() -> MotionRegistry<FakeStage> {
        MotionRegistry::new(FakeStage::new(&[
            ("section", 3000.0),
            ("heading", 3050.0),
            ("form", 3200.0),
            ("card-0", 3400.0),
            ("card-1", 3400.0),
            ("card-2", 3400.0),
            ("icon@card-1", 3420.0),
            ("button", 3600.0),
        ]))
    }

    /// Scrolls so the top of `section` sits at `fraction` of the viewport.
    fn scroll_section_top_to(registry: &mut MotionRegistry<FakeStage>, fraction: f64) -> bool {
        registry.stage_mut().scroll_y = 3000.0 - fraction * VIEWPORT_HEIGHT;
        registry.on_scroll()
    }

    fn fade_in() -> ScrollAnimation<&'static str> {
        ScrollAnimation::new("section", VisualState::new().opacity(0.0), VisualState::new().opacity(1.0))
            .between(Anchor::top_at(70.0), Anchor::top_at(30.0))
    }

    fn run_frames(registry: &mut MotionRegistry<FakeStage>, seconds: f64) {
        let mut elapsed = 0.0;
        while elapsed < seconds {
            registry.on_frame(FRAME);
            elapsed += FRAME;
        }
    }

    #[test]
    fn scrubbed_opacity_is_half_at_range_midpoint() {
        let mut registry = registry();
        let section = registry.open_section("contact");
        assert!(registry.bind_scroll(section, &"form", fade_in()).is_some());

        scroll_section_top_to(&mut registry, 0.5);
        assert!((registry.stage().number("form", Prop::Opacity) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn scrubbed_value_is_linear_and_reversible() {
        let from = VisualState::new().y(100.0).scale(0.8);
        let to = VisualState::new().y(0.0).scale(1.0);
        let animation = || {
            ScrollAnimation::new("section", from.clone(), to.clone()).between(Anchor::top_at(70.0), Anchor::top_at(30.0))
        };

        let mut scrolled = registry();
        let section = scrolled.open_section("services");
        scrolled.bind_scroll(section, &"heading", animation());
        // top at 42% is progress 0.7; moving back to 46% is progress 0.6.
        scroll_section_top_to(&mut scrolled, 0.42);
        assert!((scrolled.stage().number("heading", Prop::Y) - 30.0).abs() < 1e-9);
        scroll_section_top_to(&mut scrolled, 0.46);

        let mut direct = registry();
        let section = direct.open_section("services");
        direct.bind_scroll(section, &"heading", animation());
        scroll_section_top_to(&mut direct, 0.46);

        let y = scrolled.stage().number("heading", Prop::Y);
        assert!((y - 40.0).abs() < 1e-9);
        assert_eq!(y, direct.stage().number("heading", Prop::Y));
        assert_eq!(
            scrolled.stage().number("heading", Prop::Scale),
            direct.stage().number("heading", Prop::Scale)
        );
    }

    #[test]
    fn from_state_is_rendered_when_bound_before_the_range() {
        let mut registry = registry();
        registry.stage_mut().scroll_y = 0.0;
        let section = registry.open_section("contact");
        registry.bind_scroll(section, &"form", fade_in());
        assert_eq!(registry.stage().number("form", Prop::Opacity), 0.0);
    }

    #[test]
    fn missing_targets_are_skipped_silently() {
        let mut registry = registry();
        let section = registry.open_section("hero");
        assert!(registry.bind_scroll(section, &"ghost", fade_in()).is_none());

        let orphan = ScrollAnimation::new("ghost", VisualState::new(), VisualState::new().opacity(1.0));
        assert!(registry.bind_scroll(section, &"form", orphan).is_none());
        assert!(registry.bind_hover(section, &"ghost", HoverEffect::new(VisualState::new(), VisualState::new())).is_none());
        assert_eq!(registry.play(section, &"ghost", TweenRequest::to(VisualState::new().opacity(1.0))), 0);
        assert!(registry.stage().applied.is_empty());
    }

    #[test]
    fn binding_on_a_released_section_is_skipped() {
        let mut registry = registry();
        let section = registry.open_section("hero");
        registry.release_section(section);
        assert!(registry.bind_scroll(section, &"form", fade_in()).is_none());
    }

    #[test]
    fn double_binding_produces_two_independent_interpolations() {
        let mut registry = registry();
        let section = registry.open_section("contact");
        let first = registry.bind_scroll(section, &"form", fade_in());
        let second = registry.bind_scroll(section, &"form", fade_in());
        assert!(first.is_some() && second.is_some());
        assert_ne!(first, second);

        let before = registry.stage().applied.len();
        scroll_section_top_to(&mut registry, 0.5);
        assert_eq!(registry.stage().applied.len() - before, 2);
    }

    #[test]
    fn released_section_never_mutates_its_targets_again() {
        let mut registry = registry();
        let section = registry.open_section("services");
        registry.bind_scroll(section, &"heading", fade_in());
        registry.bind_scroll(
            section,
            &"form",
            fade_in().play_once(TweenSpec::new(0.8), TogglePolicy::REVERSE),
        );
        let hover = registry
            .bind_hover(
                section,
                &"button",
                HoverEffect::new(VisualState::new().scale(1.1), VisualState::new().scale(1.0)),
            )
            .unwrap();
        registry.play(section, &"card*", TweenRequest::to(VisualState::new().rotation(360.0)).spec(TweenSpec::new(2.0)));
        scroll_section_top_to(&mut registry, 0.5);
        registry.pointer(hover, 0, Pointer::Enter);
        registry.on_frame(FRAME);

        assert!(registry.release_section(section));
        assert!(registry.stage().resets.contains(&"heading"));
        assert!(registry.stage().resets.contains(&"card-2"));
        registry.stage_mut().applied.clear();

        scroll_section_top_to(&mut registry, 0.1);
        assert!(!registry.pointer(hover, 0, Pointer::Leave));
        run_frames(&mut registry, 3.0);
        assert!(registry.stage().applied.is_empty());
        assert!(!registry.is_animating());
        assert!(registry.hover_targets(hover).is_empty());
    }

    #[test]
    fn release_is_idempotent() {
        let mut registry = registry();
        let section = registry.open_section("footer");
        registry.bind_scroll(section, &"form", fade_in());
        assert!(registry.release_section(section));
        assert!(!registry.release_section(section));
        assert_eq!(registry.section_count(), 0);
    }

    #[test]
    fn release_leaves_other_sections_alone() {
        let mut registry = registry();
        let hero = registry.open_section("hero");
        let contact = registry.open_section("contact");
        registry.bind_scroll(hero, &"heading", fade_in());
        registry.bind_scroll(contact, &"form", fade_in());

        registry.release_section(hero);
        registry.stage_mut().applied.clear();
        scroll_section_top_to(&mut registry, 0.5);

        assert!(registry.stage().last("heading").is_none());
        assert!(registry.stage().last("form").is_some());
        assert!(!registry.stage().resets.contains(&"form"));
    }

    #[test]
    fn hover_enter_then_leave_converges_to_leave_state() {
        let mut registry = registry();
        let section = registry.open_section("testimonials");
        let red = crate::motion::value::Rgba::rgba(193, 18, 31, 0.7);
        let effect = HoverEffect::new(VisualState::new().scale(1.15), VisualState::new().scale(1.0))
            .duration(0.2)
            .glow(Shadow::ring(0.0, red), Shadow::ring(25.0, red.with_alpha(0.0)), 0.6);
        let key = registry.bind_hover(section, &"button", effect).unwrap();

        assert!(registry.pointer(key, 0, Pointer::Enter));
        registry.on_frame(0.05);
        let mid = registry.stage().number("button", Prop::Scale);
        assert!(mid > 1.0 && mid < 1.15);

        assert!(registry.pointer(key, 0, Pointer::Leave));
        run_frames(&mut registry, 1.0);
        assert_eq!(registry.stage().number("button", Prop::Scale), 1.0);
        assert!(!registry.is_animating());
    }

    #[test]
    fn hover_repeats_the_same_two_states() {
        let mut registry = registry();
        let section = registry.open_section("services");
        let effect = HoverEffect::new(VisualState::new().scale(1.12).y(-15.0), VisualState::new().scale(1.0).y(0.0));
        let key = registry.bind_hover(section, &"card*", effect).unwrap();
        assert_eq!(registry.hover_targets(key).len(), 3);

        for _ in 0..3 {
            registry.pointer(key, 1, Pointer::Enter);
            run_frames(&mut registry, 0.5);
            assert_eq!(registry.stage().number("card-1", Prop::Scale), 1.12);
            registry.pointer(key, 1, Pointer::Leave);
            run_frames(&mut registry, 0.5);
            assert_eq!(registry.stage().number("card-1", Prop::Y), 0.0);
        }
        assert!(registry.stage().last("card-0").is_none());
        assert!(!registry.pointer(key, 7, Pointer::Enter));
    }

    #[test]
    fn newer_tween_overwrites_only_shared_properties() {
        let mut registry = registry();
        let section = registry.open_section("hero");
        registry.play(
            section,
            &"button",
            TweenRequest::from_to(VisualState::new().opacity(0.0).scale(0.9), VisualState::new().opacity(1.0).scale(1.0))
                .spec(TweenSpec::new(1.0).easing(Easing::Linear)),
        );
        registry.on_frame(0.5);
        registry.play(
            section,
            &"button",
            TweenRequest::to(VisualState::new().scale(2.0)).spec(TweenSpec::new(0.1).easing(Easing::Linear)),
        );
        run_frames(&mut registry, 1.0);

        assert_eq!(registry.stage().number("button", Prop::Scale), 2.0);
        assert_eq!(registry.stage().number("button", Prop::Opacity), 1.0);
    }

    #[test]
    fn play_once_reverse_policy_plays_and_rewinds() {
        let mut registry = registry();
        let section = registry.open_section("footer");
        let spec = TweenSpec::new(0.8).easing(Easing::Linear);
        let animation = ScrollAnimation::new("section", VisualState::new().opacity(0.0).y(30.0), VisualState::new().opacity(1.0).y(0.0))
            .range(TriggerRange::new("top center+=100".parse().unwrap(), RangeEnd::After(10_000.0)))
            .play_once(spec, TogglePolicy::REVERSE);
        registry.bind_scroll(section, &"form", animation);
        assert_eq!(registry.stage().number("form", Prop::Opacity), 0.0);

        // Top edge at 50% is past the `center+=100` line (60%).
        assert!(scroll_section_top_to(&mut registry, 0.5));
        run_frames(&mut registry, 1.0);
        assert_eq!(registry.stage().number("form", Prop::Opacity), 1.0);
        assert!(!registry.is_animating());

        // Scrolling further inside does nothing new.
        assert!(!scroll_section_top_to(&mut registry, 0.3));

        assert!(scroll_section_top_to(&mut registry, 0.9));
        run_frames(&mut registry, 1.0);
        assert_eq!(registry.stage().number("form", Prop::Opacity), 0.0);
        assert_eq!(registry.stage().number("form", Prop::Y), 30.0);
    }

    #[test]
    fn play_once_is_not_scroll_driven() {
        let mut registry = registry();
        let section = registry.open_section("service-area");
        let animation = fade_in().play_once(TweenSpec::new(1.0).easing(Easing::Linear), TogglePolicy::PLAY_ONCE);
        registry.bind_scroll(section, &"form", animation);

        scroll_section_top_to(&mut registry, 0.5);
        registry.on_frame(0.25);
        let value = registry.stage().number("form", Prop::Opacity);
        scroll_section_top_to(&mut registry, 0.65);
        scroll_section_top_to(&mut registry, 0.9);
        assert_eq!(registry.stage().number("form", Prop::Opacity), value);
        run_frames(&mut registry, 1.0);
        assert_eq!(registry.stage().number("form", Prop::Opacity), 1.0);
    }

    #[test]
    fn pause_resume_policy_freezes_outside_the_range() {
        let mut registry = registry();
        let section = registry.open_section("process");
        let animation = fade_in().play_once(TweenSpec::new(1.0).easing(Easing::Linear), TogglePolicy::PAUSE_RESUME);
        registry.bind_scroll(section, &"form", animation);

        scroll_section_top_to(&mut registry, 0.5);
        registry.on_frame(0.4);
        assert!(!scroll_section_top_to(&mut registry, 0.1));
        run_frames(&mut registry, 1.0);
        let frozen = registry.stage().number("form", Prop::Opacity);
        assert!((frozen - 0.4).abs() < 1e-9);

        assert!(scroll_section_top_to(&mut registry, 0.5));
        run_frames(&mut registry, 1.0);
        assert_eq!(registry.stage().number("form", Prop::Opacity), 1.0);
    }

    #[test]
    fn smoothed_scrub_chases_scroll_position() {
        let mut registry = registry();
        let section = registry.open_section("testimonials");
        registry.bind_scroll(section, &"form", fade_in().scrub(Some(1.5)));
        assert_eq!(registry.stage().number("form", Prop::Opacity), 0.0);

        assert!(scroll_section_top_to(&mut registry, 0.5));
        registry.on_frame(FRAME);
        let first = registry.stage().number("form", Prop::Opacity);
        assert!(first > 0.0 && first < 0.5);

        run_frames(&mut registry, 3.0);
        assert_eq!(registry.stage().number("form", Prop::Opacity), 0.5);
        assert!(!registry.is_animating());
    }

    #[test]
    fn stagger_spreads_targets_across_the_range() {
        let mut registry = registry();
        let section = registry.open_section("services");
        let animation = fade_in().stagger(0.5);
        registry.bind_scroll(section, &"card*", animation);

        scroll_section_top_to(&mut registry, 0.5);
        let first = registry.stage().number("card-0", Prop::Opacity);
        let second = registry.stage().number("card-1", Prop::Opacity);
        let third = registry.stage().number("card-2", Prop::Opacity);
        assert_eq!(first, 1.0);
        assert_eq!(second, 0.5);
        assert_eq!(third, 0.0);

        scroll_section_top_to(&mut registry, 0.3);
        assert_eq!(registry.stage().number("card-2", Prop::Opacity), 1.0);
    }

    #[test]
    fn looping_tween_keeps_frames_coming_until_released() {
        let mut registry = registry();
        let section = registry.open_section("floating-call");
        let spec = TweenSpec::new(2.5).repeat(crate::motion::tween::Repeat::Forever).yoyo(true);
        registry.play(section, &"button", TweenRequest::to(VisualState::new().y(-10.0)).spec(spec));
        run_frames(&mut registry, 10.0);
        assert!(registry.is_animating());

        registry.release_section(section);
        assert!(!registry.on_frame(FRAME));
    }

    #[test]
    fn release_all_resets_every_element() {
        let mut registry = registry();
        let hero = registry.open_section("hero");
        let footer = registry.open_section("footer");
        registry.bind_scroll(hero, &"heading", fade_in());
        registry.play(footer, &"button", TweenRequest::to(VisualState::new().opacity(0.5)).spec(TweenSpec::new(1.0)));

        registry.release_all();
        assert_eq!(registry.section_count(), 0);
        assert!(registry.stage().resets.contains(&"heading"));
        assert!(registry.stage().resets.contains(&"button"));
        registry.stage_mut().applied.clear();
        assert!(!registry.on_scroll());
        assert!(!registry.on_frame(FRAME));
        assert!(registry.stage().applied.is_empty());
    }

    #[test]
    fn merged_state_keeps_properties_from_other_bindings() {
        let mut registry = registry();
        let section = registry.open_section("navbar");
        registry.bind_scroll(section, &"form", fade_in());
        registry.play(
            section,
            &"form",
            TweenRequest::to(VisualState::new().y(-5.0)).spec(TweenSpec::new(0.0)),
        );
        let last = registry.stage().last("form").unwrap();
        assert_eq!(last.get(Prop::Y), Some(PropValue::Number(-5.0)));
        assert!(last.contains(Prop::Opacity));
    }

    #[test]
    fn hovered_property_survives_scrolling_until_leave() {
        let mut registry = registry();
        let section = registry.open_section("emergency");
        let grow = ScrollAnimation::new("section", VisualState::new().scale(0.85), VisualState::new().scale(1.0))
            .between(Anchor::top_at(70.0), Anchor::top_at(30.0));
        registry.bind_scroll(section, &"button", grow);
        let key = registry
            .bind_hover(
                section,
                &"button",
                HoverEffect::new(VisualState::new().scale(1.12), VisualState::new().scale(1.0)).duration(0.3),
            )
            .unwrap();

        scroll_section_top_to(&mut registry, 0.3);
        assert_eq!(registry.stage().number("button", Prop::Scale), 1.0);
        registry.pointer(key, 0, Pointer::Enter);
        run_frames(&mut registry, 1.0);
        assert_eq!(registry.stage().number("button", Prop::Scale), 1.12);

        // Still hovered: the scrub may not take the scale back.
        scroll_section_top_to(&mut registry, 0.31);
        assert_eq!(registry.stage().number("button", Prop::Scale), 1.12);
        scroll_section_top_to(&mut registry, 0.5);
        assert_eq!(registry.stage().number("button", Prop::Scale), 1.12);

        // Leaving animates from the hovered value, then the scrub owns scale
        // again and shows the current scroll position.
        registry.pointer(key, 0, Pointer::Leave);
        registry.on_frame(FRAME);
        assert!(registry.stage().number("button", Prop::Scale) > 1.0);
        run_frames(&mut registry, 1.0);
        assert!((registry.stage().number("button", Prop::Scale) - 0.925).abs() < 1e-9);
        scroll_section_top_to(&mut registry, 0.6);
        assert!((registry.stage().number("button", Prop::Scale) - 0.8875).abs() < 1e-9);
    }

    #[test]
    fn timed_tween_suspends_the_scrub_until_it_ends() {
        let mut registry = registry();
        let section = registry.open_section("contact");
        registry.bind_scroll(section, &"form", fade_in());
        scroll_section_top_to(&mut registry, 0.5);
        registry.play(
            section,
            &"form",
            TweenRequest::to(VisualState::new().opacity(1.0).y(-10.0)).spec(TweenSpec::new(1.0).easing(Easing::Linear)),
        );
        registry.on_frame(0.5);
        assert!((registry.stage().number("form", Prop::Opacity) - 0.75).abs() < 1e-9);

        scroll_section_top_to(&mut registry, 0.6);
        assert!((registry.stage().number("form", Prop::Opacity) - 0.75).abs() < 1e-9);

        run_frames(&mut registry, 1.0);
        assert!((registry.stage().number("form", Prop::Opacity) - 0.25).abs() < 1e-9);
        assert_eq!(registry.stage().number("form", Prop::Y), -10.0);
    }

    #[test]
    fn release_drops_only_the_released_sections_properties() {
        let mut registry = registry();
        let hero = registry.open_section("hero");
        let contact = registry.open_section("contact");
        registry.bind_scroll(hero, &"form", fade_in());
        let rise = ScrollAnimation::new("section", VisualState::new().y(40.0), VisualState::new().y(0.0))
            .between(Anchor::top_at(70.0), Anchor::top_at(30.0));
        registry.bind_scroll(contact, &"form", rise);
        scroll_section_top_to(&mut registry, 0.5);
        assert!(registry.stage().last("form").unwrap().contains(Prop::Opacity));

        registry.release_section(hero);
        assert!(registry.stage().resets.contains(&"form"));
        assert!(!registry.stage().last("form").unwrap().contains(Prop::Opacity));

        scroll_section_top_to(&mut registry, 0.4);
        let last = registry.stage().last("form").unwrap();
        assert!(!last.contains(Prop::Opacity));
        assert!((registry.stage().number("form", Prop::Y) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn hover_spins_matching_descendants() {
        let mut registry = registry();
        let section = registry.open_section("services");
        let spin = TweenRequest::from_to(VisualState::new().rotation(0.0), VisualState::new().rotation(360.0))
            .spec(TweenSpec::new(0.6).easing(Easing::back_out()));
        let effect = HoverEffect::new(VisualState::new().scale(1.12), VisualState::new().scale(1.0)).child("icon", spin);
        let key = registry.bind_hover(section, &"card*", effect).unwrap();

        registry.pointer(key, 0, Pointer::Enter);
        run_frames(&mut registry, 1.0);
        assert!(registry.stage().last("icon@card-1").is_none());

        registry.pointer(key, 1, Pointer::Enter);
        assert!(registry.stage().number("icon@card-1", Prop::Rotation).abs() < 1e-9);
        run_frames(&mut registry, 1.0);
        assert_eq!(registry.stage().number("icon@card-1", Prop::Rotation), 360.0);
        assert!(!registry.is_animating());

        // Leaving does not spin back; entering again spins from zero.
        registry.pointer(key, 1, Pointer::Leave);
        run_frames(&mut registry, 1.0);
        assert_eq!(registry.stage().number("icon@card-1", Prop::Rotation), 360.0);
        registry.pointer(key, 1, Pointer::Enter);
        assert!(registry.stage().number("icon@card-1", Prop::Rotation).abs() < 1e-9);

        registry.release_section(section);
        assert!(registry.stage().resets.contains(&"icon@card-1"));
    }
}
