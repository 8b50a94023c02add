use super::easing::Easing;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Repeat {
    Never,
    /// Extra iterations after the first.
    Times(u32),
    Forever,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSpec {
    /// Seconds per iteration.
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
    pub repeat: Repeat,
    /// Odd iterations run backwards.
    pub yoyo: bool,
}

impl Default for TweenSpec {
    fn default() -> Self {
        TweenSpec {
            duration: 0.5,
            delay: 0.0,
            easing: Easing::default(),
            repeat: Repeat::Never,
            yoyo: false,
        }
    }
}

impl TweenSpec {
    pub fn new(duration: f64) -> Self {
        TweenSpec { duration, ..Default::default() }
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    fn iterations(&self) -> f64 {
        match self.repeat {
            Repeat::Never => 1.0,
            Repeat::Times(n) => f64::from(n) + 1.0,
            Repeat::Forever => f64::INFINITY,
        }
    }

    /// Seconds from start to finish, delay included.
    pub fn total(&self) -> f64 {
        self.delay + self.duration.max(0.0) * self.iterations()
    }
}

/// Playback state of one timed interpolation. Time only moves through
/// [`Tween::advance`], so the same sequence of deltas always yields the same
/// progress.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    spec: TweenSpec,
    time: f64,
    reversed: bool,
    paused: bool,
}

impl Tween {
    pub fn new(spec: TweenSpec) -> Self {
        Tween { spec, time: 0.0, reversed: false, paused: false }
    }

    pub fn spec(&self) -> &TweenSpec {
        &self.spec
    }

    pub fn advance(&mut self, dt: f64) {
        if self.paused || dt <= 0.0 {
            return;
        }
        if self.reversed {
            self.time = (self.time - dt).max(0.0);
        } else {
            self.time = (self.time + dt).min(self.spec.total());
        }
    }

    /// Eased progress of the current iteration.
    pub fn progress(&self) -> f64 {
        let spec = &self.spec;
        if self.time < spec.delay {
            return spec.easing.apply(0.0);
        }
        if spec.duration <= 0.0 {
            return spec.easing.apply(1.0);
        }
        let elapsed = self.time - spec.delay;
        let iterations = spec.iterations();
        let (iteration, within) = if elapsed >= spec.duration * iterations {
            (iterations - 1.0, spec.duration)
        } else {
            let iteration = (elapsed / spec.duration).floor();
            (iteration, elapsed - iteration * spec.duration)
        };
        let mut raw = within / spec.duration;
        if spec.yoyo && iteration % 2.0 == 1.0 {
            raw = 1.0 - raw;
        }
        spec.easing.apply(raw)
    }

    pub fn is_finished(&self) -> bool {
        if self.reversed {
            self.time <= 0.0
        } else {
            self.time >= self.spec.total()
        }
    }

    /// Whether further frames would change the output.
    pub fn is_running(&self) -> bool {
        !self.paused && !self.is_finished()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn play(&mut self) {
        self.reversed = false;
        self.paused = false;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn reverse(&mut self) {
        self.reversed = true;
        self.paused = false;
    }

    pub fn restart(&mut self) {
        self.time = 0.0;
        self.play();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(duration: f64) -> TweenSpec {
        TweenSpec::new(duration).easing(Easing::Linear)
    }

    #[test]
    fn runs_from_zero_to_one_over_duration() {
        let mut tween = Tween::new(linear(1.0));
        assert_eq!(tween.progress(), 0.0);
        tween.advance(0.25);
        assert!((tween.progress() - 0.25).abs() < 1e-9);
        tween.advance(5.0);
        assert_eq!(tween.progress(), 1.0);
        assert!(tween.is_finished());
        assert!(!tween.is_running());
    }

    #[test]
    fn delay_holds_the_start() {
        let mut tween = Tween::new(linear(1.0).delay(0.5));
        tween.advance(0.4);
        assert_eq!(tween.progress(), 0.0);
        tween.advance(0.6);
        assert!((tween.progress() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn reverse_runs_back_to_the_start() {
        let mut tween = Tween::new(linear(1.0));
        tween.advance(0.8);
        tween.reverse();
        tween.advance(0.3);
        assert!((tween.progress() - 0.5).abs() < 1e-9);
        tween.advance(1.0);
        assert_eq!(tween.progress(), 0.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn paused_tween_ignores_time() {
        let mut tween = Tween::new(linear(1.0));
        tween.advance(0.5);
        tween.pause();
        tween.advance(0.4);
        assert!((tween.progress() - 0.5).abs() < 1e-9);
        assert!(!tween.is_running());
        tween.resume();
        tween.advance(0.25);
        assert!((tween.progress() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn yoyo_runs_odd_iterations_backwards() {
        let mut tween = Tween::new(linear(1.0).repeat(Repeat::Times(1)).yoyo(true));
        tween.advance(1.25);
        assert!((tween.progress() - 0.75).abs() < 1e-9);
        tween.advance(1.0);
        assert_eq!(tween.progress(), 0.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn forever_never_finishes() {
        let mut tween = Tween::new(linear(0.5).repeat(Repeat::Forever));
        tween.advance(1000.2);
        assert!(tween.is_running());
        assert!((tween.progress() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn restart_rewinds() {
        let mut tween = Tween::new(linear(1.0));
        tween.advance(2.0);
        tween.restart();
        assert_eq!(tween.progress(), 0.0);
        assert!(tween.is_running());
    }
}
