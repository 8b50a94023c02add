use std::f64::consts::PI;

/// Which end of the curve the acceleration sits on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    In,
    Out,
    InOut,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// `power` 1..=4 maps to quad, cubic, quart and quint curves.
    Power { power: u8, ease: Ease },
    Sine(Ease),
    /// Overshoots past the target before settling.
    BackOut { overshoot: f64 },
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Power { power: 1, ease: Ease::Out }
    }
}

impl Easing {
    pub const fn power_out(power: u8) -> Self {
        Easing::Power { power, ease: Ease::Out }
    }

    pub const fn power_in_out(power: u8) -> Self {
        Easing::Power { power, ease: Ease::InOut }
    }

    pub const fn back_out() -> Self {
        Easing::BackOut { overshoot: 1.70158 }
    }

    /// Maps linear progress in `[0, 1]` onto the curve. Inputs outside the
    /// unit range are clamped so callers can pass raw progress.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::Power { power, ease } => {
                let exp = i32::from(power.clamp(1, 4)) + 1;
                match ease {
                    Ease::In => t.powi(exp),
                    Ease::Out => 1.0 - (1.0 - t).powi(exp),
                    Ease::InOut => {
                        if t < 0.5 {
                            (2.0 * t).powi(exp) / 2.0
                        } else {
                            1.0 - (2.0 * (1.0 - t)).powi(exp) / 2.0
                        }
                    }
                }
            }
            Easing::Sine(ease) => match ease {
                Ease::In => 1.0 - (t * PI / 2.0).cos(),
                Ease::Out => (t * PI / 2.0).sin(),
                Ease::InOut => -((PI * t).cos() - 1.0) / 2.0,
            },
            Easing::BackOut { overshoot } => {
                let p = t - 1.0;
                p * p * ((overshoot + 1.0) * p + overshoot) + 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Easing; 7] = [
        Easing::Linear,
        Easing::Power { power: 1, ease: Ease::In },
        Easing::Power { power: 3, ease: Ease::Out },
        Easing::Power { power: 2, ease: Ease::InOut },
        Easing::Sine(Ease::InOut),
        Easing::Sine(Ease::Out),
        Easing::BackOut { overshoot: 1.70158 },
    ];

    #[test]
    fn every_curve_starts_at_zero_and_ends_at_one() {
        for curve in CURVES {
            assert!(curve.apply(0.0).abs() < 1e-9, "{:?}", curve);
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-9, "{:?}", curve);
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
    }

    #[test]
    fn power_out_leads_linear_and_in_out_is_symmetric() {
        let out = Easing::power_out(3);
        assert!(out.apply(0.25) > 0.25);

        let in_out = Easing::power_in_out(2);
        assert!((in_out.apply(0.5) - 0.5).abs() < 1e-9);
        assert!((in_out.apply(0.2) + in_out.apply(0.8) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn back_out_overshoots() {
        let back = Easing::back_out();
        assert!(back.apply(0.7) > 1.0);
    }
}
