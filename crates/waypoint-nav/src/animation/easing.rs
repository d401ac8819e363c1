//! Timing curves for smooth scrolling.
//!
//! The named curves match the CSS keywords so that a scroll driven from here
//! feels like `scroll-behavior: smooth` next to the rest of the page.
//!
//! ```
//! use waypoint_nav::animation::easing::EasingFunction;
//!
//! let ease = EasingFunction::parse("ease-in-out").unwrap();
//! assert!((ease.evaluate(0.5) - 0.5).abs() < 0.001);
//! ```

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    Linear,
    /// `cubic-bezier(0.25, 0.1, 0.25, 1.0)`
    Ease,
    /// `cubic-bezier(0.42, 0, 1, 1)`
    EaseIn,
    /// `cubic-bezier(0, 0, 0.58, 1)`
    EaseOut,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`
    EaseInOut,
    /// Custom curve; x control points lie in [0, 1].
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Default for EasingFunction {
    fn default() -> Self {
        Self::EaseInOut
    }
}

impl EasingFunction {
    /// Parse a configured curve: a name in `snake_case` or `kebab-case`, or
    /// `cubic-bezier(x1, y1, x2, y2)`.
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        if let Some(args) = normalized
            .strip_prefix("cubic_bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_bezier_args(args);
        }
        match normalized.as_str() {
            "linear" => Some(Self::Linear),
            "ease" => Some(Self::Ease),
            "ease_in" => Some(Self::EaseIn),
            "ease_out" => Some(Self::EaseOut),
            "ease_in_out" => Some(Self::EaseInOut),
            _ => None,
        }
    }

    // Minus signs were folded into '_' by the name normalization above.
    fn parse_bezier_args(args: &str) -> Option<Self> {
        let values = args
            .split(',')
            .map(|v| v.trim().replace('_', "-").parse::<f32>().ok().filter(|v| v.is_finite()))
            .collect::<Option<Vec<_>>>()?;
        match values[..] {
            [x1, y1, x2, y2] => Self::cubic_bezier(x1, y1, x2, y2),
            _ => None,
        }
    }

    /// Build a custom curve, rejecting x control points outside [0, 1].
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Option<Self> {
        let unit = 0.0..=1.0;
        (unit.contains(&x1) && unit.contains(&x2)).then_some(Self::CubicBezier { x1, y1, x2, y2 })
    }

    /// Map linear progress `t` (clamped to [0, 1]) to eased progress.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let (x1, y1, x2, y2) = match *self {
            Self::Linear => return t,
            Self::Ease => (0.25, 0.1, 0.25, 1.0),
            Self::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => (0.42, 0.0, 0.58, 1.0),
            Self::CubicBezier { x1, y1, x2, y2 } => (x1, y1, x2, y2),
        };
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let s = solve_for_x(x1, x2, t);
        bezier(y1, y2, s)
    }
}

/// One coordinate of a cubic bezier anchored at 0 and 1:
/// `3(1-s)²s·p1 + 3(1-s)s²·p2 + s³`
#[inline]
fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let ms = 1.0 - s;
    3.0 * ms * ms * s * p1 + 3.0 * ms * s * s * p2 + s * s * s
}

#[inline]
fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let ms = 1.0 - s;
    3.0 * ms * ms * p1 + 6.0 * ms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Newton-Raphson for the curve parameter whose x equals `x`.
fn solve_for_x(x1: f32, x2: f32, x: f32) -> f32 {
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < 1e-6 {
            break;
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_endpoints() {
        for ease in [
            EasingFunction::Linear,
            EasingFunction::Ease,
            EasingFunction::EaseIn,
            EasingFunction::EaseOut,
            EasingFunction::EaseInOut,
        ] {
            assert!(approx_eq(ease.evaluate(0.0), 0.0), "{:?}", ease);
            assert!(approx_eq(ease.evaluate(1.0), 1.0), "{:?}", ease);
            assert!(approx_eq(ease.evaluate(-3.0), 0.0), "{:?}", ease);
            assert!(approx_eq(ease.evaluate(7.0), 1.0), "{:?}", ease);
        }
    }

    #[test]
    fn test_ease_in_out_symmetry() {
        let ease = EasingFunction::EaseInOut;
        assert!(approx_eq(ease.evaluate(0.5), 0.5));
        assert!(approx_eq(ease.evaluate(0.25) + ease.evaluate(0.75), 1.0));
    }

    #[test]
    fn test_ease_out_leads_linear() {
        let ease = EasingFunction::EaseOut;
        assert!(ease.evaluate(0.25) > 0.25);
        assert!(EasingFunction::EaseIn.evaluate(0.25) < 0.25);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(EasingFunction::parse("ease_in_out"), Some(EasingFunction::EaseInOut));
        assert_eq!(EasingFunction::parse("Ease-Out"), Some(EasingFunction::EaseOut));
        assert_eq!(EasingFunction::parse("bouncy"), None);
    }

    #[test]
    fn test_parse_cubic_bezier() {
        assert_eq!(
            EasingFunction::parse("cubic-bezier(0.4, 0, 0.2, 1)"),
            Some(EasingFunction::CubicBezier { x1: 0.4, y1: 0.0, x2: 0.2, y2: 1.0 })
        );
        assert_eq!(
            EasingFunction::parse("cubic_bezier(0.3,-0.5,0.7,1.5)"),
            Some(EasingFunction::CubicBezier { x1: 0.3, y1: -0.5, x2: 0.7, y2: 1.5 })
        );
        assert_eq!(EasingFunction::parse("cubic-bezier(1.2, 0, 0.5, 1)"), None);
        assert_eq!(EasingFunction::parse("cubic-bezier(0.4, 0, 0.2)"), None);
        assert_eq!(EasingFunction::parse("cubic-bezier(a, b, c, d)"), None);
    }

    #[test]
    fn test_custom_bezier_bounds() {
        assert!(EasingFunction::cubic_bezier(0.4, 0.0, 0.2, 1.0).is_some());
        assert!(EasingFunction::cubic_bezier(-0.1, 0.0, 0.5, 1.0).is_none());
        let linearish = EasingFunction::cubic_bezier(0.0, 0.0, 1.0, 1.0).unwrap();
        assert!(approx_eq(linearish.evaluate(0.5), 0.5));
    }
}
