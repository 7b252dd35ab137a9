//! Directional light and global ambient inputs.

use glam::DVec3;

/// Per-frame lighting shared by every draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightEnvironment {
    /// Unit vector from the surface toward the light
    pub light_dir: DVec3,
    /// Linear RGB light colour
    pub light_color: DVec3,
    /// Global multiplier on every material's ambient term
    pub ambient_scale: f64,
}

impl Default for LightEnvironment {
    fn default() -> Self {
        Self {
            light_dir: DVec3::ONE.normalize(),
            light_color: DVec3::ONE,
            ambient_scale: 1.0,
        }
    }
}

impl LightEnvironment {
    /// White light from `direction`; zero vectors fall back to straight up.
    pub fn directional(direction: DVec3) -> Self {
        Self {
            light_dir: direction.try_normalize().unwrap_or(DVec3::Y),
            ..Self::default()
        }
    }
}

/// Light direction revolving about the vertical axis, one radian per second
pub fn orbiting_light(time_s: f64) -> DVec3 {
    DVec3::new(time_s.sin(), 1.0, time_s.cos()).normalize()
}

/// Slow day/night oscillation of ambient level and light tint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayNightCycle {
    pub night_tint: DVec3,
    pub day_tint: DVec3,
    /// Time divisor inside the sine (seconds per radian)
    pub time_scale_s: f64,
}

impl Default for DayNightCycle {
    fn default() -> Self {
        Self {
            night_tint: DVec3::new(0.25, 0.3, 0.6),
            day_tint: DVec3::new(1.0, 0.95, 0.85),
            time_scale_s: 10.0,
        }
    }
}

impl DayNightCycle {
    fn phase(&self, time_s: f64) -> f64 {
        (time_s / self.time_scale_s).sin()
    }

    /// `0.55 + 0.25 * sin(t / 10)`, always within `[0.3, 0.8]`
    pub fn ambient_scale(&self, time_s: f64) -> f64 {
        0.55 + 0.25 * self.phase(time_s)
    }

    /// Night tint at the trough, day tint at the crest
    pub fn light_color(&self, time_s: f64) -> DVec3 {
        let blend = (self.phase(time_s) + 1.0) * 0.5;
        self.night_tint.lerp(self.day_tint, blend)
    }

    pub fn environment(&self, light_dir: DVec3, time_s: f64) -> LightEnvironment {
        LightEnvironment {
            light_color: self.light_color(time_s),
            ambient_scale: self.ambient_scale(time_s),
            ..LightEnvironment::directional(light_dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn ambient_oscillates_around_midpoint() {
        let cycle = DayNightCycle::default();
        assert!((cycle.ambient_scale(0.0) - 0.55).abs() < 1e-12);
        assert!((cycle.ambient_scale(5.0 * PI) - 0.80).abs() < 1e-12);
        assert!((cycle.ambient_scale(15.0 * PI) - 0.30).abs() < 1e-12);
    }

    #[test]
    fn light_color_blends_between_tints() {
        let cycle = DayNightCycle::default();
        assert!((cycle.light_color(5.0 * PI) - cycle.day_tint).length() < 1e-12);
        assert!((cycle.light_color(15.0 * PI) - cycle.night_tint).length() < 1e-12);
        let mid = (cycle.day_tint + cycle.night_tint) * 0.5;
        assert!((cycle.light_color(0.0) - mid).length() < 1e-12);
    }

    #[test]
    fn orbiting_light_is_unit_and_above_horizon() {
        for t in [0.0, 1.0, 2.5, -4.0] {
            let d = orbiting_light(t);
            assert!((d.length() - 1.0).abs() < 1e-12);
            assert!(d.y > 0.0);
        }
    }

    #[test]
    fn zero_direction_falls_back_to_up() {
        assert_eq!(LightEnvironment::directional(DVec3::ZERO).light_dir, DVec3::Y);
    }
}
