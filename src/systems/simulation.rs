//! Animation clock
//!
//! Time is advanced by a fixed step every drawn frame rather than by wall
//! clock, so the animation speed follows the display's frame rate. The base
//! angle handed to the layout is `time * angular_velocity` degrees.

use crate::config::AnimationConfig;

/// Frame-driven animation time
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClock {
    time: f32,
    time_delta: f32,
    angular_velocity: f32,
}

impl AnimationClock {
    /// Create a clock at time zero
    pub fn new(time_delta: f32, angular_velocity: f32) -> Self {
        Self {
            time: 0.0,
            time_delta,
            angular_velocity,
        }
    }

    pub fn from_config(config: &AnimationConfig) -> Self {
        Self::new(config.time_delta, config.angular_velocity)
    }

    /// Step the clock once and return the new base angle in degrees
    pub fn advance(&mut self) -> f32 {
        self.time += self.time_delta;
        self.angle()
    }

    /// Base angle in degrees for the current time
    pub fn angle(&self) -> f32 {
        self.time * self.angular_velocity
    }

    /// Accumulated animation time
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}
