/// Which way a swipe travels across the screen.
///
/// Chosen once from the initial horizontal velocity and fixed for the
/// lifetime of the effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    ToLeft,
    ToRight,
}

impl SwipeDirection {
    /// Rightward velocity selects `ToRight`; zero or leftward selects `ToLeft`.
    pub fn from_velocity(velocity_x: f32) -> Self {
        if velocity_x > 0.0 {
            SwipeDirection::ToRight
        } else {
            SwipeDirection::ToLeft
        }
    }

    pub fn sign(&self) -> f32 {
        match self {
            SwipeDirection::ToLeft => -1.0,
            SwipeDirection::ToRight => 1.0,
        }
    }

    /// True when a signed horizontal offset points against this direction.
    pub fn opposes(&self, offset_x: f32) -> bool {
        match self {
            SwipeDirection::ToLeft => offset_x > 0.0,
            SwipeDirection::ToRight => offset_x < 0.0,
        }
    }
}
