//! Velocity tracking for pan gestures.
//!
//! Weighted least-squares fit over the most recent samples, with recent
//! samples weighted more heavily.

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

/// Only use samples within the last 100ms for velocity calculation.
const HORIZON_MS: i64 = 100;

/// If no movement for this duration, assume the pointer has stopped.
const ASSUME_STOPPED_MS: i64 = 40;

/// Minimum movement (in pixels) over `ASSUME_STOPPED_MS` to count as moving.
const MIN_MOVEMENT_THRESHOLD: f32 = 2.0;

#[derive(Clone, Copy, Default)]
struct DataPointAtTime {
    time_ms: i64,
    data_point: f32,
}

/// 1D velocity tracker over absolute positions.
#[derive(Clone)]
pub struct VelocityTracker1D {
    samples: [Option<DataPointAtTime>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    pub fn add_data_point(&mut self, time_ms: i64, data_point: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(DataPointAtTime { time_ms, data_point });
    }

    /// Velocity in units/second, or 0.0 without enough recent movement.
    pub fn calculate_velocity(&self) -> f32 {
        let mut data_points = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut sample_count = 0;

        let Some(newest_sample) = self.samples[self.index] else {
            return 0.0;
        };

        let mut current_index = self.index;
        let mut oldest_sample_in_window = newest_sample;

        while let Some(sample) = self.samples[current_index] {
            let age = newest_sample.time_ms - sample.time_ms;
            if age > HORIZON_MS {
                break;
            }

            oldest_sample_in_window = sample;
            data_points[sample_count] = sample.data_point;
            times[sample_count] = -(age as f32);

            current_index = if current_index == 0 {
                HISTORY_SIZE - 1
            } else {
                current_index - 1
            };

            sample_count += 1;
            if sample_count >= HISTORY_SIZE {
                break;
            }
        }

        if sample_count < 2 {
            return 0.0;
        }

        let total_movement = (newest_sample.data_point - oldest_sample_in_window.data_point).abs();
        let time_span_ms = newest_sample.time_ms - oldest_sample_in_window.time_ms;
        if time_span_ms > ASSUME_STOPPED_MS && total_movement < MIN_MOVEMENT_THRESHOLD {
            return 0.0;
        }

        weighted_slope(&data_points[..sample_count], &times[..sample_count]) * 1000.0
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

/// Slope of `x = a + b*t` with exponentially decaying weights, newest first.
fn weighted_slope(data_points: &[f32], times: &[f32]) -> f32 {
    let decay = 0.95f32;
    let mut sum_weight = 0.0f32;
    let mut sum_t = 0.0f32;
    let mut sum_x = 0.0f32;
    let mut sum_tt = 0.0f32;
    let mut sum_tx = 0.0f32;

    for (i, (&x, &t)) in data_points.iter().zip(times).enumerate() {
        let weight = decay.powi(i as i32);
        sum_weight += weight;
        sum_t += weight * t;
        sum_x += weight * x;
        sum_tt += weight * t * t;
        sum_tx += weight * t * x;
    }

    let denom = sum_weight * sum_tt - sum_t * sum_t;
    if denom.abs() < f32::EPSILON {
        return 0.0;
    }
    (sum_weight * sum_tx - sum_t * sum_x) / denom
}
