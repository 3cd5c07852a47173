use std::collections::VecDeque;

use glam::Vec3;

use crate::util::flatten_direction;

/// A fixed length buffer of recent horizontal directions, used to smooth out the heading.
///
/// Every sample is a unit vector with no vertical component.
#[derive(Debug, Clone)]
pub struct DirectionBuffer {
    samples: VecDeque<Vec3>,
    capacity: usize,
}

impl DirectionBuffer {
    /// Create a buffer holding at most `capacity` samples
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a direction into the buffer, evicting the oldest sample if full, and return the new average.
    ///
    /// The direction is flattened onto the horizontal plane first. Directions with no horizontal component
    /// are dropped. Returns `None` if the buffer has no meaningful average.
    pub fn push(&mut self, direction: Vec3) -> Option<Vec3> {
        if let Some(sample) = flatten_direction(direction) {
            if self.samples.len() >= self.capacity {
                self.samples.pop_front();
            }
            if self.capacity > 0 {
                self.samples.push_back(sample);
            }
        }
        self.average()
    }

    /// The normalized average of all samples in the buffer
    pub fn average(&self) -> Option<Vec3> {
        if self.samples.is_empty() {
            return None;
        }
        let sum = self.samples.iter().copied().sum::<Vec3>();
        flatten_direction(sum / self.samples.len() as f32)
    }

    /// Samples in the buffer, oldest first
    pub fn samples(&self) -> impl Iterator<Item = &Vec3> {
        self.samples.iter()
    }

    /// Number of samples in the buffer
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Is the buffer empty?
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of samples held
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
