use glam::Vec2;

/// Settable length for 2D vectors
pub trait SetLength {
    /// Rescale to `len`, keeping the direction.
    ///
    /// A zero-length vector has no direction and is left as it is.
    fn set_length(&mut self, len: f32);

    fn with_length(self, len: f32) -> Self;
}

impl SetLength for Vec2 {
    fn set_length(&mut self, len: f32) {
        let current = self.length();
        if current > 0.0 {
            *self *= len / current;
        }
    }

    fn with_length(mut self, len: f32) -> Self {
        self.set_length(len);
        self
    }
}
