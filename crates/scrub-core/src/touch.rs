/// Turns absolute touch positions into scroll-direction deltas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchTracker {
    last_y: f64,
}

impl TouchTracker {
    pub fn start(&mut self, client_y: f64) {
        self.last_y = client_y;
    }

    /// Finger moving up yields a positive delta, like scrolling down.
    pub fn advance(&mut self, client_y: f64) -> f64 {
        let delta = self.last_y - client_y;
        self.last_y = client_y;
        delta
    }
}
