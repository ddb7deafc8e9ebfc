//! Every-Nth-frame admission for the perception loop.

/// Admits one frame out of every `every` offered.
///
/// The first admitted frame is the `every`-th one offered, then every
/// `every` frames after that. With `every == 1` all frames pass.
///
/// # Examples
///
/// ```
/// use gridpilot_engine::FrameThrottle;
///
/// let mut throttle = FrameThrottle::new(3);
/// let admitted: Vec<bool> = (0..6).map(|_| throttle.admit()).collect();
/// assert_eq!(admitted, [false, false, true, false, false, true]);
/// ```
#[derive(Clone, Debug)]
pub struct FrameThrottle {
    every: u32,
    counter: u32,
}

impl FrameThrottle {
    /// Admit one frame in `every`. Zero is treated as one.
    pub fn new(every: u32) -> Self {
        Self {
            every: every.max(1),
            counter: 0,
        }
    }

    /// Offer one frame; returns whether it should be processed.
    pub fn admit(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.every {
            self.counter = 0;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fifth_frame() {
        let mut t = FrameThrottle::new(5);
        let admitted: Vec<usize> = (1..=20).filter(|_| t.admit()).collect();
        assert_eq!(admitted, [5, 10, 15, 20]);
    }

    #[test]
    fn one_admits_everything() {
        let mut t = FrameThrottle::new(1);
        assert!((0..10).all(|_| t.admit()));
    }

    #[test]
    fn zero_behaves_as_one() {
        let mut t = FrameThrottle::new(0);
        assert!((0..5).all(|_| t.admit()));
    }
}
