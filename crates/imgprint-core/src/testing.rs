//! Counting mock capabilities shared by the in-crate test modules.

use std::cell::{Cell, RefCell};

use crate::capability::{Fingerprint, ImageOps};
use crate::error::{CoreError, CoreResult};

/// Decoded-image stand-in carrying only its dimensions.
#[derive(Debug, Clone, Copy)]
pub struct MockHandle {
    pub width: u32,
    pub height: u32,
}

/// Acquisition/release counters recorded by [`MockOps`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OpsStats {
    pub decoded: usize,
    pub cropped: usize,
    pub released: usize,
}

impl OpsStats {
    /// Total handles handed out.
    pub fn acquired(&self) -> usize {
        self.decoded + self.cropped
    }
}

/// Image-processing mock that records every boundary call.
///
/// Decodes any non-empty byte slice into a handle of the configured
/// dimensions; empty input fails like an unreadable file would.
pub struct MockOps {
    width: u32,
    height: u32,
    stats: RefCell<OpsStats>,
    crops: RefCell<Vec<(u32, u32, u32, u32)>>,
}

impl MockOps {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            stats: RefCell::new(OpsStats::default()),
            crops: RefCell::new(Vec::new()),
        }
    }

    pub fn stats(&self) -> OpsStats {
        *self.stats.borrow()
    }

    /// Crop rectangles in call order, as `(x, y, width, height)`.
    pub fn crops(&self) -> Vec<(u32, u32, u32, u32)> {
        self.crops.borrow().clone()
    }
}

impl ImageOps for MockOps {
    type Handle = MockHandle;

    fn decode(&self, bytes: &[u8]) -> CoreResult<MockHandle> {
        if bytes.is_empty() {
            return Err(CoreError::UnreadableImage {
                reason: "empty input".to_string(),
            });
        }
        self.stats.borrow_mut().decoded += 1;
        Ok(MockHandle {
            width: self.width,
            height: self.height,
        })
    }

    fn dimensions(&self, image: &MockHandle) -> (u32, u32) {
        (image.width, image.height)
    }

    fn crop(
        &self,
        _image: &MockHandle,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> CoreResult<MockHandle> {
        self.stats.borrow_mut().cropped += 1;
        self.crops.borrow_mut().push((x, y, width, height));
        Ok(MockHandle { width, height })
    }

    fn release(&self, _image: MockHandle) {
        self.stats.borrow_mut().released += 1;
    }
}

/// Fingerprint mock that replays a fixed value sequence.
///
/// Cycles through `values`; optionally fails on the n-th call (1-based) to
/// exercise mid-pipeline error paths.
pub struct MockFingerprint {
    values: Vec<u64>,
    fail_on_call: Option<usize>,
    calls: Cell<usize>,
}

impl MockFingerprint {
    /// Always produce the same raw hash.
    pub fn constant(value: u64) -> Self {
        Self::sequence(vec![value])
    }

    /// Produce `values` in order, cycling when exhausted.
    pub fn sequence(values: Vec<u64>) -> Self {
        assert!(!values.is_empty(), "mock needs at least one value");
        Self {
            values,
            fail_on_call: None,
            calls: Cell::new(0),
        }
    }

    /// Fail the n-th fingerprint call (1-based) instead of returning a value.
    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    /// Number of fingerprint calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Fingerprint<MockHandle> for MockFingerprint {
    fn fingerprint(&self, _image: &MockHandle) -> CoreResult<u64> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        if self.fail_on_call == Some(call) {
            return Err(CoreError::Fingerprint {
                algorithm: self.name().to_string(),
                reason: format!("injected failure on call {}", call),
            });
        }
        Ok(self.values[(call - 1) % self.values.len()])
    }

    fn name(&self) -> &str {
        "mock"
    }
}
