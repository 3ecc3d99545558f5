use crate::sample::parser::Sample;

/// A trait that determines what happens to each received sample.
pub trait SampleSink {
    /// Presents one sample. Presentation has no failure mode visible to the caller.
    fn present(&mut self, sample: &Sample);
}

impl<F: FnMut(&Sample)> SampleSink for F {
    fn present(&mut self, sample: &Sample) {
        self(sample);
    }
}
