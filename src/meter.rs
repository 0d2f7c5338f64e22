/// Running average of a scalar metric, e.g. per-batch training loss.
#[derive(Clone, Copy, Debug, Default)]
pub struct AverageMeter {
    val: f32,
    sum: f32,
    count: usize,
    avg: f32,
}

impl AverageMeter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn update(&mut self, value: f32) {
        self.update_n(value, 1);
    }

    /// Record `value` with weight `n`, e.g. a batch-mean loss over `n`
    /// samples.
    pub fn update_n(&mut self, value: f32, n: usize) {
        self.val = value;
        self.sum += value * n as f32;
        self.count += n;
        self.avg = self.sum / self.count as f32;
    }

    /// Most recent value.
    pub fn val(&self) -> f32 {
        self.val
    }

    /// Weighted average over all updates since the last reset.
    pub fn avg(&self) -> f32 {
        self.avg
    }

    pub fn sum(&self) -> f32 {
        self.sum
    }

    pub fn count(&self) -> usize {
        self.count
    }
}
