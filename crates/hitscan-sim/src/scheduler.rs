//! Cooperative timed continuations.
//!
//! A sequence that needs to "wait N seconds" parks its payload here with a
//! resume time. The host drives the clock with `advance(now)`, which hands
//! back every payload that has come due. Nothing runs on its own; there is
//! no thread and no runtime.

/// A parked continuation.
#[derive(Debug, Clone)]
struct Pending<T> {
    resume_at: f64,
    /// Insertion order, for FIFO among equal resume times.
    seq: u64,
    payload: T,
}

/// Clock-driven queue of suspended sequences.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: f64,
    next_seq: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    /// Latest time the scheduler has observed.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Move the clock forward without resuming anything. Never moves it back.
    pub fn observe(&mut self, now: f64) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Suspend `payload` for `secs` from the current clock.
    pub fn wait(&mut self, secs: f64, payload: T) -> f64 {
        self.wait_from(self.now, secs, payload)
    }

    /// Suspend `payload` for `secs` measured from `start`. Returns the resume time.
    pub fn wait_from(&mut self, start: f64, secs: f64, payload: T) -> f64 {
        let resume_at = start + secs.max(0.0);
        self.pending.push(Pending {
            resume_at,
            seq: self.next_seq,
            payload,
        });
        self.next_seq += 1;
        resume_at
    }

    /// Advance the clock to `now` and return every continuation due by then,
    /// ordered by resume time, then by when it was parked.
    pub fn advance(&mut self, now: f64) -> Vec<T> {
        self.observe(now);

        let clock = self.now;
        let (mut due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.resume_at <= clock);
        self.pending = waiting;

        due.sort_by(|a, b| {
            a.resume_at
                .total_cmp(&b.resume_at)
                .then(a.seq.cmp(&b.seq))
        });
        due.into_iter().map(|p| p.payload).collect()
    }

    /// Earliest resume time among parked continuations matching `pred`.
    pub fn next_resume_where(&self, pred: impl Fn(&T) -> bool) -> Option<f64> {
        self.pending
            .iter()
            .filter(|p| pred(&p.payload))
            .map(|p| p.resume_at)
            .min_by(f64::total_cmp)
    }

    /// Drop every parked continuation. They will never resume.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
