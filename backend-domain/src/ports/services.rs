use async_trait::async_trait;

/// A source of ingestion ticks. The simulated timer feed implements this;
/// a genuine event channel can replace it without touching downstream code.
#[async_trait]
pub trait IngestionSource: Send + Sync {
    /// Begins delivering ticks until cancelled.
    async fn subscribe(&self) -> anyhow::Result<()>;
    /// Stops the feed. No tick fires after this returns; an in-flight tick
    /// may complete but will not reschedule itself.
    async fn cancel(&self);
}

/// Random draws used by the simulated feed. Injectable so tests can force
/// both branches of the unique-scan coin flip.
pub trait Randomness: Send + Sync {
    /// Uniform index in `[0, len)`; `len` must be non-zero.
    fn pick_index(&self, len: usize) -> usize;
    /// True with the given probability.
    fn chance(&self, probability: f64) -> bool;
}
