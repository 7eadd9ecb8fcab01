use serde::Serialize;

/// Whether a result was fully computed or produced through a documented
/// degraded path (provider failure, failed search).
///
/// Degraded values are still usable for display, but schedulers and tests
/// must be able to tell them apart from real computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Provenance {
    Computed,
    Fallback,
}

impl Provenance {
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback)
    }
}
