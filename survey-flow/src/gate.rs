use std::sync::Arc;

/// Capability consulted before gated session transitions.
///
/// The gate is injected into [`SurveySession::new`](crate::SurveySession::new)
/// rather than read from ambient state, so hosts decide what "identified"
/// means and tests can substitute a double.
pub trait AuthGate {
    /// Whether the respondent is currently identified.
    fn is_identified(&self) -> bool;

    /// Ask the host to present its identification flow.
    ///
    /// Side effect on the host only; the session itself is not mutated.
    fn challenge_identification(&self);
}

impl<G: AuthGate + ?Sized> AuthGate for &G {
    fn is_identified(&self) -> bool {
        (**self).is_identified()
    }

    fn challenge_identification(&self) {
        (**self).challenge_identification();
    }
}

impl<G: AuthGate + ?Sized> AuthGate for Arc<G> {
    fn is_identified(&self) -> bool {
        (**self).is_identified()
    }

    fn challenge_identification(&self) {
        (**self).challenge_identification();
    }
}
