//! Auth-session state and the session resolution flow.
//!
//! ARCHITECTURE
//! ============
//! Every page behind the gate renders against a single tri-state value:
//! `Checking` while a resolution is in flight, `Authenticated` once a
//! session is confirmed or refreshed, `Guest` when neither worked. The
//! resolution chain short-circuits on a known identity, then tries a
//! read-only session check, then a mutating session refresh. Network edges
//! sit behind [`SessionProbe`] so the flow itself never touches a browser
//! API and the race properties are testable natively.
//!
//! CANCELLATION
//! ============
//! Activations carry a generation number. Starting a new activation bumps
//! the generation; a resolution commit is accepted only while the writer's
//! captured generation is still current. A superseded activation can keep
//! running, but its outcome is discarded and can never overwrite the state
//! produced by a newer activation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Tri-state outcome of one session resolution activation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolutionState {
    /// Resolution in flight; callers render a transient placeholder.
    #[default]
    Checking,
    /// Session confirmed or refreshed; protected content may render.
    Authenticated,
    /// No valid session after both the check and the refresh declined.
    Guest,
}

/// Outcome of a single probe call against a session endpoint.
///
/// Transport failures and non-2xx statuses both collapse into
/// `Unavailable`; the gate never distinguishes them and never surfaces
/// either to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 2xx response: the session is valid (check) or was rotated (refresh).
    Confirmed,
    /// Transport error or non-2xx status.
    Unavailable,
}

/// Network seam for the resolver: a read-only session check and a mutating
/// session refresh, both carrying session credentials implicitly.
///
/// The production implementation lives in `net::api` and calls the server
/// over HTTP; tests drive the flow with scripted probes.
// Single-threaded wasm target; probe futures need not be Send.
#[allow(async_fn_in_trait)]
pub trait SessionProbe {
    async fn check(&self) -> ProbeOutcome;
    async fn refresh(&self) -> ProbeOutcome;
}

/// Authentication state for the current browser user.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    /// Current known identity, if any. This is the resolver's input: any
    /// change to it restarts the resolution flow.
    pub user: Option<User>,
    /// Current gate state, written only by the newest activation.
    pub resolution: ResolutionState,
    /// Generation of the newest activation.
    generation: u64,
}

impl AuthState {
    /// Start a new activation: re-enter `Checking` and supersede any
    /// resolution still in flight. Returns the generation token the new
    /// activation must present when committing.
    pub fn begin_activation(&mut self) -> u64 {
        self.generation += 1;
        self.resolution = ResolutionState::Checking;
        self.generation
    }

    /// Commit the outcome of an activation.
    ///
    /// Returns `false` and leaves the state untouched when `generation` is
    /// no longer current: the stale writer loses, unconditionally.
    pub fn commit_resolution(&mut self, generation: u64, resolution: ResolutionState) -> bool {
        if generation != self.generation {
            return false;
        }
        self.resolution = resolution;
        true
    }

    /// Generation of the newest activation. In-flight activations compare
    /// against this to detect that they have been superseded.
    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.resolution == ResolutionState::Authenticated
    }
}

/// Run the resolution chain for one activation.
///
/// With a known identity the chain settles immediately and no probe call is
/// made. Otherwise the check runs first, then the refresh, and the refresh
/// only if the check declined and the activation is still current. Every
/// failure degrades to the next step; total failure is `Guest`, never an
/// error.
///
/// Returns `None` when `still_current` reports the activation superseded
/// mid-flight; the caller must discard the attempt without committing.
/// [`AuthState::commit_resolution`] re-checks the generation at write time
/// regardless, so a stale resolution cannot land either way.
pub async fn resolve<P, F>(identity_present: bool, probe: &P, still_current: F) -> Option<ResolutionState>
where
    P: SessionProbe,
    F: Fn() -> bool,
{
    if identity_present {
        return Some(ResolutionState::Authenticated);
    }

    let checked = probe.check().await;
    if !still_current() {
        return None;
    }
    if checked == ProbeOutcome::Confirmed {
        return Some(ResolutionState::Authenticated);
    }

    let refreshed = probe.refresh().await;
    if !still_current() {
        return None;
    }
    match refreshed {
        ProbeOutcome::Confirmed => Some(ResolutionState::Authenticated),
        ProbeOutcome::Unavailable => Some(ResolutionState::Guest),
    }
}
