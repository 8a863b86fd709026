//! Seed sources for the generator.
//!
//! The generator never reads ambient state. Callers hand it a SeedSource:
//! either an explicit seed, or a session seed that is minted from the
//! clock once and then reused for the rest of the session.

use crate::{
    clock::Clock,
    error::DashResult,
    store::{Session, SessionStore},
};

/// Key under which the session seed is stored.
pub const SEED_KEY: &str = "dashboard_seed";

pub trait SeedSource {
    fn seed(&self) -> DashResult<i64>;
}

/// A seed known up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub i64);

impl SeedSource for FixedSeed {
    fn seed(&self) -> DashResult<i64> {
        Ok(self.0)
    }
}

/// Stable within one session, different across sessions.
pub struct SessionSeed<'a> {
    store:   &'a SessionStore,
    session: &'a Session,
    clock:   &'a dyn Clock,
}

impl<'a> SessionSeed<'a> {
    pub fn new(store: &'a SessionStore, session: &'a Session, clock: &'a dyn Clock) -> Self {
        Self { store, session, clock }
    }
}

impl SeedSource for SessionSeed<'_> {
    fn seed(&self) -> DashResult<i64> {
        if let Some(existing) = self.store.get_value(&self.session.id, SEED_KEY)? {
            log::debug!("Reusing seed {existing} for session {}", self.session.id);
            return Ok(existing);
        }

        let minted = self.clock.now_millis();
        let stored = self
            .store
            .put_value_if_absent(&self.session.id, SEED_KEY, minted, minted)?;
        log::info!("Minted seed {stored} for session {}", self.session.id);
        Ok(stored)
    }
}
