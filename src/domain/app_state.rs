use std::{
    collections::{hash_map::Entry, HashMap},
    fmt,
};

use rand::{rngs::StdRng, SeedableRng};
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use super::{
    economics::{MixInputs, MixResult},
    entities::FleetSnapshot,
    error::FleetError,
    fleet_config::FleetConfig,
    generator::FleetGenerator,
    report::ReportPeriod,
};

/// Identity of one dashboard session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A generated snapshot plus the seed that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct CachedSnapshot {
    pub seed: u64,
    pub snapshot: FleetSnapshot,
}

/// Snapshots keyed by session; entries live until explicitly invalidated.
#[derive(Clone, Debug, Default)]
pub struct SessionCache {
    entries: HashMap<SessionId, CachedSnapshot>,
}

impl SessionCache {
    pub fn get(&self, session: SessionId) -> Option<&CachedSnapshot> {
        self.entries.get(&session)
    }

    /// Returns the cached snapshot, generating it on a miss.
    ///
    /// A failed generation leaves the cache untouched.
    pub fn get_or_generate(
        &mut self,
        session: SessionId,
        generator: &FleetGenerator,
        seed: Option<u64>,
        now: OffsetDateTime,
    ) -> Result<&CachedSnapshot, FleetError> {
        match self.entries.entry(session) {
            Entry::Occupied(entry) => Ok(&*entry.into_mut()),
            Entry::Vacant(entry) => {
                let seed = seed.unwrap_or_else(rand::random);
                let mut rng = StdRng::seed_from_u64(seed);
                let snapshot = generator.generate(&mut rng, now)?;
                info!(
                    %session,
                    seed,
                    voyages = snapshot.voyages.len(),
                    "generated fleet snapshot"
                );
                Ok(&*entry.insert(CachedSnapshot { seed, snapshot }))
            }
        }
    }

    pub fn invalidate(&mut self, session: SessionId) -> bool {
        let removed = self.entries.remove(&session).is_some();
        if removed {
            info!(%session, "invalidated fleet snapshot");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where the active fleet configuration came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConfigSource {
    #[default]
    BuiltIn,
    File(String),
}

impl ConfigSource {
    pub fn label(&self) -> String {
        match self {
            ConfigSource::BuiltIn => "Built-in defaults".to_string(),
            ConfigSource::File(path) => path.clone(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub session: SessionId,
    pub generator: FleetGenerator,
    pub config_source: ConfigSource,
    pub snapshots: SessionCache,
    /// Last inputs and result of the optimization page, kept across navigation.
    pub mix_inputs: MixInputs,
    pub last_mix: Option<MixResult>,
    pub report_period: ReportPeriod,
    /// Pattern names included in the report; `None` means all.
    pub report_patterns: Option<Vec<String>>,
}

impl AppState {
    pub fn current_snapshot(&self) -> Option<&CachedSnapshot> {
        self.snapshots.get(self.session)
    }

    pub fn ensure_snapshot(&mut self) -> Result<&CachedSnapshot, FleetError> {
        let seed = self.generator.config().seed;
        self.snapshots.get_or_generate(
            self.session,
            &self.generator,
            seed,
            OffsetDateTime::now_utc(),
        )
    }

    /// Drops this session's snapshot and generates a fresh one.
    pub fn refresh(&mut self) -> Result<&CachedSnapshot, FleetError> {
        self.snapshots.invalidate(self.session);
        self.ensure_snapshot()
    }

    /// Swaps in a new configuration; every cached snapshot is discarded.
    pub fn apply_config(
        &mut self,
        config: FleetConfig,
        source: ConfigSource,
    ) -> Result<(), FleetError> {
        self.generator = FleetGenerator::new(config)?;
        self.config_source = source;
        self.snapshots.clear();
        self.report_patterns = None;
        Ok(())
    }

    pub fn selected_patterns(&self) -> Vec<String> {
        self.report_patterns
            .clone()
            .unwrap_or_else(|| self.generator.config().pattern_names())
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::domain::{
        entities::{Ship, ShipStatus},
        fleet_config::InclusiveRange,
    };

    const NOW: OffsetDateTime = datetime!(2024-02-10 06:00 UTC);

    #[test]
    fn second_lookup_hits_the_cache() {
        let generator = FleetGenerator::default();
        let session = SessionId::new();
        let mut cache = SessionCache::default();

        let first = cache
            .get_or_generate(session, &generator, None, NOW)
            .unwrap()
            .clone();
        let later = datetime!(2024-02-11 06:00 UTC);
        let second = cache
            .get_or_generate(session, &generator, None, later)
            .unwrap()
            .clone();

        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn sessions_are_cached_independently() {
        let generator = FleetGenerator::default();
        let mut cache = SessionCache::default();
        let a = SessionId::new();
        let b = SessionId::new();

        cache.get_or_generate(a, &generator, Some(1), NOW).unwrap();
        cache.get_or_generate(b, &generator, Some(2), NOW).unwrap();

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(a).map(|c| c.seed), Some(1));
        assert_eq!(cache.get(b).map(|c| c.seed), Some(2));
    }

    #[test]
    fn invalidate_forces_regeneration() {
        let generator = FleetGenerator::default();
        let session = SessionId::new();
        let mut cache = SessionCache::default();

        cache.get_or_generate(session, &generator, Some(3), NOW).unwrap();
        assert!(cache.invalidate(session));
        assert!(!cache.invalidate(session));
        assert!(cache.get(session).is_none());

        let later = datetime!(2024-02-12 06:00 UTC);
        let regenerated = cache
            .get_or_generate(session, &generator, Some(3), later)
            .unwrap();
        assert_eq!(regenerated.snapshot.generated_at, later);
    }

    #[test]
    fn seeded_cache_matches_direct_generation() {
        let generator = FleetGenerator::default();
        let mut cache = SessionCache::default();
        let cached = cache
            .get_or_generate(SessionId::new(), &generator, Some(99), NOW)
            .unwrap()
            .snapshot
            .clone();
        let direct = generator
            .generate(&mut StdRng::seed_from_u64(99), NOW)
            .unwrap();
        assert_eq!(cached, direct);
    }

    #[test]
    fn failed_generation_is_not_cached() {
        let mut config = FleetConfig::default();
        config.ships = vec![Ship::new("S", "Small", 2_500, ShipStatus::Underway)];
        config.slack_tons = InclusiveRange::new(3_000, 3_000);
        let generator = FleetGenerator::new(config).unwrap();
        let mut cache = SessionCache::default();

        let result = cache.get_or_generate(SessionId::new(), &generator, Some(0), NOW);
        assert!(matches!(result, Err(FleetError::InvalidCapacity { .. })));
        assert!(cache.is_empty());
    }

    #[test]
    fn applying_config_clears_snapshots_and_pattern_filter() {
        let mut state = AppState::default();
        state.ensure_snapshot().unwrap();
        state.report_patterns = Some(vec!["CORN+MILO".to_string()]);

        let mut config = FleetConfig::default();
        config.seed = Some(5);
        state
            .apply_config(config, ConfigSource::File("fleet.json".to_string()))
            .unwrap();

        assert!(state.current_snapshot().is_none());
        assert_eq!(state.selected_patterns().len(), 3);
        assert_eq!(state.ensure_snapshot().unwrap().seed, 5);
    }

    #[test]
    fn invalid_config_keeps_previous_generator() {
        let mut state = AppState::default();
        let mut config = FleetConfig::default();
        config.cargo_patterns.clear();

        let result = state.apply_config(config, ConfigSource::BuiltIn);
        assert!(matches!(result, Err(FleetError::Configuration(_))));
        assert_eq!(state.generator, FleetGenerator::default());
    }

    #[test]
    fn refresh_replaces_the_session_entry() {
        let mut state = AppState::default();
        state.ensure_snapshot().unwrap();
        state.refresh().unwrap();
        assert_eq!(state.snapshots.len(), 1);
    }
}
