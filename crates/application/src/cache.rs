use dashmap::DashMap;
use domain::{DomainError, Entity, EntityKind, EntityReader, ListQuery};
use std::any::Any;
use std::sync::Arc;
use tracing::debug;

type CachedList = Arc<dyn Any + Send + Sync>;

/// Last-fetched entity lists, keyed by entity kind.
///
/// Owned by whoever composes the pages and handed to them explicitly.
/// Entries live until [`EntityCache::invalidate`] or [`EntityCache::clear`].
/// A fetch that was in flight when its kind got invalidated is returned to
/// its caller but never stored.
#[derive(Default)]
pub struct EntityCache {
    entries: DashMap<EntityKind, CachedList>,
    generations: DashMap<EntityKind, u64>,
}

impl EntityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached list for `E`, if one was fetched and not invalidated since
    pub fn get<E: Entity>(&self) -> Option<Arc<Vec<E>>> {
        let entry = self.entries.get(&E::KIND)?;
        Arc::clone(entry.value()).downcast::<Vec<E>>().ok()
    }

    /// Return the cached list or fetch it through `reader`.
    ///
    /// The same `Arc` is returned until the kind is invalidated, so callers
    /// can key derived views on its identity.
    pub async fn get_or_fetch<E, R>(
        &self,
        reader: &R,
        query: &ListQuery,
    ) -> Result<Arc<Vec<E>>, DomainError>
    where
        E: Entity,
        R: EntityReader<E> + ?Sized,
    {
        if let Some(hit) = self.get::<E>() {
            debug!(kind = %E::KIND, rows = hit.len(), "Entity cache hit");
            return Ok(hit);
        }

        debug!(kind = %E::KIND, sort = ?query.sort, limit = ?query.limit, "Entity cache miss, fetching");
        let started = self.generation(E::KIND);
        let records = Arc::new(reader.list(query).await?);

        // Hold the generation shard while inserting so an invalidate cannot
        // slip in between the check and the insert
        let current = self.generations.entry(E::KIND).or_insert(0);
        if *current == started {
            self.entries
                .insert(E::KIND, Arc::clone(&records) as CachedList);
        } else {
            debug!(kind = %E::KIND, "Invalidated during fetch, result not cached");
        }
        Ok(records)
    }

    pub fn invalidate(&self, kind: EntityKind) {
        let mut generation = self.generations.entry(kind).or_insert(0);
        *generation += 1;
        if self.entries.remove(&kind).is_some() {
            debug!(kind = %kind, "Entity cache invalidated");
        }
    }

    pub fn clear(&self) {
        for kind in EntityKind::ALL {
            self.invalidate(kind);
        }
    }

    fn generation(&self, kind: EntityKind) -> u64 {
        self.generations.get(&kind).map(|g| *g).unwrap_or(0)
    }

    pub fn contains(&self, kind: EntityKind) -> bool {
        self.entries.contains_key(&kind)
    }
}
