//! Fixed capacity pool of active triplexes.
//!
//! Slots are addressed by index and reused after release. A slot index is only meaningful until
//! control leaves the caller: after any sub-behavior invocation the triplex must be looked up
//! again by its key position.

use crate::config::TriplexConfig;
use crate::error::TriplexError;
use crate::{KeyPosition, LayerId, TRIPLEX_MAX_ACTIVE};

/// Runtime state of a triplex, occupying one slot of the [`TriplexPool`].
pub struct ActiveTriplex<'a, B> {
    /// The key position this triplex is bound to
    pub position: KeyPosition,
    /// The slot is occupied and participates in termination scans
    pub active: bool,
    /// The triplex key is currently held
    pub pressed: bool,
    /// The first-press action hasn't been fired in this activation yet
    pub first_press: bool,
    /// The config this triplex was activated with
    pub config: Option<&'a TriplexConfig<B>>,
}

impl<B> Clone for ActiveTriplex<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for ActiveTriplex<'_, B> {}

impl<B> Default for ActiveTriplex<'_, B> {
    fn default() -> Self {
        Self {
            position: 0,
            active: false,
            pressed: false,
            first_press: false,
            config: None,
        }
    }
}

impl<B> core::fmt::Debug for ActiveTriplex<'_, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActiveTriplex")
            .field("position", &self.position)
            .field("active", &self.active)
            .field("pressed", &self.pressed)
            .field("first_press", &self.first_press)
            .finish()
    }
}

impl<B> ActiveTriplex<'_, B> {
    /// Whether the events of `position` keep this triplex alive
    pub fn is_key_position_shared(&self, position: KeyPosition) -> bool {
        self.config.is_some_and(|c| c.is_key_position_shared(position))
    }

    /// Whether the activation of `layer` keeps this triplex alive
    pub fn is_layer_shared(&self, layer: LayerId) -> bool {
        self.config.is_some_and(|c| c.is_layer_shared(layer))
    }
}

/// Pool of active triplexes, with `N` slots.
pub struct TriplexPool<'a, B, const N: usize = TRIPLEX_MAX_ACTIVE> {
    slots: [ActiveTriplex<'a, B>; N],
}

impl<B, const N: usize> Default for TriplexPool<'_, B, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, B, const N: usize> TriplexPool<'a, B, N> {
    pub fn new() -> Self {
        Self {
            slots: [ActiveTriplex::default(); N],
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Find the slot of the active triplex at `position`
    pub fn find_active(&self, position: KeyPosition) -> Option<usize> {
        self.slots.iter().position(|t| t.active && t.position == position)
    }

    /// Occupy the first free slot with a new triplex at `position`.
    ///
    /// The caller must make sure that there's no active triplex at `position` yet.
    pub fn allocate(&mut self, position: KeyPosition, config: &'a TriplexConfig<B>) -> Result<usize, TriplexError> {
        debug_assert!(
            self.find_active(position).is_none(),
            "a triplex is already active at this position"
        );
        let slot = self
            .slots
            .iter()
            .position(|t| !t.active)
            .ok_or(TriplexError::ResourceExhausted)?;
        self.slots[slot] = ActiveTriplex {
            position,
            active: true,
            pressed: false,
            first_press: true,
            config: Some(config),
        };
        Ok(slot)
    }

    /// Free `slot`, returning the state it held.
    ///
    /// Only the `active` flag is cleared, the rest is overwritten by the next `allocate`.
    pub fn release(&mut self, slot: usize) -> Option<ActiveTriplex<'a, B>> {
        let triplex = self.slots.get_mut(slot).filter(|t| t.active)?;
        triplex.active = false;
        Some(*triplex)
    }

    pub fn get(&self, slot: usize) -> Option<&ActiveTriplex<'a, B>> {
        self.slots.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut ActiveTriplex<'a, B>> {
        self.slots.get_mut(slot)
    }

    /// Iterate over active triplexes with their slot indices, in pool order
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &ActiveTriplex<'a, B>)> {
        self.slots.iter().enumerate().filter(|(_, t)| t.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|t| t.active).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|t| t.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TriplexConfig<u8> {
        TriplexConfig::new([0, 1, 2], &[5], &[1]).unwrap()
    }

    #[test]
    fn test_allocate_initializes_slot() {
        let config = config();
        let mut pool: TriplexPool<u8, 4> = TriplexPool::new();
        let slot = pool.allocate(10, &config).unwrap();
        assert_eq!(slot, 0);

        let triplex = pool.get(slot).unwrap();
        assert!(triplex.active);
        assert!(!triplex.pressed);
        assert!(triplex.first_press);
        assert_eq!(triplex.position, 10);
        assert_eq!(pool.find_active(10), Some(0));
        assert_eq!(pool.find_active(11), None);
    }

    #[test]
    fn test_release_frees_slot_for_reuse() {
        let config = config();
        let mut pool: TriplexPool<u8, 2> = TriplexPool::new();
        let a = pool.allocate(1, &config).unwrap();
        let b = pool.allocate(2, &config).unwrap();
        assert_eq!((a, b), (0, 1));

        pool.get_mut(a).unwrap().pressed = true;
        pool.get_mut(a).unwrap().first_press = false;
        let released = pool.release(a).unwrap();
        assert_eq!(released.position, 1);
        assert!(released.pressed);
        assert!(!released.active);
        assert_eq!(pool.find_active(1), None);
        // Releasing twice is a no-op
        assert!(pool.release(a).is_none());

        // Reused slot is fully re-initialized
        let c = pool.allocate(3, &config).unwrap();
        assert_eq!(c, a);
        let triplex = pool.get(c).unwrap();
        assert!(!triplex.pressed);
        assert!(triplex.first_press);
        assert_eq!(triplex.position, 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "a triplex is already active at this position")]
    fn test_allocate_twice_at_same_position() {
        let config = config();
        let mut pool: TriplexPool<u8, 2> = TriplexPool::new();
        pool.allocate(4, &config).unwrap();
        let _ = pool.allocate(4, &config);
    }

    #[test]
    fn test_exhausted() {
        let config = config();
        let mut pool: TriplexPool<u8> = TriplexPool::new();
        for position in 0..TRIPLEX_MAX_ACTIVE as u32 {
            assert!(pool.allocate(position, &config).is_ok());
        }
        assert!(pool.is_full());
        assert_eq!(pool.active_count(), pool.capacity());
        assert_eq!(pool.allocate(100, &config), Err(TriplexError::ResourceExhausted));
        assert_eq!(pool.find_active(100), None);
    }

    #[test]
    fn test_find_ignores_released_slot_with_same_position() {
        let config = config();
        let mut pool: TriplexPool<u8, 3> = TriplexPool::new();
        let slot = pool.allocate(7, &config).unwrap();
        pool.release(slot);
        // The stale position is still stored in the slot, but it's not active
        assert_eq!(pool.get(slot).unwrap().position, 7);
        assert_eq!(pool.find_active(7), None);
        assert_eq!(pool.iter_active().count(), 0);
    }

    #[test]
    fn test_instance_predicates() {
        let config = config();
        let mut pool: TriplexPool<u8, 1> = TriplexPool::new();
        let slot = pool.allocate(10, &config).unwrap();
        let triplex = pool.get(slot).unwrap();
        assert!(triplex.is_key_position_shared(5));
        assert!(!triplex.is_key_position_shared(7));
        assert!(triplex.is_layer_shared(1));
        assert!(!triplex.is_layer_shared(2));

        let empty: ActiveTriplex<u8> = ActiveTriplex::default();
        assert!(!empty.is_key_position_shared(5));
        assert!(!empty.is_layer_shared(1));
    }
}
