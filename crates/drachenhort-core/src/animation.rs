//! One-shot entry animation for the card grid.
//!
//! The first time the gallery is ever shown, cards fly in from fixed
//! off-screen offsets with a stagger. A flag in the [`KeyValueStore`]
//! records that this happened so later sessions skip straight to the
//! settled grid.

use std::sync::Arc;
use std::time::Duration;

use crate::storage::KeyValueStore;

/// Store key recording that the entry animation has played.
pub const ENTRY_ANIMATION_FLAG: &str = "drachenhort.entry-animation-played";

const STAGGER_MS: u64 = 60;
const CARD_MS: u64 = 300;

/// Delay added per list position.
pub const ENTRY_STAGGER: Duration = Duration::from_millis(STAGGER_MS);

/// Positions past this one share the last stagger delay.
pub const MAX_STAGGER_STEPS: usize = 20;

/// How long a single card takes to fly into place.
pub const ENTRY_CARD_DURATION: Duration = Duration::from_millis(CARD_MS);

/// Time from the gallery becoming ready until the animation is marked
/// complete: the last staggered card has landed by then.
pub const ENTRY_ANIMATION_DURATION: Duration =
    Duration::from_millis(STAGGER_MS * MAX_STAGGER_STEPS as u64 + CARD_MS);

/// Launch offsets in pixels, cycled by list position.
pub const ENTRY_OFFSETS: [(i32, i32); 8] = [
    (-140, -90),
    (160, -60),
    (-110, 120),
    (180, 100),
    (0, -160),
    (-180, 0),
    (120, 150),
    (0, 170),
];

/// Where the entry animation currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    /// First visit, cards are flying in
    Entering,
    /// The animation played in this session and finished
    Complete,
    /// The animation played in an earlier session
    Skipped,
}

impl AnimationPhase {
    pub fn is_animating(self) -> bool {
        self == AnimationPhase::Entering
    }
}

/// Launch offset and delay for one card of the entry animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMotion {
    pub offset_x: i32,
    pub offset_y: i32,
    pub delay: Duration,
}

/// Entry motion for the card rendered at `index`.
///
/// Depends only on the position in the rendered list, so re-filtering
/// while the animation runs can hand a card a different trajectory.
pub fn entry_motion(index: usize) -> EntryMotion {
    let (offset_x, offset_y) = ENTRY_OFFSETS[index % ENTRY_OFFSETS.len()];
    let steps = index.min(MAX_STAGGER_STEPS) as u32;
    EntryMotion {
        offset_x,
        offset_y,
        delay: ENTRY_STAGGER * steps,
    }
}

/// Decides whether the entry animation plays and remembers that it did.
#[derive(Clone)]
pub struct EntryGate {
    store: Arc<dyn KeyValueStore>,
    phase: AnimationPhase,
}

impl EntryGate {
    /// Read the persisted flag and pick the starting phase.
    ///
    /// If the store cannot be read the animation plays; it is cosmetic and
    /// a broken store should not hide the grid.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let played = match store.get(ENTRY_ANIMATION_FLAG) {
            Ok(value) => value.is_some(),
            Err(e) => {
                tracing::warn!("Failed to read entry animation flag: {}", e);
                false
            }
        };

        let phase = if played {
            AnimationPhase::Skipped
        } else {
            AnimationPhase::Entering
        };
        tracing::debug!(?phase, "Entry animation gate opened");

        Self { store, phase }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Finish the animation and persist the flag.
    ///
    /// Only has an effect while [`AnimationPhase::Entering`].
    pub fn complete(&mut self) {
        if self.phase != AnimationPhase::Entering {
            return;
        }
        self.phase = AnimationPhase::Complete;

        if let Err(e) = self.store.set(ENTRY_ANIMATION_FLAG, "true") {
            tracing::warn!("Failed to persist entry animation flag: {}", e);
        }
    }

    /// Forget that the animation has played, so the next gate plays it.
    pub fn replay(store: &dyn KeyValueStore) -> Result<(), crate::GalleryError> {
        store.remove(ENTRY_ANIMATION_FLAG)
    }
}

/// Wait out the entry animation, then call `complete`.
///
/// Returns `false` without waiting when `phase` is not animating. The
/// caller must own this future for the lifetime of the gallery, not of the
/// grid: the grid unmounts while a filter matches nothing.
pub async fn run_entry_timer(phase: AnimationPhase, complete: impl FnOnce()) -> bool {
    if !phase.is_animating() {
        return false;
    }
    tokio::time::sleep(ENTRY_ANIMATION_DURATION).await;
    complete();
    tracing::debug!("Entry animation complete");
    true
}

impl std::fmt::Debug for EntryGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryGate").field("phase", &self.phase).finish()
    }
}
