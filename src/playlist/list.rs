//! Arena-backed doubly linked list of tracks.
//!
//! Nodes live in a `Vec` of slots and point at each other by slot index.
//! Removed slots go onto a free list and are reused by later inserts, so
//! splicing stays O(1) once the neighbour is known and nothing is ever
//! freed twice.

use std::iter::FusedIterator;

use tracing::debug;

use super::error::TrackListError;
use super::model::{DEFAULT_FIELD_LIMIT, Track};

#[derive(Debug, Clone)]
struct Node {
    track: Track,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<usize> },
}

/// An ordered, mutable sequence of tracks.
#[derive(Debug, Clone)]
pub struct TrackList {
    slots: Vec<Slot>,
    free: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    field_limit: Option<usize>,
}

impl Default for TrackList {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackList {
    /// Create an empty list that truncates titles and artists to
    /// `DEFAULT_FIELD_LIMIT` characters.
    pub fn new() -> Self {
        Self::with_field_limit(Some(DEFAULT_FIELD_LIMIT))
    }

    /// Create an empty list with a custom truncation limit (`None` keeps
    /// fields unbounded).
    pub fn with_field_limit(field_limit: Option<usize>) -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            len: 0,
            field_limit,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn field_limit(&self) -> Option<usize> {
        self.field_limit
    }

    /// Add a track after the current last element.
    pub fn append(&mut self, title: &str, artist: &str, duration: u32) -> Result<(), TrackListError> {
        let track = Track::new(title, artist, duration, self.field_limit);
        let prev = self.tail;
        let idx = self.allocate(Node {
            track,
            prev,
            next: None,
        })?;

        match prev {
            Some(p) => {
                if let Some(node) = self.node_mut(p) {
                    node.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;

        debug!(title, artist, duration, len = self.len, "appended track");
        Ok(())
    }

    /// Insert a track so that it ends up at 0-based `position`.
    ///
    /// `position == len()` appends. Anything larger is rejected and the list
    /// is left untouched.
    pub fn insert_at(
        &mut self,
        position: usize,
        title: &str,
        artist: &str,
        duration: u32,
    ) -> Result<(), TrackListError> {
        if position > self.len {
            debug!(position, len = self.len, "rejected insert position");
            return Err(TrackListError::InvalidPosition {
                position,
                size: self.len,
            });
        }
        if position == self.len {
            return self.append(title, artist, duration);
        }

        let (prev, next) = if position == 0 {
            (None, self.head)
        } else {
            let prev = self.slot_at(position - 1);
            let next = prev.and_then(|p| self.node(p)).and_then(|n| n.next);
            (prev, next)
        };

        let track = Track::new(title, artist, duration, self.field_limit);
        let idx = self.allocate(Node { track, prev, next })?;

        match prev {
            Some(p) => {
                if let Some(node) = self.node_mut(p) {
                    node.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        match next {
            Some(n) => {
                if let Some(node) = self.node_mut(n) {
                    node.prev = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }
        self.len += 1;

        debug!(title, artist, duration, position, len = self.len, "inserted track");
        Ok(())
    }

    /// Remove the first track whose title equals `title` exactly and hand it
    /// back by value. Returns `None` when nothing matches.
    pub fn remove_by_title(&mut self, title: &str) -> Option<Track> {
        let idx = self
            .slot_indices()
            .find(|&i| self.node(i).is_some_and(|n| n.track.title == title))?;
        let track = self.unlink(idx)?;

        debug!(title, len = self.len, "removed track");
        Some(track)
    }

    /// Front-to-back view yielding `(1-based index, track)`.
    ///
    /// Call `.rev()` on it (or use [`TrackList::rev_iter`]) for the
    /// back-to-front view; indices stay attached to their tracks either way.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            front_pos: 0,
            back_pos: self.len,
            remaining: self.len,
        }
    }

    /// Back-to-front view yielding `(1-based index, track)` with descending
    /// indices.
    pub fn rev_iter(&self) -> std::iter::Rev<Iter<'_>> {
        self.iter().rev()
    }

    /// Every track whose title contains `query` as a contiguous,
    /// case-sensitive substring, in list order. An empty query matches all.
    pub fn find_by_title_substring<'a>(
        &'a self,
        query: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Track)> + 'a {
        self.iter()
            .filter(move |(_, track)| track.title.contains(query))
    }

    /// Sum of all durations in seconds.
    pub fn total_duration_secs(&self) -> u64 {
        self.iter().map(|(_, t)| u64::from(t.duration)).sum()
    }

    /// Track at 0-based `index`.
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.slot_at(index)
            .and_then(|i| self.node(i))
            .map(|n| &n.track)
    }

    pub fn first(&self) -> Option<&Track> {
        self.head.and_then(|i| self.node(i)).map(|n| &n.track)
    }

    pub fn last(&self) -> Option<&Track> {
        self.tail.and_then(|i| self.node(i)).map(|n| &n.track)
    }

    /// Drop every track and reset to the empty state.
    pub fn clear(&mut self) {
        let released = self.len;
        self.slots.clear();
        self.free = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
        debug!(released, "cleared track list");
    }

    fn node(&self, idx: usize) -> Option<&Node> {
        match self.slots.get(idx) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    fn node_mut(&mut self, idx: usize) -> Option<&mut Node> {
        match self.slots.get_mut(idx) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Slot indices in list order.
    fn slot_indices(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.head, move |&i| self.node(i).and_then(|n| n.next))
    }

    /// Slot holding the element at 0-based `position`, walking from
    /// whichever end is closer.
    fn slot_at(&self, position: usize) -> Option<usize> {
        if position >= self.len {
            return None;
        }
        if position <= self.len / 2 {
            self.slot_indices().nth(position)
        } else {
            std::iter::successors(self.tail, |&i| self.node(i).and_then(|n| n.prev))
                .nth(self.len - 1 - position)
        }
    }

    /// Store `node` in a vacant slot, growing the arena only when the free
    /// list is empty. On failure nothing has been linked yet.
    fn allocate(&mut self, node: Node) -> Result<usize, TrackListError> {
        if let Some(idx) = self.free {
            if let Some(Slot::Vacant { next_free }) = self.slots.get(idx) {
                self.free = *next_free;
                self.slots[idx] = Slot::Occupied(node);
                return Ok(idx);
            }
        }

        self.slots
            .try_reserve(1)
            .map_err(|_| TrackListError::OutOfMemory)?;
        self.slots.push(Slot::Occupied(node));
        Ok(self.slots.len() - 1)
    }

    /// Splice the node in slot `idx` out of the chain and free its slot.
    fn unlink(&mut self, idx: usize) -> Option<Track> {
        let (prev, next) = self.node(idx).map(|n| (n.prev, n.next))?;

        match prev {
            Some(p) => {
                if let Some(node) = self.node_mut(p) {
                    node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(node) = self.node_mut(n) {
                    node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        let slot = std::mem::replace(
            &mut self.slots[idx],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(idx);
        self.len -= 1;

        match slot {
            Slot::Occupied(node) => Some(node.track),
            Slot::Vacant { .. } => None,
        }
    }

    /// Walk the chain in both directions and assert that links, head/tail
    /// and the cached length agree.
    #[cfg(test)]
    pub(crate) fn check_links(&self) {
        let forward: Vec<usize> = self.slot_indices().collect();
        assert_eq!(forward.len(), self.len, "forward walk length");

        let mut backward: Vec<usize> =
            std::iter::successors(self.tail, |&i| self.node(i).and_then(|n| n.prev)).collect();
        backward.reverse();
        assert_eq!(forward, backward, "backward walk mirrors forward walk");

        assert_eq!(self.head, forward.first().copied());
        assert_eq!(self.tail, forward.last().copied());
        if let Some(h) = self.head {
            assert_eq!(self.node(h).and_then(|n| n.prev), None);
        }
        if let Some(t) = self.tail {
            assert_eq!(self.node(t).and_then(|n| n.next), None);
        }

        let occupied = self
            .slots
            .iter()
            .filter(|s| matches!(s, Slot::Occupied(_)))
            .count();
        assert_eq!(occupied, self.len, "occupied slots");
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

/// Double-ended view over a `TrackList` yielding `(1-based index, track)`.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    list: &'a TrackList,
    front: Option<usize>,
    back: Option<usize>,
    front_pos: usize,
    back_pos: usize,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a Track);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = self.front.and_then(|i| list.node(i))?;
        self.front = node.next;
        self.front_pos += 1;
        self.remaining -= 1;
        Some((self.front_pos, &node.track))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let list = self.list;
        let node = self.back.and_then(|i| list.node(i))?;
        self.back = node.prev;
        let pos = self.back_pos;
        self.back_pos -= 1;
        self.remaining -= 1;
        Some((pos, &node.track))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a TrackList {
    type Item = (usize, &'a Track);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
