//! Markers: the singleton current-position marker plus user annotations.

use gpui::Hsla;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarkerId {
    /// The current-position marker. Always present.
    Current,
    /// A user annotation, numbered by creation order.
    Annotation(u64),
}

impl MarkerId {
    pub fn is_current(&self) -> bool {
        matches!(self, Self::Current)
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => write!(f, "current"),
            Self::Annotation(n) => write!(f, "annotation-{}", n),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub index: usize,
    /// Palette color for annotations, `None` for the current-position marker.
    pub color: Option<Hsla>,
}

/// Ordered marker collection over a series of fixed length.
///
/// Every stored index is clamped to `[0, len - 1]`.
#[derive(Clone, Debug)]
pub struct MarkerStore {
    len: usize,
    current: Marker,
    annotations: Vec<Marker>,
    next_annotation: u64,
}

impl MarkerStore {
    pub fn new(len: usize, current_index: usize) -> Self {
        let mut store = Self {
            len,
            current: Marker {
                id: MarkerId::Current,
                index: 0,
                color: None,
            },
            annotations: Vec::new(),
            next_annotation: 1,
        };
        store.current.index = store.clamp(current_index);
        store
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> &Marker {
        &self.current
    }

    pub fn annotations(&self) -> &[Marker] {
        &self.annotations
    }

    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }

    /// Current-position marker first, then annotations in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        std::iter::once(&self.current).chain(self.annotations.iter())
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.iter().find(|m| m.id == id)
    }

    fn get_mut(&mut self, id: MarkerId) -> Option<&mut Marker> {
        match id {
            MarkerId::Current => Some(&mut self.current),
            MarkerId::Annotation(_) => self.annotations.iter_mut().find(|m| m.id == id),
        }
    }

    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.len.saturating_sub(1))
    }

    /// Moves a marker. Returns `true` if its index changed.
    pub fn set_index(&mut self, id: MarkerId, index: usize) -> bool {
        let index = self.clamp(index);
        match self.get_mut(id) {
            Some(marker) if marker.index != index => {
                marker.index = index;
                true
            }
            _ => false,
        }
    }

    /// Adds an annotation colored by `palette[count % palette.len()]`.
    pub fn add_annotation(&mut self, index: usize, palette: &[Hsla]) -> MarkerId {
        let id = MarkerId::Annotation(self.next_annotation);
        self.next_annotation += 1;
        let color = if palette.is_empty() {
            None
        } else {
            Some(palette[self.annotations.len() % palette.len()])
        };
        let index = self.clamp(index);
        self.annotations.push(Marker { id, index, color });
        id
    }

    /// Removes an annotation. The current-position marker cannot be removed.
    pub fn remove_annotation(&mut self, id: MarkerId) -> bool {
        let before = self.annotations.len();
        self.annotations.retain(|m| m.id != id);
        self.annotations.len() != before
    }

    /// First marker strictly within `tolerance` data-index units of `data_x`.
    pub fn hit_test(&self, data_x: f64, tolerance: f64) -> Option<MarkerId> {
        self.iter()
            .find(|m| (m.index as f64 - data_x).abs() < tolerance)
            .map(|m| m.id)
    }
}
