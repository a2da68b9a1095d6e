//! Padded item sequence: the host's children plus one leading and one
//! trailing clone band.
//!
//! A container of `N` children becomes `3N` children laid out as
//! `[Leading 0..N] [Primary 0..N] [Trailing 0..N]`. The slot of
//! `(band, logical)` is always `band.index() * N + logical`.

use std::ops::Range;

use tracing::debug;

/// One of the three replicated copies of the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Band {
    /// Clones placed before the originals
    Leading,
    /// The host's own children
    Primary,
    /// Clones placed after the originals
    Trailing,
}

impl Band {
    pub const ALL: [Band; 3] = [Band::Leading, Band::Primary, Band::Trailing];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Band::Leading => 0,
            Band::Primary => 1,
            Band::Trailing => 2,
        }
    }

    #[inline]
    pub fn is_clone(self) -> bool {
        self != Band::Primary
    }
}

/// Position of a slot in terms of the original list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaddedItem {
    pub logical_index: usize,
    pub band: Band,
}

/// Attributes the carousel writes onto a child
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildMarks {
    pub logical_index: Option<usize>,
    pub band: Option<Band>,
    pub is_clone: bool,
    /// Hidden from assistive technology and not interactive
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Child<T> {
    pub content: T,
    pub marks: ChildMarks,
}

/// Host-owned list of visual items
#[derive(Debug, Clone, PartialEq)]
pub struct Container<T> {
    children: Vec<Child<T>>,
    initialized: bool,
    focusable: bool,
}

impl<T> Container<T> {
    pub fn new(contents: impl IntoIterator<Item = T>) -> Self {
        Self {
            children: contents
                .into_iter()
                .map(|content| Child {
                    content,
                    marks: ChildMarks::default(),
                })
                .collect(),
            initialized: false,
            focusable: false,
        }
    }

    pub fn children(&self) -> &[Child<T>] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Initialization marker; doubles as the double-activation guard
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether the container accepts keyboard focus
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }
}

/// Fixed 3xN table mapping slots to `(band, logical index)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRegistry {
    logical_len: usize,
    table: Vec<PaddedItem>,
}

impl ItemRegistry {
    /// Pad `container` with clone bands and build the lookup table.
    ///
    /// Returns `None` and leaves the container untouched when it is already
    /// initialized or holds fewer than `min_items` children.
    pub fn activate<T: Clone>(container: &mut Container<T>, min_items: usize) -> Option<Self> {
        if container.initialized {
            debug!("Container already initialized, skipping activation");
            return None;
        }
        let n = container.children.len();
        if n < min_items.max(3) {
            debug!(items = n, "Too few items for a looping strip, leaving layout alone");
            return None;
        }

        container.initialized = true;
        container.focusable = true;

        for (index, child) in container.children.iter_mut().enumerate() {
            child.marks = ChildMarks {
                logical_index: Some(index),
                band: Some(Band::Primary),
                is_clone: false,
                hidden: false,
            };
        }

        let clone_band = |band: Band, originals: &[Child<T>]| -> Vec<Child<T>> {
            originals
                .iter()
                .enumerate()
                .map(|(index, child)| Child {
                    content: child.content.clone(),
                    marks: ChildMarks {
                        logical_index: Some(index),
                        band: Some(band),
                        is_clone: true,
                        hidden: true,
                    },
                })
                .collect()
        };
        let leading = clone_band(Band::Leading, &container.children);
        let trailing = clone_band(Band::Trailing, &container.children);

        let originals = std::mem::take(&mut container.children);
        container.children = leading
            .into_iter()
            .chain(originals)
            .chain(trailing)
            .collect();

        let table = Band::ALL
            .iter()
            .flat_map(|&band| {
                (0..n).map(move |logical_index| PaddedItem {
                    logical_index,
                    band,
                })
            })
            .collect();

        debug!(items = n, slots = 3 * n, "Filmstrip activated");
        Some(Self {
            logical_len: n,
            table,
        })
    }

    /// Number of original items (N)
    pub fn logical_len(&self) -> usize {
        self.logical_len
    }

    /// Number of padded slots (3N)
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn item(&self, slot: usize) -> Option<PaddedItem> {
        self.table.get(slot).copied()
    }

    /// Slot holding `(band, logical_index)`
    pub fn slot(&self, band: Band, logical_index: usize) -> Option<usize> {
        (logical_index < self.logical_len).then(|| band.index() * self.logical_len + logical_index)
    }

    /// Slot of the original (Primary band) item for a logical index
    pub fn original(&self, logical_index: usize) -> Option<usize> {
        self.slot(Band::Primary, logical_index)
    }

    /// Slots of one band, ordered by logical index
    pub fn band_slots(&self, band: Band) -> Range<usize> {
        let start = band.index() * self.logical_len;
        start..start + self.logical_len
    }

    /// Primary-band slot equivalent to `slot`
    pub fn primary_equivalent(&self, slot: usize) -> Option<usize> {
        self.item(slot)
            .and_then(|item| self.original(item.logical_index))
    }

    /// All slots in sequence order
    pub fn iter(&self) -> impl Iterator<Item = (usize, PaddedItem)> + '_ {
        self.table.iter().copied().enumerate()
    }
}
