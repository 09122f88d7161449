//! State of a windowed carousel.

use crate::ui::direction::Direction;
use crate::ui::mvi::UiState;

/// Swipe power needed to change page when none is configured.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 10_000.0;

/// Fixed-size pages over an immutable item list.
///
/// `page` is always a valid page index, or 0 when the list is empty.
/// `page_size` is never 0.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState<T> {
    pub(super) items: Vec<T>,
    pub(super) page_size: usize,
    pub(super) page: usize,
    pub(super) direction: Direction,
    pub(super) swipe_threshold: f32,
}

impl<T> Default for CarouselState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page_size: 1,
            page: 0,
            direction: Direction::Still,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for CarouselState<T> {}

impl<T> CarouselState<T> {
    /// A page size of 0 is treated as 1.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
    }

    /// `ceil(len / page_size)`; 0 for an empty list.
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Prev/next buttons, dots and dragging are only offered with more
    /// than one page.
    pub fn controls_visible(&self) -> bool {
        self.total_pages() > 1
    }

    /// Items of the current page; the last page may be short.
    pub fn visible_items(&self) -> &[T] {
        let start = (self.page * self.page_size).min(self.items.len());
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// One flag per page, set only for the current page.
    pub fn dots(&self) -> Vec<bool> {
        (0..self.total_pages()).map(|i| i == self.page).collect()
    }
}
