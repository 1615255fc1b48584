// SPDX-License-Identifier: MPL-2.0
//! Index cycling over the fetched gallery images.

use crate::domain::catalog::{ImageRecord, ThumbnailLimit};

/// Ordered images with exactly one current entry whenever the list is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    images: Vec<ImageRecord>,
    current: usize,
}

impl Carousel {
    /// Starts at the first image.
    #[must_use]
    pub fn new(images: Vec<ImageRecord>) -> Self {
        Self { images, current: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> Option<&ImageRecord> {
        self.images.get(self.current)
    }

    #[must_use]
    pub fn is_current(&self, index: usize) -> bool {
        !self.is_empty() && index == self.current
    }

    /// Steps back, wrapping from the first image to the last.
    pub fn go_to_previous(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current = if self.current == 0 {
            self.len() - 1
        } else {
            self.current - 1
        };
    }

    /// Steps forward, wrapping from the last image to the first.
    pub fn go_to_next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current = if self.current + 1 >= self.len() {
            0
        } else {
            self.current + 1
        };
    }

    /// Jumps to `index`. Out-of-range indices leave the selection unchanged
    /// and return `false`.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Leading images shown in the thumbnail strip, with their indices.
    pub fn thumbnails(
        &self,
        limit: ThumbnailLimit,
    ) -> impl Iterator<Item = (usize, &ImageRecord)> + '_ {
        self.images.iter().enumerate().take(limit.value())
    }
}
