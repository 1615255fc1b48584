// SPDX-License-Identifier: MPL-2.0
//! Per-component cache of images downloaded from catalog URLs.
//!
//! Each URL is requested at most once per cache. Downloads are tied to the
//! cache through [`FetchGuard`]s, so dropping the owning component aborts
//! whatever is still in flight. A failed download leaves the URL marked as
//! missing and the caller renders a placeholder instead.

use crate::error::FetchError;
use crate::infrastructure::http;
use crate::ui::design_tokens::typography;
use crate::ui::lifecycle::FetchGuard;
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{container, image, text};
use iced::{ContentFit, Element, Length, Task};
use std::collections::HashMap;

/// Result of one image download.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub url: String,
    pub result: Result<Handle, FetchError>,
}

#[derive(Debug, Clone)]
enum Slot {
    Pending,
    Ready(Handle),
    Missing,
}

#[derive(Debug, Default)]
pub struct RemoteImages {
    slots: HashMap<String, Slot>,
    /// Downloads still in flight, keyed by URL.
    guards: HashMap<String, FetchGuard>,
}

impl RemoteImages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts downloads for every URL not requested before.
    ///
    /// Empty URLs are skipped and render as placeholders.
    pub fn request<'a, I>(&mut self, urls: I) -> Task<Loaded>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tasks = Vec::new();

        for url in urls {
            if url.is_empty() || self.slots.contains_key(url) {
                continue;
            }
            self.slots.insert(url.to_string(), Slot::Pending);

            let target = url.to_string();
            let task = Task::perform(http::fetch_bytes(target.clone()), move |result| Loaded {
                url: target,
                result: result.map(Handle::from_bytes),
            });
            let (task, guard) = FetchGuard::spawn(task);
            self.guards.insert(url.to_string(), guard);
            tasks.push(task);
        }

        Task::batch(tasks)
    }

    /// Stores a finished download. Results for unknown URLs are ignored.
    pub fn apply(&mut self, loaded: Loaded) {
        self.guards.remove(&loaded.url);
        let Some(slot) = self.slots.get_mut(&loaded.url) else {
            return;
        };

        *slot = match loaded.result {
            Ok(handle) => Slot::Ready(handle),
            Err(err) => {
                tracing::warn!(url = %loaded.url, "image download failed: {err}");
                Slot::Missing
            }
        };
    }

    #[must_use]
    pub fn handle(&self, url: &str) -> Option<&Handle> {
        match self.slots.get(url) {
            Some(Slot::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self, url: &str) -> bool {
        matches!(self.slots.get(url), Some(Slot::Pending))
    }

    #[must_use]
    pub fn is_missing(&self, url: &str) -> bool {
        matches!(self.slots.get(url), Some(Slot::Missing))
    }

    /// Number of downloads that have not reported back yet.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.guards.len()
    }

    /// Number of URLs this cache has requested.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Renders the image for `url`, or a placeholder labelled with `caption`.
pub fn view<'a, M: 'a>(
    images: &RemoteImages,
    url: Option<&str>,
    caption: String,
    width: Length,
    height: Length,
) -> Element<'a, M> {
    match url.and_then(|url| images.handle(url)) {
        Some(handle) => image(handle.clone())
            .width(width)
            .height(height)
            .content_fit(ContentFit::Contain)
            .into(),
        None => placeholder(caption, width, height),
    }
}

/// Neutral surface standing in for an image.
pub fn placeholder<'a, M: 'a>(caption: String, width: Length, height: Length) -> Element<'a, M> {
    container(text(caption).size(typography::CAPTION))
        .center_x(width)
        .center_y(height)
        .style(styles::container::placeholder)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_url_is_requested_once() {
        let mut images = RemoteImages::new();
        let _ = images.request(["a.png", "b.png", "a.png"]);
        let _ = images.request(["b.png"]);
        assert_eq!(images.len(), 2);
        assert!(images.is_pending("a.png"));
    }

    #[test]
    fn empty_urls_are_skipped() {
        let mut images = RemoteImages::new();
        let _ = images.request([""]);
        assert!(images.is_empty());
    }

    #[test]
    fn failed_download_marks_url_missing() {
        let mut images = RemoteImages::new();
        let _ = images.request(["a.png"]);
        images.apply(Loaded {
            url: "a.png".into(),
            result: Err(FetchError::Status(404)),
        });
        assert!(images.is_missing("a.png"));
        assert!(images.handle("a.png").is_none());
    }

    #[test]
    fn successful_download_is_available() {
        let mut images = RemoteImages::new();
        let _ = images.request(["a.png"]);
        images.apply(Loaded {
            url: "a.png".into(),
            result: Ok(Handle::from_bytes(vec![0u8; 4])),
        });
        assert!(images.handle("a.png").is_some());
    }

    #[test]
    fn finished_downloads_release_their_guard() {
        let mut images = RemoteImages::new();
        let _ = images.request(["a.png", "b.png"]);
        assert_eq!(images.in_flight(), 2);

        images.apply(Loaded {
            url: "a.png".into(),
            result: Ok(Handle::from_bytes(vec![0u8; 4])),
        });
        assert_eq!(images.in_flight(), 1);

        images.apply(Loaded {
            url: "b.png".into(),
            result: Err(FetchError::Status(404)),
        });
        assert_eq!(images.in_flight(), 0);
        assert_eq!(images.len(), 2);
    }

    #[test]
    fn results_for_unrequested_urls_are_ignored() {
        let mut images = RemoteImages::new();
        images.apply(Loaded {
            url: "stray.png".into(),
            result: Ok(Handle::from_bytes(vec![0u8; 4])),
        });
        assert!(images.is_empty());
    }
}
