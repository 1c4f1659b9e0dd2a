//! The rendered document: a set of named mount points holding HTML.
//!
//! A [`Page`] stands in for the browser document. Views write markup into
//! mount points by id, fragment loading injects whole files, and markup
//! injected into a mount may declare further mount points through `id`
//! attributes (the cart sidebar fragment declares the item list and total
//! mounts this way).
//!
//! `Page` is a cheap clone handle so the boot sequence, views and the
//! countdown task can all write to the same document.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock, RwLock};

use regex::Regex;

/// Mount point that always exists and receives appended widgets.
pub const BODY_MOUNT: &str = "body";

static ID_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    // Static pattern, always valid
    #[allow(clippy::unwrap_used)]
    Regex::new(r#"\sid\s*=\s*["']([^"']+)["']"#).unwrap()
});

#[derive(Debug, Default)]
struct PageInner {
    path: String,
    mounts: BTreeMap<String, String>,
}

/// A document with named mount points.
#[derive(Debug, Clone, Default)]
pub struct Page {
    inner: Arc<RwLock<PageInner>>,
}

impl Page {
    /// Create a page at `path` with the given empty mount points.
    ///
    /// The [`BODY_MOUNT`] is always present.
    #[must_use]
    pub fn new<I, S>(path: impl Into<String>, mounts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map: BTreeMap<String, String> =
            mounts.into_iter().map(|id| (id.into(), String::new())).collect();
        map.entry(BODY_MOUNT.to_owned()).or_default();

        Self {
            inner: Arc::new(RwLock::new(PageInner {
                path: path.into(),
                mounts: map,
            })),
        }
    }

    /// Location of the page, e.g. `/checkout.html`.
    #[must_use]
    pub fn path(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.path.clone())
            .unwrap_or_default()
    }

    /// Whether a mount point with this id exists.
    #[must_use]
    pub fn has_mount(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.mounts.contains_key(id))
            .unwrap_or(false)
    }

    /// Current markup of a mount point.
    #[must_use]
    pub fn html(&self, id: &str) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.mounts.get(id).cloned())
    }

    /// Replace the markup of a mount point.
    ///
    /// Ids declared in `html` become mount points of their own. Returns
    /// `false` and changes nothing if the mount does not exist.
    pub fn set_html(&self, id: &str, html: impl Into<String>) -> bool {
        self.write_mount(id, html.into(), false)
    }

    /// Append markup to a mount point. Same rules as [`Page::set_html`].
    pub fn append_html(&self, id: &str, html: impl Into<String>) -> bool {
        self.write_mount(id, html.into(), true)
    }

    /// Snapshot of every mount point and its markup, ordered by id.
    #[must_use]
    pub fn mounts(&self) -> Vec<(String, String)> {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .mounts
                    .iter()
                    .map(|(id, html)| (id.clone(), html.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn write_mount(&self, id: &str, html: String, append: bool) -> bool {
        let Ok(mut guard) = self.inner.write() else {
            tracing::error!(mount = id, "page lock poisoned");
            return false;
        };

        let declared: Vec<String> = ID_ATTRIBUTE
            .captures_iter(&html)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_owned()))
            .collect();

        let Some(slot) = guard.mounts.get_mut(id) else {
            return false;
        };
        if append {
            slot.push_str(&html);
        } else {
            *slot = html;
        }

        for child in declared {
            guard.mounts.entry(child).or_default();
        }
        true
    }
}
