use std::collections::HashMap;
use serde::Serialize;
use crate::api::types::TextureId;

/// Load state of one texture slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureStatus {
    /// Requested; the page loader has not reported back yet.
    Pending,
    Ready,
    /// Load failed. The mesh keeps its fallback colour for good.
    Failed,
}

/// A load request handed to the page loader (serialized as JSON).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextureRequest {
    pub id: u32,
    pub url: String,
}

#[derive(Debug, Clone)]
struct TextureEntry {
    url: String,
    status: TextureStatus,
    /// Whether the request has been handed out via `take_requests`.
    issued: bool,
}

/// Registry of texture handles, deduplicated by URL.
///
/// Loading is fire-and-forget: the builder only ever calls `request`,
/// and the page reports completion through `mark_ready` / `mark_failed`.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    entries: Vec<TextureEntry>,
    by_url: HashMap<String, TextureId>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get (or create) the handle for a URL. Never blocks.
    pub fn request(&mut self, url: &str) -> TextureId {
        if let Some(&id) = self.by_url.get(url) {
            return id;
        }
        let id = TextureId(self.entries.len() as u32);
        self.entries.push(TextureEntry {
            url: url.to_string(),
            status: TextureStatus::Pending,
            issued: false,
        });
        self.by_url.insert(url.to_string(), id);
        id
    }

    /// Drain requests not yet handed to the loader.
    pub fn take_requests(&mut self) -> Vec<TextureRequest> {
        let mut out = Vec::new();
        for (i, entry) in self.entries.iter_mut().enumerate() {
            if !entry.issued {
                entry.issued = true;
                out.push(TextureRequest {
                    id: i as u32,
                    url: entry.url.clone(),
                });
            }
        }
        out
    }

    /// Mark a texture as loaded. Returns false for an unknown id.
    pub fn mark_ready(&mut self, id: TextureId) -> bool {
        match self.entries.get_mut(id.0 as usize) {
            Some(entry) => {
                entry.status = TextureStatus::Ready;
                true
            }
            None => false,
        }
    }

    /// Mark a texture as failed. Returns false for an unknown id.
    pub fn mark_failed(&mut self, id: TextureId) -> bool {
        match self.entries.get_mut(id.0 as usize) {
            Some(entry) => {
                log::warn!("texture `{}` failed to load, using fallback colour", entry.url);
                entry.status = TextureStatus::Failed;
                true
            }
            None => false,
        }
    }

    pub fn status(&self, id: TextureId) -> Option<TextureStatus> {
        self.entries.get(id.0 as usize).map(|e| e.status)
    }

    pub fn is_ready(&self, id: TextureId) -> bool {
        self.status(id) == Some(TextureStatus::Ready)
    }

    pub fn url(&self, id: TextureId) -> Option<&str> {
        self.entries.get(id.0 as usize).map(|e| e.url.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_are_deduplicated() {
        let mut reg = TextureRegistry::new();
        let a = reg.request("textures/earth.jpg");
        let b = reg.request("textures/earth.jpg");
        let c = reg.request("textures/mars.jpg");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.status(a), Some(TextureStatus::Pending));
    }

    #[test]
    fn take_requests_hands_out_each_once() {
        let mut reg = TextureRegistry::new();
        reg.request("textures/earth.jpg");
        let first = reg.take_requests();
        assert_eq!(first, vec![TextureRequest { id: 0, url: "textures/earth.jpg".into() }]);
        assert!(reg.take_requests().is_empty());

        reg.request("textures/mars.jpg");
        let second = reg.take_requests();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].id, 1);
    }

    #[test]
    fn completion_updates_status() {
        let mut reg = TextureRegistry::new();
        let earth = reg.request("textures/earth.jpg");
        let mars = reg.request("textures/mars.jpg");
        assert!(reg.mark_ready(earth));
        assert!(reg.mark_failed(mars));
        assert!(reg.is_ready(earth));
        assert!(!reg.is_ready(mars));
        assert_eq!(reg.status(mars), Some(TextureStatus::Failed));
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut reg = TextureRegistry::new();
        assert!(!reg.mark_ready(TextureId(9)));
        assert!(!reg.mark_failed(TextureId(9)));
        assert_eq!(reg.status(TextureId(9)), None);
    }

    #[test]
    fn requests_serialize_for_the_loader() {
        let mut reg = TextureRegistry::new();
        reg.request("textures/sun.jpg");
        let json = serde_json::to_string(&reg.take_requests()).unwrap();
        assert_eq!(json, r#"[{"id":0,"url":"textures/sun.jpg"}]"#);
    }
}
