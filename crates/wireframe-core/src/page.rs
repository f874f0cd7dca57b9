//! Arena-backed page model.
//!
//! The kernel never touches a real DOM. Instead, the host mirrors the elements it cares about
//! into a [`PageModel`]: an arena of tracked nodes addressed by stable [`NodeId`] handles.
//! Handle identity replaces reference identity; a [`NodeId`] stays valid (as a key) even after
//! the underlying element has been detached from the page, which is exactly the situation the
//! undo/redo and restore paths must tolerate.
//!
//! # Detachment
//!
//! [`PageModel::detach`] models "the element was removed from the live page". The slot is kept
//! so ids never get reused, but every read returns `None` and every write reports `false`.
//! Callers are expected to treat that as a silent skip, never as an error.

use std::collections::HashMap;

/// Stable handle to one tracked page element.
///
/// Identity-based: two `NodeId`s are equal iff they address the same tracked node. Used as the
/// key in the snapshot store and embedded in history records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Raw index value (useful for logging and host-side bookkeeping).
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Transient per-element flags maintained by the kernel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markers {
    /// Element currently shows substituted content.
    pub modified: bool,
    /// Element is the current selection target.
    pub selected: bool,
    /// Element is waiting for externally supplied content.
    pub pending: bool,
}

/// One tracked page element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNode {
    tag: String,
    text: String,
    source: Option<String>,
    background_image: Option<String>,
    rendered_size: Option<(u32, u32)>,
    markers: Markers,
}

impl PageNode {
    /// Create a text-bearing element (`p`, `h1`, `span`, ...).
    pub fn text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            text: text.into(),
            source: None,
            background_image: None,
            rendered_size: None,
            markers: Markers::default(),
        }
    }

    /// Create an `img` element with the given source reference.
    pub fn image(src: impl Into<String>) -> Self {
        let mut node = Self::text("img", "");
        node.source = Some(src.into());
        node
    }

    /// Create a `video` element with the given source reference.
    pub fn video(src: impl Into<String>) -> Self {
        let mut node = Self::text("video", "");
        node.source = Some(src.into());
        node
    }

    /// Create a block container exposing a background-image style.
    pub fn background(tag: impl Into<String>, url: impl Into<String>) -> Self {
        let mut node = Self::text(tag, "");
        node.background_image = Some(url.into());
        node
    }

    /// Attach a rendered size in CSS pixels (used for image placeholders).
    pub fn with_rendered_size(mut self, width: u32, height: u32) -> Self {
        self.rendered_size = Some((width, height));
        self
    }

    /// Lowercase tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Current text content.
    pub fn text_content(&self) -> &str {
        &self.text
    }

    /// Rendered width/height, if the host reported one.
    pub fn rendered_size(&self) -> Option<(u32, u32)> {
        self.rendered_size
    }

    /// `true` if the element exposes a background-image style.
    pub fn has_background_image(&self) -> bool {
        self.background_image.is_some()
    }

    /// Current marker flags.
    pub fn markers(&self) -> Markers {
        self.markers
    }

    /// Image-bearing content slot: `src` for `img`/`video`, background-image otherwise.
    fn image_source(&self) -> Option<&str> {
        match self.tag.as_str() {
            "img" | "video" => self.source.as_deref(),
            _ => self.background_image.as_deref(),
        }
    }

    fn set_image_source(&mut self, value: String) {
        match self.tag.as_str() {
            "img" | "video" => self.source = Some(value),
            _ => self.background_image = Some(value),
        }
    }
}

/// Which content slot of an element a substitution targets.
///
/// Consumed by exhaustive matching in the snapshot store and history stack; the kernel never
/// inspects element types at restore time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Text content substitution.
    Text,
    /// Source-attribute (or background-image) substitution.
    Image,
}

/// Arena of tracked page elements.
///
/// Insertion order is document order: iteration APIs yield attached nodes in the order the host
/// registered them.
#[derive(Debug, Default)]
pub struct PageModel {
    nodes: Vec<Option<PageNode>>,
}

impl PageModel {
    /// Create an empty page model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a new element, returning its stable handle.
    pub fn insert(&mut self, node: PageNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Some(node));
        id
    }

    /// Model removal of the element from the live page.
    ///
    /// The slot is retained so the handle stays unique; subsequent reads return `None`.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(slot) = self.nodes.get_mut(id.0 as usize) {
            *slot = None;
        }
    }

    /// `true` while the element is still part of the page.
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Borrow a tracked element, or `None` if detached/unknown.
    pub fn node(&self, id: NodeId) -> Option<&PageNode> {
        self.nodes.get(id.0 as usize).and_then(|slot| slot.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut PageNode> {
        self.nodes
            .get_mut(id.0 as usize)
            .and_then(|slot| slot.as_mut())
    }

    /// Read the content slot addressed by `kind`.
    ///
    /// Returns `None` for detached handles, and for image reads on elements without any
    /// image-bearing slot.
    pub fn content_of(&self, id: NodeId, kind: ContentKind) -> Option<String> {
        let node = self.node(id)?;
        match kind {
            ContentKind::Text => Some(node.text.clone()),
            ContentKind::Image => node.image_source().map(str::to_string),
        }
    }

    /// Write the content slot addressed by `kind`.
    ///
    /// Returns `false` (silent skip) for detached handles.
    pub fn write_content(&mut self, id: NodeId, kind: ContentKind, value: &str) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        match kind {
            ContentKind::Text => node.text = value.to_string(),
            ContentKind::Image => node.set_image_source(value.to_string()),
        }
        true
    }

    /// Set or clear the "modified" marker. No-op for detached handles.
    pub fn set_modified(&mut self, id: NodeId, on: bool) {
        if let Some(node) = self.node_mut(id) {
            node.markers.modified = on;
        }
    }

    /// Set or clear the "selected" marker. No-op for detached handles.
    pub fn set_selected(&mut self, id: NodeId, on: bool) {
        if let Some(node) = self.node_mut(id) {
            node.markers.selected = on;
        }
    }

    /// Set or clear the "pending" marker. No-op for detached handles.
    pub fn set_pending(&mut self, id: NodeId, on: bool) {
        if let Some(node) = self.node_mut(id) {
            node.markers.pending = on;
        }
    }

    /// Strip every marker from one element. No-op for detached handles.
    pub fn clear_markers(&mut self, id: NodeId) {
        if let Some(node) = self.node_mut(id) {
            node.markers = Markers::default();
        }
    }

    /// Marker flags for an element (default flags for detached handles).
    pub fn markers(&self, id: NodeId) -> Markers {
        self.node(id).map(|node| node.markers).unwrap_or_default()
    }

    /// Iterate attached elements in document order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &PageNode)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|node| (NodeId(i as u32), node)))
    }

    /// Ids of attached elements, in document order.
    pub fn ids(&self) -> Vec<NodeId> {
        self.iter().map(|(id, _)| id).collect()
    }

    /// Ids of attached elements currently carrying the pending marker, in document order.
    pub fn pending_ids(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, node)| node.markers.pending)
            .map(|(id, _)| id)
            .collect()
    }

    /// Count attached elements satisfying a marker predicate.
    pub fn count_marked(&self, pred: impl Fn(Markers) -> bool) -> usize {
        self.iter().filter(|(_, node)| pred(node.markers)).count()
    }

    /// Snapshot of every attached element's text content, keyed by handle (test/debug helper).
    pub fn text_contents(&self) -> HashMap<NodeId, String> {
        self.iter()
            .map(|(id, node)| (id, node.text.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_read() {
        let mut page = PageModel::new();
        let p = page.insert(PageNode::text("P", "Hello"));

        let node = page.node(p).unwrap();
        assert_eq!(node.tag(), "p"); // tags are normalized to lowercase
        assert_eq!(node.text_content(), "Hello");
        assert_eq!(page.content_of(p, ContentKind::Text).as_deref(), Some("Hello"));
    }

    #[test]
    fn test_image_source_slots() {
        let mut page = PageModel::new();
        let img = page.insert(PageNode::image("photo.jpg"));
        let div = page.insert(PageNode::background("div", "hero.png"));
        let vid = page.insert(PageNode::video("clip.mp4"));

        assert_eq!(page.content_of(img, ContentKind::Image).as_deref(), Some("photo.jpg"));
        assert_eq!(page.content_of(div, ContentKind::Image).as_deref(), Some("hero.png"));
        assert_eq!(page.content_of(vid, ContentKind::Image).as_deref(), Some("clip.mp4"));

        assert!(page.write_content(div, ContentKind::Image, "placeholder.png"));
        assert_eq!(
            page.content_of(div, ContentKind::Image).as_deref(),
            Some("placeholder.png")
        );
        // img/video src untouched by the div write
        assert_eq!(page.content_of(img, ContentKind::Image).as_deref(), Some("photo.jpg"));
    }

    #[test]
    fn test_detach_is_silent() {
        let mut page = PageModel::new();
        let p = page.insert(PageNode::text("p", "Hello"));
        page.detach(p);

        assert!(!page.is_attached(p));
        assert_eq!(page.content_of(p, ContentKind::Text), None);
        assert!(!page.write_content(p, ContentKind::Text, "x"));
        page.set_modified(p, true);
        assert_eq!(page.markers(p), Markers::default());
    }

    #[test]
    fn test_ids_stay_stable_after_detach() {
        let mut page = PageModel::new();
        let a = page.insert(PageNode::text("p", "a"));
        let b = page.insert(PageNode::text("p", "b"));
        page.detach(a);
        let c = page.insert(PageNode::text("p", "c"));

        assert_ne!(a, c);
        assert_eq!(page.ids(), vec![b, c]);
    }

    #[test]
    fn test_markers_and_pending_order() {
        let mut page = PageModel::new();
        let a = page.insert(PageNode::text("h1", "One"));
        let b = page.insert(PageNode::text("p", "Two"));
        let c = page.insert(PageNode::text("p", "Three"));

        page.set_pending(b, true);
        page.set_pending(a, true);
        page.set_modified(c, true);

        // Document order, not marking order.
        assert_eq!(page.pending_ids(), vec![a, b]);
        assert_eq!(page.count_marked(|m| m.modified), 1);

        page.clear_markers(a);
        assert_eq!(page.pending_ids(), vec![b]);
    }
}
