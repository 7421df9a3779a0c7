use crate::markup::escape_html;

/// A mutable markup container the renderer writes into.
pub trait Container: Send {
    fn inner_html(&self) -> &str;

    /// Replaces the whole content.
    fn set_inner_html(&mut self, html: String);

    /// Adds markup after the current content.
    fn append_child(&mut self, html: String);
}

/// Anything that can resolve a container by id.
pub trait RenderSurface: Send {
    fn element_by_id(&mut self, id: &str) -> Option<&mut dyn Container>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    id: String,
    inner_html: String,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner_html: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Container for Element {
    fn inner_html(&self) -> &str {
        &self.inner_html
    }

    fn set_inner_html(&mut self, html: String) {
        self.inner_html = html;
    }

    fn append_child(&mut self, html: String) {
        self.inner_html.push_str(&html);
    }
}

/// In-memory page made of named containers, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.add_container(id);
        self
    }

    /// Adds an empty container unless one with the same id exists.
    pub fn add_container(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.element(&id).is_none() {
            self.elements.push(Element::new(id));
        }
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn to_html(&self) -> String {
        self.elements
            .iter()
            .map(|e| format!("<div id=\"{}\">{}</div>", escape_html(&e.id), e.inner_html))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl RenderSurface for Document {
    fn element_by_id(&mut self, id: &str) -> Option<&mut dyn Container> {
        self.elements
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| e as &mut dyn Container)
    }
}
