pub mod markup;
pub mod renderer;
pub mod surface;

pub use renderer::{NewsRenderer, NewsWidget};
pub use surface::{Container, Document, Element, RenderSurface};

pub mod prelude {
    pub use crate::{Document, NewsRenderer, NewsWidget, RenderSurface};
    pub use an_core::{Article, Error, Result};
}
