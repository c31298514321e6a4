//! The element tree: the `Element` contract, containers, wrappers and the
//! per-frame render context.

pub mod context;
pub mod dsl;
pub mod generic;
pub mod lazy;
pub mod panel;
pub mod props;
pub mod registry;
pub mod stack;
pub mod text;
pub mod traits;

pub use context::RenderContext;
pub use generic::GenericWidgetElement;
pub use lazy::Lazy;
pub use panel::Panel;
pub use props::{ElementProps, Styled};
pub use registry::{ElementKey, ElementPath, ElementRegistry, RegisteredElement};
pub use stack::Stack;
pub use text::Text;
pub use traits::Element;
