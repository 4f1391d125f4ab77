pub mod current_user;
pub mod render_context;
pub mod template;

pub use current_user::{CurrentUser, resolve_current_user};
pub use render_context::{CURRENT_USER_KEY, RenderContext};
