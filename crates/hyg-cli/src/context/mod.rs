mod app_context;
mod project_root;

pub use app_context::{AppContext, login};
pub use project_root::resolve_project_root;
