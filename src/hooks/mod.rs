pub mod use_api;
pub mod use_session;
pub mod use_task_scope;
pub mod use_view_model;

pub use use_api::use_api;
pub use use_session::{use_session_store, SessionHandle};
pub use use_task_scope::{use_task_scope, TaskScope};
pub use use_view_model::{use_view_model, ViewModelHandle};
