use std::rc::Rc;

use yew::prelude::*;

use crate::services::ApiClient;

/// One API client per component, pointed at the configured backend.
#[hook]
pub fn use_api() -> Rc<ApiClient> {
    use_memo((), |_| ApiClient::new())
}
