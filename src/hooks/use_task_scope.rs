// ============================================================================
// USE TASK SCOPE - ties async work to the component that started it
// ============================================================================
// Futures spawned through the scope are aborted when the component
// unmounts, so a late response never touches a dead view.
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, Abortable};
use yew::prelude::*;

#[derive(Clone, Default)]
pub struct TaskScope {
    handles: Rc<RefCell<Vec<AbortHandle>>>,
}

impl TaskScope {
    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let (handle, registration) = AbortHandle::new_pair();
        {
            let mut handles = self.handles.borrow_mut();
            handles.retain(|h| !h.is_aborted());
            handles.push(handle);
        }
        wasm_bindgen_futures::spawn_local(async move {
            if Abortable::new(task, registration).await.is_err() {
                log::debug!("🛑 Task aborted with its view");
            }
        });
    }

    pub fn abort_all(&self) {
        for handle in self.handles.borrow_mut().drain(..) {
            handle.abort();
        }
    }

    pub fn pending(&self) -> usize {
        self.handles.borrow().len()
    }
}

#[hook]
pub fn use_task_scope() -> TaskScope {
    let scope = use_memo((), |_| TaskScope::default());
    {
        let scope = scope.clone();
        use_effect_with((), move |_| move || scope.abort_all());
    }
    (*scope).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abort_all_stops_registered_futures() {
        let scope = TaskScope::default();
        let (handle, registration) = AbortHandle::new_pair();
        scope.handles.borrow_mut().push(handle);

        scope.abort_all();

        let result = futures::executor::block_on(Abortable::new(async { 1 }, registration));
        assert!(result.is_err());
        assert_eq!(scope.pending(), 0);
    }
}
