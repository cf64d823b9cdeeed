use std::cell::{Ref, RefCell};
use std::rc::Rc;

use yew::prelude::*;

/// Mutable view model shared between render and async callbacks.
///
/// Async tasks always see the latest value instead of the snapshot a
/// `UseStateHandle` captured when the closure was built.
pub struct ViewModelHandle<T> {
    inner: Rc<RefCell<T>>,
    rerender: UseForceUpdateHandle,
}

impl<T> Clone for ViewModelHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            rerender: self.rerender.clone(),
        }
    }
}

impl<T> ViewModelHandle<T> {
    pub fn read(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    /// Mutates the view model and schedules a re-render.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.inner.borrow_mut());
        self.rerender.force_update();
        result
    }
}

#[hook]
pub fn use_view_model<T, F>(init: F) -> ViewModelHandle<T>
where
    T: 'static,
    F: FnOnce() -> T,
{
    let inner = use_mut_ref(init);
    let rerender = use_force_update();
    ViewModelHandle { inner, rerender }
}
