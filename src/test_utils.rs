use alloc::rc::Rc;
use core::cell::Cell;

/// Hands out [`Droppable`] values and counts how many of them were dropped.
#[derive(Default)]
pub(crate) struct DropCounter {
    count: Rc<Cell<usize>>,
}

impl DropCounter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn new_droppable<T>(&self, value: T) -> Droppable<T> {
        Droppable {
            value,
            counter: Rc::clone(&self.count),
        }
    }

    pub(crate) fn dropped(&self) -> usize {
        self.count.get()
    }
}

#[derive(Debug)]
pub(crate) struct Droppable<T> {
    pub value: T,
    counter: Rc<Cell<usize>>,
}

impl<T: Clone> Clone for Droppable<T> {
    fn clone(&self) -> Self {
        Droppable {
            value: self.value.clone(),
            counter: Rc::clone(&self.counter),
        }
    }
}

impl<T> Drop for Droppable<T> {
    fn drop(&mut self) {
        self.counter.set(self.counter.get() + 1);
    }
}
