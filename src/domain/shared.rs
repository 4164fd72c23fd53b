use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Handle to a mutable container that may be reachable from more than one owner.
///
/// `Shared` intentionally has no `Clone` impl. Duplicating a handle must say
/// which copy it wants: [`Shared::alias`] points at the same container (shallow),
/// [`Shared::detach`] allocates a new one (deep).
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// A second handle to this very container.
    pub fn alias(&self) -> Self {
        Self(Rc::clone(&self.0))
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// True when both handles reach the same container.
    pub fn is_same(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: Clone> Shared<T> {
    /// A handle to a fresh container holding a copy of the current contents.
    pub fn detach(&self) -> Self {
        Self::new(self.0.borrow().clone())
    }

    pub fn snapshot(&self) -> T {
        self.0.borrow().clone()
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PartialEq> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0.borrow() == *other.0.borrow()
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&*self.0.borrow()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_sees_writes_through_the_original() {
        let original = Shared::new(vec!["A".to_string()]);
        let alias = original.alias();

        original.borrow_mut().push("B".to_string());

        assert!(Shared::is_same(&original, &alias));
        assert_eq!(alias.snapshot(), vec!["A", "B"]);
    }

    #[test]
    fn detach_is_independent_in_both_directions() {
        let original = Shared::new(vec![1000.5_f64]);
        let copy = original.detach();

        original.borrow_mut().push(5000.0);
        copy.borrow_mut().push(1.0);

        assert!(!Shared::is_same(&original, &copy));
        assert_eq!(original.snapshot(), vec![1000.5, 5000.0]);
        assert_eq!(copy.snapshot(), vec![1000.5, 1.0]);
    }

    #[test]
    fn equality_compares_contents_not_identity() {
        let a = Shared::new(vec![1, 2]);
        let b = Shared::new(vec![1, 2]);
        assert_eq!(a, b);
        assert!(!Shared::is_same(&a, &b));

        b.borrow_mut().push(3);
        assert_ne!(a, b);
    }
}
