//! The observable container: a subject owning one observer sequence and
//! exposing its length, slot replacement, and event dispatch.

use vigil_prelude::*;

use crate::list::*;
use crate::notify::*;



// ==================
// === Observable ===
// ==================

/// A fixed set of observers attached to some subject. The shape of the
/// contained sequence is frozen at construction time; afterwards only slot
/// values may be replaced. The container dereferences to the sequence, so the
/// sequence-level traits are usable on it directly as well.
///
/// The sequence is owned. To attach observers which stay owned by the caller,
/// build the sequence with [`observer_list!`](crate::observer_list), which
/// borrows its arguments instead of moving them in.
#[derive(Clone,Copy,Debug,Default,Eq,From,PartialEq,Shrinkwrap)]
#[shrinkwrap(mutable)]
#[shrinkwrap(unsafe_ignore_visibility)]
pub struct Observable<List> {
    observers : List,
}

impl<List> Observable<List> {
    /// Constructor. Takes ownership of the provided observer sequence; pass a
    /// clone to keep the original.
    pub fn new(observers:List) -> Self {
        Self {observers}
    }

    /// Consumes the observable and returns the contained sequence, transferring
    /// the observers' ownership back to the caller.
    pub fn into_inner(self) -> List {
        self.observers
    }
}


// === Introspection ===

impl<List:HasLength> Observable<List> {
    /// Number of attached observers, fixed at construction time.
    pub const LENGTH : usize = List::LEN;

    /// Number of attached observers.
    pub fn len(&self) -> usize {
        Self::LENGTH
    }

    /// Checks whether any observer is attached at all.
    pub fn is_empty(&self) -> bool {
        Self::LENGTH == 0
    }
}


// === Slot Access ===

impl<List> Observable<List> {
    /// Borrows the observer at slot `I`.
    pub fn observer<const I:usize>(&self) -> &Observer<List,I>
    where List : ObserverAt<I> {
        self.observers.observer()
    }

    /// Mutably borrows the observer at slot `I`.
    pub fn observer_mut<const I:usize>(&mut self) -> &mut Observer<List,I>
    where List : ObserverAt<I> {
        self.observers.observer_mut()
    }

    /// Replaces the observer at slot `I`. On an observable without observers
    /// this is a no-op for any index.
    pub fn set_observer<const I:usize, Obs>(&mut self, observer:Obs)
    where List : SetObserver<I,Obs> {
        self.observers.set_observer(observer)
    }
}


// === Dispatch ===

impl<List> Observable<List> {
    /// Notifies every attached observer about `event`, visiting slots from the
    /// last one down to slot 0. The first failing observer aborts the dispatch
    /// and its failure is returned unchanged. Slot contents are not affected.
    pub fn notify<Evt>(&mut self, event:&Evt) -> Result<(),DispatchFailure<List,Evt>>
    where List : NotifyAll<Evt> {
        self.observers.notify_all(event)
    }
}



// =============
// === Tests ===
// =============
