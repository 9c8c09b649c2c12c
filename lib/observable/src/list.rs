//! Fixed-arity, heterogeneous observer sequences together with their
//! compile-time introspection and slot replacement operations.
//!
//! A sequence is an ordinary tuple. Its arity and per-slot types are frozen for
//! the sequence's whole lifetime; only slot values change. The unit type is the
//! empty sequence, a storage-free degenerate case with its own replacement rule
//! (see [`SetObserver`]).



// =================
// === HasLength ===
// =================

/// Compile-time slot count of an observer sequence.
pub trait HasLength {
    /// Number of slots in the sequence.
    const LEN : usize;
}


// =====================
// === KnownObserver ===
// =====================

/// Type-level query for the observer type stored at slot `I`. Asking for a slot
/// outside of the sequence does not compile, which makes an out-of-range index
/// a structural violation rather than a runtime condition.
pub trait KnownObserver<const I:usize> {
    /// The observer type stored at slot `I`.
    type Observer;
}

/// Accessor.
pub type Observer<List, const I:usize> = <List as KnownObserver<I>>::Observer;


// ==================
// === ObserverAt ===
// ==================

/// By-reference access to the observer stored at slot `I`.
pub trait ObserverAt<const I:usize> : KnownObserver<I> {
    /// Borrows the observer at slot `I`.
    fn observer(&self) -> &Self::Observer;
    /// Mutably borrows the observer at slot `I`.
    fn observer_mut(&mut self) -> &mut Self::Observer;
}


// ===================
// === SetObserver ===
// ===================

/// Replacement of the value stored at slot `I`. The slot's index and type stay
/// fixed; only the value changes. On the empty sequence the operation accepts
/// any index and any value and does nothing, as there is no slot whose bounds
/// could be violated.
///
/// Replacing a slot outside of a non-empty sequence does not compile:
///
/// ```compile_fail
/// use vigil_observable::*;
/// let mut list = (1_u8,);
/// <(u8,) as SetObserver<1,u8>>::set_observer(&mut list, 2);
/// ```
pub trait SetObserver<const I:usize, Obs> {
    /// Replaces the value stored at slot `I` with `observer`.
    fn set_observer(&mut self, observer:Obs);
}


// ======================
// === Empty Sequence ===
// ======================

impl HasLength for () {
    const LEN : usize = 0;
}

impl<const I:usize, Obs> SetObserver<I,Obs> for () {
    fn set_observer(&mut self, _observer:Obs) {}
}


// =========================
// === Tuple Definitions ===
// =========================

/// Implements the slot traits for a single `index : type` pair of a tuple.
macro_rules! impl_observer_slot {
    ( $idx:tt : $Slot:ident [ $($T:ident),* ] ) => {
        impl<$($T),*> KnownObserver<$idx> for ($($T,)*) {
            type Observer = $Slot;
        }

        impl<$($T),*> ObserverAt<$idx> for ($($T,)*) {
            fn observer     (&self)     -> &$Slot     { &self.$idx }
            fn observer_mut (&mut self) -> &mut $Slot { &mut self.$idx }
        }

        impl<$($T),*> SetObserver<$idx,$Slot> for ($($T,)*) {
            fn set_observer(&mut self, observer:$Slot) {
                self.$idx = observer;
            }
        }
    };
}

/// Implements `HasLength` for a single tuple arity.
macro_rules! impl_observer_has_length {
    ( $len:tt [ $($T:ident),* ] ) => {
        impl<$($T),*> HasLength for ($($T,)*) {
            const LEN : usize = $len;
        }
    };
}

/// Implements the sequence traits for a single tuple arity.
macro_rules! impl_observer_list {
    ( $len:tt $types:tt { $($idx:tt : $Slot:ident),* } ) => {
        impl_observer_has_length! { $len $types }

        $( impl_observer_slot! { $idx : $Slot $types } )*
    };
}

impl_observer_list! { 1  [T0]
    { 0:T0 } }
impl_observer_list! { 2  [T0,T1]
    { 0:T0, 1:T1 } }
impl_observer_list! { 3  [T0,T1,T2]
    { 0:T0, 1:T1, 2:T2 } }
impl_observer_list! { 4  [T0,T1,T2,T3]
    { 0:T0, 1:T1, 2:T2, 3:T3 } }
impl_observer_list! { 5  [T0,T1,T2,T3,T4]
    { 0:T0, 1:T1, 2:T2, 3:T3, 4:T4 } }
impl_observer_list! { 6  [T0,T1,T2,T3,T4,T5]
    { 0:T0, 1:T1, 2:T2, 3:T3, 4:T4, 5:T5 } }
impl_observer_list! { 7  [T0,T1,T2,T3,T4,T5,T6]
    { 0:T0, 1:T1, 2:T2, 3:T3, 4:T4, 5:T5, 6:T6 } }
impl_observer_list! { 8  [T0,T1,T2,T3,T4,T5,T6,T7]
    { 0:T0, 1:T1, 2:T2, 3:T3, 4:T4, 5:T5, 6:T6, 7:T7 } }
impl_observer_list! { 9  [T0,T1,T2,T3,T4,T5,T6,T7,T8]
    { 0:T0, 1:T1, 2:T2, 3:T3, 4:T4, 5:T5, 6:T6, 7:T7, 8:T8 } }
impl_observer_list! { 10 [T0,T1,T2,T3,T4,T5,T6,T7,T8,T9]
    { 0:T0, 1:T1, 2:T2, 3:T3, 4:T4, 5:T5, 6:T6, 7:T7, 8:T8, 9:T9 } }
impl_observer_list! { 11 [T0,T1,T2,T3,T4,T5,T6,T7,T8,T9,T10]
    { 0:T0, 1:T1, 2:T2, 3:T3, 4:T4, 5:T5, 6:T6, 7:T7, 8:T8, 9:T9, 10:T10 } }
impl_observer_list! { 12 [T0,T1,T2,T3,T4,T5,T6,T7,T8,T9,T10,T11]
    { 0:T0, 1:T1, 2:T2, 3:T3, 4:T4, 5:T5, 6:T6, 7:T7, 8:T8, 9:T9, 10:T10, 11:T11 } }



// =============
// === Tests ===
// =============
