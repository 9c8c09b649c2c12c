//! The event notification capability and the dispatcher which walks observer
//! sequences.

use vigil_prelude::*;

use std::fmt;



// ==============
// === Notify ===
// ==============

/// Capability of reacting to the event selected by the zero-state tag `Evt`.
/// Any type placed in an observer sequence has to provide it for every event
/// tag the sequence is dispatched with. The reaction runs synchronously and its
/// side effects are entirely the observer's business; the dispatcher only sees
/// whether it completed or failed.
pub trait Notify<Evt> {
    /// Failure raised when the reaction cannot complete.
    type Failure;
    /// Reacts to a single `event` notification.
    fn notify(&mut self, event:&Evt) -> Result<(),Self::Failure>;
}

/// Accessor.
pub type Failure<T,Evt> = <T as Notify<Evt>>::Failure;

/// Observer which ignores every notification. Useful as a placeholder slot.
pub type NoObserver = ();


// === Adapters ===

impl<Evt> Notify<Evt> for () {
    type Failure = Infallible;
    fn notify(&mut self, _event:&Evt) -> Result<(),Self::Failure> {
        Ok(())
    }
}

impl<Evt,T:Notify<Evt>> Notify<Evt> for Option<T> {
    type Failure = T::Failure;
    fn notify(&mut self, event:&Evt) -> Result<(),Self::Failure> {
        match self {
            Some(observer) => observer.notify(event),
            None           => Ok(()),
        }
    }
}

impl<'t,Evt,T:Notify<Evt>> Notify<Evt> for &'t mut T {
    type Failure = T::Failure;
    fn notify(&mut self, event:&Evt) -> Result<(),Self::Failure> {
        (**self).notify(event)
    }
}


// ==================
// === ObserverFn ===
// ==================

/// Newtype adapting any `FnMut(&Evt) -> Result<(),Fail>` closure into an
/// observer.
#[derive(Clone,Copy,Shrinkwrap)]
#[shrinkwrap(mutable)]
pub struct ObserverFn<F>(pub F);

impl<F> Debug for ObserverFn<F> {
    fn fmt(&self, f:&mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,"ObserverFn")
    }
}

impl<Evt,Fail,F> Notify<Evt> for ObserverFn<F>
where F : FnMut(&Evt) -> Result<(),Fail> {
    type Failure = Fail;
    fn notify(&mut self, event:&Evt) -> Result<(),Self::Failure> {
        (self.0)(event)
    }
}


// =================
// === NotifyAll ===
// =================

/// Dispatch of one event notification to every slot of an observer sequence.
///
/// Slots are visited from the last one down to slot 0, so the observer declared
/// last reacts first. This order is a committed part of the contract. The walk
/// is strictly sequential: a slot's reaction runs to completion before the next
/// lower slot is visited, and the first failure aborts the walk. Slots below
/// the failing one are not visited for that call, slots above it have already
/// completed, and the failure value reaches the caller unchanged.
///
/// All slots of a sequence share one failure type. Observers with different
/// failure types unify through a caller-chosen common type, for example the
/// prelude's `failure::Error`.
pub trait NotifyAll<Evt> {
    /// Failure shared by every slot of the sequence.
    type Failure;
    /// Notifies every observer in the sequence about `event`.
    fn notify_all(&mut self, event:&Evt) -> Result<(),Self::Failure>;
}

/// Accessor.
pub type DispatchFailure<List,Evt> = <List as NotifyAll<Evt>>::Failure;

impl<Evt> NotifyAll<Evt> for () {
    type Failure = Infallible;
    fn notify_all(&mut self, _event:&Evt) -> Result<(),Self::Failure> {
        Ok(())
    }
}

/// Implements the dispatcher for a single tuple arity. Slot indices are given
/// in visiting order, so each expansion reads exactly like the dispatch it
/// performs.
macro_rules! impl_notify_all {
    ( [ $($T:ident),* ] [ $($idx:tt),* ] ) => {
        impl<Evt,Fail,$($T),*> NotifyAll<Evt> for ($($T,)*)
        where $( $T : Notify<Evt,Failure=Fail> ),* {
            type Failure = Fail;
            fn notify_all(&mut self, event:&Evt) -> Result<(),Self::Failure> {
                $( Notify::notify(&mut self.$idx, event)?; )*
                Ok(())
            }
        }
    };
}

impl_notify_all! { [T0]                                  [0] }
impl_notify_all! { [T0,T1]                               [1,0] }
impl_notify_all! { [T0,T1,T2]                            [2,1,0] }
impl_notify_all! { [T0,T1,T2,T3]                         [3,2,1,0] }
impl_notify_all! { [T0,T1,T2,T3,T4]                      [4,3,2,1,0] }
impl_notify_all! { [T0,T1,T2,T3,T4,T5]                   [5,4,3,2,1,0] }
impl_notify_all! { [T0,T1,T2,T3,T4,T5,T6]                [6,5,4,3,2,1,0] }
impl_notify_all! { [T0,T1,T2,T3,T4,T5,T6,T7]             [7,6,5,4,3,2,1,0] }
impl_notify_all! { [T0,T1,T2,T3,T4,T5,T6,T7,T8]          [8,7,6,5,4,3,2,1,0] }
impl_notify_all! { [T0,T1,T2,T3,T4,T5,T6,T7,T8,T9]       [9,8,7,6,5,4,3,2,1,0] }
impl_notify_all! { [T0,T1,T2,T3,T4,T5,T6,T7,T8,T9,T10]   [10,9,8,7,6,5,4,3,2,1,0] }
impl_notify_all! { [T0,T1,T2,T3,T4,T5,T6,T7,T8,T9,T10,T11] [11,10,9,8,7,6,5,4,3,2,1,0] }



// =============
// === Tests ===
// =============
