//! Law-level test suite for observable composition: dispatch order, slot
//! replacement, fail-fast relay, aliasing of borrowed observers, and the empty
//! degenerate case.

use vigil_observable::*;
use vigil_prelude::*;

use failure::err_msg;
use failure::Error;

event_tags! { Bump }



// ===============
// === Helpers ===
// ===============

type Log = Rc<RefCell<Vec<&'static str>>>;

/// Observer recording its own name on every notification.
#[derive(Clone,Debug)]
struct Recorder {
    name : &'static str,
    log  : Log,
}

impl Recorder {
    fn new(name:&'static str, log:&Log) -> Self {
        let log = log.clone();
        Self {name,log}
    }
}

impl Notify<Bump> for Recorder {
    type Failure = Infallible;
    fn notify(&mut self, _event:&Bump) -> Result<(),Self::Failure> {
        self.log.borrow_mut().push(self.name);
        Ok(())
    }
}

/// Failure raised by `Refuser`.
#[derive(Debug,Fail)]
#[fail(display = "observer {} refused the event", name)]
struct Refusal {
    name : &'static str,
}

/// Observer recording its name and then optionally refusing the event.
#[derive(Clone,Debug)]
struct Refuser {
    name    : &'static str,
    refuses : bool,
    log     : Log,
}

impl Refuser {
    fn new(name:&'static str, refuses:bool, log:&Log) -> Self {
        let log = log.clone();
        Self {name,refuses,log}
    }
}

impl Notify<Bump> for Refuser {
    type Failure = Refusal;
    fn notify(&mut self, _event:&Bump) -> Result<(),Self::Failure> {
        self.log.borrow_mut().push(self.name);
        if self.refuses {
            Err(Refusal {name:self.name})
        } else {
            Ok(())
        }
    }
}

/// Observer counting the notifications it receives.
#[derive(Clone,Copy,Debug,Default,Eq,PartialEq)]
struct Counter {
    count : usize,
}

impl Notify<Bump> for Counter {
    type Failure = Infallible;
    fn notify(&mut self, _event:&Bump) -> Result<(),Self::Failure> {
        self.count += 1;
        Ok(())
    }
}



// ============
// === Laws ===
// ============

#[test]
fn length_is_fixed_at_construction() {
    let log = Log::default();
    let mut subject = Observable::new((Recorder::new("a",&log), Recorder::new("b",&log)));
    assert_eq!(subject.len(), 2);
    subject.set_observer::<0,_>(Recorder::new("a2",&log));
    assert_eq!(subject.len(), 2);
    assert!(!subject.is_empty());
}

#[test]
fn dispatch_visits_the_last_declared_observer_first() {
    let log = Log::default();
    let mut subject = Observable::new((
        Recorder::new("a",&log),
        Recorder::new("b",&log),
        Recorder::new("c",&log),
    ));
    subject.notify(&Bump).unwrap();
    assert_eq!(*log.borrow(), ["c","b","a"]);
}

#[test]
fn replaced_observer_is_notified_in_place_of_the_old_one() {
    let log = Log::default();
    let mut subject = Observable::new((
        Recorder::new("a",&log),
        Recorder::new("b",&log),
        Recorder::new("c",&log),
    ));
    subject.set_observer::<1,_>(Recorder::new("b2",&log));
    subject.notify(&Bump).unwrap();
    assert_eq!(*log.borrow(), ["c","b2","a"]);
}

#[test]
fn empty_observable_dispatch_and_replacement_are_no_ops() {
    let mut subject = Observable::<()>::default();
    subject.notify(&Bump).unwrap();
    subject.set_observer::<0,_>(42);
    subject.set_observer::<9,_>("anything");
    assert_eq!(subject.len(), 0);
    assert!(subject.is_empty());
}

#[test]
fn failing_observer_aborts_dispatch_of_lower_slots() {
    let log = Log::default();
    let mut subject = Observable::new((
        Refuser::new("a",false,&log),
        Refuser::new("b",true,&log),
        Refuser::new("c",false,&log),
    ));
    let error = subject.notify(&Bump).unwrap_err();
    assert_eq!(error.name, "b");
    assert_eq!(error.to_string(), "observer b refused the event");
    assert_eq!(*log.borrow(), ["c","b"]);
}

#[test]
fn failures_unify_through_a_common_error_type() {
    let mut subject = Observable::new((
        ObserverFn(|_:&Bump| Ok::<(),Error>(())),
        ObserverFn(|_:&Bump| Err(err_msg("boom"))),
    ));
    let error = subject.notify(&Bump).unwrap_err();
    assert_eq!(error.to_string(), "boom");
}

#[test]
fn borrowed_observers_alias_the_callers_variables() {
    let mut first  = Counter::default();
    let mut second = Counter::default();
    let mut subject = Observable::new(observer_list!(first,second));
    subject.notify(&Bump).unwrap();
    subject.notify(&Bump).unwrap();
    subject.observer_mut::<0>().count += 10;
    drop(subject);
    assert_eq!(first.count , 12);
    assert_eq!(second.count, 2);

    first.count = 5;
    let list = observer_list!(first);
    assert_eq!(list.0.count, 5);
}

#[test]
fn optional_observer_is_notified_only_when_present() {
    let log = Log::default();
    let mut subject = Observable::new((Some(Recorder::new("a",&log)), None::<Recorder>));
    subject.notify(&Bump).unwrap();
    assert_eq!(*log.borrow(), ["a"]);
    subject.set_observer::<1,_>(Some(Recorder::new("b",&log)));
    subject.notify(&Bump).unwrap();
    assert_eq!(*log.borrow(), ["a","b","a"]);
}

#[test]
fn null_observer_slots_ignore_events() {
    let log = Log::default();
    let mut subject = Observable::new((Recorder::new("a",&log), NoObserver::default()));
    subject.notify(&Bump).unwrap();
    assert_eq!(*log.borrow(), ["a"]);
}

#[test]
fn default_construction_default_initializes_every_slot() {
    let mut subject : Observable<(Counter,Counter)> = default();
    assert_eq!(*subject.observer::<0>(), Counter::default());
    subject.notify(&Bump).unwrap();
    assert_eq!(subject.observer::<0>().count, 1);
    assert_eq!(subject.observer::<1>().count, 1);
}

#[test]
fn observables_copy_and_move_their_sequences() {
    let list  = (Counter::default(), Counter::default());
    let mut a = Observable::new(list);
    let mut b = Observable::from(list);
    a.notify(&Bump).unwrap();
    b.notify(&Bump).unwrap();
    b.notify(&Bump).unwrap();
    assert_eq!(a.observer::<0>().count, 1);
    assert_eq!(b.observer::<0>().count, 2);
    assert_eq!(b.0.count, 2);

    let c = b.clone();
    assert_eq!(c.observer::<1>().count, 2);
}
