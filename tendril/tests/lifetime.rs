use std::rc::{Rc, Weak};

use tendril::{InvalidArgument, Lifetime, LifetimeObserver};

#[test]
fn drop_expires() {
	let life = Lifetime::new();
	let observer = life.track();
	assert!(!observer.is_expired());
	assert_ne!(observer.id(), 0);

	drop(life);
	assert!(observer.is_expired());
	assert_eq!(observer.id(), 0);
}

#[test]
fn stable_id() {
	let life = Lifetime::new();
	let a = life.track();
	let b = LifetimeObserver::from(&life);
	let c = a.clone();
	assert_eq!(a.id(), b.id());
	assert_eq!(a.id(), c.id());
	assert_ne!(a.id(), Lifetime::new().track().id());
}

#[test]
fn clone_is_independent() {
	let original = Lifetime::new();
	let observer = original.track();

	let copy = original.clone();
	assert_ne!(copy.track().id(), observer.id());

	drop(original);
	assert!(observer.is_expired());
	assert!(!copy.track().is_expired());

	let copy_observer = copy.track();
	let _copy_of_copy = copy.clone();
	drop(copy);
	assert!(copy_observer.is_expired());
}

#[test]
fn clone_from_expires() {
	let mut target = Lifetime::new();
	let source = Lifetime::new();
	let target_observer = target.track();
	let source_observer = source.track();

	target.clone_from(&source);
	assert!(target_observer.is_expired());
	assert!(!source_observer.is_expired());
	assert_ne!(target.track().id(), source_observer.id());
}

#[test]
fn renew_expires() {
	let mut life = Lifetime::new();
	let old = life.track();
	life.renew();
	let new = life.track();

	assert!(old.is_expired());
	assert!(!new.is_expired());
	drop(life);
	assert!(new.is_expired());
}

#[test]
fn move_keeps_observers() {
	let life = Lifetime::new();
	let observer = life.track();
	let id = observer.id();

	let moved = [life];
	assert!(!observer.is_expired());
	assert_eq!(observer.id(), id);
	assert_eq!(moved[0].track().id(), id);

	drop(moved);
	assert!(observer.is_expired());
}

#[test]
fn expired_ids_collide() {
	let a = Lifetime::new().track();
	let b = Lifetime::new().track();
	assert!(a.is_expired() && b.is_expired());
	assert_eq!(a.id(), b.id());
}

#[test]
fn observe_rc() {
	let target = Rc::new(5);
	let observer = LifetimeObserver::new(&target);
	assert_eq!(observer.id(), Rc::as_ptr(&target) as usize);
	drop(target);
	assert!(observer.is_expired());
}

#[test]
fn observe_weak() {
	let target = Rc::new("target");
	let observer = LifetimeObserver::try_from(Rc::downgrade(&target)).unwrap();
	assert!(!observer.is_expired());
	drop(target);
	assert!(observer.is_expired());
}

#[test]
fn empty_handle() {
	assert_eq!(
		LifetimeObserver::try_from(Weak::<()>::new()).unwrap_err(),
		InvalidArgument::EmptyHandle
	);

	let target = Rc::new(());
	let weak = Rc::downgrade(&target);
	drop(target);
	assert_eq!(
		LifetimeObserver::try_from(weak).unwrap_err(),
		InvalidArgument::EmptyHandle
	);
}

#[test]
fn debug() {
	let life = Lifetime::new();
	let observer = life.track();
	assert!(format!("{life:?}").starts_with("Lifetime"));
	drop(life);
	assert_eq!(
		format!("{observer:?}"),
		"LifetimeObserver { id: 0, expired: true }"
	);
}
