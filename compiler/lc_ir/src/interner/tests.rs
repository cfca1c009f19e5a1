use super::*;

#[test]
fn test_intern_and_lookup() {
    let mut interner = StringInterner::new();

    let hello = interner.intern("hello");
    let world = interner.intern("world");
    let hello2 = interner.intern("hello");

    assert_eq!(hello, hello2);
    assert_ne!(hello, world);

    assert_eq!(interner.lookup(hello), "hello");
    assert_eq!(interner.lookup(world), "world");
    assert_eq!(interner.len(), 2);
}

#[test]
fn test_get_does_not_insert() {
    let mut interner = StringInterner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.get("A"), None);
    assert!(interner.is_empty());

    let a = interner.intern("A");
    assert_eq!(interner.get("A"), Some(a));
}

#[test]
fn test_names_are_case_sensitive() {
    let mut interner = StringInterner::new();
    assert_ne!(interner.intern("reg"), interner.intern("REG"));
}

#[test]
fn test_lookup_foreign_name() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(42)), "<unknown>");
}
