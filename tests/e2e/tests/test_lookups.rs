use correlation_e2e::{AnnotatedClass, AnnotatedClassRepository, Planet, PlanetRepository};

#[test]
fn test_find_by_numeric_getter() {
    let first = AnnotatedClassRepository::find_by_f(1).expect("1 should map to First");
    assert_eq!(*first, AnnotatedClass::First);
    assert_eq!(first.get_s(), "10");

    assert!(AnnotatedClassRepository::find_by_f(10).is_none());
}

#[test]
fn test_find_by_string_getter() {
    let second = AnnotatedClassRepository::find_by_s("20").expect("\"20\" should map to Second");
    assert_eq!(*second, AnnotatedClass::Second);
    assert_eq!(second.get_f(), 2);

    assert!(AnnotatedClassRepository::find_by_s("300").is_none());
}

#[test]
fn test_find_by_string_getter_with_runtime_input() {
    let input = String::from("20");
    let second = AnnotatedClassRepository::find_by_s(input.as_str())
        .expect("runtime \"20\" should map to Second");
    assert_eq!(*second, AnnotatedClass::Second);

    let parsed: String = "1 0".split_whitespace().collect();
    assert_eq!(AnnotatedClassRepository::find_by_s(&parsed), Some(&AnnotatedClass::First));
}

#[test]
fn test_every_constant_round_trips() {
    for constant in [AnnotatedClass::First, AnnotatedClass::Second] {
        assert_eq!(AnnotatedClassRepository::find_by_f(constant.get_f()), Some(&constant));
        assert_eq!(AnnotatedClassRepository::find_by_s(constant.get_s()), Some(&constant));
    }
}

#[test]
fn test_lookups_return_static_constants() {
    let a = AnnotatedClassRepository::find_by_f(2).expect("2 should map to Second");
    let b = AnnotatedClassRepository::find_by_s("20").expect("\"20\" should map to Second");
    assert!(std::ptr::eq(a, b));
}

#[test]
fn test_nested_module_repository() {
    assert_eq!(PlanetRepository::find_by_name("Mars"), Some(&Planet::Mars));
    assert_eq!(PlanetRepository::find_by_self(Planet::Earth), Some(&Planet::Earth));
    assert!(PlanetRepository::find_by_name("Pluto").is_none());
}

#[test]
fn test_owned_string_getter_takes_borrowed_input() {
    let name = format!("{}{}", "Ven", "us");
    assert_eq!(PlanetRepository::find_by_name(&name), Some(&Planet::Venus));
    assert_eq!(PlanetRepository::find_by_name(name.as_str()), Some(&Planet::Venus));
}

#[test]
fn test_duplicate_values_last_declared_wins() {
    // Mercury and Venus share 0 moons; Mercury and Mars share 'M'
    assert_eq!(PlanetRepository::find_by_moons(0), Some(&Planet::Venus));
    assert_eq!(PlanetRepository::find_by_initial('M'), Some(&Planet::Mars));
    assert_eq!(PlanetRepository::find_by_initial('E'), Some(&Planet::Earth));
}
