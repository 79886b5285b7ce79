//! Installs the global subscriber, so it lives in its own test binary

use imfridge::observability::init_observability;

#[test]
fn test_observability_init_twice() {
    let first = init_observability("test-service", "0.1.0", "warn");
    assert!(first.is_ok(), "first init should succeed: {:?}", first.err());

    // Global subscriber can only be installed once
    assert!(init_observability("test-service", "0.1.0", "warn").is_err());
}
