//! Assertion helpers shared across the Lattice test suites.

/// Asserts that an expression evaluates to `Err` whose `Display` rendering
/// equals the expected message.
///
/// Fails the test if the expression is `Ok`, or if the error renders to a
/// different message.
#[macro_export]
macro_rules! assert_err_message {
    ($expr:expr, $message:expr $(,)?) => {
        match $expr {
            Ok(_) => panic!("expected an error, got Ok"),
            Err(e) => assert_eq!(e.to_string(), $message),
        }
    };
}
