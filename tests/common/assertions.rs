//! Custom assertion macros and utilities
//!
//! Provides enhanced assertion macros for better test output and
//! more descriptive error messages.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a backend call was rejected with exactly this message
#[macro_export]
macro_rules! assert_rejected {
    ($result:expr, $message:expr) => {
        match $result {
            Err(oversync::shared::BackendError::Rejected { message }) => {
                assert_eq!(message, $message)
            }
            Ok(value) => panic!("Expected rejection, got Ok: {:?}", value),
            Err(e) => panic!("Expected rejection, got: {:?}", e),
        }
    };
}

/// Re-check a condition until it holds, yielding between rounds
///
/// Each round yields to the scheduler so spawned tasks can make progress.
/// Time is never advanced, so this works on a real or a paused clock alike;
/// it panics after a fixed number of rounds rather than after a duration.
#[macro_export]
macro_rules! eventually {
    ($cond:expr) => {{
        let mut rounds = 0;
        while !$cond {
            rounds += 1;
            assert!(rounds < 1_000, "condition never became true: {}", stringify!($cond));
            tokio::task::yield_now().await;
        }
    }};
}
