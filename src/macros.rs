//! Macros for ergonomic chained-test calls.

/// Builds the ordered argument sequence for a chained test call.
///
/// Accepts heterogeneous literals; each element goes through
/// `serde_json::json!`.
///
/// ```rust,ignore
/// let instance = create("fiddle")?.test("range", args![10, 20])?;
/// let instance = create("fiddle")?.test("disallow", args!["bar"])?;
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<::serde_json::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$(::serde_json::json!($arg)),+]
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    #[test]
    fn empty_args() {
        let args: Vec<Value> = args![];
        assert!(args.is_empty());
    }

    #[test]
    fn heterogeneous_args() {
        let args: Vec<Value> = args![10, "bar", true];
        assert_eq!(args, vec![json!(10), json!("bar"), json!(true)]);
    }

    #[test]
    fn trailing_comma() {
        let args: Vec<Value> = args![1, 2,];
        assert_eq!(args, vec![json!(1), json!(2)]);
    }
}
