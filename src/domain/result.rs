//! Result type alias for Vigia

use super::errors::VigiaError;

/// Result type alias for Vigia operations
///
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use vigia::domain::result::Result;
/// use vigia::domain::errors::VigiaError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(VigiaError::Configuration("missing section".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, VigiaError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::VigiaError;

    #[test]
    fn test_result_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(VigiaError::Other("test error".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
