use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundedSetError {
    #[error("The set is full, no room for another value (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
}

impl From<BoundedSetError> for u32 {
    fn from(error: BoundedSetError) -> u32 {
        match error {
            BoundedSetError::CapacityExceeded { .. } => 900,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let code: u32 = BoundedSetError::CapacityExceeded { capacity: 4 }.into();
        assert_eq!(code, 900);
    }

    #[test]
    fn test_error_message_names_capacity() {
        let err = BoundedSetError::CapacityExceeded { capacity: 4 };
        assert_eq!(
            err.to_string(),
            "The set is full, no room for another value (capacity 4)"
        );
    }
}
