use mongodb::error::{Error, ErrorKind, WriteFailure};

/// Server code for a unique index violation.
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// Whether `err` is a unique index violation, from a plain write or from a command
/// such as `findAndModify`.
pub fn is_duplicate_key(err: &Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mongodb::options::ClientOptions;

    #[tokio::test]
    async fn test_other_errors_are_not_duplicates() {
        let err = ClientOptions::parse("not-a-mongo-uri").await.unwrap_err();
        assert!(!is_duplicate_key(&err));
    }
}
