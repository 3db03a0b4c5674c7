use thiserror::Error;

pub type Result<T> = std::result::Result<T, FixtureError>;

/// Errors raised while building fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The certificate issuer failed; the rcgen error is passed through untouched.
    #[error("certificate issuance failed: {0}")]
    Certificate(#[from] rcgen::RcgenError),

    #[error("certificate issuance failed: {0}")]
    Issuer(String),

    /// A placeholder certificate has no PEM material to write.
    #[error("node has a placeholder certificate, nothing to write")]
    PlaceholderCertificate,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// First column of a row that disagrees with the record it was checked against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{description} (column {column} `{field}`): expected {expected:?}, row has {actual:?}")]
pub struct RowMismatch {
    pub column: usize,
    pub field: &'static str,
    /// What the check asserts, e.g. "rest url matches".
    pub description: &'static str,
    pub expected: String,
    pub actual: String,
}

/// Compare one column, producing a mismatch that names it.
pub(crate) fn check_column(
    column: usize,
    field: &'static str,
    description: &'static str,
    expected: &str,
    actual: &str,
) -> std::result::Result<(), RowMismatch> {
    if expected == actual {
        return Ok(());
    }
    Err(RowMismatch {
        column,
        field,
        description,
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_columns_pass() {
        assert!(check_column(0, "nickname", "nickname matches", "a", "a").is_ok());
    }

    #[test]
    fn mismatch_names_the_column() {
        let err = check_column(2, "nickname", "nickname matches", "a", "b").unwrap_err();
        assert_eq!(err.column, 2);
        assert_eq!(err.field, "nickname");
        assert_eq!(
            err.to_string(),
            "nickname matches (column 2 `nickname`): expected \"a\", row has \"b\""
        );
    }

    #[test]
    fn mismatch_boxes_as_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(check_column(4, "updated", "updated timestamp matches", "x", "y").unwrap_err());
        assert!(err.to_string().starts_with("updated timestamp matches (column 4 `updated`)"));
    }
}
