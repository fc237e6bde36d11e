use thiserror::Error;

/// Convenience alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalogue request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalogue service returned HTTP {0}")]
    Status(u16),

    #[error("malformed catalogue response: {0}")]
    Response(String),

    #[error("target list line {line}: {message}")]
    TargetList { line: usize, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_list_errors_carry_the_line_number() {
        let err = CatalogError::TargetList {
            line: 3,
            message: "bad theta value 'x'".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("line 3"));
        assert!(rendered.contains("bad theta"));
    }
}
