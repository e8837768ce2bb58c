#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<ReadError> for UpdateError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => UpdateError::Storage(storage),
            ReadError::Other(other) => UpdateError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum DeleteError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl From<ReadError> for DeleteError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Storage(storage) => DeleteError::Storage(storage),
            ReadError::Other(other) => DeleteError::Other(other),
        }
    }
}

impl From<UpdateError> for DeleteError {
    fn from(value: UpdateError) -> Self {
        match value {
            UpdateError::Storage(storage) => DeleteError::Storage(storage),
            UpdateError::Other(other) => DeleteError::Other(other),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage quota exceeded, delete some saved plans")]
    QuotaExceeded,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_error_from_read_error() {
        assert!(matches!(
            UpdateError::from(ReadError::Storage(StorageError::QuotaExceeded)),
            UpdateError::Storage(StorageError::QuotaExceeded)
        ));
        assert!(matches!(
            UpdateError::from(ReadError::Other("foo".into())),
            UpdateError::Other(error) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_delete_error_from_read_error() {
        assert!(matches!(
            DeleteError::from(ReadError::Storage(StorageError::QuotaExceeded)),
            DeleteError::Storage(StorageError::QuotaExceeded)
        ));
        assert!(matches!(
            DeleteError::from(ReadError::Other("foo".into())),
            DeleteError::Other(error) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_delete_error_from_update_error() {
        assert!(matches!(
            DeleteError::from(UpdateError::Storage(StorageError::QuotaExceeded)),
            DeleteError::Storage(StorageError::QuotaExceeded)
        ));
        assert!(matches!(
            DeleteError::from(UpdateError::Other("bar".into())),
            DeleteError::Other(error) if error.to_string() == "bar"
        ));
    }
}
