mod collection_error;
mod invalid_argument_kind;

pub use collection_error::CollectionError;
pub use invalid_argument_kind::InvalidArgumentKind;
