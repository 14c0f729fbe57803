pub mod category;
pub mod error;
pub mod fields;
pub mod form;
pub mod profile;

pub use category::IssueCategory;
pub use error::{ParseFormIdError, ProfileError};
pub use fields::FieldMap;
pub use form::FormId;
pub use profile::{ProfileField, UserProfile};
