pub mod constant;
pub mod error;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::{TEST_EMAIL, TEST_PASSWORD, TEST_STORAGE_KEY, TEST_UNKNOWN_EMAIL},
        TestError, TestSetup,
    };
}
