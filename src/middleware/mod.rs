pub mod response;

pub use response::{ApiResponse, ApiResult, DATA_RETRIEVED, SUCCESSFUL};
