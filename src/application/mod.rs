pub mod access;
pub mod identity;
pub mod paging;

// Re-export key types for convenience
pub use access::{Navigation, RouteGuard, RouteNavigator, RouteTable};
pub use identity::{IdentityService, LoginResult};
pub use paging::{Page, PageRequest, PageService, Pager};
