/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// SUBMISSIONS
// =============================================================================

/// Largest accepted profile photo (5 MiB)
pub const MAX_PHOTO_SIZE: usize = 5 * 1024 * 1024;

/// Object key folder for profile photos, below the public prefix
pub const PHOTO_FOLDER: &str = "freelancer-photos";

/// Where the client should navigate once a registration is confirmed
pub const REGISTRATION_REDIRECT_TO: &str = "/";

/// How long the client keeps the confirmation on screen before redirecting
pub const REGISTRATION_REDIRECT_DELAY_MS: u64 = 2000;

pub const MIN_FREELANCER_AGE: i32 = 18;
pub const MAX_FREELANCER_AGE: i32 = 80;

// =============================================================================
// ADMIN
// =============================================================================

/// Login view that gate rejections point to
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
