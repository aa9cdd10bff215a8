/// Default XRPC endpoint of the Bluesky entryway
pub const DEFAULT_SERVICE_URL: &str = "https://bsky.social/xrpc";
/// Domain appended to a screen name to build its handle
pub const DEFAULT_HANDLE_SUFFIX: &str = "bsky.social";
/// Remaining-quota threshold at or below which the fetcher waits for the rate limit reset
pub const DEFAULT_RATE_LIMIT_TOLERANCE: u32 = 10;
/// Pause in milliseconds between two consecutive page requests
pub const DEFAULT_POLITENESS_MS: u64 = 200;
/// Default page size for paginated API requests (the API maximum)
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Number of calls between two progress log lines in a long fetch
pub const PROGRESS_LOG_EVERY: u64 = 100;
/// Default cap on the number of posts retrieved for a single author
pub const MAX_USER_POSTS: usize = 1_000_000;
/// Default cap on the number of followers or follows retrieved for a single actor
pub const MAX_USER_GRAPH: usize = 100_000_000;
/// Default cap on the number of posts retrieved for a single search query
pub const MAX_QUERY_POSTS: usize = 100_000_000;
/// User agent string used in HTTP requests to identify this client to the Bluesky API
pub const USER_AGENT: &str = "bsky-harvester/0.1.0";
