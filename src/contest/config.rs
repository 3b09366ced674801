pub mod api {
    pub const SCHEME: &str = "https";
    pub const HOST: &str = "codeforces.com";
    pub const STANDINGS_FROM: usize = 1;
    pub const STANDINGS_COUNT: usize = 1;
    pub const USER_AGENT: &str = concat!("cf-contest/", env!("CARGO_PKG_VERSION"));
}
pub mod cache {
    pub const FILE_NAME: &str = ".contest_info.cf";
    pub const FORMAT_VERSION: u32 = 1;
    pub const INDENT: &[u8] = b"    ";
}
