pub const BUILD_INFO_CARGO_PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const BUILD_INFO_CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn build_info() -> String {
    format!("{BUILD_INFO_CARGO_PKG_NAME} {BUILD_INFO_CARGO_PKG_VERSION}")
}
