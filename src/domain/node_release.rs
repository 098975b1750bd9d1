/// Major version of a Node.js version string such as `v22.11.0`.
pub fn major_version(version: &str) -> Option<u64> {
    version.trim().trim_start_matches('v').split('.').next()?.parse().ok()
}
