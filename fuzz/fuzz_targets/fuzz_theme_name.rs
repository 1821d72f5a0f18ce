#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

use themelift::config::Config;
use themelift::paths::theme_name;

fuzz_target!(|data: &[u8]| {
    if let Ok(root) = std::str::from_utf8(data) {
        // Theme name resolution works on arbitrary project roots without
        // touching the filesystem; it should never panic
        let _ = theme_name(&Config::default(), Path::new(root));
    }
});
