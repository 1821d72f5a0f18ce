//! Reusable theme content for integration tests.

#[cfg(unix)]
use std::path::{Path, PathBuf};

/// A stylesheet that is also valid SCSS.
pub const CUSTOM_SCSS: &str = "body {\n  margin: 0;\n  color: #642;\n}\n";

/// A second stylesheet entry point.
pub const AUI_SCSS: &str = ".aui {\n  display: none;\n}\n";

/// A static javascript asset.
pub const APP_JS: &str = "console.log('theme loaded');\n";

/// Install a fake sass compiler into `dir` and return its path.
///
/// The script answers `--version` and otherwise writes a marker file to its
/// last argument, which is where the real compiler writes its css output.
#[cfg(unix)]
pub fn install_fake_sass(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-sass");
    std::fs::write(
        &script,
        concat!(
            "#!/bin/sh\n",
            "if [ \"$1\" = \"--version\" ]; then\n",
            "  echo \"Fake Sass 3.7.4 (Pretend Edition)\"\n",
            "  exit 0\n",
            "fi\n",
            "for arg; do out=\"$arg\"; done\n",
            "mkdir -p \"$(dirname \"$out\")\"\n",
            "printf 'compiled by fake sass\\n' > \"$out\"\n",
        ),
    )
    .expect("Failed to write fake sass script");
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake sass executable");
    script
}

/// Install a fake sass compiler that fails on every compile (but probes
/// fine), exiting with the given status.
#[cfg(unix)]
pub fn install_failing_sass(dir: &Path, status: u8) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("failing-sass");
    std::fs::write(
        &script,
        format!(
            concat!(
                "#!/bin/sh\n",
                "if [ \"$1\" = \"--version\" ]; then\n",
                "  echo \"Fake Sass 3.7.4 (Broken Edition)\"\n",
                "  exit 0\n",
                "fi\n",
                "echo \"Syntax error on line 1\" >&2\n",
                "exit {status}\n",
            ),
            status = status
        ),
    )
    .expect("Failed to write failing sass script");
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to mark failing sass executable");
    script
}
