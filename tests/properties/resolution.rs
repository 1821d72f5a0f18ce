//! Property tests for theme and deploy path resolution.

use std::fs;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use tempfile::TempDir;

use themelift::config::Config;
use themelift::paths::{deploy_base, theme_name, ResolvedPaths};

fn theme_dir_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_-]{1,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Theme name resolution never panics on arbitrary roots.
    #[test]
    fn property_theme_name_never_panics(
        root in "(?s).{0,256}"
    ) {
        let config = Config::default();
        let _ = theme_name(&config, Path::new(&root));
    }

    /// PROPERTY: A configured non-empty theme name always wins over the
    /// project root.
    #[test]
    fn property_configured_theme_name_wins(
        name in theme_dir_name(),
        root in "[A-Za-z0-9/_-]{0,64}",
    ) {
        let mut config = Config::default();
        config.theme.name = Some(name.clone());

        let resolved = theme_name(&config, Path::new(&root)).unwrap();
        prop_assert_eq!(resolved, name);
    }

    /// PROPERTY: An explicit `deploy.dir` is returned verbatim, whether or
    /// not it exists.
    #[test]
    fn property_explicit_deploy_dir_is_verbatim(
        dir in "[A-Za-z0-9/._-]{1,64}"
    ) {
        let mut config = Config::default();
        config.deploy.dir = Some(PathBuf::from(&dir));

        let base = deploy_base(&config).unwrap();
        prop_assert_eq!(base, PathBuf::from(&dir));
    }
}

proptest! {
    // Each case touches the filesystem, so keep the count down.
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Failed resolution creates nothing - neither the deploy
    /// target nor the content tree.
    #[test]
    fn property_resolution_never_creates_directories(
        name in theme_dir_name()
    ) {
        let project = TempDir::new().unwrap();
        let root = project.path().join(&name);
        fs::create_dir(&root).unwrap();

        let base = TempDir::new().unwrap();
        let mut config = Config::default();
        config.deploy.server_root = Some(base.path().to_path_buf());

        let result = ResolvedPaths::resolve(&config, &root);

        prop_assert!(result.is_err());
        prop_assert_eq!(fs::read_dir(base.path()).unwrap().count(), 0);
        prop_assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
    }
}
