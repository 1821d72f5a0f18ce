//! Property tests for sass cache eviction.

use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;

use themelift::evict::evict_entry;

const MARKER: &str = "/* themelift sass cache evict ";

fn entry_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_-]{1,12}\\.css").unwrap()
}

fn stylesheet_bytes() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..=512)
}

fn deploy_with_css() -> TempDir {
    let deploy = TempDir::new().unwrap();
    fs::create_dir(deploy.path().join("css")).unwrap();
    deploy
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Eviction appends - the original bytes survive unmodified
    /// and the file ends with a closed block comment.
    #[test]
    fn property_eviction_preserves_arbitrary_content(
        entry in entry_name(),
        bytes in stylesheet_bytes(),
    ) {
        let deploy = deploy_with_css();
        let file = deploy.path().join("css").join(&entry);
        fs::write(&file, &bytes).unwrap();

        evict_entry(deploy.path(), &entry).unwrap();

        let after = fs::read(&file).unwrap();
        prop_assert!(after.starts_with(&bytes));
        prop_assert!(after.len() > bytes.len());
        prop_assert!(after.ends_with(b" */"));
    }

    /// PROPERTY: The appended suffix always carries a parseable millisecond
    /// timestamp.
    #[test]
    fn property_evict_comment_carries_a_timestamp(
        entry in entry_name(),
        bytes in stylesheet_bytes(),
    ) {
        let deploy = deploy_with_css();
        let file = deploy.path().join("css").join(&entry);
        fs::write(&file, &bytes).unwrap();

        evict_entry(deploy.path(), &entry).unwrap();

        let after = fs::read(&file).unwrap();
        let suffix = String::from_utf8(after[bytes.len()..].to_vec()).unwrap();
        let digits = suffix
            .strip_prefix(&format!("\n{MARKER}"))
            .and_then(|rest| rest.strip_suffix(" */"))
            .expect("suffix has the evict comment shape");
        let millis: i64 = digits.parse().unwrap();
        prop_assert!(millis > 0);
    }

    /// PROPERTY: N evictions append exactly N comments.
    #[test]
    fn property_evictions_accumulate(
        entry in entry_name(),
        bytes in stylesheet_bytes(),
        rounds in 1usize..=4,
    ) {
        let deploy = deploy_with_css();
        let file = deploy.path().join("css").join(&entry);
        fs::write(&file, &bytes).unwrap();

        for _ in 0..rounds {
            evict_entry(deploy.path(), &entry).unwrap();
        }

        let after = fs::read(&file).unwrap();
        // Count markers in the appended region only; the generated prefix
        // is arbitrary bytes.
        let appended = String::from_utf8_lossy(&after[bytes.len()..]).into_owned();
        prop_assert_eq!(appended.matches(MARKER).count(), rounds);
    }

    /// PROPERTY: Evicting an entry that was never copied creates it.
    #[test]
    fn property_eviction_creates_missing_entries(
        entry in entry_name(),
    ) {
        let deploy = deploy_with_css();
        let file = deploy.path().join("css").join(&entry);
        prop_assert!(!file.exists());

        evict_entry(deploy.path(), &entry).unwrap();

        let content = fs::read_to_string(&file).unwrap();
        let expected_prefix = format!("\n{}", MARKER);
        prop_assert!(content.starts_with(&expected_prefix));
    }
}
