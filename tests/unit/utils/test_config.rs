use bsky_harvester::utils::config::get_env_or_default;
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("BSKY_TEST_VAR_STRING", "bsky.example.org");
        let result: String = get_env_or_default("BSKY_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "bsky.example.org");
        env::remove_var("BSKY_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("BSKY_TEST_MISSING_VAR");
        let result: u64 = get_env_or_default("BSKY_TEST_MISSING_VAR", 200);
        assert_eq!(result, 200);
    }
}

#[test]
fn test_get_env_or_default_with_integer() {
    unsafe {
        env::set_var("BSKY_TEST_VAR_INT", "25");
        let result: u32 = get_env_or_default("BSKY_TEST_VAR_INT", 10);
        assert_eq!(result, 25);
        env::remove_var("BSKY_TEST_VAR_INT");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("BSKY_TEST_VAR_INVALID", "not_a_number");
        let result: u32 = get_env_or_default("BSKY_TEST_VAR_INVALID", 100);
        assert_eq!(result, 100);
        env::remove_var("BSKY_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_default_rejects_negative_for_unsigned() {
    unsafe {
        env::set_var("BSKY_TEST_VAR_NEGATIVE", "-5");
        let result: u32 = get_env_or_default("BSKY_TEST_VAR_NEGATIVE", 10);
        assert_eq!(result, 10);
        env::remove_var("BSKY_TEST_VAR_NEGATIVE");
    }
}
