//! Integration tests for the version tag validators.

use pretty_assertions::assert_eq;
use tag_validator::core::Validator;
use tag_validator::validators::version::{
    TAG_TOKEN_MAX_LENGTH, check_version_tag, semver, version_tag,
};

#[test]
fn tag_accepts_semver_and_tokens() {
    let validator = version_tag();

    for tag in [
        "1.0.0",
        "0.1.0",
        "10.20.30",
        "1.2.3-alpha.1+build.5",
        "2.0.0-rc.1",
        "my_version-1",
        "nightly-2024-01-15",
        "v1.0.0", // 'v' prefix is not semver, but is a fine token
        "1.2.3.4", // four components: token, not semver
        "a",
    ] {
        assert!(validator.validate(tag).is_ok(), "expected pass: {tag}");
    }
}

#[test]
fn tag_rejects_malformed_versions() {
    let validator = version_tag();

    for tag in ["", "has space", "plus+sign", "col:on", "caf\u{00e9}"] {
        assert!(validator.validate(tag).is_err(), "expected fail: {tag}");
    }
}

#[test]
fn semver_shaped_tags_must_be_strict_semver() {
    let validator = version_tag();

    // All of these have a three-component all-digit core, so the token
    // fallback does not apply and the semver rules decide.
    let err = validator.validate("01.0.0").unwrap_err();
    assert_eq!(err.code, "invalid_version_tag");
    assert_eq!(err.nested[0].code, "semver_leading_zero");

    assert!(validator.validate("1.0.0-01").is_err());
    assert!(validator.validate("1.0.0+build..1").is_err());
}

#[test]
fn token_length_cap_is_128() {
    let validator = version_tag();

    assert!(validator.validate(&"t".repeat(TAG_TOKEN_MAX_LENGTH)).is_ok());

    let err = validator
        .validate(&"t".repeat(TAG_TOKEN_MAX_LENGTH + 1))
        .unwrap_err();
    assert_eq!(err.code, "invalid_version_tag");
}

#[test]
fn semver_longer_than_128_chars_still_passes() {
    // The token cap applies to tokens only; a long but valid semver string
    // takes the semver branch.
    let validator = version_tag();
    let long_prerelease = format!("1.0.0-{}", "a.".repeat(70) + "a"); // > 128 chars
    assert!(validator.validate(&long_prerelease).is_ok());
}

#[test]
fn format_error_describes_both_rules() {
    let err = version_tag().validate("bad tag!").unwrap_err();
    assert!(err.message.contains("\"bad tag!\""));
    assert!(err.message.contains("128"));
    assert!(err.message.contains("semantic version"));
}

#[test]
fn reserved_latest_is_rejected_in_any_case() {
    let validator = version_tag();

    for tag in ["latest", "LATEST", "Latest"] {
        let err = validator.validate(tag).unwrap_err();
        assert_eq!(err.code, "reserved_version_tag", "tag: {tag}");
        assert!(err.message.contains(tag));
    }

    // Not reserved: merely contains the word.
    assert!(validator.validate("latest-1").is_ok());
    assert!(validator.validate("not-latest").is_ok());
}

#[test]
fn plain_semver_validator_is_exposed() {
    let validator = semver();
    assert!(validator.validate("1.0.0").is_ok());
    assert!(validator.validate("1.0").is_err());
    // No reserved-word rule on the plain semver validator.
    assert!(validator.validate("latest").is_err()); // but only because it is not semver
}

#[test]
fn tag_validation_is_idempotent() {
    let validator = version_tag();

    let first = validator.validate("1.0.0").is_ok();
    let second = validator.validate("1.0.0").is_ok();
    assert_eq!(first, second);

    let first_err = validator.validate("latest").unwrap_err();
    let second_err = validator.validate("latest").unwrap_err();
    assert_eq!(first_err.code, second_err.code);
}

#[test]
fn one_shot_helper_matches_validator() {
    assert!(check_version_tag("my_version-1").is_ok());
    assert_eq!(
        check_version_tag("latest").unwrap_err().code,
        "reserved_version_tag"
    );
}
