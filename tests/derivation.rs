use hashpass::generators::password::raw_digest;
use hashpass::{DeriveError, PasswordGenerator, RequirementPolicy, TargetProfile};

fn target(name: &str, uppers: usize, lowers: usize, digits: usize, length: usize) -> TargetProfile {
    let mut profile = TargetProfile::new(name);
    profile.min_uppers = uppers;
    profile.min_lowers = lowers;
    profile.min_digits = digits;
    profile.length = length;
    profile
}

#[test]
fn end_to_end_example_com() {
    let digest = raw_digest("example.com", "secret");
    assert_eq!(&digest[..8], "4302e74f");

    let generator = PasswordGenerator::default();
    let derivation = generator.derive(&target("example.com", 1, 1, 1, 8), "secret").unwrap();
    assert_eq!(derivation.password, "4Da2e74f");
}

#[test]
fn another_target_golden() {
    let generator = PasswordGenerator::default();
    let derivation = generator.derive(&target("notes.txt", 2, 2, 2, 10), "hunter2").unwrap();
    assert_eq!(derivation.password, "87BBfg7ea5");
}

#[test]
fn single_key_character_changes_everything() {
    let a = raw_digest("example.com", "secret");
    let b = raw_digest("example.com", "secreu");
    assert_ne!(a, b);
    let matching = a.chars().zip(b.chars()).filter(|(x, y)| x == y).count();
    // Random hex strings agree on about 1 in 16 positions
    assert!(matching < 32, "{} positions matched", matching);

    let generator = PasswordGenerator::default();
    let other = generator.derive(&target("example.com", 1, 1, 1, 8), "secreu").unwrap();
    assert_eq!(other.password, "8Fcf86b4");
}

#[test]
fn output_length_matches_request() {
    let generator = PasswordGenerator::default();
    for length in [0, 1, 8, 29, 64, 128] {
        let derivation = generator.derive(&target("example.com", 1, 1, 1, length), "secret").unwrap();
        assert_eq!(derivation.password.len(), length);
    }
}

#[test]
fn same_inputs_same_password() {
    let generator = PasswordGenerator::default();
    let profile = target("example.com", 4, 2, 2, 20);
    let first = generator.derive(&profile.clone(), "secret").unwrap();
    let second = generator.derive(&profile, "secret").unwrap();
    assert_eq!(first.password, "43ACeHEff020d0e7148c");
    assert_eq!(first, second);
}

#[test]
fn under_specified_profiles_follow_policy() {
    let profile = target("example.com", 5, 0, 0, 3);

    let lenient = PasswordGenerator::new(RequirementPolicy::Lenient);
    let derivation = lenient.derive(&profile, "secret").unwrap();
    assert_eq!(derivation.password.len(), 3);
    assert!(derivation.password.chars().all(|c| c.is_ascii_uppercase()));
    assert_eq!(derivation.unmet.uppers, 2);

    let strict = PasswordGenerator::new(RequirementPolicy::Strict);
    assert_eq!(
        strict.derive(&profile, "secret").unwrap_err(),
        DeriveError::UnderSpecified { requested: 5, length: 3 }
    );
}

#[test]
fn too_long_is_an_error() {
    let generator = PasswordGenerator::default();
    let err = generator.derive(&target("example.com", 0, 0, 0, 200), "secret").unwrap_err();
    assert_eq!(err, DeriveError::LengthExceedsDigest { requested: 200, available: 128 });
}
