// src/cli/output.rs
use crate::cli::handlers::GeneratedPassword;
use crate::models::TargetProfile;

pub fn print_generated(generated: &GeneratedPassword) {
    println!("🔑 Password for {}: {}", generated.target, generated.password);
    let unmet = &generated.unmet;
    if !unmet.is_satisfied() {
        println!(
            "⚠️ Length too short for the requirements: {} upper, {} lower, {} digit left unplaced",
            unmet.uppers, unmet.lowers, unmet.digits
        );
    }
}

pub fn print_profile(profile: &TargetProfile) {
    println!("\n🎯 {}", profile.name);
    println!("Minimum upper-case letters: {}", profile.min_uppers);
    println!("Minimum lower-case letters: {}", profile.min_lowers);
    println!("Minimum digits: {}", profile.min_digits);
    println!("Length: {}", profile.length);
}

pub fn print_targets(targets: &[TargetProfile]) {
    if targets.is_empty() {
        println!("❗ No targets stored yet.");
        return;
    }

    println!("{:<32} {:>6} {:>6} {:>6} {:>6}", "TARGET", "UPPER", "LOWER", "DIGIT", "LENGTH");
    for t in targets {
        println!(
            "{:<32} {:>6} {:>6} {:>6} {:>6}",
            truncate_string(&t.name, 32), t.min_uppers, t.min_lowers, t.min_digits, t.length
        );
    }
}

// Truncate a string if it's too long
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
