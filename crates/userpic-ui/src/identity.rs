//! Deriving what to show from who the user is: initials and a stable color.

use md5::{Digest, Md5};
use userpic_engine::paint::Color;

pub use userpic_engine::scene::ImageSource;

/// Saturation and lightness of generated name colors.
const NAME_SATURATION: f32 = 0.75;
const NAME_LIGHTNESS: f32 = 0.5;

/// Up to two uppercase initials: the first character of the first word and,
/// when there is more than one word, of the last word.
///
/// Characters are Unicode scalar values, so an emoji name stays intact.
/// Blank names give an empty string.
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };

    let mut out: String = first.chars().take(1).collect();
    if let Some(last) = words.last() {
        out.extend(last.chars().take(1));
    }
    out.to_uppercase()
}

/// 32-bit rolling hash over UTF-16 code units (`h = unit + 31 × h`, wrapping).
fn name_hash(name: &str) -> i32 {
    name.encode_utf16()
        .fold(0i32, |hash, unit| (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash)))
}

/// Stable, saturated background color for `name`.
///
/// The same name always maps to the same hue, so a user keeps their color
/// across sessions and devices.
pub fn name_color(name: &str) -> Color {
    let hue = name_hash(name).rem_euclid(360);
    Color::from_hsl(hue as f32, NAME_SATURATION, NAME_LIGHTNESS)
}

/// Gravatar key for an email address: hex MD5 of the trimmed, lowercased
/// address.
pub fn gravatar_hash(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    format!("{:x}", Md5::digest(normalized.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── initials ──────────────────────────────────────────────────────────

    #[test]
    fn initials_first_and_last_word() {
        assert_eq!(initials("User Name"), "UN");
        assert_eq!(initials("jason middle smith"), "JS");
        assert_eq!(initials("  Nick  "), "N");
    }

    #[test]
    fn initials_keep_emoji_whole() {
        assert_eq!(initials("👩"), "👩");
        assert_eq!(initials("Émile 🐵"), "É🐵");
    }

    #[test]
    fn initials_of_blank_name_are_empty() {
        assert_eq!(initials(""), "");
        assert_eq!(initials(" \t "), "");
    }

    // ── name_color ────────────────────────────────────────────────────────

    #[test]
    fn hash_matches_reference_values() {
        assert_eq!(name_hash(""), 0);
        assert_eq!(name_hash("a"), 97);
        // 97 * 31 + 98
        assert_eq!(name_hash("ab"), 3105);
    }

    #[test]
    fn hash_wraps_on_long_names() {
        let long = "Wolfeschlegelsteinhausenbergerdorff".repeat(4);
        let h = name_hash(&long);
        assert!((0..360).contains(&h.rem_euclid(360)));
    }

    #[test]
    fn name_color_is_stable_and_opaque() {
        let a = name_color("Emma Miller");
        assert_eq!(a, name_color("Emma Miller"));
        assert_eq!(a.a, 1.0);
        // hue 97 for "a": different from hue 98 for "b".
        assert_ne!(name_color("a"), name_color("b"));
    }

    // ── gravatar_hash ─────────────────────────────────────────────────────

    #[test]
    fn gravatar_hash_of_known_address() {
        assert_eq!(gravatar_hash("jasonsmith@mailto.plus"), "3d63606da8e8ebd04fb6331c035223bb");
    }

    #[test]
    fn gravatar_hash_normalizes_case_and_whitespace() {
        assert_eq!(gravatar_hash("  JasonSmith@Mailto.PLUS \n"), gravatar_hash("jasonsmith@mailto.plus"));
        assert_eq!(gravatar_hash(""), "d41d8cd98f00b204e9800998ecf8427e");
    }
}
