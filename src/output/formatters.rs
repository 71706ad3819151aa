//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Space out letters so a scramble is easier to read
///
/// Case is kept as-is since guesses are matched exactly.
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closing line for the final score summary
#[must_use]
pub const fn verdict(solved: usize, rounds: usize) -> &'static str {
    if rounds == 0 {
        "Game over!"
    } else if solved == rounds {
        "🏆 Perfect game!"
    } else if solved * 2 >= rounds {
        "⭐ Well played!"
    } else if solved > 0 {
        "👍 Keep practising!"
    } else {
        "Better luck next time!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn spaced_letters_keeps_case() {
        assert_eq!(spaced_letters("tlkoin"), "t l k o i n");
        assert_eq!(spaced_letters("niKotl"), "n i K o t l");
        assert_eq!(spaced_letters(""), "");
    }

    #[test]
    fn verdict_tiers() {
        assert_eq!(verdict(10, 10), "🏆 Perfect game!");
        assert_eq!(verdict(5, 10), "⭐ Well played!");
        assert_eq!(verdict(1, 10), "👍 Keep practising!");
        assert_eq!(verdict(0, 10), "Better luck next time!");
    }
}
