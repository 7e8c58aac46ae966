//! Fixed-width progress bars for chat messages.
//!
//! A bar is ten slots with a single marker showing the position, e.g.
//! `▬▬▬🔘▬▬▬▬▬▬` at 35%.

/// Number of slots in a rendered bar.
pub const BAR_SLOTS: usize = 10;

/// Characters used to draw a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub filled: &'static str,
    pub empty: &'static str,
}

impl BarStyle {
    pub const EMOJI: BarStyle = BarStyle {
        filled: "🔘",
        empty: "▬",
    };

    pub const ASCII: BarStyle = BarStyle {
        filled: "o",
        empty: "-",
    };
}

impl Default for BarStyle {
    fn default() -> Self {
        Self::EMOJI
    }
}

/// Slot index for a percentage: `floor(progress / 10)` clamped to `0..=9`.
///
/// NaN maps to slot 0.
pub fn bar_slot(progress: f64) -> usize {
    if progress.is_nan() || progress < 10.0 {
        return 0;
    }
    // `as` saturates for +inf
    ((progress / 10.0).floor() as usize).min(BAR_SLOTS - 1)
}

/// Renders the bar for `progress` (a percentage) in the given style.
pub fn render_bar(progress: f64, style: &BarStyle) -> String {
    let slot = bar_slot(progress);
    (0..BAR_SLOTS)
        .map(|i| if i == slot { style.filled } else { style.empty })
        .collect()
}

/// Renders the emoji bar for `progress`.
///
/// # Examples
///
/// ```
/// use botkit_utils::utils::progress::get_bar;
///
/// assert_eq!(get_bar(0.0), "🔘▬▬▬▬▬▬▬▬▬");
/// assert_eq!(get_bar(55.0), "▬▬▬▬▬🔘▬▬▬▬");
/// assert_eq!(get_bar(100.0), get_bar(99.0));
/// ```
pub fn get_bar(progress: f64) -> String {
    render_bar(progress, &BarStyle::EMOJI)
}
