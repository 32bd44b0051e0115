//! Game configuration options.

use core::time::Duration;

/// Configuration options for a Twenty-One game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twenty_one::GameOptions;
///
/// let options = GameOptions::default()
///     .with_dealer_stands_at(17)
///     .with_display_width(100)
///     .without_delays();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Dealer keeps hitting while below this value.
    pub dealer_stands_at: u8,
    /// Column width used for the border, centered and right-aligned text.
    pub display_width: usize,
    /// Pause after an ordinary status message.
    pub message_delay: Duration,
    /// Pause while the dealer "decides".
    pub dealer_think_delay: Duration,
    /// Pause after the dealer announces a hit.
    pub dealer_hit_delay: Duration,
    /// Whether the welcome screen with the rules is shown before each match.
    pub show_rules: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_at: 17,
            display_width: 80,
            message_delay: Duration::from_millis(750),
            dealer_think_delay: Duration::from_millis(1500),
            dealer_hit_delay: Duration::from_millis(1000),
            show_rules: true,
        }
    }
}

impl GameOptions {
    /// Sets the value at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use twenty_one::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_at(16);
    /// assert_eq!(options.dealer_stands_at, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, value: u8) -> Self {
        self.dealer_stands_at = value;
        self
    }

    /// Sets the display width.
    ///
    /// # Example
    ///
    /// ```
    /// use twenty_one::GameOptions;
    ///
    /// let options = GameOptions::default().with_display_width(60);
    /// assert_eq!(options.display_width, 60);
    /// ```
    #[must_use]
    pub const fn with_display_width(mut self, width: usize) -> Self {
        self.display_width = width;
        self
    }

    /// Sets the pause after ordinary status messages.
    #[must_use]
    pub const fn with_message_delay(mut self, delay: Duration) -> Self {
        self.message_delay = delay;
        self
    }

    /// Sets the dealer pacing: the "deciding" pause and the pause after a hit.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use twenty_one::GameOptions;
    ///
    /// let options = GameOptions::default()
    ///     .with_dealer_delays(Duration::from_millis(200), Duration::from_millis(100));
    /// assert_eq!(options.dealer_think_delay, Duration::from_millis(200));
    /// assert_eq!(options.dealer_hit_delay, Duration::from_millis(100));
    /// ```
    #[must_use]
    pub const fn with_dealer_delays(mut self, think: Duration, hit: Duration) -> Self {
        self.dealer_think_delay = think;
        self.dealer_hit_delay = hit;
        self
    }

    /// Disables every pacing pause.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use twenty_one::GameOptions;
    ///
    /// let options = GameOptions::default().without_delays();
    /// assert_eq!(options.message_delay, Duration::ZERO);
    /// assert_eq!(options.dealer_think_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn without_delays(mut self) -> Self {
        self.message_delay = Duration::ZERO;
        self.dealer_think_delay = Duration::ZERO;
        self.dealer_hit_delay = Duration::ZERO;
        self
    }

    /// Sets whether the rules screen is shown.
    ///
    /// # Example
    ///
    /// ```
    /// use twenty_one::GameOptions;
    ///
    /// let options = GameOptions::default().with_show_rules(false);
    /// assert!(!options.show_rules);
    /// ```
    #[must_use]
    pub const fn with_show_rules(mut self, show: bool) -> Self {
        self.show_rules = show;
        self
    }
}
