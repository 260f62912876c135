//! Game configuration options.

/// Configuration options for a blackjack session.
///
/// The table rules themselves are fixed: one fresh 52-card deck per round,
/// dealer draws to 17, a win pays double the bet. Options only cover who is
/// playing and with how much.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_balance(250)
///     .with_player_name("Morgan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Starting credit balance for the player.
    pub starting_balance: usize,
    /// Display name for the player.
    pub player_name: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_balance: 100,
            player_name: "Player".into(),
        }
    }
}

impl GameOptions {
    /// Sets the starting credit balance.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the player's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_name("Morgan");
    /// assert_eq!(options.player_name, "Morgan");
    /// ```
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }
}
