//! Round result types for settlement.

/// Outcome of a settled round.
///
/// A tied total goes to the dealer, so there is no push outcome: every round
/// either pays the player or keeps the bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player wins (dealer busts or player has the higher total).
    Win,
    /// Player loses (player busts or the dealer matches or beats the total).
    Lose,
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The bet that was escrowed for the round.
    pub bet: usize,
    /// The payout credited to the player (double the bet on a win, 0 on a
    /// loss).
    pub payout: usize,
    /// The player's final hand value.
    pub player_total: u8,
    /// The dealer's final hand value.
    pub dealer_total: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
