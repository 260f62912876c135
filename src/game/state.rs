//! Round state machine.

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Between rounds.
    Idle,
    /// A fresh deck is ready; initial cards are being dealt.
    Dealing,
    /// Waiting for the player's bet.
    Betting,
    /// Waiting for the player's hit/stand decisions.
    PlayerTurn,
    /// Dealer draws out their hand.
    DealerTurn,
    /// Round has ended and can be settled.
    RoundOver,
}
