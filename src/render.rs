//! Text rendering of cards, hands and the scoreboard.
//!
//! Everything here is pure: functions return lines and the game writes them
//! to its console.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{Hand, Identity};
use crate::scoreboard::Scoreboard;
use crate::table::Table;

/// Rows in a rendered card.
pub const CARD_HEIGHT: usize = 5;

/// Space in front of every card in a row.
const CARD_GUTTER: &str = "      ";

/// Rules shown on the welcome screen.
pub const RULES: &str = "\
HOW TO WIN: Player (You) vs Dealer - Whoever draws a hand closest to 21 in value
without going over wins. Going over 21 is an immediate loss and is called a bust.

GAMEPLAY:

  - Player:
    1) Game starts and both Parties are dealt 2 cards.
    2) Player goes first and can choose to either hit (draw another card) or
       stay (end turn).
    3) After Player hits, Player continues choosing 'hit or stay' until they bust
       or choose stay.

  - Dealer:
    1) Dealer will continuously hit until their hand is at least 17.
        - Once dealer stays too, winner then gets decided.

CARD VALUES:
  - 1-10 are face value
  - Jack, Queen, King are worth 10.
  - Ace is worth 11 unless being worth 11 causes sum in hand to be over 21 in
    which case that Ace is worth 1.";

/// Draws one card box. `None` is a face-down card.
///
/// The rank slots are three columns wide; padding the label to that width
/// keeps "10" boxes the same size as single-character ranks.
#[must_use]
pub fn card_box(card: Option<&Card>) -> [String; CARD_HEIGHT] {
    let (top, middle, bottom) = match card {
        Some(card) => {
            let label = card.rank.label();
            (
                format!("║{label:<3}║"),
                format!("║ {} ║", card.suit.symbol()),
                format!("║{label:>3}║"),
            )
        }
        None => (
            String::from("║   ║"),
            String::from("║ ? ║"),
            String::from("║   ║"),
        ),
    };

    [
        String::from("╔═══╗"),
        top,
        middle,
        bottom,
        String::from("╚═══╝"),
    ]
}

/// Lays cards side by side. Cards after the first `face_up` are drawn face
/// down. An empty slice renders no rows.
#[must_use]
pub fn render_cards(cards: &[Card], face_up: usize) -> Vec<String> {
    if cards.is_empty() {
        return Vec::new();
    }

    let boxes: Vec<[String; CARD_HEIGHT]> = cards
        .iter()
        .enumerate()
        .map(|(index, card)| card_box((index < face_up).then_some(card)))
        .collect();

    (0..CARD_HEIGHT)
        .map(|row| {
            boxes.iter().fold(String::new(), |mut line, card| {
                line.push_str(CARD_GUTTER);
                line.push_str(&card[row]);
                line
            })
        })
        .collect()
}

/// Heading plus card rows for one hand. The dealer shows only its first card
/// until `revealed`.
#[must_use]
pub fn render_hand(hand: &Hand, revealed: bool) -> Vec<String> {
    let face_up = match hand.owner() {
        Identity::Dealer if !revealed => 1,
        _ => hand.len(),
    };

    let mut lines = Vec::with_capacity(CARD_HEIGHT + 1);
    lines.push(format!("{}'s Hand:", hand.owner().name()));
    lines.extend(render_cards(hand.cards(), face_up));
    lines
}

/// Centers `text` in `width` columns.
#[must_use]
pub fn centered(text: &str, width: usize) -> String {
    format!("{text:^width$}")
}

/// Right-aligns `text` in `width` columns.
#[must_use]
pub fn right_aligned(text: &str, width: usize) -> String {
    format!("{text:>width$}")
}

/// Horizontal rule.
#[must_use]
pub fn border(width: usize) -> String {
    "-".repeat(width)
}

/// Prefixes a status message or question.
#[must_use]
pub fn prompt(message: &str) -> String {
    format!(">> {message}")
}

/// Round counter and running score.
#[must_use]
pub fn scoreboard_lines(scoreboard: &Scoreboard, width: usize) -> Vec<String> {
    let round = format!(
        "Round {} of {}",
        scoreboard.current_round(),
        scoreboard.total_rounds()
    );
    let score = format!(
        "Player: {}, Dealer: {}",
        scoreboard.player_wins(),
        scoreboard.dealer_wins()
    );
    alloc::vec![centered(&round, width), right_aligned(&score, width)]
}

/// Both hands, dealer on top, as shown while dealing.
#[must_use]
pub fn hands(table: &Table, width: usize) -> Vec<String> {
    let revealed = table.is_dealer_revealed();
    let mut lines = render_hand(table.dealer(), revealed);
    lines.push(border(width));
    lines.extend(render_hand(table.player(), revealed));
    lines
}

/// Full board: scoreboard, both hands and the sums. The dealer's sum appears
/// only once its cards are revealed.
#[must_use]
pub fn board(table: &Table, scoreboard: &Scoreboard, width: usize) -> Vec<String> {
    let mut lines = scoreboard_lines(scoreboard, width);
    lines.extend(hands(table, width));
    lines.push(format!("Player sum: {}", table.player().value()));
    if table.is_dealer_revealed() {
        lines.push(format!("Dealer sum: {}", table.dealer().value()));
    }
    lines
}

/// Welcome screen with the rules, ending with the start prompt.
#[must_use]
pub fn welcome(width: usize) -> Vec<String> {
    let mut lines = alloc::vec![
        centered("======== Welcome to Twenty-One ========", width),
        String::new(),
        border(width),
        centered("HOW TO PLAY:", width),
    ];
    lines.extend(RULES.lines().map(String::from));
    lines.push(border(width));
    lines.push(String::new());
    lines.push(prompt("Press enter to start"));
    lines
}
