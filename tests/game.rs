//! Game flow integration tests.

use core::time::Duration;

use twenty_one::{
    BestOf, Card, ConsoleError, DealerStop, Deck, DrawError, Game, GameOptions, Identity, Phase,
    PlayError, PlayerStop, Rank, Scoreboard, Scripted, Suit, Table, Winner,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn quiet() -> GameOptions {
    GameOptions::default().without_delays()
}

fn game_with(answers: &[&str]) -> Game<Scripted> {
    Game::new(quiet(), 1, Scripted::new(answers.iter().copied()))
}

fn dealt_table(game: &mut Game<Scripted>, draws: &[Card]) -> Table {
    let mut table = Table::new(Deck::from_draws(draws));
    game.starting_deal(&mut table).unwrap();
    table
}

/// Answers like a player who always stays and plays three rounds.
fn steady_player(last: &str) -> String {
    if last.contains("How many rounds") {
        "3".to_string()
    } else if last.contains("Restart game?") {
        "n".to_string()
    } else {
        "s".to_string()
    }
}

#[test]
fn starting_deal_alternates_player_first() {
    let mut game = game_with(&[]);
    let table = dealt_table(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Spades, Rank::Three),
            card(Suit::Clubs, Rank::Four),
            card(Suit::Diamonds, Rank::Five),
            card(Suit::Hearts, Rank::Six),
        ],
    );

    assert_eq!(
        table.player().cards(),
        &[card(Suit::Hearts, Rank::Two), card(Suit::Clubs, Rank::Four)]
    );
    assert_eq!(
        table.dealer().cards(),
        &[card(Suit::Spades, Rank::Three), card(Suit::Diamonds, Rank::Five)]
    );
    assert_eq!(table.deck().len(), 1);
    assert_eq!(table.phase(), Phase::Dealing);
    assert!(!table.is_dealer_revealed());
    assert_eq!(game.console().count("Dealing..."), 4);
}

#[test]
fn starting_deal_with_short_deck_returns_error() {
    let mut game = game_with(&[]);
    let mut table = Table::new(Deck::from_draws(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Three),
        card(Suit::Clubs, Rank::Four),
    ]));

    assert_eq!(
        game.starting_deal(&mut table).unwrap_err(),
        PlayError::Draw(DrawError::EmptyDeck)
    );
}

#[test]
fn player_stands_on_dealt_twenty_one_without_prompt() {
    let mut game = game_with(&[]);
    let mut table = dealt_table(
        &mut game,
        &[
            card(Suit::Spades, Rank::Ace),
            card(Suit::Hearts, Rank::Five),
            card(Suit::Diamonds, Rank::King),
            card(Suit::Clubs, Rank::Nine),
        ],
    );
    let scoreboard = Scoreboard::new(BestOf::Three);

    let stop = game.player_turn(&mut table, &scoreboard).unwrap();

    assert_eq!(stop, PlayerStop::ReachedTarget);
    assert!(table.is_dealer_revealed());
    assert!(!game.console().saw("Hit or stay?"));
    assert!(game.console().saw("You reached the max sum of 21."));
}

#[test]
fn player_hit_to_twenty_one_ends_turn() {
    let mut game = game_with(&["h"]);
    let mut table = dealt_table(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Spades, Rank::Ten),
            card(Suit::Clubs, Rank::Six),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Clubs, Rank::King),
            card(Suit::Clubs, Rank::Two),
        ],
    );
    let scoreboard = Scoreboard::new(BestOf::Three);

    let stop = game.player_turn(&mut table, &scoreboard).unwrap();

    assert_eq!(stop, PlayerStop::ReachedTarget);
    assert_eq!(table.player().len(), 3);
    assert_eq!(table.player().value(), 21);
    assert_eq!(table.deck().len(), 1);
    assert_eq!(game.console().count("Hit or stay?"), 1);
}

#[test]
fn player_bust_keeps_dealer_hidden() {
    let mut game = game_with(&["hit"]);
    let mut table = dealt_table(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Spades, Rank::Two),
            card(Suit::Clubs, Rank::King),
        ],
    );
    let scoreboard = Scoreboard::new(BestOf::Three);

    let stop = game.player_turn(&mut table, &scoreboard).unwrap();

    assert_eq!(stop, PlayerStop::Busted);
    assert_eq!(table.player().value(), 26);
    assert!(!table.is_dealer_revealed());
}

#[test]
fn invalid_answers_are_asked_again_without_drawing() {
    let mut game = game_with(&["x", "", "maybe", "S"]);
    let mut table = dealt_table(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Ten),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Hearts, Rank::Two),
        ],
    );
    let scoreboard = Scoreboard::new(BestOf::Three);

    let stop = game.player_turn(&mut table, &scoreboard).unwrap();

    assert_eq!(stop, PlayerStop::Stayed);
    assert_eq!(table.player().len(), 2);
    assert_eq!(table.deck().len(), 1);
    assert_eq!(game.console().count("Please enter (h)it or (s)tay."), 3);
    assert_eq!(game.console().count("Hit or stay?"), 4);
    assert!(game.console().saw("You decided to stay!"));
}

#[test]
fn closed_input_during_player_turn_returns_error() {
    let mut game = game_with(&[]);
    let mut table = dealt_table(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Ten),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Diamonds, Rank::Seven),
        ],
    );
    let scoreboard = Scoreboard::new(BestOf::Three);

    assert_eq!(
        game.player_turn(&mut table, &scoreboard).unwrap_err(),
        PlayError::Console(ConsoleError::Closed)
    );
}

#[test]
fn dealer_draws_until_seventeen() {
    let mut game = game_with(&["s"]);
    let mut table = dealt_table(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Ten),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Diamonds, Rank::Two),
            card(Suit::Hearts, Rank::Three),
            card(Suit::Clubs, Rank::Four),
            card(Suit::Spades, Rank::Nine),
        ],
    );
    let scoreboard = Scoreboard::new(BestOf::Three);

    assert_eq!(
        game.player_turn(&mut table, &scoreboard).unwrap(),
        PlayerStop::Stayed
    );
    assert!(table.is_dealer_revealed());

    let stop = game.dealer_turn(&mut table, &scoreboard).unwrap();

    assert_eq!(stop, DealerStop::Stood);
    assert_eq!(table.phase(), Phase::DealerTurn);
    assert_eq!(table.dealer().len(), 4);
    assert_eq!(table.dealer().value(), 19);
    assert_eq!(table.deck().len(), 1);
    assert_eq!(game.console().count("Dealer decided to hit."), 2);
}

#[test]
fn dealer_never_draws_at_seventeen_or_more() {
    for (first, second) in [
        (Rank::Ten, Rank::Seven),
        (Rank::Ace, Rank::Six),
        (Rank::Queen, Rank::Ace),
    ] {
        let mut game = game_with(&[]);
        let mut table = dealt_table(
            &mut game,
            &[
                card(Suit::Hearts, Rank::Ten),
                card(Suit::Spades, first),
                card(Suit::Clubs, Rank::Eight),
                card(Suit::Diamonds, second),
                card(Suit::Hearts, Rank::Two),
            ],
        );
        let scoreboard = Scoreboard::new(BestOf::Three);

        let stop = game.dealer_turn(&mut table, &scoreboard).unwrap();

        assert_eq!(stop, DealerStop::Stood);
        assert_eq!(table.dealer().len(), 2);
        assert_eq!(table.deck().len(), 1);
        assert!(!game.console().saw("Dealer is deciding..."));
    }
}

#[test]
fn dealer_stops_on_bust() {
    let mut game = game_with(&[]);
    let mut table = dealt_table(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Ten),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Clubs, Rank::King),
            card(Suit::Hearts, Rank::Two),
        ],
    );
    let scoreboard = Scoreboard::new(BestOf::Three);

    let stop = game.dealer_turn(&mut table, &scoreboard).unwrap();

    assert_eq!(stop, DealerStop::Busted);
    assert_eq!(table.dealer().value(), 26);
    assert_eq!(table.deck().len(), 1);
}

#[test]
fn higher_value_wins_round() {
    let mut game = game_with(&["s", ""]);
    let mut scoreboard = Scoreboard::new(BestOf::Three);
    let deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::King),
        card(Suit::Clubs, Rank::Eight),
    ]);

    let result = game.play_round_with_deck(deck, &mut scoreboard).unwrap();

    assert_eq!(result.round, 1);
    assert_eq!(result.winner, Winner::Player);
    assert_eq!(result.player_value, 20);
    assert_eq!(result.dealer_value, 18);
    assert_eq!(result.busted, None);
    assert_eq!(scoreboard.player_wins(), 1);
    assert_eq!(scoreboard.dealer_wins(), 0);

    let console = game.console();
    assert!(console.saw("Dealer decided to stay."));
    assert!(console.saw("You won the round!"));
    assert!(console.saw("Press enter for next round."));
    assert_eq!(console.remaining_answers(), 0);
}

#[test]
fn equal_values_tie_without_scoring() {
    let mut game = game_with(&["s", ""]);
    let mut scoreboard = Scoreboard::new(BestOf::Five);
    let deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Seven),
        card(Suit::Clubs, Rank::Seven),
    ]);

    let result = game.play_round_with_deck(deck, &mut scoreboard).unwrap();

    assert_eq!(result.winner, Winner::Tie);
    assert_eq!(scoreboard.player_wins(), 0);
    assert_eq!(scoreboard.dealer_wins(), 0);
    assert_eq!(scoreboard.ties(), 1);
    assert!(game.console().saw("It's a tie!"));
}

#[test]
fn player_bust_skips_dealer_turn() {
    let mut game = game_with(&["h", ""]);
    let mut scoreboard = Scoreboard::new(BestOf::Three);
    let deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Five),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Spades, Rank::Two),
        card(Suit::Clubs, Rank::King),
        card(Suit::Hearts, Rank::Nine),
    ]);

    let result = game.play_round_with_deck(deck, &mut scoreboard).unwrap();

    assert_eq!(result.winner, Winner::Dealer);
    assert_eq!(result.busted, Some(Identity::Player));
    assert_eq!(result.player_value, 26);
    assert_eq!(result.dealer_value, 7);
    assert_eq!(scoreboard.dealer_wins(), 1);

    let console = game.console();
    assert!(!console.saw("Dealer's turn starts."));
    assert!(console.saw("Player busted. Dealer wins!"));
    assert!(console.saw("Dealer sum: 7"));
}

#[test]
fn dealer_bust_gives_player_the_round() {
    let mut game = game_with(&["s", ""]);
    let mut scoreboard = Scoreboard::new(BestOf::Three);
    let deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Clubs, Rank::King),
    ]);

    let result = game.play_round_with_deck(deck, &mut scoreboard).unwrap();

    assert_eq!(result.winner, Winner::Player);
    assert_eq!(result.busted, Some(Identity::Dealer));
    assert_eq!(scoreboard.player_wins(), 1);
    assert!(game.console().saw("Dealer busted. Player wins!"));
}

#[test]
fn final_round_does_not_wait_for_next() {
    let mut game = game_with(&["s"]);
    let mut scoreboard = Scoreboard::new(BestOf::Three);
    scoreboard.advance();
    scoreboard.advance();
    assert!(scoreboard.is_final_round());

    let deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Eight),
    ]);

    let result = game.play_round_with_deck(deck, &mut scoreboard).unwrap();

    assert_eq!(result.round, 3);
    assert!(!game.console().saw("Press enter for next round."));
    assert!(game.console().saw("Round 3 of 3"));
}

#[test]
fn round_uses_pacing_port_instead_of_sleeping() {
    let mut game = Game::new(GameOptions::default(), 1, Scripted::new(["s", ""]));
    let mut scoreboard = Scoreboard::new(BestOf::Three);
    let deck = Deck::from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Nine),
        card(Suit::Clubs, Rank::Six),
        card(Suit::Clubs, Rank::Two),
    ]);

    game.play_round_with_deck(deck, &mut scoreboard).unwrap();

    let console = game.console();
    assert!(console.paused() >= Duration::from_millis(1500));
    assert!(console.clears() > 0);
}

#[test]
fn padded_answers_are_asked_again() {
    let mut game = game_with(&[" h", "H"]);
    let mut table = dealt_table(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Ten),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Hearts, Rank::Six),
        ],
    );
    let scoreboard = Scoreboard::new(BestOf::Three);

    let stop = game.player_turn(&mut table, &scoreboard).unwrap();

    assert_eq!(stop, PlayerStop::ReachedTarget);
    assert_eq!(table.player().len(), 3);
    assert_eq!(table.phase(), Phase::PlayerTurn);
    assert_eq!(game.console().count("Please enter (h)it or (s)tay."), 1);

    let mut game = game_with(&[" 3 ", "\t5", "5"]);
    assert_eq!(game.select_best_of().unwrap(), BestOf::Five);
    assert_eq!(
        game.console()
            .count("Sorry, that's not a valid choice. Please enter 3, 5 or 7."),
        2
    );
}

#[test]
fn select_best_of_reprompts_until_valid() {
    let mut game = game_with(&["4", "seven", "7"]);

    assert_eq!(game.select_best_of().unwrap(), BestOf::Seven);

    let console = game.console();
    assert_eq!(
        console.count("Sorry, that's not a valid choice. Please enter 3, 5 or 7."),
        2
    );
    assert!(console.saw("Ok, we'll play best of 7."));
}

#[test]
fn best_of_five_plays_five_rounds() {
    let console = Scripted::new(Vec::<String>::new()).with_responder(|_| "s".to_string());
    let mut game = Game::new(quiet(), 99, console);

    let scoreboard = game.play_match(BestOf::Five).unwrap();

    assert_eq!(scoreboard.current_round(), 5);
    assert_eq!(
        scoreboard.player_wins() + scoreboard.dealer_wins() + scoreboard.ties(),
        5
    );
    assert_eq!(game.console().count("Press enter for next round."), 4);
}

#[test]
fn same_seed_plays_same_match() {
    let play = |seed| {
        let console = Scripted::new(Vec::<String>::new()).with_responder(|_| "s".to_string());
        let mut game = Game::new(quiet(), seed, console);
        let scoreboard = game.play_match(BestOf::Seven).unwrap();
        (scoreboard, game.into_console().transcript().to_vec())
    };

    assert_eq!(play(5), play(5));
}

#[test]
fn run_ends_after_declined_restart() {
    let console = Scripted::new(Vec::<String>::new()).with_responder(steady_player);
    let mut game = Game::new(quiet(), 3, console);

    game.run().unwrap();

    let console = game.into_console();
    assert!(console.saw("Welcome to Twenty-One"));
    assert!(console.saw("Round 3 of 3"));
    assert!(!console.saw("Round 4 of 3"));
    let grand = console.count("You are the grand winner!")
        + console.count("Dealer is the grand winner!")
        + console.count("There's no grand winner. It's a tie!");
    assert_eq!(grand, 1);
    assert_eq!(
        console.transcript().last().map(String::as_str),
        Some("Thanks for playing Twenty-One! Goodbye.")
    );
}

#[test]
fn run_restarts_whole_match() {
    let mut restarts = 0;
    let console = Scripted::new(Vec::<String>::new()).with_responder(move |last| {
        if last.contains("Restart game?") {
            restarts += 1;
            let answer = if restarts == 1 { "No" } else { "n" };
            answer.to_string()
        } else {
            steady_player(last)
        }
    });
    let mut game = Game::new(quiet().with_show_rules(false), 11, console);

    game.run().unwrap();

    let console = game.into_console();
    assert!(!console.saw("Welcome to Twenty-One"));
    assert_eq!(console.count("How many rounds would you like to play?"), 2);
    assert_eq!(console.count("Ok, restarting game..."), 1);
    assert_eq!(console.count("Thanks for playing Twenty-One! Goodbye."), 1);
}
