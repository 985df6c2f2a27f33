//! Full rounds driven through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::config::{COLS, ROWS};
use wordle_game::core::{KeyStatus, LetterStatus, Score, Word};
use wordle_game::game::{Event, Input, Phase, Round, RoundError, apply_input};
use wordle_game::wordlists::Dictionary;

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

fn dictionary() -> Dictionary {
    Dictionary::new(
        [
            "crane", "trace", "erase", "speed", "slate", "audio", "floor", "robot", "ghost",
        ]
        .map(word),
    )
    .unwrap()
}

fn submit(round: &mut Round, guess: &str) -> Result<Event, RoundError> {
    let mut last = Ok(Event::Ignored);
    for input in Input::for_word(guess) {
        last = round.apply(input);
    }
    last
}

#[test]
fn trace_against_crane() {
    let d = dictionary();
    let mut round = Round::with_secret(&d, word("crane"));

    let event = submit(&mut round, "trace").unwrap();
    let expected = Score::parse("-GGYG").unwrap();
    assert_eq!(event, Event::Scored { row: 0, score: expected });
    assert_eq!(round.cursor(), (1, 0));

    let keyboard = round.keyboard();
    assert_eq!(keyboard.status(b'T'), KeyStatus::Absent);
    assert_eq!(keyboard.status(b'R'), KeyStatus::Correct);
    assert_eq!(keyboard.status(b'C'), KeyStatus::Present);
    assert_eq!(keyboard.status(b'Z'), KeyStatus::Unused);
}

#[test]
fn speed_against_erase_counts_duplicates() {
    let d = dictionary();
    let mut round = Round::with_secret(&d, word("erase"));

    submit(&mut round, "speed").unwrap();
    let score = round.scores()[0];
    assert_eq!(score.to_string(), "Y-YY-");
    assert_eq!(score.count(LetterStatus::Present), 3);
    assert_eq!(round.keyboard().status(b'E'), KeyStatus::Present);
}

#[test]
fn win_on_third_row() {
    let d = dictionary();
    let mut round = Round::with_secret(&d, word("crane"));

    submit(&mut round, "slate").unwrap();
    submit(&mut round, "trace").unwrap();
    let event = submit(&mut round, "crane").unwrap();

    assert!(matches!(event, Event::Won { row: 2, .. }));
    assert_eq!(round.phase(), Phase::Won);
    assert_eq!(round.attempts(), 3);
    assert_eq!(round.cell(2, 0).status, Some(LetterStatus::Correct));
}

#[test]
fn loss_after_six_rows_reveals_secret() {
    let d = dictionary();
    let mut round = Round::with_secret(&d, word("ghost"));

    for row in 0..ROWS - 1 {
        let event = submit(&mut round, "crane").unwrap();
        assert!(matches!(event, Event::Scored { row: r, .. } if r == row));
    }
    let event = submit(&mut round, "audio").unwrap();
    assert!(matches!(
        event,
        Event::Lost { row: 5, secret, .. } if secret == word("ghost")
    ));
    assert_eq!(round.phase(), Phase::Lost);
}

#[test]
fn finished_round_ignores_everything() {
    let d = dictionary();
    let mut round = Round::with_secret(&d, word("floor"));
    submit(&mut round, "floor").unwrap();
    let before = round.clone();

    for input in [Input::Letter('A'), Input::Delete, Input::Submit] {
        assert_eq!(round.apply(input), Ok(Event::Ignored));
    }
    assert_eq!(round.cursor(), before.cursor());
    assert_eq!(round.scores(), before.scores());
    assert_eq!(round.keyboard(), before.keyboard());
}

#[test]
fn rejected_submissions_leave_round_unchanged() {
    let d = dictionary();
    let mut round = Round::with_secret(&d, word("robot"));

    for c in "cra".chars() {
        round.apply(Input::Letter(c)).unwrap();
    }
    assert_eq!(
        round.apply(Input::Submit),
        Err(RoundError::IncompleteRow { filled: 3 })
    );
    assert_eq!(round.cursor(), (0, 3));

    round.apply(Input::Letter('z')).unwrap();
    round.apply(Input::Letter('z')).unwrap();
    assert_eq!(
        round.apply(Input::Submit),
        Err(RoundError::NotInDictionary(word("crazz")))
    );
    assert_eq!(round.cursor(), (0, COLS));
    assert_eq!(round.attempts(), 0);
    assert!(round.keyboard().iter().all(|(_, s)| s == KeyStatus::Unused));
}

#[test]
fn pure_transition_keeps_original() {
    let d = dictionary();
    let round = Round::with_secret(&d, word("audio"));

    let (next, outcome) = apply_input(&round, Input::Letter('a'));
    assert_eq!(
        outcome,
        Ok(Event::Typed {
            row: 0,
            col: 0,
            letter: 'A'
        })
    );
    assert_eq!(next.cursor(), (0, 1));
    assert_eq!(round.cursor(), (0, 0));
}

#[test]
fn reset_clears_board_and_keyboard() {
    let d = dictionary();
    let mut rng = StdRng::seed_from_u64(11);
    let mut round = Round::new(&d, &mut rng);
    let wrong = if round.secret() == word("crane") {
        "slate"
    } else {
        "crane"
    };
    submit(&mut round, wrong).unwrap();

    let fresh = round.reset(&mut rng);
    assert_eq!(fresh.phase(), Phase::Entering);
    assert_eq!(fresh.cursor(), (0, 0));
    assert_eq!(fresh.attempts(), 0);
    assert!(fresh.keyboard().iter().all(|(_, s)| s == KeyStatus::Unused));
    assert!(d.contains(fresh.secret()));
}

#[test]
fn seeded_rounds_pick_the_same_secret() {
    let d = Dictionary::embedded().unwrap();
    let a = Round::new(&d, &mut StdRng::seed_from_u64(2024));
    let b = Round::new(&d, &mut StdRng::seed_from_u64(2024));
    assert_eq!(a.secret(), b.secret());
}
